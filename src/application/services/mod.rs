//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on collaborator traits (GuildDirectory, TierConfigStore, ...)
//! but are themselves concrete structs, not traits.

mod map;
mod tier_config;
mod validator;

pub use map::HeadquartersInfoAssembler;
pub use tier_config::{resolve_active_config, HeadquartersConfigProvider};
pub use validator::{find_conflicts, within_protection, HeadquartersValidator};
