//! Domain layer: entities and placement rules
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod geo;
pub mod radius;

pub use entities::*;
pub use error::DomainError;
pub use geo::{distance_meters, haversine_meters, round_centimeters, EARTH_RADIUS_METERS};
pub use radius::{protection_radius_meters, tier_index, tier_level_range};
