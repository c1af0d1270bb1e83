//! Infrastructure layer: collaborator traits, roster adapter and DI container
//!
//! This layer defines the collaborator boundary and wires up services.

pub mod di;
pub mod error;
pub mod roster;
pub mod traits;

pub use error::{InfraError, InfraResult};
