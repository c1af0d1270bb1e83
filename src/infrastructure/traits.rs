//! Collaborator boundary traits for testability
//!
//! These traits abstract the guild directory, the tier config store and the
//! category catalog, allowing services to be tested with mock implementations.

use crate::domain::{CategoryId, CategoryLookup, GuildHeadquarters, GuildId, ProtectionTierConfig};

/// Error returned by a collaborator (database, file, remote service).
pub type CollaboratorError = Box<dyn std::error::Error + Send + Sync>;

/// Read access to the guilds that currently hold a headquarters.
pub trait GuildDirectory: Send + Sync {
    /// All active guilds with a headquarters coordinate set.
    fn headquartered_guilds(&self) -> Result<Vec<GuildHeadquarters>, CollaboratorError>;

    /// Same as `headquartered_guilds`, without the guild `exclude`.
    fn headquartered_guilds_excluding(
        &self,
        exclude: GuildId,
    ) -> Result<Vec<GuildHeadquarters>, CollaboratorError>;
}

/// Persisted protection tier tuning.
pub trait TierConfigStore: Send + Sync {
    /// The currently active config, `None` if nothing has been persisted.
    fn active_tier_config(&self) -> Result<Option<ProtectionTierConfig>, CollaboratorError>;
}

/// Category display metadata.
///
/// Lookup failures are reported as `CategoryLookup::Failed`, not as errors.
pub trait CategoryCatalog: Send + Sync {
    fn lookup(&self, id: CategoryId) -> CategoryLookup;
}
