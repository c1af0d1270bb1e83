//! Service container for dependency injection
//!
//! Wires up all services with their collaborators.

use std::sync::Arc;

use tracing::debug;

use crate::application::services::{
    HeadquartersConfigProvider, HeadquartersInfoAssembler, HeadquartersValidator,
};
use crate::config::Settings;
use crate::infrastructure::roster::RosterSnapshot;
use crate::infrastructure::traits::{CategoryCatalog, GuildDirectory, TierConfigStore};
use crate::infrastructure::InfraResult;

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Tier config with default fallback
    pub config_provider: Arc<HeadquartersConfigProvider>,

    /// Placement checks
    pub validator: HeadquartersValidator,

    /// Map read-model
    pub map: HeadquartersInfoAssembler,
}

impl ServiceContainer {
    /// Create a container backed by the roster file named in `settings`.
    pub fn new(settings: Settings) -> InfraResult<Self> {
        debug!("loading roster from {}", settings.roster_path.display());
        let roster = Arc::new(RosterSnapshot::load(&settings.roster_path)?);
        Ok(Self::with_deps(
            settings,
            roster.clone(),
            roster.clone(),
            roster,
        ))
    }

    /// Create a service container with custom collaborators (for testing).
    pub fn with_deps(
        settings: Settings,
        directory: Arc<dyn GuildDirectory>,
        tier_store: Arc<dyn TierConfigStore>,
        categories: Arc<dyn CategoryCatalog>,
    ) -> Self {
        let settings = Arc::new(settings);
        let config_provider = Arc::new(HeadquartersConfigProvider::new(tier_store));
        let validator = HeadquartersValidator::new(directory.clone(), config_provider.clone());
        let map = HeadquartersInfoAssembler::new(directory, categories, config_provider.clone());

        Self {
            settings,
            config_provider,
            validator,
            map,
        }
    }
}
