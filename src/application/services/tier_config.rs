//! Active protection tier configuration
//!
//! Persisted tuning wins; otherwise the built-in default applies.

use std::sync::Arc;

use tracing::debug;

use crate::application::{ApplicationResult, CollaboratorResultExt};
use crate::domain::ProtectionTierConfig;
use crate::infrastructure::traits::TierConfigStore;

/// Supplies the tier config every radius computation uses.
pub struct HeadquartersConfigProvider {
    store: Arc<dyn TierConfigStore>,
}

impl HeadquartersConfigProvider {
    /// Create a new config provider.
    pub fn new(store: Arc<dyn TierConfigStore>) -> Self {
        Self { store }
    }

    /// The persisted active config, or `ProtectionTierConfig::DEFAULT` if none exists.
    ///
    /// A missing config is not an error; a failing store is.
    pub fn active_config(&self) -> ApplicationResult<ProtectionTierConfig> {
        let persisted = self
            .store
            .active_tier_config()
            .with_action("load active protection tier config")?;
        Ok(resolve_active_config(persisted))
    }
}

/// Fallback rule shared by every caller.
pub fn resolve_active_config(persisted: Option<ProtectionTierConfig>) -> ProtectionTierConfig {
    match persisted {
        Some(config) => config,
        None => {
            debug!("no persisted tier config, using defaults");
            ProtectionTierConfig::DEFAULT
        }
    }
}
