//! Map read-model: every headquarters with its protection zone

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::application::services::HeadquartersConfigProvider;
use crate::application::{ApplicationResult, CollaboratorResultExt};
use crate::domain::{
    protection_radius_meters, CategoryId, CategoryInfo, CategoryLookup,
    HeadquartersDisplayInfo, HeadquartersMap,
};
use crate::infrastructure::traits::{CategoryCatalog, GuildDirectory};

/// Assembles headquarters markers for map rendering.
pub struct HeadquartersInfoAssembler {
    directory: Arc<dyn GuildDirectory>,
    categories: Arc<dyn CategoryCatalog>,
    config_provider: Arc<HeadquartersConfigProvider>,
}

impl HeadquartersInfoAssembler {
    /// Create a new assembler.
    pub fn new(
        directory: Arc<dyn GuildDirectory>,
        categories: Arc<dyn CategoryCatalog>,
        config_provider: Arc<HeadquartersConfigProvider>,
    ) -> Self {
        Self {
            directory,
            categories,
            config_provider,
        }
    }

    /// All active headquarters with their current protection radius.
    ///
    /// Category name and icon stay empty when the category is unknown or its
    /// lookup fails; only directory and config store failures are errors.
    #[instrument(level = "debug", skip(self))]
    pub fn all_headquarters(&self) -> ApplicationResult<HeadquartersMap> {
        let config = self.config_provider.active_config()?;
        let guilds = self
            .directory
            .headquartered_guilds()
            .with_action("load headquartered guilds")?;
        debug!("all_headquarters: {} guilds", guilds.len());

        let headquarters = guilds
            .into_iter()
            .filter_map(|g| {
                let coordinate = g.coordinate?;
                let category = g.category_id.and_then(|id| self.category_info(id));
                let (category_name, category_icon) = match category {
                    Some(CategoryInfo { name, icon }) => (Some(name), icon),
                    None => (None, None),
                };
                Some(HeadquartersDisplayInfo {
                    guild_id: g.guild_id,
                    guild_name: g.name,
                    level: g.level,
                    coordinate,
                    category_id: g.category_id,
                    category_name,
                    category_icon,
                    protection_radius_meters: protection_radius_meters(g.level, &config),
                })
            })
            .collect();

        Ok(HeadquartersMap {
            headquarters,
            config,
        })
    }

    fn category_info(&self, id: CategoryId) -> Option<CategoryInfo> {
        match self.categories.lookup(id) {
            CategoryLookup::Failed(reason) => {
                warn!("category {} lookup failed: {}", id, reason);
                None
            }
            lookup => lookup.into_found(),
        }
    }
}
