//! TOML roster snapshot: guilds, tier configs and categories in one file
//!
//! Backs the CLI and integration tests with a file-based implementation of
//! every collaborator trait.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::domain::{
    CategoryId, CategoryInfo, CategoryLookup, Coordinate, GuildHeadquarters, GuildId,
    ProtectionTierConfig,
};
use crate::infrastructure::traits::{
    CategoryCatalog, CollaboratorError, GuildDirectory, TierConfigStore,
};
use crate::infrastructure::{InfraError, InfraResult};

fn default_true() -> bool {
    true
}

/// A guild row in the roster file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterGuild {
    pub id: GuildId,
    pub name: String,
    pub level: i32,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl RosterGuild {
    /// Headquarters location, if both latitude and longitude are set.
    pub fn coordinate(&self) -> Option<Coordinate> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)),
            _ => None,
        }
    }

    /// The guild as a placement record, `None` if inactive or without headquarters.
    fn as_headquarters(&self) -> Option<GuildHeadquarters> {
        if !self.active {
            return None;
        }
        let coordinate = self.coordinate()?;
        Some(GuildHeadquarters {
            guild_id: self.id,
            name: self.name.clone(),
            level: self.level,
            coordinate: Some(coordinate),
            category_id: self.category_id,
        })
    }
}

/// A persisted tier config; at most one may be active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterTier {
    pub base_radius_meters: u32,
    pub radius_increase_per_level_tier: u32,
    pub level_tier_size: u32,
    #[serde(default)]
    pub active: bool,
}

impl From<&RosterTier> for ProtectionTierConfig {
    fn from(tier: &RosterTier) -> Self {
        ProtectionTierConfig::new(
            tier.base_radius_meters,
            tier.radius_increase_per_level_tier,
            tier.level_tier_size,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterCategory {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// In-memory snapshot of a guild roster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterSnapshot {
    pub tiers: Vec<RosterTier>,
    pub categories: Vec<RosterCategory>,
    pub guilds: Vec<RosterGuild>,
}

impl RosterSnapshot {
    /// Read and validate a roster file.
    #[instrument(level = "debug")]
    pub fn load(path: &Path) -> InfraResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| InfraError::io(format!("read roster {}", path.display()), e))?;
        Self::parse(&content, path)
    }

    /// Parse and validate roster content; `path` is used for error messages only.
    pub fn parse(content: &str, path: &Path) -> InfraResult<Self> {
        let snapshot: Self =
            toml::from_str(content).map_err(|e| InfraError::roster(path, e.to_string()))?;
        snapshot.validate(path)?;
        debug!(
            "roster {}: {} guilds, {} tiers, {} categories",
            path.display(),
            snapshot.guilds.len(),
            snapshot.tiers.len(),
            snapshot.categories.len()
        );
        Ok(snapshot)
    }

    /// Check the invariants a roster must hold before it is queried.
    pub fn validate(&self, path: &Path) -> InfraResult<()> {
        let active: Vec<&RosterTier> = self.tiers.iter().filter(|t| t.active).collect();
        if active.len() > 1 {
            return Err(InfraError::roster(
                path,
                format!("{} active tier configs, expected at most one", active.len()),
            ));
        }
        if let Some(tier) = active.first() {
            if tier.level_tier_size == 0 {
                return Err(InfraError::roster(path, "level_tier_size must be positive"));
            }
        }

        let mut seen = HashSet::new();
        for guild in &self.guilds {
            if !seen.insert(guild.id) {
                return Err(InfraError::roster(
                    path,
                    format!("duplicate guild id {}", guild.id),
                ));
            }
            if guild.latitude.is_some() != guild.longitude.is_some() {
                return Err(InfraError::roster(
                    path,
                    format!(
                        "guild {} ('{}') must set both latitude and longitude or neither",
                        guild.id, guild.name
                    ),
                ));
            }
        }
        Ok(())
    }

    /// Path-less variant of `validate` for in-memory snapshots.
    pub fn validated(self) -> InfraResult<Self> {
        self.validate(&PathBuf::from("<memory>"))?;
        Ok(self)
    }
}

impl GuildDirectory for RosterSnapshot {
    fn headquartered_guilds(&self) -> Result<Vec<GuildHeadquarters>, CollaboratorError> {
        Ok(self
            .guilds
            .iter()
            .filter_map(RosterGuild::as_headquarters)
            .collect())
    }

    fn headquartered_guilds_excluding(
        &self,
        exclude: GuildId,
    ) -> Result<Vec<GuildHeadquarters>, CollaboratorError> {
        Ok(self
            .guilds
            .iter()
            .filter(|g| g.id != exclude)
            .filter_map(RosterGuild::as_headquarters)
            .collect())
    }
}

impl TierConfigStore for RosterSnapshot {
    fn active_tier_config(&self) -> Result<Option<ProtectionTierConfig>, CollaboratorError> {
        Ok(self
            .tiers
            .iter()
            .find(|t| t.active)
            .map(ProtectionTierConfig::from))
    }
}

impl CategoryCatalog for RosterSnapshot {
    fn lookup(&self, id: CategoryId) -> CategoryLookup {
        match self.categories.iter().find(|c| c.id == id) {
            Some(c) => CategoryLookup::Found(CategoryInfo {
                name: c.name.clone(),
                icon: c.icon.clone(),
            }),
            None => CategoryLookup::NotFound,
        }
    }
}
