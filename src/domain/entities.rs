//! Domain entities: core data structures

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier of a guild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuildId(pub u64);

impl fmt::Display for GuildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a guild category (running, hiking, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u64);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// WGS84 point in degrees.
///
/// Ranges are not checked; callers supply valid latitude/longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

/// A guild as seen by the placement rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuildHeadquarters {
    pub guild_id: GuildId,
    pub name: String,
    /// Progression level, starting at 1
    pub level: i32,
    /// Headquarters location; `None` means the guild has no headquarters
    pub coordinate: Option<Coordinate>,
    pub category_id: Option<CategoryId>,
}

/// Tiered protection radius tuning.
///
/// Levels `1..=level_tier_size` get `base_radius_meters`; every further full
/// band of `level_tier_size` levels adds `radius_increase_per_level_tier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectionTierConfig {
    pub base_radius_meters: u32,
    pub radius_increase_per_level_tier: u32,
    pub level_tier_size: u32,
}

impl ProtectionTierConfig {
    /// Used whenever no configuration has been persisted.
    pub const DEFAULT: Self = Self {
        base_radius_meters: 100,
        radius_increase_per_level_tier: 20,
        level_tier_size: 10,
    };

    pub const fn new(
        base_radius_meters: u32,
        radius_increase_per_level_tier: u32,
        level_tier_size: u32,
    ) -> Self {
        Self {
            base_radius_meters,
            radius_increase_per_level_tier,
            level_tier_size,
        }
    }
}

impl Default for ProtectionTierConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Another guild whose protection zone contains the candidate point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictEntry {
    pub guild_id: GuildId,
    pub guild_name: String,
    pub level: i32,
    pub coordinate: Coordinate,
    pub protection_radius_meters: u32,
    /// Distance from the candidate point, rounded to centimeters
    pub distance_meters: f64,
}

/// Outcome of a placement check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: String,
    /// Ascending by distance; equal distances keep directory order
    pub conflicts: Vec<ConflictEntry>,
    pub config: ProtectionTierConfig,
}

impl ValidationResult {
    pub const AVAILABLE_MESSAGE: &'static str = "Location is available for a headquarters.";
    pub const CONFLICT_MESSAGE: &'static str =
        "Location is inside another guild's protection radius.";

    /// Build a result from the collected conflicts.
    pub fn from_conflicts(conflicts: Vec<ConflictEntry>, config: ProtectionTierConfig) -> Self {
        let valid = conflicts.is_empty();
        let message = if valid {
            Self::AVAILABLE_MESSAGE
        } else {
            Self::CONFLICT_MESSAGE
        };
        Self {
            valid,
            message: message.to_string(),
            conflicts,
            config,
        }
    }

    /// Conflict used to explain a rejection.
    pub fn first_conflict(&self) -> Option<&ConflictEntry> {
        self.conflicts.first()
    }
}

/// Display metadata of a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub name: String,
    pub icon: Option<String>,
}

/// Result of asking the category catalog about one id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryLookup {
    Found(CategoryInfo),
    NotFound,
    Failed(String),
}

impl CategoryLookup {
    /// Display info if found; `NotFound` and `Failed` both yield `None`.
    pub fn into_found(self) -> Option<CategoryInfo> {
        match self {
            CategoryLookup::Found(info) => Some(info),
            CategoryLookup::NotFound | CategoryLookup::Failed(_) => None,
        }
    }
}

/// One headquarters marker on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadquartersDisplayInfo {
    pub guild_id: GuildId,
    pub guild_name: String,
    pub level: i32,
    pub coordinate: Coordinate,
    pub category_id: Option<CategoryId>,
    pub category_name: Option<String>,
    pub category_icon: Option<String>,
    pub protection_radius_meters: u32,
}

/// All headquarters plus the tier config their radii were computed with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadquartersMap {
    pub headquarters: Vec<HeadquartersDisplayInfo>,
    pub config: ProtectionTierConfig,
}
