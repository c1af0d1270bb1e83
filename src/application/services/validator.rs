//! Headquarters placement validation
//!
//! Scans every other headquartered guild and reports the ones whose
//! protection zone contains the candidate point.

use std::sync::Arc;

use itertools::Itertools;
use tracing::{debug, info, instrument, trace};

use crate::application::services::HeadquartersConfigProvider;
use crate::application::{ApplicationResult, CollaboratorResultExt};
use crate::domain::{
    distance_meters, protection_radius_meters, round_centimeters, ConflictEntry, Coordinate,
    DomainError, GuildHeadquarters, GuildId, ProtectionTierConfig, ValidationResult,
};
use crate::infrastructure::traits::GuildDirectory;

/// Checks candidate headquarters locations against existing protection zones.
pub struct HeadquartersValidator {
    directory: Arc<dyn GuildDirectory>,
    config_provider: Arc<HeadquartersConfigProvider>,
}

impl HeadquartersValidator {
    /// Create a new validator.
    pub fn new(
        directory: Arc<dyn GuildDirectory>,
        config_provider: Arc<HeadquartersConfigProvider>,
    ) -> Self {
        Self {
            directory,
            config_provider,
        }
    }

    /// Check whether `candidate` lies inside another guild's protection radius.
    ///
    /// `exclude` removes one guild from the scan, so a guild moving its own
    /// headquarters never conflicts with itself. Conflicts come back sorted by
    /// ascending distance.
    ///
    /// # Errors
    /// Only collaborator failures; a conflict is reported in the result.
    #[instrument(level = "debug", skip(self))]
    pub fn validate(
        &self,
        candidate: Coordinate,
        exclude: Option<GuildId>,
    ) -> ApplicationResult<ValidationResult> {
        let config = self.config_provider.active_config()?;
        let guilds = match exclude {
            Some(id) => self
                .directory
                .headquartered_guilds_excluding(id)
                .with_action("load headquartered guilds")?,
            None => self
                .directory
                .headquartered_guilds()
                .with_action("load headquartered guilds")?,
        };
        debug!(
            "validate: scanning {} guilds, config={:?}",
            guilds.len(),
            config
        );

        let conflicts = find_conflicts(candidate, &guilds, exclude, &config);
        let result = ValidationResult::from_conflicts(conflicts, config);
        info!(
            "validate: candidate={} valid={} conflicts={}",
            candidate,
            result.valid,
            result.conflicts.len()
        );
        Ok(result)
    }

    /// Like `validate`, but turns an invalid result into `DomainError::LocationConflict`
    /// describing the nearest conflicting guild.
    pub fn validate_or_reject(
        &self,
        candidate: Coordinate,
        exclude: Option<GuildId>,
    ) -> ApplicationResult<ValidationResult> {
        let result = self.validate(candidate, exclude)?;
        match result.first_conflict() {
            None => Ok(result),
            Some(conflict) => Err(DomainError::LocationConflict {
                guild_id: conflict.guild_id,
                guild_name: conflict.guild_name.clone(),
                level: conflict.level,
                distance_meters: conflict.distance_meters,
                protection_radius_meters: conflict.protection_radius_meters,
            }
            .into()),
        }
    }
}

/// Strict boundary: a point exactly on the radius is outside.
pub fn within_protection(distance_meters: f64, protection_radius_meters: u32) -> bool {
    distance_meters < f64::from(protection_radius_meters)
}

/// Conflicting guilds for `candidate`, nearest first.
///
/// Guilds without a coordinate and the `exclude` guild are skipped even if the
/// directory returned them.
pub fn find_conflicts(
    candidate: Coordinate,
    guilds: &[GuildHeadquarters],
    exclude: Option<GuildId>,
    config: &ProtectionTierConfig,
) -> Vec<ConflictEntry> {
    guilds
        .iter()
        .filter(|g| Some(g.guild_id) != exclude)
        .filter_map(|g| {
            let coordinate = g.coordinate?;
            let radius = protection_radius_meters(g.level, config);
            let distance = distance_meters(candidate, coordinate);
            trace!(
                "guild {} level={} radius={}m distance={:.2}m",
                g.guild_id,
                g.level,
                radius,
                distance
            );
            within_protection(distance, radius).then(|| ConflictEntry {
                guild_id: g.guild_id,
                guild_name: g.name.clone(),
                level: g.level,
                coordinate,
                protection_radius_meters: radius,
                distance_meters: round_centimeters(distance),
            })
        })
        .sorted_by(|a, b| a.distance_meters.total_cmp(&b.distance_meters))
        .collect()
}
