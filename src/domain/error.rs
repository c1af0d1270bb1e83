//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::GuildId;

/// Domain errors represent business rule violations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error(
        "too close to the headquarters of '{guild_name}' (Lv.{level}): \
         {distance_meters:.0}m away, protection radius is {protection_radius_meters}m"
    )]
    LocationConflict {
        guild_id: GuildId,
        guild_name: String,
        level: i32,
        distance_meters: f64,
        protection_radius_meters: u32,
    },
}
