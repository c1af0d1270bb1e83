//! Command dispatch

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::{
    protection_radius_meters, tier_level_range, Coordinate, GuildId, HeadquartersMap,
    ProtectionTierConfig, ValidationResult,
};
use crate::infrastructure::di::ServiceContainer;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Check {
            lat,
            lon,
            exclude,
            strict,
        }) => {
            let candidate = parse_candidate(*lat, *lon)?;
            _check(cli, candidate, exclude.map(GuildId), *strict)
        }
        Some(Commands::Map) => _map(cli),
        Some(Commands::Tiers { max_level }) => _tiers(cli, *max_level),
        Some(Commands::Config { command }) => _config(cli, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => {
            Cli::command()
                .print_help()
                .map_err(|e| CliError::Output(e.to_string()))?;
            Ok(())
        }
    }
}

/// Settings with command-line overrides applied.
fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(roster) = &cli.roster {
        settings.roster_path = roster.clone();
    }
    if cli.json {
        settings.json_output = true;
    }
    debug!("settings: {:?}", settings);
    Ok(settings)
}

/// Reject coordinates outside the WGS84 ranges, including NaN and infinities.
pub fn parse_candidate(lat: f64, lon: f64) -> CliResult<Coordinate> {
    if !(-90.0..=90.0).contains(&lat) {
        return Err(CliError::InvalidArgs(format!(
            "latitude must be within -90..=90, got {lat}"
        )));
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err(CliError::InvalidArgs(format!(
            "longitude must be within -180..=180, got {lon}"
        )));
    }
    Ok(Coordinate::new(lat, lon))
}

fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let text =
        serde_json::to_string_pretty(value).map_err(|e| CliError::Output(e.to_string()))?;
    output::info(&text);
    Ok(())
}

#[instrument(skip(cli))]
fn _check(
    cli: &Cli,
    candidate: Coordinate,
    exclude: Option<GuildId>,
    strict: bool,
) -> CliResult<()> {
    let services = ServiceContainer::new(load_settings(cli)?)?;
    let result = if strict {
        services.validator.validate_or_reject(candidate, exclude)?
    } else {
        services.validator.validate(candidate, exclude)?
    };

    if services.settings.json_output {
        return print_json(&result);
    }
    print_validation(candidate, &result);
    Ok(())
}

fn print_validation(candidate: Coordinate, result: &ValidationResult) {
    if result.valid {
        output::success(&format!("{} {}", candidate, result.message));
        return;
    }
    output::failure(&format!("{} {}", candidate, result.message));
    for c in &result.conflicts {
        output::detail(&format!(
            "{} '{}' Lv.{} at {}: {:.2}m away, radius {}m",
            c.guild_id,
            c.guild_name,
            c.level,
            c.coordinate,
            c.distance_meters,
            c.protection_radius_meters
        ));
    }
}

#[instrument(skip(cli))]
fn _map(cli: &Cli) -> CliResult<()> {
    let services = ServiceContainer::new(load_settings(cli)?)?;
    let map = services.map.all_headquarters()?;

    if services.settings.json_output {
        return print_json(&map);
    }
    print_map(&map);
    Ok(())
}

fn print_map(map: &HeadquartersMap) {
    output::header(&format!(
        "{} headquarters (base {}m, +{}m per {} levels)",
        map.headquarters.len(),
        map.config.base_radius_meters,
        map.config.radius_increase_per_level_tier,
        map.config.level_tier_size
    ));
    for hq in &map.headquarters {
        let category = match (&hq.category_name, &hq.category_icon) {
            (Some(name), Some(icon)) => format!(" [{icon} {name}]"),
            (Some(name), None) => format!(" [{name}]"),
            _ => String::new(),
        };
        output::detail(&format!(
            "{} '{}' Lv.{} at {} radius {}m{}",
            hq.guild_id,
            hq.guild_name,
            hq.level,
            hq.coordinate,
            hq.protection_radius_meters,
            category
        ));
    }
}

/// One band of levels sharing a protection radius.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierRow {
    pub tier: u32,
    pub first_level: u32,
    /// `None` when the band is unbounded
    pub last_level: Option<u32>,
    pub protection_radius_meters: u32,
}

/// Radius bands covering levels `1..=max_level`.
pub fn tier_rows(config: &ProtectionTierConfig, max_level: u32) -> Vec<TierRow> {
    let mut rows = Vec::new();
    let mut tier = 0;
    loop {
        let (first_level, last_level) = tier_level_range(tier, config);
        if first_level > max_level.max(1) {
            break;
        }
        let level = i32::try_from(first_level).unwrap_or(i32::MAX);
        rows.push(TierRow {
            tier,
            first_level,
            last_level,
            protection_radius_meters: protection_radius_meters(level, config),
        });
        match last_level {
            Some(last) if last < max_level => tier += 1,
            _ => break,
        }
    }
    rows
}

#[instrument(skip(cli))]
fn _tiers(cli: &Cli, max_level: u32) -> CliResult<()> {
    let services = ServiceContainer::new(load_settings(cli)?)?;
    let config = services.config_provider.active_config()?;
    let rows = tier_rows(&config, max_level);

    if services.settings.json_output {
        #[derive(Serialize)]
        struct Tiers<'a> {
            config: &'a ProtectionTierConfig,
            tiers: &'a [TierRow],
        }
        return print_json(&Tiers {
            config: &config,
            tiers: &rows,
        });
    }

    output::header(&format!(
        "base {}m, +{}m per {} levels",
        config.base_radius_meters,
        config.radius_increase_per_level_tier,
        config.level_tier_size
    ));
    for row in rows {
        let levels = match row.last_level {
            Some(last) => format!("{}-{}", row.first_level, last),
            None => format!("{}+", row.first_level),
        };
        output::detail(&format!("Lv.{levels}: {}m", row.protection_radius_meters));
    }
    Ok(())
}

fn _config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = load_settings(cli)?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => {
            let global = global_config_path();
            print_config_path("global", global.as_deref());
            print_config_path("explicit", cli.config.as_deref());
        }
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(())
}

fn print_config_path(label: &str, path: Option<&Path>) {
    match path {
        Some(p) if p.exists() => output::success(&format!("{label}: {}", p.display())),
        Some(p) => output::detail(&format!("{label}: {} (not found)", p.display())),
        None => output::detail(&format!("{label}: -")),
    }
}
