//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Upper bound for `tiers --max-level`
pub const MAX_LISTED_LEVEL: i64 = 10_000;

/// Guild headquarters placement: level-scaled protection radii and conflict validation
#[derive(Parser, Debug)]
#[command(name = "guildhq")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Roster snapshot to read guilds from (overrides config)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub roster: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check whether a location is free for a headquarters
    Check {
        /// Latitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Guild id to leave out of the scan (moving an existing headquarters)
        #[arg(long)]
        exclude: Option<u64>,

        /// Fail with an error describing the nearest conflict
        #[arg(long)]
        strict: bool,
    },

    /// List all headquarters with their protection radius
    Map,

    /// Show the active tier config and the radius per level band
    Tiers {
        /// Highest level to show
        #[arg(
            long,
            default_value_t = 50,
            value_parser = clap::value_parser!(u32).range(1..=MAX_LISTED_LEVEL)
        )]
        max_level: u32,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings
    Show,

    /// Show config file locations
    Path,

    /// Print a config template
    Template,
}
