//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/guildhq/guildhq.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `GUILDHQ_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Raw settings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub roster_path: Option<PathBuf>,
    pub json_output: Option<bool>,
}

/// Unified configuration for guildhq.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Roster snapshot with guilds, tier configs and categories
    pub roster_path: PathBuf,
    /// Print command results as JSON instead of text
    pub json_output: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            roster_path: default_roster_path(),
            json_output: false,
        }
    }
}

/// Get the default roster location (`<data dir>/guildhq/roster.toml`).
fn default_roster_path() -> PathBuf {
    ProjectDirs::from("", "", "guildhq")
        .map(|dirs| dirs.data_dir().join("roster.toml"))
        .unwrap_or_else(|| PathBuf::from("~/.guildhq/roster.toml"))
}

/// Get the XDG config directory for guildhq.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "guildhq").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("guildhq.toml"))
}

/// Expand `~`, `$VAR` and `${VAR}` in a path string.
pub fn expand_path(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        let expanded = expand_path(self.roster_path.to_string_lossy().as_ref());
        self.roster_path = PathBuf::from(expanded);
    }

    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            roster_path: overlay
                .roster_path
                .clone()
                .unwrap_or_else(|| self.roster_path.clone()),
            json_output: overlay.json_output.unwrap_or(self.json_output),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `explicit` - Optional config file given on the command line; must exist
    pub fn load(explicit: Option<&Path>) -> Result<Self, ApplicationError> {
        let global = global_config_path().filter(|p| p.exists());
        Self::load_from(global.as_deref(), explicit)
    }

    /// Load settings from the given files instead of the XDG location.
    pub fn load_from(
        global: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(path) = global {
            current = current.merge_with(&load_raw_settings(path)?);
        }

        // 3. Explicit config file
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            current = current.merge_with(&load_raw_settings(path)?);
        }

        // 4. Environment variables (explicit override)
        current = Self::apply_env_overrides(current)?;

        current.expand_paths();
        Ok(current)
    }

    /// Apply GUILDHQ_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("GUILDHQ")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("roster_path") {
            settings.roster_path = PathBuf::from(val);
        }
        if let Ok(val) = config.get_bool("json_output") {
            settings.json_output = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# guildhq configuration
#
# Locations (by precedence, lowest to highest):
#   Global:   ~/.config/guildhq/guildhq.toml
#   Explicit: guildhq --config <file>
#   Env:      GUILDHQ_* environment variables (e.g. GUILDHQ_ROSTER_PATH)

# Roster snapshot holding [[guilds]], [[tiers]] and [[categories]]
# roster_path = "~/.local/share/guildhq/roster.toml"

# Print results as JSON
# json_output = false
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
