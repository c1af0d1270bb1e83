//! GUILDHQ_* environment overrides.
//!
//! Kept in its own test binary: it mutates the process environment.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use guildhq::config::Settings;

#[test]
fn given_env_vars_when_loading_then_override_config_files() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let explicit = temp.path().join("local.toml");
    fs::write(&explicit, "roster_path = \"/tmp/from-file.toml\"\n").unwrap();
    std::env::set_var("GUILDHQ_ROSTER_PATH", "/tmp/from-env.toml");
    std::env::set_var("GUILDHQ_JSON_OUTPUT", "true");

    // Act
    let settings = Settings::load_from(None, Some(&explicit));
    std::env::remove_var("GUILDHQ_ROSTER_PATH");
    std::env::remove_var("GUILDHQ_JSON_OUTPUT");

    // Assert
    let settings = settings.expect("load settings");
    assert_eq!(settings.roster_path, PathBuf::from("/tmp/from-env.toml"));
    assert!(settings.json_output);
}
