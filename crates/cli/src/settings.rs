//! Runtime settings
//!
//! Sources, lowest precedence first:
//! 1. built-in defaults
//! 2. TOML file (`--config <path>`, else `~/.locus/config.toml` if present)
//! 3. `LOCUS_*` environment variables (e.g. `LOCUS_LOG_FORMAT=json`)

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_PATH: &str = "~/.locus/config.toml";
const DEFAULT_LOG_FILTER: &str = "locus=warn";
const ENV_PREFIX: &str = "LOCUS";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, colored
    #[default]
    Pretty,
    /// Structured JSON lines
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub log_format: LogFormat,
    pub log_filter: String,
}

/// Load settings, reading `explicit` (required) or the default file (optional)
pub fn load(explicit: Option<&Path>) -> Result<Settings> {
    let file = match explicit {
        Some(path) => File::from(path).format(FileFormat::Toml).required(true),
        None => File::from(default_config_path())
            .format(FileFormat::Toml)
            .required(false),
    };

    Config::builder()
        .set_default("log_format", "pretty")?
        .set_default("log_filter", DEFAULT_LOG_FILTER)?
        .add_source(file)
        .add_source(Environment::with_prefix(ENV_PREFIX))
        .build()
        .context("Failed to read configuration")?
        .try_deserialize()
        .context("Invalid configuration")
}

fn default_config_path() -> PathBuf {
    PathBuf::from(shellexpand::tilde(DEFAULT_CONFIG_PATH).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_explicit_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "log_format = \"json\"").unwrap();
        writeln!(file, "log_filter = \"locus=debug\"").unwrap();

        let settings = load(Some(file.path())).unwrap();
        assert_eq!(settings.log_format, LogFormat::Json);
        assert_eq!(settings.log_filter, "locus=debug");
    }

    #[test]
    fn test_partial_file_keeps_remaining_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "log_format = \"json\"").unwrap();

        let settings = load(Some(file.path())).unwrap();
        assert_eq!(settings.log_format, LogFormat::Json);
        assert_eq!(settings.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");

        assert!(load(Some(&missing)).is_err());
    }

    #[test]
    fn test_unknown_log_format_is_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "log_format = \"xml\"").unwrap();

        assert!(load(Some(file.path())).is_err());
    }

    #[test]
    fn test_default_path_points_at_locus_dir() {
        let path = default_config_path();
        assert!(path.ends_with(".locus/config.toml"));
    }
}
