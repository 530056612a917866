//! Logging setup
//!
//! Every log line goes to stderr so stdout carries only the report.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: filter directives (overrides `log_filter` from settings)
//! - `LOCUS_LOG_FORMAT`: `pretty` (default) or `json`

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::settings::{LogFormat, Settings};

/// Install the global tracing subscriber
pub fn init(settings: &Settings) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .with_context(|| format!("Invalid log filter '{}'", settings.log_filter))?;

    match settings.log_format {
        LogFormat::Json => {
            // Production: JSON structured logging
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to install JSON log subscriber")?;
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to install log subscriber")?;
        }
    }

    Ok(())
}
