//! Locus CLI - report where the executable lives and which process it is

mod logging;
mod render;
mod settings;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

use locus_core::application::{install_custom_var, ReportService};
use locus_core::domain::ScopedContext;
use locus_infra_system::{ExecutableLocationResolver, SystemProcessProbe};

use render::{ColorChoice, OutputFormat};

#[derive(Parser)]
#[command(name = "locus")]
#[command(about = "Print the executable's location, process id and platform", long_about = None)]
#[command(version = locus_core::VERSION)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, env = "LOCUS_FORMAT", default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// When to color labels
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Settings file (TOML)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Settings + logging
    let settings = settings::load(cli.config.as_deref())?;
    logging::init(&settings)?;

    info!("locus v{} starting", locus_core::VERSION);

    // 2. Scoped context (owned here, borrowed by the service)
    let mut ctx = ScopedContext::new();
    install_custom_var(&mut ctx);

    // 3. Wire adapters
    let service = ReportService::new(
        Arc::new(ExecutableLocationResolver::new()),
        Arc::new(SystemProcessProbe::new()),
    );

    // 4. Render
    let stdout = std::io::stdout();
    let color = cli.color.enabled(stdout.is_terminal());
    if cli.color == ColorChoice::Always {
        colored::control::set_override(true);
    }

    let output = match cli.format {
        OutputFormat::Text => render::text(
            &service.generate(&ctx).context("Failed to build report")?,
            color,
        ),
        OutputFormat::Table => {
            render::table(&service.generate(&ctx).context("Failed to build report")?)
        }
        OutputFormat::Json => {
            render::json(&service.snapshot(&ctx).context("Failed to build report")?)?
        }
    };

    debug!(format = ?cli.format, color, "Writing report");

    let mut out = stdout.lock();
    out.write_all(output.as_bytes())
        .context("Failed to write report")?;
    out.flush().context("Failed to flush stdout")?;

    Ok(())
}
