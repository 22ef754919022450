//! marquee TUI - search movies as you type and keep a favorites list.

use anyhow::{Context, Result};
use clap::Parser;
use marquee_core::{build_info::BUILD_INFO, logging, paths, Config};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "marquee-tui")]
#[command(about = "Search OMDb and keep favorites", long_about = None)]
#[command(disable_version_flag = true)]
struct Cli {
    /// Path to the config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// OMDb API key (overrides config and environment)
    #[arg(long)]
    api_key: Option<String>,

    /// Print version
    #[arg(short = 'V', long)]
    version: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!("{}", BUILD_INFO.version_line("marquee-tui"));
        return Ok(());
    }

    // The terminal belongs to the UI, so logs go to a file.
    let log_path = paths::log_path();
    logging::init_to_file(&log_path)
        .with_context(|| format!("Cannot open log file {}", log_path.display()))?;

    let config_path = cli.config.unwrap_or_else(paths::config_path);
    let mut config = Config::load_or_default(&config_path)
        .with_context(|| format!("Cannot load config {}", config_path.display()))?;
    if let Some(key) = cli.api_key {
        config.omdb.api_key = key;
    }

    tracing::info!(version = %BUILD_INFO.compact(), "Starting marquee-tui");
    marquee_tui::run(&config)
}
