use std::path::PathBuf;

use anyhow::{Context, Result};
use battle_sim::config::SimConfig;
use battle_sim::demo::run_demo;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Turn-based combat demonstration
#[derive(Debug, Parser)]
#[command(name = "battle_sim", version)]
struct Cli {
    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for damage rolls and target selection
    #[arg(long)]
    seed: Option<u64>,

    /// tracing filter, e.g. `battle_sim=debug,combat=debug`
    #[arg(long)]
    log_level: Option<String>,

    /// Print the final battle report as JSON instead of narration
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = SimConfig::load_or_default(cli.config.as_deref())?;
    if let Some(seed) = cli.seed {
        config.battle.seed = Some(seed);
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(seed = ?config.battle.seed, "battle_sim starting");
    let output = run_demo(&config.battle);

    if cli.json {
        let json = serde_json::to_string_pretty(&output.report)
            .context("Failed to serialize battle report")?;
        println!("{}", json);
    } else {
        for line in &output.narration {
            println!("{}", line);
        }
    }

    Ok(())
}
