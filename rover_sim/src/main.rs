// rover_sim/src/main.rs

use anyhow::{Context, Result};
use clap::Parser;
use rover_sim::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --log-level when both are given.
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .context("invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ReplayConfig::load(cli.config.as_deref())
        .context("failed to load replay configuration")?
        .with_cli_overrides(&cli);

    if cli.print_config {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    info!(
        "Replay: telemetry={:?} ground_truth={:?} output={:?} on_error={:?}",
        config.telemetry_dir, config.ground_truth, config.output_dir, config.on_error
    );

    let summary = run(&config, &mut WorldmapPassthrough, &SystemClock)?;
    if summary.ticks_failed > 0 {
        warn!(
            "{} of {} ticks failed and were skipped",
            summary.ticks_failed,
            summary.ticks_ok + summary.ticks_failed
        );
    }
    Ok(())
}
