use clap::Parser;
use std::path::PathBuf;

/// Rover replay: feeds recorded telemetry ticks through the mapping pipeline.
///
/// This struct defines the command-line arguments of the `rover_replay`
/// binary. Paths given here override the ones from the configuration file.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The path to the replay TOML file. Defaults are used when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory holding the recorded `*.json` telemetry ticks.
    #[arg(short, long)]
    pub telemetry_dir: Option<PathBuf>,

    /// Directory the encoded frames are written to.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit.
    #[arg(long, default_value_t = false)]
    pub print_config: bool,

    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, default_value = "rover_sim=info,rover_core=info")]
    pub log_level: String,
}
