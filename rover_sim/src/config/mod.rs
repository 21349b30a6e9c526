// rover_sim/src/config/mod.rs

//! This module handles loading the replay configuration from defaults, an
//! optional TOML file and the environment, in that order of precedence.

pub mod structs;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::path::Path;
use tracing::info;

use crate::cli::Cli;
pub use structs::{ErrorPolicy, ReplayConfig};

/// Environment variables with this prefix override file values,
/// e.g. `ROVER_OUTPUT_DIR` or `ROVER_OVERLAY__JPEG_QUALITY`.
pub const ENV_PREFIX: &str = "ROVER_";

impl ReplayConfig {
    /// Builds the layered figment: defaults, then the file, then the environment.
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(ReplayConfig::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Extracts the layered configuration and rejects overlay layouts whose
    /// text lines would collide.
    pub fn load(path: Option<&Path>) -> Result<Self, figment::Error> {
        match path {
            Some(p) => info!("Loading replay configuration from: {}", p.display()),
            None => info!("No configuration file given, using defaults"),
        }
        let config: Self = Self::figment(path).extract()?;
        config
            .overlay
            .validate()
            .map_err(|e| figment::Error::from(format!("invalid overlay: {}", e)))?;
        Ok(config)
    }

    /// Applies the path overrides given on the command line.
    pub fn with_cli_overrides(mut self, cli: &Cli) -> Self {
        if let Some(dir) = &cli.telemetry_dir {
            self.telemetry_dir = dir.clone();
        }
        if let Some(dir) = &cli.output_dir {
            self.output_dir = dir.clone();
        }
        self
    }
}
