// rover_sim/src/config/structs.rs

use rover_core::rendering::OverlayStyle;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What the replay loop does when a tick fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Log the failure and carry on with the next tick.
    #[default]
    Skip,
    /// Stop the replay at the first failed tick.
    Halt,
}

/// The top-level replay configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayConfig {
    /// Directory walked for recorded `*.json` ticks.
    pub telemetry_dir: PathBuf,
    /// Single-channel image marking the navigable terrain of the world.
    pub ground_truth: PathBuf,
    /// Where `frames.jsonl` is written.
    pub output_dir: PathBuf,
    pub on_error: ErrorPolicy,
    pub overlay: OverlayStyle,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            telemetry_dir: PathBuf::from("assets/telemetry"),
            ground_truth: PathBuf::from("assets/map_bw.png"),
            output_dir: PathBuf::from("output"),
            on_error: ErrorPolicy::Skip,
            overlay: OverlayStyle::default(),
        }
    }
}
