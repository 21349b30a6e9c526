// rover_sim/src/replay.rs

//! The calling loop: owns the single rover state and feeds it recorded ticks
//! one at a time.

use anyhow::{bail, Context, Result};
use rover_core::prelude::*;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use walkdir::WalkDir;

use crate::config::{ErrorPolicy, ReplayConfig};

/// Name of the output file inside `output_dir`.
pub const FRAMES_FILE: &str = "frames.jsonl";

/// One line of `frames.jsonl`.
#[derive(Debug, Serialize)]
pub struct FrameLine<'a> {
    pub tick: usize,
    pub file: String,
    pub total_time: f64,
    pub perc_mapped: f64,
    pub fidelity: f64,
    pub samples_located: usize,
    pub samples_collected: i32,
    pub map_image: &'a str,
    pub vision_image: &'a str,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub ticks_ok: usize,
    pub ticks_failed: usize,
}

/// Finds every `*.json` file under `dir`, in lexicographic path order.
pub fn discover_ticks(dir: &Path) -> Vec<PathBuf> {
    let mut ticks: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| {
            !e.file_type().is_dir() && e.path().extension().map_or(false, |ext| ext == "json")
        })
        .map(|e| e.into_path())
        .collect();
    ticks.sort();
    ticks
}

pub fn load_tick(path: &Path) -> Result<TelemetryRecord> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read tick {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("malformed tick {}", path.display()))
}

/// Loads a single-channel navigable-terrain image as a ground-truth map.
pub fn load_ground_truth(path: &Path) -> Result<Frame> {
    let mask = image::open(path)
        .with_context(|| format!("failed to load ground truth {}", path.display()))?
        .to_luma8();
    Ok(ground_truth_from_mask(&mask))
}

/// Replays every tick found under `config.telemetry_dir` and writes one line
/// per successful tick to `<output_dir>/frames.jsonl`.
pub fn run(
    config: &ReplayConfig,
    locator: &mut dyn SampleLocator,
    clock: &dyn Clock,
) -> Result<ReplaySummary> {
    let ground_truth = load_ground_truth(&config.ground_truth)?;
    let mut rover = RoverState::new(ground_truth);

    let ticks = discover_ticks(&config.telemetry_dir);
    if ticks.is_empty() {
        warn!(
            "No telemetry ticks found in {:?}, nothing to replay.",
            config.telemetry_dir
        );
    } else {
        info!("Replaying {} ticks from {:?}", ticks.len(), config.telemetry_dir);
    }

    fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("failed to create {}", config.output_dir.display()))?;
    let out_path = config.output_dir.join(FRAMES_FILE);
    let mut out = BufWriter::new(
        File::create(&out_path)
            .with_context(|| format!("failed to create {}", out_path.display()))?,
    );

    let mut summary = ReplaySummary::default();
    for (index, path) in ticks.iter().enumerate() {
        let result = match load_tick(path) {
            Ok(record) => {
                let missing = record.missing_fields();
                if !missing.is_empty() {
                    warn!("Tick {} ({}) lacks fields {:?}", index, path.display(), missing);
                }
                process_tick(&mut rover, &record, &mut *locator, &config.overlay, clock)
                    .map_err(anyhow::Error::from)
            }
            Err(e) => Err(e),
        };

        let output = match result {
            Ok(output) => output,
            Err(e) => {
                summary.ticks_failed += 1;
                error!("Tick {} ({}) failed: {:#}", index, path.display(), e);
                if config.on_error == ErrorPolicy::Halt {
                    out.flush()?;
                    bail!("replay halted at tick {} ({}): {:#}", index, path.display(), e);
                }
                continue;
            }
        };

        let line = FrameLine {
            tick: index,
            file: path.display().to_string(),
            total_time: rover.total_time,
            perc_mapped: output.stats.perc_mapped,
            fidelity: output.stats.fidelity,
            samples_located: output.samples_located,
            samples_collected: rover.samples_collected,
            map_image: &output.frames.map_image,
            vision_image: &output.frames.vision_image,
        };
        serde_json::to_writer(&mut out, &line)?;
        out.write_all(b"\n")?;
        summary.ticks_ok += 1;
    }
    out.flush()?;

    info!(
        ticks_ok = summary.ticks_ok,
        ticks_failed = summary.ticks_failed,
        "Replay complete, frames written to {}",
        out_path.display()
    );
    Ok(summary)
}
