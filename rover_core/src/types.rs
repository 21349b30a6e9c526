// rover_core/src/types.rs

use image::RgbImage;
use std::time::{SystemTime, UNIX_EPOCH};

// --- Core Type Aliases ---
/// A width x height x 3 byte image. Camera frames and map layers share it.
pub type Frame = RgbImage;
/// Seconds, as reported by a `Clock`.
pub type Seconds = f64;

// --- Core Trait for Time Lookups ---
// The updater never reads the wall clock directly so that tests can drive time.
pub trait Clock {
    fn now(&self) -> Seconds;
}

/// Wall-clock time in seconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Seconds {
        // A clock set before 1970 yields NaN, which the updater treats as
        // a non-finite elapsed time and ignores.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or(f64::NAN)
    }
}
