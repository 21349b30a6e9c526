// rover_core/src/mapping/mod.rs

//! Scores the rover's navigable-terrain detections against the ground-truth map.

use crate::error::AnalyticsError;
use crate::types::Frame;
use image::{GrayImage, Rgb};

mod mask;

pub use mask::PixelMask;

/// Channel of the ground-truth map that marks true navigable terrain.
pub const GROUND_TRUTH_NAV_CHANNEL: usize = 1;
/// Channel of a detection (plotting) map that marks detected navigable terrain.
pub const DETECTION_NAV_CHANNEL: usize = 2;

/// Pixel counts and the percentages derived from them for one analytics cycle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MapStats {
    /// Detected navigable pixels.
    pub tot_nav_pix: usize,
    /// Detected navigable pixels that are navigable in the ground truth.
    pub good_nav_pix: usize,
    /// Detected navigable pixels that are not navigable in the ground truth.
    /// Not rendered; kept for diagnostics.
    pub bad_nav_pix: usize,
    /// Navigable pixels in the ground truth.
    pub tot_map_pix: usize,
    /// Coverage: share of the ground truth correctly detected, in percent.
    pub perc_mapped: f64,
    /// Precision: share of detections that are correct, in percent.
    pub fidelity: f64,
}

/// Computes coverage and fidelity of `detection` against `ground_truth`.
///
/// Fidelity is 0 when nothing has been detected, and coverage is 0 when the
/// ground truth has no navigable terrain. Both percentages are rounded to one
/// decimal place.
pub fn compute_map_stats(
    detection: &Frame,
    ground_truth: &Frame,
) -> Result<MapStats, AnalyticsError> {
    if detection.dimensions() != ground_truth.dimensions() {
        return Err(AnalyticsError::ShapeMismatch {
            detection: detection.dimensions(),
            ground_truth: ground_truth.dimensions(),
        });
    }

    let detected = PixelMask::from_channel(detection, DETECTION_NAV_CHANNEL);
    let truth = PixelMask::from_channel(ground_truth, GROUND_TRUTH_NAV_CHANNEL);
    Ok(stats_from_masks(&detected, &truth))
}

/// The mask-level core of `compute_map_stats`. Both masks must share a shape.
pub fn stats_from_masks(detected: &PixelMask, truth: &PixelMask) -> MapStats {
    let tot_nav_pix = detected.count();
    let good_nav_pix = detected.intersection(truth).count();
    let bad_nav_pix = detected.difference(truth).count();
    let tot_map_pix = truth.count();

    MapStats {
        tot_nav_pix,
        good_nav_pix,
        bad_nav_pix,
        tot_map_pix,
        perc_mapped: percentage(good_nav_pix, tot_map_pix),
        fidelity: percentage(good_nav_pix, tot_nav_pix),
    }
}

/// `100 * part / whole` rounded to one decimal, or 0 for an empty whole.
fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    let raw = 100.0 * part as f64 / whole as f64;
    (raw * 10.0).round() / 10.0
}

/// Expands a single-channel map into a ground-truth frame: any non-zero mask
/// pixel becomes 255 in the navigable channel, the other channels stay 0.
pub fn ground_truth_from_mask(mask: &GrayImage) -> Frame {
    let (width, height) = mask.dimensions();
    Frame::from_fn(width, height, |x, y| {
        let mut px = Rgb([0, 0, 0]);
        if mask.get_pixel(x, y)[0] > 0 {
            px[GROUND_TRUTH_NAV_CHANNEL] = 255;
        }
        px
    })
}
