// rover_core/src/rendering/mod.rs

//! Composes the annotated map overlay and encodes the outbound frames.

mod text;

pub use text::{draw_text, GLYPH_SIZE};

use crate::codec::{encode_jpeg_base64, DEFAULT_JPEG_QUALITY};
use crate::error::{EncodeError, StyleError};
use crate::mapping::MapStats;
use crate::messages::EncodedFrames;
use crate::types::{Frame, Seconds};
use image::imageops::flip_vertical;
use image::Rgb;
use serde::{Deserialize, Serialize};

/// Layout and encoding settings for the outbound frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayStyle {
    /// Text colour as `[r, g, b]`.
    pub color: [u8; 3],
    /// Distance of the text from the left edge, in pixels.
    pub left: u32,
    /// Baseline of the first line, in pixels from the top. At least `GLYPH_SIZE`.
    pub first_baseline: u32,
    /// Distance between consecutive baselines. At least `GLYPH_SIZE`.
    pub line_spacing: u32,
    /// JPEG quality, 1-100.
    pub jpeg_quality: u8,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            color: [255, 255, 255],
            left: 0,
            first_baseline: 10,
            line_spacing: 15,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl OverlayStyle {
    /// Checks that every line fits below the top edge, that no two lines
    /// overlap, and that the JPEG quality is accepted by the encoder.
    pub fn validate(&self) -> Result<(), StyleError> {
        if self.first_baseline < GLYPH_SIZE {
            return Err(StyleError::FirstBaseline {
                baseline: self.first_baseline,
                glyph: GLYPH_SIZE,
            });
        }
        if self.line_spacing < GLYPH_SIZE {
            return Err(StyleError::LineSpacing {
                spacing: self.line_spacing,
                glyph: GLYPH_SIZE,
            });
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(StyleError::JpegQuality(self.jpeg_quality));
        }
        Ok(())
    }

    /// Top edge of line `index`. The glyph sits on the baseline.
    fn line_top(&self, index: usize) -> u32 {
        let baseline = self.first_baseline + index as u32 * self.line_spacing;
        baseline.saturating_sub(GLYPH_SIZE)
    }
}

/// The overlay text, top to bottom.
pub fn overlay_lines(
    total_time: Seconds,
    stats: &MapStats,
    samples_located: usize,
    samples_collected: i32,
) -> Vec<String> {
    vec![
        format!("Time: {:.1} s", total_time),
        format!("Mapped: {:.1}%", stats.perc_mapped),
        format!("Fidelity: {:.1}%", stats.fidelity),
        "Rocks".to_string(),
        format!("  Located: {}", samples_located),
        format!("  Collected: {}", samples_collected),
    ]
}

/// Flips `map_add` so that world y points up and writes `lines` onto the copy.
/// The input frame is left untouched.
pub fn render_map_overlay(map_add: &Frame, lines: &[String], style: &OverlayStyle) -> Frame {
    let mut canvas = flip_vertical(map_add);
    let color = Rgb(style.color);
    for (i, line) in lines.iter().enumerate() {
        draw_text(&mut canvas, line, style.left, style.line_top(i), color);
    }
    canvas
}

/// Encodes the annotated map and the vision frame for transport.
pub fn encode_output_frames(
    map_overlay: &Frame,
    vision_image: &Frame,
    style: &OverlayStyle,
) -> Result<EncodedFrames, EncodeError> {
    Ok(EncodedFrames {
        map_image: encode_jpeg_base64(map_overlay, style.jpeg_quality)?,
        vision_image: encode_jpeg_base64(vision_image, style.jpeg_quality)?,
    })
}
