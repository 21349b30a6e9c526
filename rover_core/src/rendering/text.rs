// rover_core/src/rendering/text.rs

use crate::types::Frame;
use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::Rgb;

/// Width and height of one glyph cell, in pixels.
pub const GLYPH_SIZE: u32 = 8;

/// Draws `text` with its top-left corner at `(x, top)`. Pixels that would fall
/// outside the frame are dropped; characters without a glyph leave a blank cell.
pub fn draw_text(frame: &mut Frame, text: &str, x: u32, top: u32, color: Rgb<u8>) {
    let (width, height) = frame.dimensions();
    for (i, ch) in text.chars().enumerate() {
        let Some(glyph) = BASIC_FONTS.get(ch) else {
            continue;
        };
        let left = x + i as u32 * GLYPH_SIZE;
        if left >= width {
            break;
        }
        for (row, &bits) in glyph.iter().enumerate() {
            let py = top + row as u32;
            if py >= height {
                break;
            }
            for col in 0..GLYPH_SIZE {
                // Bit 0 is the leftmost column.
                if bits & (1u8 << col) != 0 {
                    let px = left + col;
                    if px < width {
                        frame.put_pixel(px, py, color);
                    }
                }
            }
        }
    }
}
