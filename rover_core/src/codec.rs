// rover_core/src/codec.rs

//! Conversions between frames and the base64 text that travels over the wire.

use crate::error::{EncodeError, ImageDecodeError};
use crate::types::Frame;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use image::codecs::jpeg::JpegEncoder;
use std::io::Cursor;

/// Quality used when the caller has no preference. Matches the common
/// default of JPEG writers.
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

/// Decodes a base64 string holding any supported compressed image (PNG or
/// JPEG) into a fresh RGB frame.
pub fn decode_base64_image(payload: &str) -> Result<Frame, ImageDecodeError> {
    let bytes = BASE64.decode(payload.trim())?;
    let image = image::load_from_memory(&bytes)?;
    Ok(image.to_rgb8())
}

/// JPEG-encodes a frame and wraps the bytes in base64 text.
pub fn encode_jpeg_base64(frame: &Frame, quality: u8) -> Result<String, EncodeError> {
    let mut buf = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buf, quality.clamp(1, 100));
    frame.write_with_encoder(encoder)?;
    Ok(BASE64.encode(buf.into_inner()))
}
