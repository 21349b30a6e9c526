// rover_core/src/error.rs

use thiserror::Error;

/// A telemetry value that holds no number, even after swapping a decimal
/// comma for a dot.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("'{input}' is not a numeric value")]
pub struct ParseError {
    pub input: String,
}

/// The camera payload of a telemetry record could not be turned into pixels.
#[derive(Debug, Error)]
pub enum ImageDecodeError {
    #[error("image payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("image payload is not a decodable image: {0}")]
    Format(#[from] image::ImageError),
}

/// Everything that can go wrong while applying one telemetry record.
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("telemetry record has no '{0}' field")]
    MissingField(&'static str),

    #[error("telemetry field '{field}' is invalid: {source}")]
    InvalidField {
        field: &'static str,
        #[source]
        source: ParseError,
    },

    #[error(transparent)]
    ImageDecode(#[from] ImageDecodeError),
}

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error(
        "map dimensions differ: detection layer is {detection:?}, ground truth is {ground_truth:?}"
    )]
    ShapeMismatch {
        detection: (u32, u32),
        ground_truth: (u32, u32),
    },
}

/// An overlay layout that would make text lines collide or that no encoder accepts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("line_spacing is {spacing} px but must be at least the {glyph} px glyph height")]
    LineSpacing { spacing: u32, glyph: u32 },

    #[error("first_baseline is {baseline} px but must be at least the {glyph} px glyph height")]
    FirstBaseline { baseline: u32, glyph: u32 },

    #[error("jpeg_quality is {0} but must be within 1-100")]
    JpegQuality(u8),
}

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("failed to encode frame as JPEG: {0}")]
    Jpeg(#[from] image::ImageError),
}

/// The error type for a whole telemetry tick.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),

    #[error(transparent)]
    Analytics(#[from] AnalyticsError),

    #[error(transparent)]
    Style(#[from] StyleError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}
