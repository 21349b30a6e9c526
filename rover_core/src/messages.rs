// rover_core/src/messages.rs

use crate::error::TelemetryError;
use crate::mapping::MapStats;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =========================================================================
// == Telemetry Field Names ==
// =========================================================================

pub mod fields {
    pub const SAMPLES_X: &str = "samples_x";
    pub const SAMPLES_Y: &str = "samples_y";
    pub const SAMPLE_COUNT: &str = "sample_count";
    pub const SPEED: &str = "speed";
    pub const POSITION: &str = "position";
    pub const YAW: &str = "yaw";
    pub const PITCH: &str = "pitch";
    pub const ROLL: &str = "roll";
    pub const THROTTLE: &str = "throttle";
    pub const STEERING_ANGLE: &str = "steering_angle";
    pub const NEAR_SAMPLE: &str = "near_sample";
    pub const PICKING_UP: &str = "picking_up";
    pub const IMAGE: &str = "image";

    /// Every key a record must carry for the updater to accept it.
    pub const REQUIRED: [&str; 13] = [
        SAMPLES_X,
        SAMPLES_Y,
        SAMPLE_COUNT,
        SPEED,
        POSITION,
        YAW,
        PITCH,
        ROLL,
        THROTTLE,
        STEERING_ANGLE,
        NEAR_SAMPLE,
        PICKING_UP,
        IMAGE,
    ];
}

// =========================================================================
// == Inbound: Telemetry Record ==
// =========================================================================

/// One telemetry tick as delivered by the transport: field name to string value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TelemetryRecord(pub HashMap<String, String>);

impl TelemetryRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly useful when assembling records by hand.
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Looks up a field that the updater cannot do without.
    pub fn require(&self, key: &'static str) -> Result<&str, TelemetryError> {
        self.get(key).ok_or(TelemetryError::MissingField(key))
    }

    /// Lists the required keys this record lacks, in `fields::REQUIRED` order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        fields::REQUIRED
            .iter()
            .copied()
            .filter(|key| !self.0.contains_key(*key))
            .collect()
    }
}

impl From<HashMap<String, String>> for TelemetryRecord {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map)
    }
}

// =========================================================================
// == Outbound: Encoded Frames ==
// =========================================================================

/// The two transport-ready images produced for every tick.
/// Both are base64 text wrapping a JPEG payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedFrames {
    /// The flipped map layer with the text overlay.
    pub map_image: String,
    /// The current vision frame, unmodified.
    pub vision_image: String,
}

/// Everything a caller gets back from one fully processed tick.
#[derive(Clone, Debug)]
pub struct TickOutput {
    pub stats: MapStats,
    pub samples_located: usize,
    pub frames: EncodedFrames,
}
