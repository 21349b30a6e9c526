// rover_core/src/prelude.rs

// --- Core Abstractions (The main contracts of the library) ---
pub use crate::perception::{SampleDetection, SampleLocator};
pub use crate::types::{Clock, Frame, Seconds, SystemClock};

// --- Core Data Structures (The "nouns" of the library) ---
pub use crate::mapping::MapStats;
pub use crate::messages::{EncodedFrames, TelemetryRecord, TickOutput};
pub use crate::rendering::OverlayStyle;
pub use crate::state::{MissionPhase, RoverState, SamplePositions};

// --- Errors ---
pub use crate::error::{
    AnalyticsError, EncodeError, ImageDecodeError, ParseError, PipelineError, StyleError,
    TelemetryError,
};

// --- Pipeline Stages ---
pub use crate::mapping::{compute_map_stats, ground_truth_from_mask};
pub use crate::pipeline::{create_output_images, process_tick};
pub use crate::telemetry::{convert_to_float, update_rover};

// --- Concrete Implementations (Export common ones for convenience) ---
pub use crate::perception::WorldmapPassthrough;
