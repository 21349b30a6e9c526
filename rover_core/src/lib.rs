// rover_core/src/lib.rs

// This file defines the public modules of the library.
pub mod codec;
pub mod error;
pub mod mapping;
pub mod messages;
pub mod perception;
pub mod pipeline;
pub mod prelude;
pub mod rendering;
pub mod state;
pub mod telemetry;
pub mod types;
