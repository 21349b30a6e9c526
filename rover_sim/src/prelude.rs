// rover_sim/src/prelude.rs

// Re-export the entire rover_core prelude so binaries get the pure types
// like `RoverState`, `SampleLocator`, `OverlayStyle`, etc. in one import.
pub use rover_core::prelude::*;

// Re-export common harness types for easy access.
pub use crate::cli::Cli;
pub use crate::config::{ErrorPolicy, ReplayConfig};
pub use crate::replay::{run, ReplaySummary};
