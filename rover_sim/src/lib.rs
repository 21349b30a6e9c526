// rover_sim/src/lib.rs

//! Headless replay harness around `rover_core`: configuration, the command
//! line, and the loop that feeds recorded ticks through the pipeline.

// This prelude is for convenience for other files WITHIN the rover_sim crate.
pub mod prelude;

pub mod cli;
pub mod config;
pub mod replay;
