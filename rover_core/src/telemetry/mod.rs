// rover_core/src/telemetry/mod.rs

//! Turns raw telemetry records into rover state.

pub mod numeric;
mod updater;

pub use numeric::convert_to_float;
pub use updater::update_rover;
