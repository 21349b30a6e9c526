// rover_core/src/telemetry/updater.rs

use super::numeric::{
    convert_to_float, parse_count, parse_flag, parse_float_list, parse_truncated_list,
};
use crate::codec::decode_base64_image;
use crate::error::{ParseError, TelemetryError};
use crate::messages::{fields, TelemetryRecord};
use crate::state::{RoverState, SamplePositions};
use crate::types::{Clock, Frame};
use nalgebra::DVector;
use tracing::{debug, info};

/// Applies one telemetry record to the rover, in place.
///
/// The first call fixes the start time and the mission inventory; every later
/// call only refreshes `total_time`. Kinematics, flags, the collected-sample
/// count and the camera frame are refreshed on every call.
///
/// Fields are written in the order they are parsed. If a field fails, the ones
/// before it keep their new values and the ones after it keep their old ones.
///
/// # Returns
/// The freshly decoded camera frame, which is also stored in `rover.img`.
pub fn update_rover(
    rover: &mut RoverState,
    data: &TelemetryRecord,
    clock: &dyn Clock,
) -> Result<Frame, TelemetryError> {
    let now = clock.now();

    if rover.phase().is_running() {
        if let Some(start_time) = rover.start_time() {
            let elapsed = now - start_time;
            if elapsed.is_finite() {
                rover.total_time = elapsed;
            }
        }
    } else {
        let samples_x = field(data, fields::SAMPLES_X, parse_truncated_list)?;
        let samples_y = field(data, fields::SAMPLES_Y, parse_truncated_list)?;
        let samples_to_find = field(data, fields::SAMPLE_COUNT, parse_count)?;
        rover.initialize(now, SamplePositions::new(samples_x, samples_y), samples_to_find);
        info!(
            start_time = now,
            samples_to_find,
            samples = ?rover.samples_pos().iter().collect::<Vec<_>>(),
            "First telemetry received, mission started"
        );
    }

    rover.vel = field(data, fields::SPEED, convert_to_float)?;
    rover.pos = DVector::from_vec(field(data, fields::POSITION, parse_float_list)?);
    rover.yaw = field(data, fields::YAW, convert_to_float)?;
    rover.pitch = field(data, fields::PITCH, convert_to_float)?;
    rover.roll = field(data, fields::ROLL, convert_to_float)?;
    rover.throttle = field(data, fields::THROTTLE, convert_to_float)?;
    rover.steer = field(data, fields::STEERING_ANGLE, convert_to_float)?;
    rover.near_sample = field(data, fields::NEAR_SAMPLE, parse_flag)?;
    rover.picking_up = field(data, fields::PICKING_UP, parse_flag)?;

    let samples_remaining = field(data, fields::SAMPLE_COUNT, parse_count)?;
    rover.samples_collected = rover.samples_to_find() - samples_remaining;

    debug!(
        speed = rover.vel,
        position = ?rover.pos.as_slice(),
        throttle = rover.throttle,
        steer_angle = rover.steer,
        near_sample = rover.near_sample,
        picking_up = rover.picking_up,
        sending_pickup = rover.send_pickup,
        total_time = rover.total_time,
        samples_remaining,
        samples_collected = rover.samples_collected,
        "Telemetry applied"
    );

    let image = decode_base64_image(data.require(fields::IMAGE)?)?;
    rover.img = image.clone();
    Ok(image)
}

/// Looks up `key` and runs its value through `parse`, tagging failures with the key.
fn field<T>(
    data: &TelemetryRecord,
    key: &'static str,
    parse: impl Fn(&str) -> Result<T, ParseError>,
) -> Result<T, TelemetryError> {
    let raw = data.require(key)?;
    parse(raw).map_err(|source| TelemetryError::InvalidField { field: key, source })
}
