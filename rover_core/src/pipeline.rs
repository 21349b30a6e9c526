// rover_core/src/pipeline.rs

use crate::error::PipelineError;
use crate::mapping::compute_map_stats;
use crate::messages::{TelemetryRecord, TickOutput};
use crate::perception::SampleLocator;
use crate::rendering::{encode_output_frames, overlay_lines, render_map_overlay, OverlayStyle};
use crate::state::RoverState;
use crate::telemetry::update_rover;
use crate::types::Clock;
use tracing::debug;

/// Runs the analytics and rendering half of a tick on the current rover state.
///
/// Asks `locator` for the map layers, scores the plotting map against the
/// ground truth, draws the overlay onto a flipped copy of the display layer and
/// encodes it together with the rover's vision frame. An invalid `style` fails
/// before the locator runs.
pub fn create_output_images(
    rover: &mut RoverState,
    locator: &mut dyn SampleLocator,
    style: &OverlayStyle,
) -> Result<TickOutput, PipelineError> {
    style.validate()?;
    let detection = locator.locate(rover);
    let stats = compute_map_stats(&detection.plot_map, &rover.ground_truth)?;
    debug!(
        tot_nav_pix = stats.tot_nav_pix,
        good_nav_pix = stats.good_nav_pix,
        bad_nav_pix = stats.bad_nav_pix,
        tot_map_pix = stats.tot_map_pix,
        "Map scored"
    );

    let lines = overlay_lines(
        rover.total_time,
        &stats,
        detection.samples_located,
        rover.samples_collected,
    );
    let overlay = render_map_overlay(&detection.map_add, &lines, style);
    let frames = encode_output_frames(&overlay, &rover.vision_image, style)?;

    Ok(TickOutput {
        stats,
        samples_located: detection.samples_located,
        frames,
    })
}

/// Processes one telemetry tick end to end: update, locate, score, render, encode.
///
/// A failed update stops the tick before any analytics run; the rover keeps
/// whatever fields the update had already written.
pub fn process_tick(
    rover: &mut RoverState,
    data: &TelemetryRecord,
    locator: &mut dyn SampleLocator,
    style: &OverlayStyle,
    clock: &dyn Clock,
) -> Result<TickOutput, PipelineError> {
    update_rover(rover, data, clock)?;
    create_output_images(rover, locator, style)
}
