// rover_core/src/perception/mod.rs

use crate::state::RoverState;
use crate::types::Frame;

/// What the sample-detection step hands back for one analytics cycle.
#[derive(Debug, Clone)]
pub struct SampleDetection {
    /// Number of rock samples located so far.
    pub samples_located: usize,
    /// Map layer for display. The overlay is drawn onto a flipped copy of it.
    pub map_add: Frame,
    /// Map scored against the ground truth. Channel 2 marks detected
    /// navigable terrain.
    pub plot_map: Frame,
}

/// The contract for the perception step that turns the rover's worldmap into
/// located samples and plot-ready map layers.
///
/// Implementations may update the rover in place (e.g. `vision_image`). Both
/// returned frames must have the ground-truth dimensions for scoring to work.
pub trait SampleLocator {
    fn locate(&mut self, rover: &mut RoverState) -> SampleDetection;
}

// Any closure with the right shape can stand in for a locator.
impl<F> SampleLocator for F
where
    F: FnMut(&mut RoverState) -> SampleDetection,
{
    fn locate(&mut self, rover: &mut RoverState) -> SampleDetection {
        self(rover)
    }
}

mod passthrough;

pub use passthrough::WorldmapPassthrough;
