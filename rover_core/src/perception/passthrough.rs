// rover_core/src/perception/passthrough.rs

use super::{SampleDetection, SampleLocator};
use crate::state::RoverState;

/// A placeholder locator that finds no samples.
/// It publishes the worldmap as both the display layer and the scored map and
/// shows the raw camera frame as the vision image, so the pipeline can run
/// before any real perception is wired in.
#[derive(Default, Debug, Clone, Copy)]
pub struct WorldmapPassthrough;

impl SampleLocator for WorldmapPassthrough {
    fn locate(&mut self, rover: &mut RoverState) -> SampleDetection {
        rover.vision_image = rover.img.clone();
        SampleDetection {
            samples_located: 0,
            map_add: rover.worldmap.clone(),
            plot_map: rover.worldmap.clone(),
        }
    }
}
