// rover_core/src/state.rs

use crate::types::{Frame, Seconds};
use nalgebra::DVector;

/// Default camera frame size of the simulated rover.
pub const CAMERA_WIDTH: u32 = 320;
pub const CAMERA_HEIGHT: u32 = 160;
/// Default side length of the square world map, one pixel per meter.
pub const WORLD_SIZE: u32 = 200;

/// The two-state lifecycle of a mission: nothing has been heard from the rover
/// yet, or the first telemetry tick has fixed the start time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MissionPhase {
    #[default]
    Uninitialized,
    Running { start_time: Seconds },
}

impl MissionPhase {
    pub fn start_time(&self) -> Option<Seconds> {
        match self {
            MissionPhase::Uninitialized => None,
            MissionPhase::Running { start_time } => Some(*start_time),
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, MissionPhase::Running { .. })
    }

    /// Moves to `Running`. Returns `false`, leaving the phase untouched, if the
    /// mission had already started.
    pub fn start(&mut self, now: Seconds) -> bool {
        match self {
            MissionPhase::Uninitialized => {
                *self = MissionPhase::Running { start_time: now };
                true
            }
            MissionPhase::Running { .. } => false,
        }
    }
}

/// World positions of the rock samples, as two parallel integer sequences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SamplePositions {
    pub x: Vec<i32>,
    pub y: Vec<i32>,
}

impl SamplePositions {
    pub fn new(x: Vec<i32>, y: Vec<i32>) -> Self {
        Self { x, y }
    }

    /// Iterates `(x, y)` pairs. Stops at the shorter sequence if the two differ.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// The live model of the rover, mutated in place by every telemetry tick.
///
/// Mission inventory (`samples_to_find`, `samples_pos`) and the lifecycle are
/// private: they are written once by the first tick and read through getters.
#[derive(Debug, Clone)]
pub struct RoverState {
    phase: MissionPhase,
    samples_to_find: i32,
    samples_pos: SamplePositions,

    /// Seconds since the first tick.
    pub total_time: Seconds,
    /// Always `samples_to_find` minus the latest reported remaining count.
    pub samples_collected: i32,
    /// Owned by the decision logic; only read here.
    pub send_pickup: bool,

    // --- Kinematics ---
    pub vel: f64,
    pub yaw: f64,
    pub pitch: f64,
    pub roll: f64,
    pub throttle: f64,
    pub steer: f64,
    /// World position, two or three components as reported.
    pub pos: DVector<f64>,

    // --- Flags ---
    pub near_sample: bool,
    pub picking_up: bool,

    // --- Sensing ---
    /// Latest decoded camera frame.
    pub img: Frame,
    /// Visualization frame written by the perception step.
    pub vision_image: Frame,
    /// Static reference map. Channel 1 marks true navigable terrain.
    pub ground_truth: Frame,
    /// Accumulated map written by the perception step. Channel 2 marks
    /// detected navigable terrain.
    pub worldmap: Frame,
}

impl RoverState {
    /// Creates an uninitialized rover scored against `ground_truth`.
    /// The worldmap starts empty with the same dimensions.
    pub fn new(ground_truth: Frame) -> Self {
        let (width, height) = ground_truth.dimensions();
        Self {
            phase: MissionPhase::Uninitialized,
            samples_to_find: 0,
            samples_pos: SamplePositions::default(),
            total_time: 0.0,
            samples_collected: 0,
            send_pickup: false,
            vel: 0.0,
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
            throttle: 0.0,
            steer: 0.0,
            pos: DVector::zeros(2),
            near_sample: false,
            picking_up: false,
            img: Frame::new(CAMERA_WIDTH, CAMERA_HEIGHT),
            vision_image: Frame::new(CAMERA_WIDTH, CAMERA_HEIGHT),
            ground_truth,
            worldmap: Frame::new(width, height),
        }
    }

    pub fn phase(&self) -> MissionPhase {
        self.phase
    }

    pub fn start_time(&self) -> Option<Seconds> {
        self.phase.start_time()
    }

    pub fn samples_to_find(&self) -> i32 {
        self.samples_to_find
    }

    pub fn samples_pos(&self) -> &SamplePositions {
        &self.samples_pos
    }

    /// Records the mission inventory and starts the clock. Only the first call
    /// has any effect; returns whether it did.
    pub(crate) fn initialize(
        &mut self,
        now: Seconds,
        samples_pos: SamplePositions,
        samples_to_find: i32,
    ) -> bool {
        if !self.phase.start(now) {
            return false;
        }
        self.total_time = 0.0;
        self.samples_pos = samples_pos;
        self.samples_to_find = samples_to_find;
        true
    }
}

impl Default for RoverState {
    fn default() -> Self {
        Self::new(Frame::new(WORLD_SIZE, WORLD_SIZE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_starts_only_once() {
        let mut phase = MissionPhase::default();
        assert_eq!(phase.start_time(), None);
        assert!(phase.start(10.0));
        assert!(!phase.start(20.0));
        assert_eq!(phase, MissionPhase::Running { start_time: 10.0 });
        assert!(phase.is_running());
    }

    #[test]
    fn initialize_is_ignored_after_the_first_call() {
        let mut rover = RoverState::default();
        let first = SamplePositions::new(vec![1, 2], vec![3, 4]);
        assert!(rover.initialize(5.0, first.clone(), 2));

        rover.total_time = 12.0;
        assert!(!rover.initialize(9.0, SamplePositions::new(vec![7], vec![8]), 6));
        assert_eq!(rover.samples_pos(), &first);
        assert_eq!(rover.samples_to_find(), 2);
        assert_eq!(rover.start_time(), Some(5.0));
        assert_eq!(rover.total_time, 12.0);
    }

    #[test]
    fn worldmap_matches_ground_truth_dimensions() {
        let rover = RoverState::new(Frame::new(64, 48));
        assert_eq!(rover.worldmap.dimensions(), (64, 48));
        assert_eq!(rover.img.dimensions(), (CAMERA_WIDTH, CAMERA_HEIGHT));
    }

    #[test]
    fn sample_pairs_follow_the_shorter_sequence() {
        let positions = SamplePositions::new(vec![1, 2, 3], vec![4, 5]);
        assert_eq!(positions.iter().collect::<Vec<_>>(), vec![(1, 4), (2, 5)]);
    }
}
