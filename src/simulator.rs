//! The contract for executing an action sequence on the occupancy grid.
//!
//! The engine owns exactly one adapter per search run and calls it
//! single-threaded; parallel fitness evaluation clones one adapter per
//! worker. Genomes never hold a reference into the adapter's buffers, they
//! only carry the [Measurement] copied out of it.
pub mod grid;

use crate::action::{Action, Pose};
use thiserror::Error;

/// Physical robot parameters used to convert distances into time and cells.
#[derive(Clone, Copy, Debug)]
pub struct RobotSpec {
    pub width_cm: f32,
    pub drive_speed_cm_s: f32,
    pub clean_speed_cm_s: f32,
    pub rotation_speed_deg_s: f32,
}

impl RobotSpec {
    /// Area cleaned per second at clean-speed, in cm2/s.
    pub fn clean_coverage_rate(&self) -> f32 {
        self.width_cm * self.clean_speed_cm_s
    }
}

impl Default for RobotSpec {
    fn default() -> Self {
        Self {
            width_cm: 1.0,
            drive_speed_cm_s: 50.0,
            clean_speed_cm_s: 20.0,
            rotation_speed_deg_s: 90.0,
        }
    }
}

/// Everything the simulator reports for one executed action sequence.
#[derive(Clone, Debug, Default)]
pub struct Measurement {
    pub waypoints: Vec<Pose>,
    pub final_time_s: f32,
    pub rotation_time_s: f32,
    pub traveled_cm: f32,
    pub path_length_cm: f32,
    pub coverage_cells: u32,
    pub crossings: u32,
    pub obstacle_hits: u32,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulatorError {
    #[error("start pose ({x:.1}, {y:.1}) is blocked or outside the grid")]
    StartBlocked { x: f32, y: f32 },
}

/// Capability set consumed by the engine: execute a sequence, report the
/// navigable area, expose an opaque grid for logging.
pub trait Simulator {
    /// Simulate the robot from the configured start pose. Side-effects the
    /// internal visited grid; each call starts from a clean trail.
    fn evaluate(&mut self, actions: &[Action]) -> Result<Measurement, SimulatorError>;

    /// Cells reachable from the start pose, the denominator for coverage.
    /// Cached; `reset` forces a recomputation.
    fn free_area(&mut self, reset: bool) -> u32;

    /// Opaque 2D matrix pass-through for logging and visualization.
    fn grid_snapshot(&self, name: &str) -> Vec<Vec<u8>>;

    fn robot(&self) -> &RobotSpec;
}
