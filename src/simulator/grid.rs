//! Reference simulator: an owned occupancy grid with a dense visited mask.
//!
//! Motion is rasterized by stepping half a cell at a time along straights
//! and sampled arcs. Clean-speed travel marks cells visited, re-entering an
//! already visited cell at clean-speed counts as a crossing, and running
//! into an occupied or out-of-bounds cell counts as an obstacle hit and
//! clamps the remainder of the action.
use super::{Measurement, RobotSpec, Simulator, SimulatorError};
use crate::action::{normalize_angle_deg, Action, Pose};
use fixedbitset::FixedBitSet;
use std::collections::VecDeque;

const STEP_CELLS: f32 = 0.5;

#[derive(Clone, Debug)]
pub struct GridSimulator {
    width: usize,
    height: usize,
    resolution_cm: f32,
    occupied: FixedBitSet,
    visited: FixedBitSet,
    start: Pose,
    robot: RobotSpec,
    free_area_cache: Option<u32>,
}

impl GridSimulator {
    /// An obstacle-free grid of `width` x `height` cells.
    pub fn empty(
        width: usize,
        height: usize,
        resolution_cm: f32,
        start: Pose,
        robot: RobotSpec,
    ) -> Self {
        Self {
            width,
            height,
            resolution_cm,
            occupied: FixedBitSet::with_capacity(width * height),
            visited: FixedBitSet::with_capacity(width * height),
            start,
            robot,
            free_area_cache: None,
        }
    }

    /// Build from rows of `.` (free) and `#` (occupied); all rows must have
    /// equal length.
    pub fn from_rows(rows: &[&str], resolution_cm: f32, start: Pose, robot: RobotSpec) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        let mut simulator = Self::empty(width, height, resolution_cm, start, robot);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch == '#' {
                    simulator.occupied.insert(y * width + x);
                }
            }
        }
        simulator
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn cell_index(&self, x: f32, y: f32) -> Option<usize> {
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let (cx, cy) = (x.floor() as usize, y.floor() as usize);
        if cx >= self.width || cy >= self.height {
            return None;
        }
        Some(cy * self.width + cx)
    }

    fn navigable(&self, index: usize) -> bool {
        !self.occupied.contains(index)
    }

    /// Advance `distance_cm` along the current heading, sampling half-cell
    /// steps. Returns the distance actually traveled before a blockage.
    fn advance(&mut self, trail: &mut Trail, pose: &mut Pose, distance_cm: f32, clean: bool) -> f32 {
        let total_cells = distance_cm / self.resolution_cm;
        let steps = (total_cells / STEP_CELLS).ceil() as usize;
        let mut traveled_cells = 0.0;
        let heading = pose.theta_deg.to_radians();
        let (dx, dy) = (heading.cos(), heading.sin());
        for _ in 0..steps {
            let step = STEP_CELLS.min(total_cells - traveled_cells);
            let next_x = pose.x + dx * step;
            let next_y = pose.y + dy * step;
            match self.cell_index(next_x, next_y) {
                Some(index) if self.navigable(index) => {
                    pose.x = next_x;
                    pose.y = next_y;
                    traveled_cells += step;
                    self.enter_cell(trail, index, clean);
                }
                _ => {
                    trail.obstacle_hits += 1;
                    break;
                }
            }
        }
        traveled_cells * self.resolution_cm
    }

    /// Advance along an arc of `angle_deg` with radius `radius_cm`,
    /// approximated as half-cell chords with incremental heading change.
    fn advance_arc(
        &mut self,
        trail: &mut Trail,
        pose: &mut Pose,
        angle_deg: f32,
        radius_cm: f32,
        clean: bool,
    ) -> f32 {
        let arc_cm = angle_deg.abs().to_radians() * radius_cm;
        let total_cells = arc_cm / self.resolution_cm;
        if total_cells <= 0.0 {
            pose.theta_deg = normalize_angle_deg(pose.theta_deg + angle_deg);
            return 0.0;
        }
        let steps = (total_cells / STEP_CELLS).ceil() as usize;
        let angle_per_step = angle_deg / steps as f32;
        let mut traveled_cells = 0.0;
        for _ in 0..steps {
            let step = STEP_CELLS.min(total_cells - traveled_cells);
            pose.theta_deg = normalize_angle_deg(pose.theta_deg + angle_per_step);
            let heading = pose.theta_deg.to_radians();
            let next_x = pose.x + heading.cos() * step;
            let next_y = pose.y + heading.sin() * step;
            match self.cell_index(next_x, next_y) {
                Some(index) if self.navigable(index) => {
                    pose.x = next_x;
                    pose.y = next_y;
                    traveled_cells += step;
                    self.enter_cell(trail, index, clean);
                }
                _ => {
                    trail.obstacle_hits += 1;
                    break;
                }
            }
        }
        traveled_cells * self.resolution_cm
    }

    fn enter_cell(&mut self, trail: &mut Trail, index: usize, clean: bool) {
        if trail.current_cell == Some(index) {
            return;
        }
        trail.current_cell = Some(index);
        if !clean {
            return;
        }
        if self.visited.contains(index) {
            trail.crossings += 1;
        } else {
            self.visited.insert(index);
            trail.coverage_cells += 1;
        }
    }

    fn flood_fill_free_area(&self) -> u32 {
        let start_index = match self.cell_index(self.start.x, self.start.y) {
            Some(index) if self.navigable(index) => index,
            _ => return 0,
        };
        let mut seen = FixedBitSet::with_capacity(self.width * self.height);
        let mut queue = VecDeque::new();
        seen.insert(start_index);
        queue.push_back(start_index);
        let mut count = 0u32;
        while let Some(index) = queue.pop_front() {
            count += 1;
            let (x, y) = (index % self.width, index / self.width);
            let mut neighbours = Vec::with_capacity(4);
            if x > 0 {
                neighbours.push(index - 1);
            }
            if x + 1 < self.width {
                neighbours.push(index + 1);
            }
            if y > 0 {
                neighbours.push(index - self.width);
            }
            if y + 1 < self.height {
                neighbours.push(index + self.width);
            }
            for neighbour in neighbours {
                if !seen.contains(neighbour) && self.navigable(neighbour) {
                    seen.insert(neighbour);
                    queue.push_back(neighbour);
                }
            }
        }
        count
    }
}

/// Per-evaluation counters while rasterizing one action sequence.
#[derive(Default)]
struct Trail {
    current_cell: Option<usize>,
    coverage_cells: u32,
    crossings: u32,
    obstacle_hits: u32,
}

impl Simulator for GridSimulator {
    fn evaluate(&mut self, actions: &[Action]) -> Result<Measurement, SimulatorError> {
        let start_index = self
            .cell_index(self.start.x, self.start.y)
            .filter(|&index| self.navigable(index))
            .ok_or(SimulatorError::StartBlocked {
                x: self.start.x,
                y: self.start.y,
            })?;

        self.visited.clear();
        let mut trail = Trail::default();
        let mut pose = self.start;
        let mut waypoints = vec![pose];
        let mut travel_time_s = 0.0;
        let mut rotation_time_s = 0.0;
        let mut traveled_cm = 0.0;
        let mut path_length_cm = 0.0;

        // the robot cleans the cell it stands on
        self.enter_cell(&mut trail, start_index, true);

        for action in actions {
            match *action {
                Action::Straight { distance_cm } => {
                    let cm = self.advance(&mut trail, &mut pose, distance_cm, true);
                    travel_time_s += cm / self.robot.clean_speed_cm_s;
                    traveled_cm += cm;
                    path_length_cm += cm;
                }
                Action::CStraight { distance_cm } => {
                    let cm = self.advance(&mut trail, &mut pose, distance_cm, false);
                    travel_time_s += cm / self.robot.drive_speed_cm_s;
                    traveled_cm += cm;
                }
                Action::Rotate { angle_deg } => {
                    rotation_time_s += angle_deg.abs() / self.robot.rotation_speed_deg_s;
                    pose.theta_deg = normalize_angle_deg(pose.theta_deg + angle_deg);
                }
                Action::Curve {
                    angle_deg,
                    radius_cm,
                } => {
                    let cm = self.advance_arc(&mut trail, &mut pose, angle_deg, radius_cm, true);
                    travel_time_s += cm / self.robot.clean_speed_cm_s;
                    traveled_cm += cm;
                    path_length_cm += cm;
                }
                Action::CCurve {
                    angle_deg,
                    radius_cm,
                } => {
                    let cm = self.advance_arc(&mut trail, &mut pose, angle_deg, radius_cm, false);
                    travel_time_s += cm / self.robot.drive_speed_cm_s;
                    traveled_cm += cm;
                }
            }
            waypoints.push(pose);
        }

        Ok(Measurement {
            waypoints,
            final_time_s: travel_time_s + rotation_time_s,
            rotation_time_s,
            traveled_cm,
            path_length_cm,
            coverage_cells: trail.coverage_cells,
            crossings: trail.crossings,
            obstacle_hits: trail.obstacle_hits,
        })
    }

    fn free_area(&mut self, reset: bool) -> u32 {
        if reset {
            self.free_area_cache = None;
        }
        if let Some(cached) = self.free_area_cache {
            return cached;
        }
        let area = self.flood_fill_free_area();
        self.free_area_cache = Some(area);
        area
    }

    fn grid_snapshot(&self, name: &str) -> Vec<Vec<u8>> {
        let mut rows = vec![vec![0u8; self.width]; self.height];
        for y in 0..self.height {
            for x in 0..self.width {
                let index = y * self.width + x;
                rows[y][x] = if self.occupied.contains(index) {
                    2
                } else if name != "obstacles" && self.visited.contains(index) {
                    1
                } else {
                    0
                };
            }
        }
        rows
    }

    fn robot(&self) -> &RobotSpec {
        &self.robot
    }
}
