//! A genome is an identified candidate path: an ordered action sequence plus
//! the measurements of its last simulated execution.
use crate::action::{Action, Pose};
use crate::config::EvolveConfig;
use crate::simulator::Measurement;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_distr::Normal;
use rustc_hash::FxHasher;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// An identified candidate solution. Equality and hashing go by the action
/// sequence content only; the id and measurements do not participate.
///
/// `fitness` is `None` until evaluated; any edit of `actions` resets it to
/// `None`, so a stale genome is never admitted to selection.
#[derive(Clone, Debug)]
pub struct Genome {
    pub id: u64,
    pub actions: Vec<Action>,
    /// Derived; recomputed on every evaluation.
    pub waypoints: Vec<Pose>,
    pub fitness: Option<f32>,
    pub final_time_s: f32,
    pub rotation_time_s: f32,
    pub coverage_ratio: f32,
    pub traveled_cm: f32,
    pub path_length_cm: f32,
    pub crossings: u32,
    pub obstacle_hits: u32,
    pub free_space_cells: u32,
    pub diversity_factor: f32,
    pub mutated: bool,
    pub dead: bool,
}

impl Genome {
    pub fn new(id: u64) -> Self {
        Self::from_actions(id, Vec::new())
    }

    pub fn from_actions(id: u64, actions: Vec<Action>) -> Self {
        Self {
            id,
            actions,
            waypoints: Vec::new(),
            fitness: None,
            final_time_s: 0.0,
            rotation_time_s: 0.0,
            coverage_ratio: 0.0,
            traveled_cm: 0.0,
            path_length_cm: 0.0,
            crossings: 0,
            obstacle_hits: 0,
            free_space_cells: 0,
            diversity_factor: 0.0,
            mutated: false,
            dead: false,
        }
    }

    /// Sample a fresh random genome: length `max(1, round(N(init_actions,
    /// init_actions / 4)))`, kinds uniform over Straight/Rotate/Curve,
    /// magnitudes from the configured Gaussians.
    pub fn random<R: Rng>(id: u64, config: &EvolveConfig, rng: &mut R) -> Self {
        Self::from_actions(id, random_actions(config, rng))
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn push_action(&mut self, action: Action) {
        self.actions.push(action.normalized());
        self.taint();
    }

    pub fn remove_action(&mut self, index: usize) -> Action {
        let removed = self.actions.remove(index);
        self.taint();
        removed
    }

    /// Replace `[lo..hi)` with another sequence, returning the removed slice.
    pub fn splice_actions(&mut self, lo: usize, hi: usize, replacement: &[Action]) -> Vec<Action> {
        let removed = self
            .actions
            .splice(lo..hi, replacement.iter().copied())
            .collect();
        self.taint();
        removed
    }

    pub fn replace_actions(&mut self, actions: Vec<Action>) {
        self.actions = actions;
        self.taint();
    }

    /// Mark measurements stale after an action edit.
    pub fn taint(&mut self) {
        self.fitness = None;
        self.dead = false;
        self.waypoints.clear();
    }

    pub fn is_stale(&self) -> bool {
        self.fitness.is_none()
    }

    /// Content hash of the action sequence.
    pub fn actions_hash(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.actions.hash(&mut hasher);
        hasher.finish()
    }

    /// Write the simulator measurements onto the genome. Fitness itself is
    /// set by the fitness strategy afterwards.
    pub fn apply_measurement(&mut self, measurement: Measurement, free_area: u32) {
        self.waypoints = measurement.waypoints;
        self.final_time_s = measurement.final_time_s;
        self.rotation_time_s = measurement.rotation_time_s;
        self.traveled_cm = measurement.traveled_cm;
        self.path_length_cm = measurement.path_length_cm;
        self.crossings = measurement.crossings;
        self.obstacle_hits = measurement.obstacle_hits;
        self.free_space_cells = free_area;
        self.coverage_ratio = if free_area > 0 {
            (measurement.coverage_cells as f32 / free_area as f32).min(1.0)
        } else {
            0.0
        };
        self.dead = false;
    }

    /// Worst admissible fitness; the genome is replaced by elite refill on
    /// the next generation.
    pub fn mark_dead(&mut self) {
        self.fitness = Some(f32::MIN);
        self.dead = true;
    }

    pub fn zero_action_count(&self, map_resolution_cm: f32) -> usize {
        self.actions
            .iter()
            .filter(|a| a.is_zero(map_resolution_cm))
            .count()
    }

    /// Delete every zero-action. Returns the number removed; idempotent.
    pub fn prune_zero_actions(&mut self, map_resolution_cm: f32) -> usize {
        let before = self.actions.len();
        self.actions.retain(|a| !a.is_zero(map_resolution_cm));
        let removed = before - self.actions.len();
        if removed > 0 {
            self.taint();
        }
        removed
    }

    /// Rank two genomes ascending: worst first. Ties are broken by action
    /// count (shorter is better, so ranks later), then by id (lower is
    /// better). Unevaluated genomes rank as worst.
    pub fn ascending_cmp(&self, other: &Self) -> Ordering {
        let a = self.fitness.unwrap_or(f32::MIN);
        let b = other.fitness.unwrap_or(f32::MIN);
        a.total_cmp(&b)
            .then_with(|| other.actions.len().cmp(&self.actions.len()))
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialEq for Genome {
    fn eq(&self, other: &Self) -> bool {
        self.actions == other.actions
    }
}
impl Eq for Genome {}

impl Hash for Genome {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.actions.hash(state);
    }
}

/// Sample one action with the initialization distribution: kind uniform over
/// Straight/Rotate/Curve, `distance_cm ~ |N(dist_mu, dist_dev)| *
/// map_resolution`, `angle_deg ~ N(angle_mu, angle_dev)`.
pub fn random_action<R: Rng>(config: &EvolveConfig, rng: &mut R) -> Action {
    // deviations are validated non-negative at build time
    let distance_distr = Normal::new(config.dist_mu, config.dist_dev).unwrap();
    let angle_distr = Normal::new(config.angle_mu, config.angle_dev).unwrap();
    let distance_cm = distance_distr.sample(rng).abs() * config.map_resolution;
    let angle_deg = angle_distr.sample(rng);
    let action = match Uniform::new(0u8, 3).sample(rng) {
        0 => Action::Straight { distance_cm },
        1 => Action::Rotate { angle_deg },
        _ => Action::Curve {
            angle_deg,
            radius_cm: distance_cm,
        },
    };
    action.normalized()
}

/// Sample a full action sequence with the initialization distribution.
pub fn random_actions<R: Rng>(config: &EvolveConfig, rng: &mut R) -> Vec<Action> {
    let mean = config.init_actions as f32;
    let length_distr = Normal::new(mean, mean / 4.0).unwrap();
    let length = (length_distr.sample(rng).round() as i64).max(1) as usize;
    (0..length).map(|_| random_action(config, rng)).collect()
}
