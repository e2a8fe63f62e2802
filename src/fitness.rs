//! Scalarize simulator measurements into a comparable fitness.
//!
//! Every strategy writes the measurement attributes onto the genome and
//! returns the scalar. All strategies are monotone non-decreasing in
//! coverage and monotone non-increasing in time, rotation time and
//! crossings; ties between equal fitness values are broken downstream by
//! action count, then id.
mod base;
mod poly;
mod rotation_bias;
mod semi_continuous;
pub mod wrapper;

pub use self::base::Base;
pub use self::poly::Poly;
pub use self::rotation_bias::RotationBias;
pub use self::semi_continuous::SemiContinuous;
pub use self::wrapper::Wrapper as FitnessWrapper;

use crate::genome::Genome;
use crate::population::Pool;
use crate::simulator::{RobotSpec, Simulator};
use log::warn;
use rayon::prelude::*;
use std::cell::RefCell;
use thread_local::ThreadLocal;

const TIME_EPSILON: f32 = 1e-6;
const CROSSING_PENALTY: f32 = 0.01;
const ZERO_ACTION_PENALTY: f32 = 0.01;

/// Immutable inputs shared by all fitness strategies for one generation.
#[derive(Clone, Copy, Debug)]
pub struct FitnessContext {
    pub free_area: u32,
    pub map_resolution: f32,
    pub fitness_weight: f32,
    pub robot: RobotSpec,
}

impl FitnessContext {
    /// Time the robot would need to clean the whole free area once.
    pub fn optimal_time_s(&self) -> f32 {
        let cell_area = self.map_resolution * self.map_resolution;
        self.free_area as f32 * cell_area / self.robot.clean_coverage_rate()
    }

    /// `optimal_time / final_time`, guarded against division by zero and
    /// capped at 1: a path can never be rewarded for finishing faster than
    /// the clean-coverage rate allows.
    pub fn time_err(&self, final_time_s: f32) -> f32 {
        (self.optimal_time_s() / final_time_s.max(TIME_EPSILON)).min(1.0)
    }

    /// Count-proportional penalty for crossings and zero-actions.
    pub fn penalty(&self, genome: &Genome) -> f32 {
        CROSSING_PENALTY * genome.crossings as f32
            + ZERO_ACTION_PENALTY * genome.zero_action_count(self.map_resolution) as f32
    }
}

pub trait Fitness: Clone + Send + Sync {
    /// The scalar fitness of an already measured genome.
    fn scalarize(&self, genome: &Genome, context: &FitnessContext) -> f32;

    fn report(&self) -> String;

    /// Simulate one genome and write measurements and fitness onto it. A
    /// simulator failure marks the genome dead with the worst admissible
    /// fitness; it will be replaced by elite refill on a later generation.
    fn estimate_genome<S: Simulator>(
        &self,
        genome: &mut Genome,
        simulator: &mut S,
        context: &FitnessContext,
    ) -> f32 {
        match simulator.evaluate(&genome.actions) {
            Ok(measurement) => {
                genome.apply_measurement(measurement, context.free_area);
                let fitness = self.scalarize(genome, context);
                genome.fitness = Some(fitness);
                fitness
            }
            Err(error) => {
                warn!("simulation failed for genome {}: {}", genome.id, error);
                genome.mark_dead();
                f32::MIN
            }
        }
    }

    /// Evaluate every stale genome in the pool.
    fn call_for_pool<S: Simulator>(
        &self,
        pool: &mut Pool,
        simulator: &mut S,
        context: &FitnessContext,
    ) {
        for genome in pool.genomes.iter_mut().filter(|g| g.is_stale()) {
            self.estimate_genome(genome, simulator, context);
        }
    }

    /// Parallel variant: one cloned simulator per rayon worker, results
    /// identical to the sequential path since every evaluation starts from
    /// a clean trail.
    fn call_for_pool_par<S: Simulator + Clone + Send + Sync>(
        &self,
        pool: &mut Pool,
        simulator: &S,
        context: &FitnessContext,
        thread_local: &ThreadLocal<RefCell<S>>,
    ) {
        pool.genomes
            .par_iter_mut()
            .filter(|g| g.is_stale())
            .for_each_init(
                || {
                    thread_local
                        .get_or(|| RefCell::new(simulator.clone()))
                        .borrow_mut()
                },
                |simulator, genome| {
                    self.estimate_genome(genome, &mut **simulator, context);
                },
            );
    }

    /// Optional population-level rescaling hook. Must preserve the fitness
    /// order; the default leaves the pool untouched.
    fn apply_pool_bias(&self, _pool: &mut Pool) {}
}
