//! The pure search configuration. Mutable run counters live in
//! [EvolveState](crate::evolve::EvolveState), never here.
use crate::action::Pose;
use crate::errors::EvolveError;
use std::path::PathBuf;

/// Which selection strategy samples the breeding pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionStrategy {
    ElitistUniform,
    Tournament,
    Roulette,
    RankedRoulette,
}

impl SelectionStrategy {
    pub fn is_tournament(&self) -> bool {
        matches!(self, SelectionStrategy::Tournament)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CrossoverStrategy {
    DualPoint,
    SameStartDualPoint,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FitnessStrategy {
    Base,
    RotationBias,
    SemiContinuous,
    Poly,
}

/// Which driver loop variant runs. `Elitist` mutates the whole main pool
/// and overwrites its worst with elites; `TournamentFamily` mutates only
/// the mating pool and refills from elites.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scenario {
    Elitist,
    TournamentFamily,
}

#[derive(Clone, Debug)]
pub struct EvolveConfig {
    /// Seeds the single PRNG used by every stochastic operator.
    pub seed: u64,
    pub max_iterations: usize,
    pub init_individuals: usize,
    /// Mean initial genome length.
    pub init_actions: usize,
    pub select_individuals: usize,
    pub select_keep_best: usize,
    pub tournament_size: usize,
    /// Expected fraction of one parent transferred in crossover.
    pub cross_length: f32,
    /// Probability a pair actually crosses, else both parents pass through.
    pub crossover_proba: f32,
    /// Adaptive crossover probability in [0.4, 0.85]; disabled until
    /// validated.
    pub adapt_crossover_proba: bool,
    /// Per-genome probability of wholesale replacement.
    pub muta_replace_gen: f32,
    /// Per-action probability of a Gaussian angle offset.
    pub muta_angle_offset: f32,
    /// Per-genome probability of snapping one angle to the nearest 90 deg.
    pub muta_orthogonal_angle: f32,
    /// Per-genome probability of rescaling one action's distance.
    pub muta_scale_distance: f32,
    /// Legacy structural operators; 0.0 disables.
    pub muta_add_action: f32,
    pub muta_remove_action: f32,
    pub muta_swap_action: f32,
    pub dist_mu: f32,
    pub dist_dev: f32,
    pub angle_mu: f32,
    pub angle_dev: f32,
    /// Interval in generations at which zero-actions are pruned; 0 disables.
    pub clear_zeros: usize,
    /// Minimum post-generation population, refilled from elites if short.
    pub pop_min: usize,
    /// Genomes shorter than this count as dead.
    pub min_genome_len: usize,
    /// Centimeters per grid cell.
    pub map_resolution: f32,
    pub start: Pose,
    pub ends: Vec<Pose>,
    /// Blend between coverage and time components.
    pub fitness_weight: f32,
    pub crossover_strategy: CrossoverStrategy,
    pub selection_strategy: SelectionStrategy,
    pub fitness_strategy: FitnessStrategy,
    pub scenario: Scenario,
    /// Snapshot interval in generations; 0 disables.
    pub take_snapshot_every: usize,
    /// Directory for the generation CSV and snapshots; empty disables all
    /// file output.
    pub log_dir: PathBuf,
    pub log_name: String,
    /// Reset the iteration counter and log into a sibling directory, keeping
    /// the pool.
    pub retrain: bool,
    /// Load the initial pool from `snapshot_path` instead of sampling it.
    pub restore: bool,
    pub snapshot_path: Option<PathBuf>,
    /// Evaluate fitness with one cloned simulator per rayon worker.
    pub par_fitness: bool,
}

impl Default for EvolveConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            max_iterations: 1000,
            init_individuals: 1000,
            init_actions: 50,
            select_individuals: 25,
            select_keep_best: 10,
            tournament_size: 4,
            cross_length: 0.4,
            crossover_proba: 0.8,
            adapt_crossover_proba: false,
            muta_replace_gen: 0.01,
            muta_angle_offset: 0.7,
            muta_orthogonal_angle: 0.1,
            muta_scale_distance: 0.7,
            muta_add_action: 0.0,
            muta_remove_action: 0.0,
            muta_swap_action: 0.0,
            dist_mu: 4.0,
            dist_dev: 0.9,
            angle_mu: 0.0,
            angle_dev: 40.0,
            clear_zeros: 0,
            pop_min: 25,
            min_genome_len: 3,
            map_resolution: 30.0,
            start: Pose::default(),
            ends: Vec::new(),
            fitness_weight: 0.5,
            crossover_strategy: CrossoverStrategy::DualPoint,
            selection_strategy: SelectionStrategy::ElitistUniform,
            fitness_strategy: FitnessStrategy::Base,
            scenario: Scenario::Elitist,
            take_snapshot_every: 0,
            log_dir: PathBuf::new(),
            log_name: String::new(),
            retrain: false,
            restore: false,
            snapshot_path: None,
            par_fitness: false,
        }
    }
}

impl EvolveConfig {
    /// Fatal-at-startup validation.
    pub fn validate(&self) -> Result<(), EvolveError> {
        for (name, value) in [
            ("cross_length", self.cross_length),
            ("crossover_proba", self.crossover_proba),
            ("muta_replace_gen", self.muta_replace_gen),
            ("muta_angle_offset", self.muta_angle_offset),
            ("muta_orthogonal_angle", self.muta_orthogonal_angle),
            ("muta_scale_distance", self.muta_scale_distance),
            ("muta_add_action", self.muta_add_action),
            ("muta_remove_action", self.muta_remove_action),
            ("muta_swap_action", self.muta_swap_action),
            ("fitness_weight", self.fitness_weight),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(EvolveError::ConfigInvalid(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }
        if self.init_individuals == 0 {
            return Err(EvolveError::ConfigInvalid(
                "init_individuals must be positive".to_string(),
            ));
        }
        if self.select_individuals == 0 {
            return Err(EvolveError::ConfigInvalid(
                "select_individuals must be positive".to_string(),
            ));
        }
        if self.select_keep_best > self.select_individuals {
            return Err(EvolveError::ConfigInvalid(
                "select_keep_best exceeds select_individuals".to_string(),
            ));
        }
        if self.ends.is_empty() {
            return Err(EvolveError::ConfigInvalid(
                "end pose set is empty".to_string(),
            ));
        }
        if self.map_resolution <= 0.0 {
            return Err(EvolveError::ConfigInvalid(
                "map_resolution must be positive".to_string(),
            ));
        }
        if self.dist_dev < 0.0 || self.angle_dev < 0.0 {
            return Err(EvolveError::ConfigInvalid(
                "distribution deviations must be non-negative".to_string(),
            ));
        }
        if self.selection_strategy.is_tournament() && self.tournament_size > self.init_individuals {
            return Err(EvolveError::ConfigInvalid(
                "Tournament bigger than pool".to_string(),
            ));
        }
        if self.restore && self.snapshot_path.is_none() {
            return Err(EvolveError::ConfigInvalid(
                "restore requested without a snapshot path".to_string(),
            ));
        }
        Ok(())
    }
}
