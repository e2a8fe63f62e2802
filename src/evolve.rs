//! The driver: orchestrates initialization, measurement, selection,
//! crossover and mutation over generations, maintains the elite set and
//! detects termination.
//!
//! Two scenario variants share the per-generation skeleton (statistics,
//! best tracking, logging, termination checks, elite snapshot) and differ
//! in which genomes are mutated and where elites are re-inserted:
//! * [Scenario::Elitist] mutates the whole main pool and overwrites its
//!   worst with elites,
//! * [Scenario::TournamentFamily] mutates only the mating pool and refills
//!   from elites up to `pop_min`.
pub mod builder;
pub mod reporter;

pub use self::builder::Builder as EvolveBuilder;

use crate::config::{EvolveConfig, Scenario};
use crate::crossover::{Crossover, CrossoverWrapper};
use crate::errors::EvolveError;
use crate::evolve::reporter::{GenerationStats, Reporter};
use crate::fitness::{Fitness, FitnessContext, FitnessWrapper};
use crate::genome::Genome;
use crate::mutate::{Mutate, MutateWrapper, ReplaceGenome};
use crate::population::{DiversityStats, Pool};
use crate::select::{ElitistUniform, Select, SelectWrapper};
use crate::simulator::Simulator;
use log::{info, warn};
use rand::rngs::SmallRng;
use rand::prelude::*;
use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use thread_local::ThreadLocal;

/// Average action count above which the run is considered collapsed.
const COLLAPSE_ACTION_LEN: f32 = 400.0;
/// Adaptive shrink of `cross_length` per generation, floored at 0.4.
const CROSS_LENGTH_DECAY: f32 = 3e-4;
const CROSS_LENGTH_FLOOR: f32 = 0.4;
const CROSSOVER_PROBA_BOUNDS: (f32, f32) = (0.4, 0.85);

/// How a finished run ended, mapped onto the process exit codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    ConfigError,
    Collapsed,
    Cancelled,
}

impl RunOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunOutcome::Completed | RunOutcome::Cancelled => 0,
            RunOutcome::ConfigError => 1,
            RunOutcome::Collapsed => 2,
        }
    }
}

/// Mutable run state, split from the pure [EvolveConfig] so the config
/// invariants stay obvious.
#[derive(Clone, Debug)]
pub struct EvolveState {
    pub current_iter: usize,
    /// Adaptive copies of the crossover parameters.
    pub cross_length: f32,
    pub crossover_proba: f32,
    /// Best genome seen so far across all generations.
    pub best: Option<Genome>,
    pub best_fitness: f32,
    /// Generations since the best fitness last improved.
    pub stale_generations: usize,
    pub free_area: u32,
    pub diversity: DiversityStats,
    pub cross_failed: u32,
    pub muta_count: u32,
    pub pop_filled: usize,
    next_genome_id: u64,
}

impl EvolveState {
    pub fn new(config: &EvolveConfig) -> Self {
        Self {
            current_iter: 0,
            cross_length: config.cross_length,
            crossover_proba: config.crossover_proba,
            best: None,
            best_fitness: f32::NEG_INFINITY,
            stale_generations: 0,
            free_area: 0,
            diversity: DiversityStats::default(),
            cross_failed: 0,
            muta_count: 0,
            pop_filled: 0,
            next_genome_id: 0,
        }
    }

    /// Monotone genome id source.
    pub fn next_id(&mut self) -> u64 {
        self.next_genome_id += 1;
        self.next_genome_id
    }
}

/// The evolutionary search driver. Owns the pool, the elite set, the
/// simulator adapter and the single PRNG; every stochastic operator draws
/// from that PRNG in a deterministic order, so a `(config, seed, map)`
/// triple reproduces bit-for-bit.
pub struct Evolve<S: Simulator + Clone + Send> {
    pub config: EvolveConfig,
    pub state: EvolveState,
    pub pool: Pool,
    pub(crate) elite: Vec<Genome>,
    pub(crate) simulator: S,
    pub(crate) rng: SmallRng,
    pub(crate) fitness: FitnessWrapper,
    pub(crate) select: SelectWrapper,
    pub(crate) crossover: CrossoverWrapper,
    pub(crate) mutate_batch: Vec<MutateWrapper>,
    pub(crate) reporter: Reporter,
    pub(crate) thread_locals: Option<ThreadLocal<RefCell<S>>>,
    pub(crate) cancel: Arc<AtomicBool>,
}

impl<S: Simulator + Clone + Send + Sync> Evolve<S> {
    pub fn builder() -> EvolveBuilder<S> {
        EvolveBuilder::new()
    }

    /// Cooperative cancellation flag, checked at the top of each generation.
    pub fn cancellation_token(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    pub fn best_genome(&self) -> Option<&Genome> {
        self.state.best.as_ref()
    }

    /// Run the search until normal termination, collapse, runtime
    /// configuration trip or cancellation.
    pub fn run(&mut self) -> Result<RunOutcome, EvolveError> {
        self.prepare()?;

        let mut outcome = RunOutcome::Completed;
        let mut last_tick = Instant::now();
        while self.state.current_iter < self.config.max_iterations {
            if self.cancel.load(Ordering::Relaxed) {
                info!("cancelled at generation {}", self.state.current_iter);
                outcome = RunOutcome::Cancelled;
                break;
            }
            let duration_ms = last_tick.elapsed().as_millis();
            last_tick = Instant::now();

            let stats = self.generation_stats(duration_ms);
            self.update_best();
            self.adapt_crossover();
            self.reporter.maybe_snapshot(self.state.current_iter, &self.pool);
            self.reporter.log_generation(&stats, self.state.best.as_ref());
            self.state.cross_failed = 0;
            self.state.muta_count = 0;
            self.state.pop_filled = 0;

            self.clear_zero_actions();

            if stats.action_len.avg > COLLAPSE_ACTION_LEN {
                warn!("Max action sequence length reached!");
                outcome = RunOutcome::Collapsed;
                break;
            }
            if self.config.selection_strategy.is_tournament()
                && self.pool.size() < self.config.tournament_size
            {
                warn!("Tournament bigger than pool");
                outcome = RunOutcome::ConfigError;
                break;
            }

            self.save_elite();
            match self.config.scenario {
                Scenario::Elitist => self.elitist_generation(),
                Scenario::TournamentFamily => self.tournament_generation(),
            }
            self.state.current_iter += 1;
        }
        info!(
            "finished after {} generations: {:?}, best fitness {}",
            self.state.current_iter, outcome, self.state.best_fitness
        );
        Ok(outcome)
    }

    fn prepare(&mut self) -> Result<(), EvolveError> {
        if self.config.retrain && self.state.current_iter > 0 {
            self.state.current_iter = 0;
            self.state.free_area = self.simulator.free_area(true);
            self.reporter.redirect_retrain();
            if self.config.restore {
                self.restore_pool()?;
            } else {
                // keep the pool, remeasure against the rebuilt free area
                self.pool.genomes.iter_mut().for_each(Genome::taint);
            }
        } else if self.pool.is_empty() {
            if self.config.restore {
                self.restore_pool()?;
            } else {
                self.populate_pool();
            }
            self.state.free_area = self.simulator.free_area(false);
        }
        if self.state.free_area == 0 {
            self.state.free_area = self.simulator.free_area(false);
        }
        self.evaluate_pool();
        Ok(())
    }

    /// Initialization: `init_individuals` random genomes.
    fn populate_pool(&mut self) {
        let mut genomes = Vec::with_capacity(self.config.init_individuals);
        for _ in 0..self.config.init_individuals {
            let id = self.state.next_id();
            genomes.push(Genome::random(id, &self.config, &mut self.rng));
        }
        self.pool = Pool::with_genomes(genomes);
    }

    fn restore_pool(&mut self) -> Result<(), EvolveError> {
        let path = self.config.snapshot_path.clone().ok_or_else(|| {
            EvolveError::ConfigInvalid("restore requested without a snapshot path".to_string())
        })?;
        let sequences = reporter::read_pool_actions(&path)?;
        let mut genomes = Vec::with_capacity(sequences.len());
        for actions in sequences {
            let id = self.state.next_id();
            genomes.push(Genome::from_actions(id, actions));
        }
        self.pool = Pool::with_genomes(genomes);
        Ok(())
    }

    fn context(&self) -> FitnessContext {
        FitnessContext {
            free_area: self.state.free_area,
            map_resolution: self.config.map_resolution,
            fitness_weight: self.config.fitness_weight,
            robot: *self.simulator.robot(),
        }
    }

    /// Evaluate every stale genome in the main pool.
    fn evaluate_pool(&mut self) {
        let context = self.context();
        match self.thread_locals.as_ref() {
            Some(thread_locals) => {
                self.fitness
                    .call_for_pool_par(&mut self.pool, &self.simulator, &context, thread_locals)
            }
            None => self
                .fitness
                .call_for_pool(&mut self.pool, &mut self.simulator, &context),
        }
    }

    fn evaluate_external(&mut self, pool: &mut Pool) {
        let context = self.context();
        match self.thread_locals.as_ref() {
            Some(thread_locals) => {
                self.fitness
                    .call_for_pool_par(pool, &self.simulator, &context, thread_locals)
            }
            None => self.fitness.call_for_pool(pool, &mut self.simulator, &context),
        }
    }

    fn generation_stats(&mut self, duration_ms: u128) -> GenerationStats {
        self.state.diversity = self.pool.update_diversity();
        GenerationStats {
            iteration: self.state.current_iter,
            fitness: self.pool.fitness_stats(),
            time: self.pool.time_stats(),
            coverage: self.pool.coverage_stats(),
            rotation: self.pool.rotation_stats(),
            obstacles: self.pool.obstacle_stats(),
            path_len: self.pool.path_len_stats(),
            action_len: self.pool.action_len_stats(),
            zero_action_percent: self.pool.zero_action_percent(self.config.map_resolution),
            dead_gens: self.pool.dead_count(self.config.min_genome_len),
            diversity: self.state.diversity,
            pop_filled: self.state.pop_filled,
            pop_size: self.pool.size(),
            cross_failed: self.state.cross_failed,
            muta_count: self.state.muta_count,
            duration_ms,
        }
    }

    /// Track the best-so-far genome and the stale-generation counter
    /// feeding the adaptive crossover control.
    fn update_best(&mut self) {
        let contender = self.pool.best().cloned();
        if let Some(contender) = contender {
            let fitness = contender.fitness.unwrap_or(f32::MIN);
            if fitness > self.state.best_fitness {
                self.state.best_fitness = fitness;
                self.state.best = Some(contender);
                self.state.stale_generations = 0;
                return;
            }
        }
        self.state.stale_generations += 1;
    }

    fn adapt_crossover(&mut self) {
        if self.state.current_iter < 1000 {
            self.state.cross_length =
                (self.state.cross_length - CROSS_LENGTH_DECAY).max(CROSS_LENGTH_FLOOR);
        }
        if self.config.adapt_crossover_proba {
            let (lower, upper) = CROSSOVER_PROBA_BOUNDS;
            if self.state.stale_generations < 25 {
                self.state.crossover_proba -= 0.01;
            } else if self.state.stale_generations < 50 {
                self.state.crossover_proba += 0.01;
            }
            self.state.crossover_proba = self.state.crossover_proba.clamp(lower, upper);
        }
    }

    /// Prune zero-actions every `clear_zeros` generations; pruned genomes
    /// are stale and get remeasured before they reach selection.
    fn clear_zero_actions(&mut self) {
        if self.config.clear_zeros == 0
            || self.state.current_iter % self.config.clear_zeros != 0
        {
            return;
        }
        if self.pool.prune_zero_actions(self.config.map_resolution) > 0 {
            self.evaluate_pool();
        }
    }

    /// Snapshot the sorted pool as the elite set.
    fn save_elite(&mut self) {
        self.pool.sort_ascending();
        self.elite = self.pool.genomes.clone();
    }

    /// Overwrite the worst `select_keep_best` genomes with the best elites.
    fn replace_with_best(&mut self) {
        if self.elite.is_empty() {
            return;
        }
        self.pool.sort_ascending();
        let keep = self
            .config
            .select_keep_best
            .min(self.elite.len())
            .min(self.pool.size());
        self.pool.genomes.drain(..keep);
        let elites = self.elite[self.elite.len() - keep..].iter().cloned();
        self.pool.genomes.splice(0..0, elites);
    }

    /// Append the best `select_keep_best` elites to the pool.
    fn insert_best(&mut self) {
        if self.elite.is_empty() {
            return;
        }
        let keep = self.config.select_keep_best.min(self.elite.len());
        self.pool
            .genomes
            .extend(self.elite[self.elite.len() - keep..].iter().cloned());
    }

    /// Refill the pool from shuffled elites up to `pop_min`.
    fn balance_population(&mut self) {
        if self.pool.size() >= self.config.pop_min {
            return;
        }
        let missing = self.config.pop_min - self.pool.size();
        let mut refill = self.elite.clone();
        refill.shuffle(&mut self.rng);
        refill.truncate(missing);
        self.state.pop_filled = refill.len();
        self.pool.genomes.extend(refill);
    }

    /// Apply the batch operators to every genome of a pool. With
    /// `replace_first` the wholesale replacement runs first and shadows the
    /// offset operators for that genome.
    fn mutate_pool(&mut self, pool: &mut Pool, replace_first: bool) {
        let mut replace = ReplaceGenome;
        for genome in pool.genomes.iter_mut() {
            let mut mutated = false;
            if replace_first {
                mutated = replace.call(genome, &self.config, &mut self.rng);
            }
            if !mutated {
                for op in self.mutate_batch.iter_mut() {
                    mutated |= op.call(genome, &self.config, &mut self.rng);
                }
            }
            if mutated {
                genome.id = self.state.next_id();
                if !genome.mutated {
                    self.state.muta_count += 1;
                }
                genome.mutated = true;
            }
        }
    }

    /// Elitist scenario: uniform-without-replacement, crossover back into
    /// the main pool, wholesale replacement and batch mutation across the
    /// whole pool, then elitist merge of the best.
    fn elitist_generation(&mut self) {
        self.pool.genomes.iter_mut().for_each(|g| g.mutated = false);

        let breeding = ElitistUniform.call(&mut self.pool, &self.config, &mut self.rng);
        let mut mating =
            self.crossover
                .call(breeding, &mut self.state, &self.config, &mut self.rng);
        self.pool.append(&mut mating);

        // wholesale replacement with immediate re-evaluation; the last
        // genome is never replaced
        if self.pool.size() > 2 {
            let context = self.context();
            let mut replace = ReplaceGenome;
            let last = self.pool.size() - 1;
            for genome in self.pool.genomes[..last].iter_mut() {
                if replace.call(genome, &self.config, &mut self.rng) {
                    genome.id = self.state.next_id();
                    genome.mutated = true;
                    self.state.muta_count += 1;
                    self.fitness
                        .estimate_genome(genome, &mut self.simulator, &context);
                }
            }
        }

        let mut pool = std::mem::take(&mut self.pool);
        self.mutate_pool(&mut pool, false);
        self.pool = pool;

        self.evaluate_pool();
        self.replace_with_best();
    }

    /// Tournament-family scenario: configured selection, elites back into
    /// the emptied pool, crossover into a fresh mating pool, mutation and
    /// re-evaluation of the mating pool only, then elite refill.
    fn tournament_generation(&mut self) {
        self.pool.genomes.iter_mut().for_each(|g| g.mutated = false);
        self.fitness.apply_pool_bias(&mut self.pool);

        let breeding = self.select.call(&mut self.pool, &self.config, &mut self.rng);
        self.pool.clear();
        self.insert_best();

        let mut mating =
            self.crossover
                .call(breeding, &mut self.state, &self.config, &mut self.rng);
        self.mutate_pool(&mut mating, true);
        self.evaluate_external(&mut mating);

        self.pool.append(&mut mating);
        self.balance_population();
    }
}
