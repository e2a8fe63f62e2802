use super::{Evolve, EvolveState};
use crate::config::EvolveConfig;
use crate::crossover::CrossoverWrapper;
use crate::errors::EvolveError;
use crate::evolve::reporter::Reporter;
use crate::fitness::FitnessWrapper;
use crate::mutate::MutateWrapper;
use crate::population::Pool;
use crate::select::SelectWrapper;
use crate::simulator::Simulator;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use thread_local::ThreadLocal;

/// The builder for an [Evolve] driver. Validates the configuration and
/// binds the strategy wrappers exactly once.
#[derive(Clone, Debug, Default)]
pub struct Builder<S: Simulator + Clone + Send> {
    pub config: Option<EvolveConfig>,
    pub simulator: Option<S>,
}

impl<S: Simulator + Clone + Send> Builder<S> {
    pub fn new() -> Self {
        Self {
            config: None,
            simulator: None,
        }
    }

    pub fn with_config(mut self, config: EvolveConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_simulator(mut self, simulator: S) -> Self {
        self.simulator = Some(simulator);
        self
    }

    pub fn build(self) -> Result<Evolve<S>, EvolveError> {
        let config = self
            .config
            .ok_or_else(|| EvolveError::ConfigInvalid("config is required".to_string()))?;
        let simulator = self
            .simulator
            .ok_or_else(|| EvolveError::ConfigInvalid("simulator is required".to_string()))?;
        config.validate()?;

        let state = EvolveState::new(&config);
        let reporter = Reporter::new(&config);
        let rng = SmallRng::seed_from_u64(config.seed);
        let thread_locals = config.par_fitness.then(ThreadLocal::new);
        Ok(Evolve {
            fitness: FitnessWrapper::from_strategy(config.fitness_strategy),
            select: SelectWrapper::from_strategy(config.selection_strategy),
            crossover: CrossoverWrapper::from_strategy(config.crossover_strategy),
            mutate_batch: MutateWrapper::batch_from_config(&config),
            config,
            state,
            pool: Pool::new(),
            elite: Vec::new(),
            simulator,
            rng,
            reporter,
            thread_locals,
            cancel: Arc::new(AtomicBool::new(false)),
        })
    }
}
