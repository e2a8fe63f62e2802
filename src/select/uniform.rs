use super::Select;
use crate::config::EvolveConfig;
use crate::population::Pool;
use rand::Rng;

/// Uniform selection without replacement: shuffle, move the first
/// `select_individuals` genomes out of the pool.
#[derive(Clone, Debug, Default)]
pub struct ElitistUniform;

impl Select for ElitistUniform {
    fn call<R: Rng>(&mut self, pool: &mut Pool, config: &EvolveConfig, rng: &mut R) -> Pool {
        pool.shuffle(rng);
        let take = config.select_individuals.min(pool.size());
        Pool::with_genomes(pool.genomes.drain(..take).collect())
    }

    fn report(&self) -> String {
        "select-elitist-uniform".to_string()
    }
}
