use super::Select;
use crate::config::EvolveConfig;
use crate::population::Pool;
use rand::Rng;

/// Run `select_individuals` tournaments of `tournament_size` uniformly
/// sampled genomes (with replacement) and emit each winner. Fitness ties go
/// to the shorter action sequence.
#[derive(Clone, Debug, Default)]
pub struct Tournament;

impl Select for Tournament {
    fn call<R: Rng>(&mut self, pool: &mut Pool, config: &EvolveConfig, rng: &mut R) -> Pool {
        let mut selected = Pool::new();
        if pool.is_empty() {
            return selected;
        }
        for _ in 0..config.select_individuals {
            let mut winner = rng.gen_range(0..pool.size());
            for _ in 1..config.tournament_size {
                let contender = rng.gen_range(0..pool.size());
                if pool.genomes[contender]
                    .ascending_cmp(&pool.genomes[winner])
                    .is_gt()
                {
                    winner = contender;
                }
            }
            selected.push(pool.genomes[winner].clone());
        }
        selected
    }

    fn report(&self) -> String {
        "select-tournament".to_string()
    }
}
