use super::Select;
use crate::config::EvolveConfig;
use crate::genome::Genome;
use crate::population::Pool;
use itertools::Itertools;
use rand::Rng;

/// Rank-weighted roulette: sort ascending by fitness, weight each position
/// linearly `1..N`, then spin the wheel over the weights. Stable against
/// fitness-scale drift.
#[derive(Clone, Debug, Default)]
pub struct RankedRoulette;

impl Select for RankedRoulette {
    fn call<R: Rng>(&mut self, pool: &mut Pool, config: &EvolveConfig, rng: &mut R) -> Pool {
        let mut selected = Pool::new();
        if pool.is_empty() {
            return selected;
        }
        let ranked: Vec<usize> = (0..pool.size())
            .sorted_by(|&a, &b| Genome::ascending_cmp(&pool.genomes[a], &pool.genomes[b]))
            .collect();
        let n = ranked.len();
        let total = (n * (n + 1) / 2) as f32;
        for _ in 0..config.select_individuals {
            let mut spin = rng.gen::<f32>() * total;
            let mut picked = ranked[n - 1];
            for (position, &candidate) in ranked.iter().enumerate() {
                let weight = (position + 1) as f32;
                if spin < weight {
                    picked = candidate;
                    break;
                }
                spin -= weight;
            }
            selected.push(pool.genomes[picked].clone());
        }
        selected
    }

    fn report(&self) -> String {
        "select-ranked-roulette".to_string()
    }
}
