use super::Select;
use crate::config::EvolveConfig;
use crate::population::Pool;
use rand::Rng;

const WEIGHT_EPSILON: f32 = 1e-6;

/// Roulette wheel selection: probability proportional to
/// `max(0, fitness - min_fitness) + epsilon`, sampled with replacement.
/// Dead genomes never make it onto the wheel.
#[derive(Clone, Debug, Default)]
pub struct Roulette;

impl Select for Roulette {
    fn call<R: Rng>(&mut self, pool: &mut Pool, config: &EvolveConfig, rng: &mut R) -> Pool {
        let mut selected = Pool::new();
        let candidates: Vec<usize> = (0..pool.size())
            .filter(|&i| !pool.genomes[i].dead && !pool.genomes[i].is_stale())
            .collect();
        if candidates.is_empty() {
            return selected;
        }
        let min_fitness = candidates
            .iter()
            .map(|&i| pool.genomes[i].fitness.unwrap_or(0.0))
            .fold(f32::INFINITY, f32::min);
        let weights: Vec<f32> = candidates
            .iter()
            .map(|&i| {
                (pool.genomes[i].fitness.unwrap_or(0.0) - min_fitness).max(0.0) + WEIGHT_EPSILON
            })
            .collect();
        let total: f32 = weights.iter().sum();
        for _ in 0..config.select_individuals {
            let mut spin = rng.gen::<f32>() * total;
            let mut picked = candidates[candidates.len() - 1];
            for (&candidate, &weight) in candidates.iter().zip(&weights) {
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
        "select-roulette".to_string()
    }
}
