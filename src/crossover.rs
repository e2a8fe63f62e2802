//! Combine pairs of parents into offspring.
//!
//! Parents are consumed in random-pair order. A pair is crossed with the
//! current `crossover_proba`, otherwise both parents pass through
//! unchanged. A degenerate pair (empty parent) also passes through and
//! bumps `cross_failed`. Offspring get fresh ids and unset fitness.
mod dual_point;
mod same_start_dual_point;
pub mod wrapper;

pub use self::dual_point::DualPoint;
pub use self::same_start_dual_point::SameStartDualPoint;
pub use self::wrapper::Wrapper as CrossoverWrapper;

use crate::config::EvolveConfig;
use crate::evolve::EvolveState;
use crate::genome::Genome;
use crate::population::Pool;
use rand::Rng;

pub trait Crossover {
    /// Consume the breeding pool and produce the mating pool.
    fn call<R: Rng>(
        &mut self,
        parents: Pool,
        state: &mut EvolveState,
        config: &EvolveConfig,
        rng: &mut R,
    ) -> Pool;

    fn report(&self) -> String;
}

/// Shared pair walk: shuffle, pair up, cross or pass through. `mate`
/// returns None for degenerate pairs.
fn pair_walk<R, F>(mut parents: Pool, state: &mut EvolveState, rng: &mut R, mate: F) -> Pool
where
    R: Rng,
    F: Fn(&Genome, &Genome, &mut EvolveState, &mut R) -> Option<(Genome, Genome)>,
{
    parents.shuffle(rng);
    let mut offspring = Pool::new();
    let mut genomes = parents.genomes.into_iter();
    loop {
        match (genomes.next(), genomes.next()) {
            (Some(father), Some(mother)) => {
                if rng.gen::<f32>() <= state.crossover_proba {
                    match mate(&father, &mother, state, rng) {
                        Some((first, second)) => {
                            offspring.push(first);
                            offspring.push(second);
                            continue;
                        }
                        None => state.cross_failed += 1,
                    }
                }
                offspring.push(father);
                offspring.push(mother);
            }
            // odd leftover passes through
            (Some(last), None) => {
                offspring.push(last);
                break;
            }
            _ => break,
        }
    }
    offspring
}

/// Segment length transferred from a parent of the given size.
fn segment_len(cross_length: f32, parent_len: usize) -> usize {
    ((cross_length * parent_len as f32).round() as usize).clamp(1, parent_len)
}
