//! Sample parents from the pool into a breeding pool of exactly
//! `select_individuals` genomes.
//!
//! `ElitistUniform` drains its picks out of the main pool (selection
//! without replacement); the other strategies clone and leave the main
//! pool untouched, the driver decides what happens to the originals.
mod ranked_roulette;
mod roulette;
mod tournament;
mod uniform;
pub mod wrapper;

pub use self::ranked_roulette::RankedRoulette;
pub use self::roulette::Roulette;
pub use self::tournament::Tournament;
pub use self::uniform::ElitistUniform;
pub use self::wrapper::Wrapper as SelectWrapper;

use crate::config::EvolveConfig;
use crate::population::Pool;
use rand::Rng;

pub trait Select {
    fn call<R: Rng>(&mut self, pool: &mut Pool, config: &EvolveConfig, rng: &mut R) -> Pool;
    fn report(&self) -> String;
}
