pub use super::ElitistUniform;
pub use super::RankedRoulette;
pub use super::Roulette;
pub use super::Select;
pub use super::Tournament;

use crate::config::{EvolveConfig, SelectionStrategy};
use crate::population::Pool;
use rand::Rng;

/// Configuration-site dispatch over the selection strategies.
#[derive(Clone, Debug)]
pub enum Wrapper {
    ElitistUniform(ElitistUniform),
    Tournament(Tournament),
    Roulette(Roulette),
    RankedRoulette(RankedRoulette),
}

impl Wrapper {
    pub fn from_strategy(strategy: SelectionStrategy) -> Self {
        match strategy {
            SelectionStrategy::ElitistUniform => Wrapper::ElitistUniform(ElitistUniform),
            SelectionStrategy::Tournament => Wrapper::Tournament(Tournament),
            SelectionStrategy::Roulette => Wrapper::Roulette(Roulette),
            SelectionStrategy::RankedRoulette => Wrapper::RankedRoulette(RankedRoulette),
        }
    }
}

impl Select for Wrapper {
    fn call<R: Rng>(&mut self, pool: &mut Pool, config: &EvolveConfig, rng: &mut R) -> Pool {
        match self {
            Wrapper::ElitistUniform(select) => select.call(pool, config, rng),
            Wrapper::Tournament(select) => select.call(pool, config, rng),
            Wrapper::Roulette(select) => select.call(pool, config, rng),
            Wrapper::RankedRoulette(select) => select.call(pool, config, rng),
        }
    }

    fn report(&self) -> String {
        match self {
            Wrapper::ElitistUniform(select) => select.report(),
            Wrapper::Tournament(select) => select.report(),
            Wrapper::Roulette(select) => select.report(),
            Wrapper::RankedRoulette(select) => select.report(),
        }
    }
}

impl From<ElitistUniform> for Wrapper {
    fn from(select: ElitistUniform) -> Self {
        Wrapper::ElitistUniform(select)
    }
}
impl From<Tournament> for Wrapper {
    fn from(select: Tournament) -> Self {
        Wrapper::Tournament(select)
    }
}
impl From<Roulette> for Wrapper {
    fn from(select: Roulette) -> Self {
        Wrapper::Roulette(select)
    }
}
impl From<RankedRoulette> for Wrapper {
    fn from(select: RankedRoulette) -> Self {
        Wrapper::RankedRoulette(select)
    }
}
