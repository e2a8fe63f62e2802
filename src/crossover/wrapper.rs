pub use super::Crossover;
pub use super::DualPoint;
pub use super::SameStartDualPoint;

use crate::config::{CrossoverStrategy, EvolveConfig};
use crate::evolve::EvolveState;
use crate::population::Pool;
use rand::Rng;

/// Configuration-site dispatch over the crossover operators.
#[derive(Clone, Debug)]
pub enum Wrapper {
    DualPoint(DualPoint),
    SameStartDualPoint(SameStartDualPoint),
}

impl Wrapper {
    pub fn from_strategy(strategy: CrossoverStrategy) -> Self {
        match strategy {
            CrossoverStrategy::DualPoint => Wrapper::DualPoint(DualPoint),
            CrossoverStrategy::SameStartDualPoint => {
                Wrapper::SameStartDualPoint(SameStartDualPoint)
            }
        }
    }
}

impl Crossover for Wrapper {
    fn call<R: Rng>(
        &mut self,
        parents: Pool,
        state: &mut EvolveState,
        config: &EvolveConfig,
        rng: &mut R,
    ) -> Pool {
        match self {
            Wrapper::DualPoint(crossover) => crossover.call(parents, state, config, rng),
            Wrapper::SameStartDualPoint(crossover) => crossover.call(parents, state, config, rng),
        }
    }

    fn report(&self) -> String {
        match self {
            Wrapper::DualPoint(crossover) => crossover.report(),
            Wrapper::SameStartDualPoint(crossover) => crossover.report(),
        }
    }
}

impl From<DualPoint> for Wrapper {
    fn from(crossover: DualPoint) -> Self {
        Wrapper::DualPoint(crossover)
    }
}
impl From<SameStartDualPoint> for Wrapper {
    fn from(crossover: SameStartDualPoint) -> Self {
        Wrapper::SameStartDualPoint(crossover)
    }
}
