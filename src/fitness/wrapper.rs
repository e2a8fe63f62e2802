pub use super::Base;
pub use super::Fitness;
pub use super::Poly;
pub use super::RotationBias;
pub use super::SemiContinuous;

use super::FitnessContext;
use crate::config::FitnessStrategy;
use crate::genome::Genome;

/// Configuration-site dispatch over the fitness strategies.
#[derive(Clone, Debug)]
pub enum Wrapper {
    Base(Base),
    RotationBias(RotationBias),
    SemiContinuous(SemiContinuous),
    Poly(Poly),
}

impl Wrapper {
    pub fn from_strategy(strategy: FitnessStrategy) -> Self {
        match strategy {
            FitnessStrategy::Base => Wrapper::Base(Base),
            FitnessStrategy::RotationBias => Wrapper::RotationBias(RotationBias),
            FitnessStrategy::SemiContinuous => Wrapper::SemiContinuous(SemiContinuous),
            FitnessStrategy::Poly => Wrapper::Poly(Poly),
        }
    }
}

impl Fitness for Wrapper {
    fn scalarize(&self, genome: &Genome, context: &FitnessContext) -> f32 {
        match self {
            Wrapper::Base(fitness) => fitness.scalarize(genome, context),
            Wrapper::RotationBias(fitness) => fitness.scalarize(genome, context),
            Wrapper::SemiContinuous(fitness) => fitness.scalarize(genome, context),
            Wrapper::Poly(fitness) => fitness.scalarize(genome, context),
        }
    }

    fn report(&self) -> String {
        match self {
            Wrapper::Base(fitness) => fitness.report(),
            Wrapper::RotationBias(fitness) => fitness.report(),
            Wrapper::SemiContinuous(fitness) => fitness.report(),
            Wrapper::Poly(fitness) => fitness.report(),
        }
    }
}

impl From<Base> for Wrapper {
    fn from(fitness: Base) -> Self {
        Wrapper::Base(fitness)
    }
}
impl From<RotationBias> for Wrapper {
    fn from(fitness: RotationBias) -> Self {
        Wrapper::RotationBias(fitness)
    }
}
impl From<SemiContinuous> for Wrapper {
    fn from(fitness: SemiContinuous) -> Self {
        Wrapper::SemiContinuous(fitness)
    }
}
impl From<Poly> for Wrapper {
    fn from(fitness: Poly) -> Self {
        Wrapper::Poly(fitness)
    }
}
