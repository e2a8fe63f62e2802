pub use super::AddAction;
pub use super::Mutate;
pub use super::OrthogonalAngleOffset;
pub use super::RandomAngleOffset;
pub use super::RemoveAction;
pub use super::ReplaceGenome;
pub use super::ScaleDistance;
pub use super::SwapAction;

use crate::config::EvolveConfig;
use crate::genome::Genome;
use rand::Rng;

/// Configuration-site dispatch over the mutation operators.
#[derive(Clone, Debug)]
pub enum Wrapper {
    ReplaceGenome(ReplaceGenome),
    RandomAngleOffset(RandomAngleOffset),
    OrthogonalAngleOffset(OrthogonalAngleOffset),
    ScaleDistance(ScaleDistance),
    AddAction(AddAction),
    RemoveAction(RemoveAction),
    SwapAction(SwapAction),
}

impl Wrapper {
    /// The offset/structural operators the driver applies as a batch, in a
    /// fixed order; operators with probability 0.0 are left out. The
    /// wholesale replacement operator is handled separately by the driver.
    pub fn batch_from_config(config: &EvolveConfig) -> Vec<Wrapper> {
        let mut batch = Vec::new();
        if config.muta_angle_offset > 0.0 {
            batch.push(RandomAngleOffset.into());
        }
        if config.muta_orthogonal_angle > 0.0 {
            batch.push(OrthogonalAngleOffset.into());
        }
        if config.muta_scale_distance > 0.0 {
            batch.push(ScaleDistance.into());
        }
        if config.muta_add_action > 0.0 {
            batch.push(AddAction.into());
        }
        if config.muta_remove_action > 0.0 {
            batch.push(RemoveAction.into());
        }
        if config.muta_swap_action > 0.0 {
            batch.push(SwapAction.into());
        }
        batch
    }
}

impl Mutate for Wrapper {
    fn call<R: Rng>(&mut self, genome: &mut Genome, config: &EvolveConfig, rng: &mut R) -> bool {
        match self {
            Wrapper::ReplaceGenome(mutate) => mutate.call(genome, config, rng),
            Wrapper::RandomAngleOffset(mutate) => mutate.call(genome, config, rng),
            Wrapper::OrthogonalAngleOffset(mutate) => mutate.call(genome, config, rng),
            Wrapper::ScaleDistance(mutate) => mutate.call(genome, config, rng),
            Wrapper::AddAction(mutate) => mutate.call(genome, config, rng),
            Wrapper::RemoveAction(mutate) => mutate.call(genome, config, rng),
            Wrapper::SwapAction(mutate) => mutate.call(genome, config, rng),
        }
    }

    fn report(&self) -> String {
        match self {
            Wrapper::ReplaceGenome(mutate) => mutate.report(),
            Wrapper::RandomAngleOffset(mutate) => mutate.report(),
            Wrapper::OrthogonalAngleOffset(mutate) => mutate.report(),
            Wrapper::ScaleDistance(mutate) => mutate.report(),
            Wrapper::AddAction(mutate) => mutate.report(),
            Wrapper::RemoveAction(mutate) => mutate.report(),
            Wrapper::SwapAction(mutate) => mutate.report(),
        }
    }
}

impl From<ReplaceGenome> for Wrapper {
    fn from(mutate: ReplaceGenome) -> Self {
        Wrapper::ReplaceGenome(mutate)
    }
}
impl From<RandomAngleOffset> for Wrapper {
    fn from(mutate: RandomAngleOffset) -> Self {
        Wrapper::RandomAngleOffset(mutate)
    }
}
impl From<OrthogonalAngleOffset> for Wrapper {
    fn from(mutate: OrthogonalAngleOffset) -> Self {
        Wrapper::OrthogonalAngleOffset(mutate)
    }
}
impl From<ScaleDistance> for Wrapper {
    fn from(mutate: ScaleDistance) -> Self {
        Wrapper::ScaleDistance(mutate)
    }
}
impl From<AddAction> for Wrapper {
    fn from(mutate: AddAction) -> Self {
        Wrapper::AddAction(mutate)
    }
}
impl From<RemoveAction> for Wrapper {
    fn from(mutate: RemoveAction) -> Self {
        Wrapper::RemoveAction(mutate)
    }
}
impl From<SwapAction> for Wrapper {
    fn from(mutate: SwapAction) -> Self {
        Wrapper::SwapAction(mutate)
    }
}
