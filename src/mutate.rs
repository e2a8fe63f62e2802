//! Perturb or regenerate single genomes.
//!
//! Each operator takes one genome and reports whether it changed anything;
//! the driver invokes them independently with the configured probabilities,
//! so a genome may be touched by several operators in one generation. A
//! mutated genome is stale and gets re-evaluated before selection.
mod add_action;
mod orthogonal_angle_offset;
mod random_angle_offset;
mod remove_action;
mod replace_genome;
mod scale_distance;
mod swap_action;
pub mod wrapper;

pub use self::add_action::AddAction;
pub use self::orthogonal_angle_offset::OrthogonalAngleOffset;
pub use self::random_angle_offset::RandomAngleOffset;
pub use self::remove_action::RemoveAction;
pub use self::replace_genome::ReplaceGenome;
pub use self::scale_distance::ScaleDistance;
pub use self::swap_action::SwapAction;
pub use self::wrapper::Wrapper as MutateWrapper;

use crate::config::EvolveConfig;
use crate::genome::Genome;
use rand::Rng;

pub trait Mutate {
    /// Returns true if the genome was changed.
    fn call<R: Rng>(&mut self, genome: &mut Genome, config: &EvolveConfig, rng: &mut R) -> bool;

    fn report(&self) -> String;
}
