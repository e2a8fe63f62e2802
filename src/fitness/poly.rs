use super::{Fitness, FitnessContext};
use crate::genome::Genome;

/// Polynomial blend `coverage_ratio^2 * time_err`, emphasizing
/// near-complete coverage over raw speed.
#[derive(Clone, Debug, Default)]
pub struct Poly;

impl Fitness for Poly {
    fn scalarize(&self, genome: &Genome, context: &FitnessContext) -> f32 {
        genome.coverage_ratio * genome.coverage_ratio * context.time_err(genome.final_time_s)
            - context.penalty(genome)
    }

    fn report(&self) -> String {
        "fitness-poly".to_string()
    }
}
