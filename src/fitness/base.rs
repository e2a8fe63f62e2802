use super::{Fitness, FitnessContext};
use crate::genome::Genome;

/// Linear blend of coverage and time: `w * coverage_ratio + (1 - w) *
/// time_err`, minus the crossing and zero-action penalties.
#[derive(Clone, Debug, Default)]
pub struct Base;

impl Fitness for Base {
    fn scalarize(&self, genome: &Genome, context: &FitnessContext) -> f32 {
        let weight = context.fitness_weight;
        weight * genome.coverage_ratio + (1.0 - weight) * context.time_err(genome.final_time_s)
            - context.penalty(genome)
    }

    fn report(&self) -> String {
        "fitness-base".to_string()
    }
}
