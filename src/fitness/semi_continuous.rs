use super::{Fitness, FitnessContext};
use crate::genome::Genome;

/// Coverage fraction above which time becomes the discriminator.
const COVERAGE_KNEE: f32 = 0.9;

/// Piecewise fitness with two regimes: below the coverage knee the score is
/// dominated by coverage alone, above it the time error fades in
/// proportionally to the coverage overshoot, so the junction is smooth.
#[derive(Clone, Debug, Default)]
pub struct SemiContinuous;

impl Fitness for SemiContinuous {
    fn scalarize(&self, genome: &Genome, context: &FitnessContext) -> f32 {
        let weight = context.fitness_weight;
        let coverage = genome.coverage_ratio;
        let mut fitness = weight * coverage;
        if coverage >= COVERAGE_KNEE {
            let ramp = (coverage - COVERAGE_KNEE) / (1.0 - COVERAGE_KNEE);
            fitness += (1.0 - weight) * context.time_err(genome.final_time_s) * ramp;
        }
        fitness - context.penalty(genome)
    }

    fn report(&self) -> String {
        "fitness-semi-continuous".to_string()
    }
}
