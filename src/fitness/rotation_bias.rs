use super::{Base, Fitness, FitnessContext};
use crate::genome::Genome;

const ROTATION_WEIGHT: f32 = 0.1;

/// The base blend with an additional penalty proportional to the fraction
/// of the run spent rotating, steering the search away from degenerate
/// rotate-heavy sequences.
#[derive(Clone, Debug, Default)]
pub struct RotationBias;

impl Fitness for RotationBias {
    fn scalarize(&self, genome: &Genome, context: &FitnessContext) -> f32 {
        let rotation_share = if genome.final_time_s > 0.0 {
            genome.rotation_time_s / genome.final_time_s
        } else {
            0.0
        };
        Base.scalarize(genome, context) - ROTATION_WEIGHT * rotation_share
    }

    fn report(&self) -> String {
        "fitness-rotation-bias".to_string()
    }
}
