use super::Mutate;
use crate::config::EvolveConfig;
use crate::genome::{random_actions, Genome};
use rand::Rng;

/// Wholesale replacement: with probability `muta_replace_gen` the action
/// sequence is regenerated with the initialization distribution.
#[derive(Clone, Debug, Default)]
pub struct ReplaceGenome;

impl Mutate for ReplaceGenome {
    fn call<R: Rng>(&mut self, genome: &mut Genome, config: &EvolveConfig, rng: &mut R) -> bool {
        if rng.gen::<f32>() >= config.muta_replace_gen {
            return false;
        }
        genome.replace_actions(random_actions(config, rng));
        true
    }

    fn report(&self) -> String {
        "mutate-replace-genome".to_string()
    }
}
