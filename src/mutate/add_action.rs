use super::Mutate;
use crate::config::EvolveConfig;
use crate::genome::{random_action, Genome};
use rand::Rng;

/// Insert one freshly sampled action at a uniform position.
#[derive(Clone, Debug, Default)]
pub struct AddAction;

impl Mutate for AddAction {
    fn call<R: Rng>(&mut self, genome: &mut Genome, config: &EvolveConfig, rng: &mut R) -> bool {
        if rng.gen::<f32>() >= config.muta_add_action {
            return false;
        }
        let index = rng.gen_range(0..=genome.len());
        let action = random_action(config, rng);
        genome.actions.insert(index, action);
        genome.taint();
        true
    }

    fn report(&self) -> String {
        "mutate-add-action".to_string()
    }
}
