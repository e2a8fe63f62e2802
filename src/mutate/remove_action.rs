use super::Mutate;
use crate::config::EvolveConfig;
use crate::genome::Genome;
use rand::Rng;

/// Delete one action at a uniform position, never emptying the genome.
#[derive(Clone, Debug, Default)]
pub struct RemoveAction;

impl Mutate for RemoveAction {
    fn call<R: Rng>(&mut self, genome: &mut Genome, config: &EvolveConfig, rng: &mut R) -> bool {
        if genome.len() < 2 || rng.gen::<f32>() >= config.muta_remove_action {
            return false;
        }
        let index = rng.gen_range(0..genome.len());
        genome.remove_action(index);
        true
    }

    fn report(&self) -> String {
        "mutate-remove-action".to_string()
    }
}
