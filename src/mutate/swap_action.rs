use super::Mutate;
use crate::config::EvolveConfig;
use crate::genome::Genome;
use rand::Rng;

/// Swap two distinct actions at uniform positions.
#[derive(Clone, Debug, Default)]
pub struct SwapAction;

impl Mutate for SwapAction {
    fn call<R: Rng>(&mut self, genome: &mut Genome, config: &EvolveConfig, rng: &mut R) -> bool {
        if genome.len() < 2 || rng.gen::<f32>() >= config.muta_swap_action {
            return false;
        }
        let first = rng.gen_range(0..genome.len());
        let mut second = rng.gen_range(0..genome.len() - 1);
        if second >= first {
            second += 1;
        }
        genome.actions.swap(first, second);
        genome.taint();
        true
    }

    fn report(&self) -> String {
        "mutate-swap-action".to_string()
    }
}
