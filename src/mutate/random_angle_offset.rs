use super::Mutate;
use crate::config::EvolveConfig;
use crate::genome::Genome;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Add `N(0, angle_dev)` to each angle-bearing action with probability
/// `muta_angle_offset`. Action kinds and distances stay untouched.
#[derive(Clone, Debug, Default)]
pub struct RandomAngleOffset;

impl Mutate for RandomAngleOffset {
    fn call<R: Rng>(&mut self, genome: &mut Genome, config: &EvolveConfig, rng: &mut R) -> bool {
        let offset_distr = Normal::new(0.0, config.angle_dev).unwrap();
        let mut mutated = false;
        for action in genome.actions.iter_mut() {
            let Some(angle) = action.angle_deg() else {
                continue;
            };
            if rng.gen::<f32>() < config.muta_angle_offset {
                action.set_angle_deg(angle + offset_distr.sample(rng));
                mutated = true;
            }
        }
        if mutated {
            genome.taint();
        }
        mutated
    }

    fn report(&self) -> String {
        "mutate-random-angle-offset".to_string()
    }
}
