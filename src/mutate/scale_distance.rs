use super::Mutate;
use crate::config::EvolveConfig;
use crate::genome::Genome;
use rand::prelude::*;
use rand_distr::Normal;

/// Multiply one random action's distance by `max(0, N(1, 0.2))`.
#[derive(Clone, Debug, Default)]
pub struct ScaleDistance;

impl Mutate for ScaleDistance {
    fn call<R: Rng>(&mut self, genome: &mut Genome, config: &EvolveConfig, rng: &mut R) -> bool {
        if rng.gen::<f32>() >= config.muta_scale_distance {
            return false;
        }
        let candidates: Vec<usize> = genome
            .actions
            .iter()
            .enumerate()
            .filter(|(_, a)| !matches!(a, crate::action::Action::Rotate { .. }))
            .map(|(i, _)| i)
            .collect();
        let Some(&index) = candidates.choose(rng) else {
            return false;
        };
        let factor_distr = Normal::new(1.0f32, 0.2).unwrap();
        let factor = factor_distr.sample(rng).max(0.0);
        genome.actions[index].scale_distance(factor);
        genome.taint();
        true
    }

    fn report(&self) -> String {
        "mutate-scale-distance".to_string()
    }
}
