use super::Mutate;
use crate::config::EvolveConfig;
use crate::genome::Genome;
use rand::prelude::*;
use rand_distr::Normal;

/// Snap one random angle-bearing action to the nearest 90 degrees with a
/// small `N(0, angle_dev / 4)` jitter, encouraging axis-aligned coverage
/// runs.
#[derive(Clone, Debug, Default)]
pub struct OrthogonalAngleOffset;

impl Mutate for OrthogonalAngleOffset {
    fn call<R: Rng>(&mut self, genome: &mut Genome, config: &EvolveConfig, rng: &mut R) -> bool {
        if rng.gen::<f32>() >= config.muta_orthogonal_angle {
            return false;
        }
        let candidates: Vec<usize> = genome
            .actions
            .iter()
            .enumerate()
            .filter(|(_, a)| a.angle_deg().is_some())
            .map(|(i, _)| i)
            .collect();
        let Some(&index) = candidates.choose(rng) else {
            return false;
        };
        let jitter_distr = Normal::new(0.0, config.angle_dev / 4.0).unwrap();
        let action = &mut genome.actions[index];
        let angle = action.angle_deg().unwrap_or(0.0);
        let snapped = (angle / 90.0).round() * 90.0;
        action.set_angle_deg(snapped + jitter_distr.sample(rng));
        genome.taint();
        true
    }

    fn report(&self) -> String {
        "mutate-orthogonal-angle-offset".to_string()
    }
}
