use super::{pair_walk, segment_len, Crossover};
use crate::config::EvolveConfig;
use crate::evolve::EvolveState;
use crate::genome::Genome;
use crate::population::Pool;
use rand::Rng;

/// Dual-point crossover with the lower cut index shared across both
/// parents. Preserves prefix alignment, which tends to help convergence
/// when the start pose dominates the path.
#[derive(Clone, Debug, Default)]
pub struct SameStartDualPoint;

impl SameStartDualPoint {
    fn mate<R: Rng>(
        father: &Genome,
        mother: &Genome,
        state: &mut EvolveState,
        rng: &mut R,
    ) -> Option<(Genome, Genome)> {
        if father.is_empty() || mother.is_empty() {
            return None;
        }
        let seg_father = segment_len(state.cross_length, father.len());
        let seg_mother = segment_len(state.cross_length, mother.len());
        let lo_max = (father.len() - seg_father).min(mother.len() - seg_mother);
        let lo = rng.gen_range(0..=lo_max);

        let mut first = Vec::with_capacity(father.len() - seg_father + seg_mother);
        first.extend_from_slice(&father.actions[..lo]);
        first.extend_from_slice(&mother.actions[lo..lo + seg_mother]);
        first.extend_from_slice(&father.actions[lo + seg_father..]);

        let mut second = Vec::with_capacity(mother.len() - seg_mother + seg_father);
        second.extend_from_slice(&mother.actions[..lo]);
        second.extend_from_slice(&father.actions[lo..lo + seg_father]);
        second.extend_from_slice(&mother.actions[lo + seg_mother..]);

        Some((
            Genome::from_actions(state.next_id(), first),
            Genome::from_actions(state.next_id(), second),
        ))
    }
}

impl Crossover for SameStartDualPoint {
    fn call<R: Rng>(
        &mut self,
        parents: Pool,
        state: &mut EvolveState,
        _config: &EvolveConfig,
        rng: &mut R,
    ) -> Pool {
        pair_walk(parents, state, rng, Self::mate)
    }

    fn report(&self) -> String {
        "crossover-same-start-dual-point".to_string()
    }
}
