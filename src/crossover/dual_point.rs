use super::{pair_walk, segment_len, Crossover};
use crate::config::EvolveConfig;
use crate::evolve::EvolveState;
use crate::genome::Genome;
use crate::population::Pool;
use rand::Rng;

/// Dual-point crossover: cut a segment of expected length `cross_length *
/// len` out of each parent and swap in a segment of equivalent expected
/// length from the other, with independently chosen cut positions.
#[derive(Clone, Debug, Default)]
pub struct DualPoint;

impl DualPoint {
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
        let lo_father = rng.gen_range(0..=father.len() - seg_father);
        let hi_father = lo_father + seg_father;
        let lo_mother = rng.gen_range(0..=mother.len() - seg_mother);
        let hi_mother = lo_mother + seg_mother;

        let mut first = Vec::with_capacity(father.len() - seg_father + seg_mother);
        first.extend_from_slice(&father.actions[..lo_father]);
        first.extend_from_slice(&mother.actions[lo_mother..hi_mother]);
        first.extend_from_slice(&father.actions[hi_father..]);

        let mut second = Vec::with_capacity(mother.len() - seg_mother + seg_father);
        second.extend_from_slice(&mother.actions[..lo_mother]);
        second.extend_from_slice(&father.actions[lo_father..hi_father]);
        second.extend_from_slice(&mother.actions[hi_mother..]);

        Some((
            Genome::from_actions(state.next_id(), first),
            Genome::from_actions(state.next_id(), second),
        ))
    }
}

impl Crossover for DualPoint {
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
        "crossover-dual-point".to_string()
    }
}
