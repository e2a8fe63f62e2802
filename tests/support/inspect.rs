use coverage_evolve::action::Action;
use coverage_evolve::genome::Genome;
use coverage_evolve::population::Pool;
use std::collections::HashMap;

#[allow(dead_code)]
pub fn genome(genome: &Genome) -> Vec<Action> {
    genome.actions.clone()
}

#[allow(dead_code)]
pub fn pool(pool: &Pool) -> Vec<Vec<Action>> {
    pool.genomes.iter().map(|g| g.actions.clone()).collect()
}

#[allow(dead_code)]
pub fn pool_ids(pool: &Pool) -> Vec<u64> {
    pool.genomes.iter().map(|g| g.id).collect()
}

/// Multiset of actions across a set of genomes, for crossover preservation
/// checks.
#[allow(dead_code)]
pub fn action_multiset<'a>(genomes: impl Iterator<Item = &'a Genome>) -> HashMap<Action, usize> {
    let mut counts = HashMap::new();
    for genome in genomes {
        for action in &genome.actions {
            *counts.entry(*action).or_insert(0) += 1;
        }
    }
    counts
}
