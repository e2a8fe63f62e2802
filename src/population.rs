//! The pool is an unordered container for [Genomes](Genome). Order only
//! matters at the points where the driver sorts ascending by fitness.
use crate::genome::Genome;
use rand::prelude::*;

/// min/avg/max triple for one logged pool attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MinAvgMax {
    pub min: f32,
    pub avg: f32,
    pub max: f32,
}

fn min_avg_max(values: impl Iterator<Item = f32>) -> MinAvgMax {
    let values: Vec<f32> = values.collect();
    if values.is_empty() {
        return MinAvgMax::default();
    }
    MinAvgMax {
        min: values.iter().copied().fold(f32::INFINITY, f32::min),
        avg: stats::mean(values.iter().copied()) as f32,
        max: values.iter().copied().fold(f32::NEG_INFINITY, f32::max),
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DiversityStats {
    pub mean: f32,
    pub std: f32,
    pub min: f32,
    pub max: f32,
}

#[derive(Clone, Debug, Default)]
pub struct Pool {
    pub genomes: Vec<Genome>,
}

impl Pool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_genomes(genomes: Vec<Genome>) -> Self {
        Self { genomes }
    }

    pub fn size(&self) -> usize {
        self.genomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genomes.is_empty()
    }

    pub fn push(&mut self, genome: Genome) {
        self.genomes.push(genome);
    }

    pub fn append(&mut self, other: &mut Pool) {
        self.genomes.append(&mut other.genomes);
    }

    pub fn clear(&mut self) {
        self.genomes.clear();
    }

    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.genomes.shuffle(rng);
    }

    /// Worst first, best last. Ties by action count then id, see
    /// [Genome::ascending_cmp].
    pub fn sort_ascending(&mut self) {
        self.genomes.sort_by(Genome::ascending_cmp);
    }

    pub fn best(&self) -> Option<&Genome> {
        self.genomes.iter().max_by(|a, b| a.ascending_cmp(b))
    }

    pub fn fitness_stats(&self) -> MinAvgMax {
        min_avg_max(self.measured().filter_map(|g| g.fitness))
    }

    pub fn time_stats(&self) -> MinAvgMax {
        min_avg_max(self.measured().map(|g| g.final_time_s))
    }

    pub fn coverage_stats(&self) -> MinAvgMax {
        min_avg_max(self.measured().map(|g| g.coverage_ratio))
    }

    pub fn rotation_stats(&self) -> MinAvgMax {
        min_avg_max(self.measured().map(|g| g.rotation_time_s))
    }

    pub fn obstacle_stats(&self) -> MinAvgMax {
        min_avg_max(self.measured().map(|g| g.obstacle_hits as f32))
    }

    pub fn path_len_stats(&self) -> MinAvgMax {
        min_avg_max(self.measured().map(|g| g.path_length_cm))
    }

    pub fn action_len_stats(&self) -> MinAvgMax {
        min_avg_max(self.genomes.iter().map(|g| g.len() as f32))
    }

    /// Percentage of all actions in the pool that are zero-actions.
    pub fn zero_action_percent(&self, map_resolution_cm: f32) -> f32 {
        let total: usize = self.genomes.iter().map(Genome::len).sum();
        if total == 0 {
            return 0.0;
        }
        let zeros: usize = self
            .genomes
            .iter()
            .map(|g| g.zero_action_count(map_resolution_cm))
            .sum();
        100.0 * zeros as f32 / total as f32
    }

    pub fn dead_count(&self, min_genome_len: usize) -> usize {
        self.genomes
            .iter()
            .filter(|g| g.dead || g.len() < min_genome_len)
            .count()
    }

    /// Delete zero-actions from every genome, returning the number removed.
    pub fn prune_zero_actions(&mut self, map_resolution_cm: f32) -> usize {
        self.genomes
            .iter_mut()
            .map(|g| g.prune_zero_actions(map_resolution_cm))
            .sum()
    }

    /// Recompute every genome's diversity factor (distance of its sequence
    /// signature from the pool mean signature) and the pool-level spread.
    pub fn update_diversity(&mut self) -> DiversityStats {
        if self.genomes.is_empty() {
            return DiversityStats::default();
        }
        let signatures: Vec<[f32; 3]> = self.genomes.iter().map(signature).collect();
        let mut mean = [0.0f32; 3];
        for signature in &signatures {
            for (m, s) in mean.iter_mut().zip(signature) {
                *m += s;
            }
        }
        for m in mean.iter_mut() {
            *m /= signatures.len() as f32;
        }
        for (genome, signature) in self.genomes.iter_mut().zip(&signatures) {
            genome.diversity_factor = mean
                .iter()
                .zip(signature)
                .map(|(m, s)| (s - m) * (s - m))
                .sum::<f32>()
                .sqrt();
        }
        let factors = || self.genomes.iter().map(|g| g.diversity_factor);
        DiversityStats {
            mean: stats::mean(factors()) as f32,
            std: stats::stddev(factors()) as f32,
            min: factors().fold(f32::INFINITY, f32::min),
            max: factors().fold(f32::NEG_INFINITY, f32::max),
        }
    }

    fn measured(&self) -> impl Iterator<Item = &Genome> + '_ {
        self.genomes.iter().filter(|g| !g.dead && !g.is_stale())
    }
}

/// Coarse per-genome sequence signature: length, mean absolute angle, mean
/// travel distance.
fn signature(genome: &Genome) -> [f32; 3] {
    let len = genome.len() as f32;
    if genome.is_empty() {
        return [0.0, 0.0, 0.0];
    }
    let angle: f32 = genome
        .actions
        .iter()
        .filter_map(|a| a.angle_deg())
        .map(f32::abs)
        .sum();
    let travel: f32 = genome.actions.iter().map(|a| a.travel_cm()).sum();
    [len, angle / len, travel / len]
}
