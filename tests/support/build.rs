use coverage_evolve::action::{Action, Pose};
use coverage_evolve::config::EvolveConfig;
use coverage_evolve::genome::Genome;
use coverage_evolve::population::Pool;
use coverage_evolve::simulator::grid::GridSimulator;
use coverage_evolve::simulator::RobotSpec;

/// A small configuration matching the 10x10 test grid.
#[allow(dead_code)]
pub fn config() -> EvolveConfig {
    EvolveConfig {
        seed: 1,
        max_iterations: 5,
        init_individuals: 4,
        init_actions: 2,
        select_individuals: 4,
        select_keep_best: 2,
        tournament_size: 2,
        pop_min: 4,
        min_genome_len: 1,
        map_resolution: 30.0,
        start: Pose::new(5.0, 5.0, 0.0),
        ends: vec![Pose::new(5.0, 9.0, 0.0)],
        ..EvolveConfig::default()
    }
}

/// An empty 10x10 grid with the robot starting in the center.
#[allow(dead_code)]
pub fn simulator() -> GridSimulator {
    GridSimulator::empty(
        10,
        10,
        30.0,
        Pose::new(5.0, 5.0, 0.0),
        RobotSpec::default(),
    )
}

#[allow(dead_code)]
pub fn genome(id: u64, actions: Vec<Action>) -> Genome {
    Genome::from_actions(id, actions)
}

/// A genome with a hand-set fitness, for selection and sorting tests.
#[allow(dead_code)]
pub fn scored_genome(id: u64, fitness: f32, actions: Vec<Action>) -> Genome {
    let mut genome = Genome::from_actions(id, actions);
    genome.fitness = Some(fitness);
    genome
}

#[allow(dead_code)]
pub fn pool(genomes: Vec<Genome>) -> Pool {
    Pool::with_genomes(genomes)
}

#[allow(dead_code)]
pub fn straight(distance_cm: f32) -> Action {
    Action::Straight { distance_cm }
}

#[allow(dead_code)]
pub fn rotate(angle_deg: f32) -> Action {
    Action::Rotate { angle_deg }
}

#[allow(dead_code)]
pub fn curve(angle_deg: f32, radius_cm: f32) -> Action {
    Action::Curve {
        angle_deg,
        radius_cm,
    }
}
