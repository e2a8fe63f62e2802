use coverage_evolve::action::Pose;
use coverage_evolve::config::{EvolveConfig, FitnessStrategy, Scenario, SelectionStrategy};
use coverage_evolve::evolve::Evolve;
use coverage_evolve::simulator::grid::GridSimulator;
use coverage_evolve::simulator::RobotSpec;

fn main() {
    std::process::exit(example_square_room());
}

fn example_square_room() -> i32 {
    let start = Pose::new(10.0, 10.0, 0.0);
    let simulator = GridSimulator::empty(20, 20, 30.0, start, RobotSpec::default());

    let config = EvolveConfig {
        seed: 42,
        max_iterations: 200,
        init_individuals: 100,
        init_actions: 20,
        select_individuals: 20,
        select_keep_best: 5,
        pop_min: 40,
        map_resolution: 30.0,
        start,
        ends: vec![Pose::new(10.0, 18.0, 0.0)],
        scenario: Scenario::TournamentFamily,
        selection_strategy: SelectionStrategy::Tournament,
        fitness_strategy: FitnessStrategy::RotationBias,
        ..EvolveConfig::default()
    };

    let mut evolve = match Evolve::builder()
        .with_config(config)
        .with_simulator(simulator)
        .build()
    {
        Ok(evolve) => evolve,
        Err(error) => {
            eprintln!("{}", error);
            return 1;
        }
    };

    let outcome = match evolve.run() {
        Ok(outcome) => outcome,
        Err(error) => {
            eprintln!("{}", error);
            return 1;
        }
    };

    if let Some(best) = evolve.best_genome() {
        println!(
            "best genome #{}: fitness {:.4}, coverage {:.1}%, time {:.1}s, {} actions",
            best.id,
            best.fitness.unwrap_or(0.0),
            best.coverage_ratio * 100.0,
            best.final_time_s,
            best.len()
        );
    } else {
        println!("no best genome");
    }
    outcome.exit_code()
}
