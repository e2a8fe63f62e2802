mod support;
use support::*;

use coverage_evolve::fitness::{
    Base, Fitness, FitnessContext, FitnessWrapper, Poly, RotationBias, SemiContinuous,
};

fn context() -> FitnessContext {
    FitnessContext {
        free_area: 100,
        map_resolution: 30.0,
        fitness_weight: 0.5,
        robot: RobotSpec::default(),
    }
}

/// A small free area so the optimal time is short enough for the time
/// component to discriminate.
fn tight_context() -> FitnessContext {
    FitnessContext {
        free_area: 4,
        ..context()
    }
}

fn measured_genome(coverage_ratio: f32, final_time_s: f32, rotation_time_s: f32) -> Genome {
    let mut genome = build::genome(1, vec![build::straight(120.0)]);
    genome.coverage_ratio = coverage_ratio;
    genome.final_time_s = final_time_s;
    genome.rotation_time_s = rotation_time_s;
    genome
}

fn all_strategies() -> Vec<FitnessWrapper> {
    vec![
        Base.into(),
        RotationBias.into(),
        SemiContinuous.into(),
        Poly.into(),
    ]
}

#[test]
fn more_coverage_never_scores_lower() {
    let context = context();
    for strategy in all_strategies() {
        for (lower, higher) in [(0.1, 0.2), (0.5, 0.9), (0.89, 0.95), (0.95, 1.0)] {
            let low = measured_genome(lower, 50.0, 5.0);
            let high = measured_genome(higher, 50.0, 5.0);
            assert!(
                strategy.scalarize(&high, &context) >= strategy.scalarize(&low, &context),
                "{} decreased with coverage {} -> {}",
                strategy.report(),
                lower,
                higher
            );
        }
    }
}

#[test]
fn longer_runs_never_score_higher() {
    // optimal time here is 180s, so these times sit on the discriminating
    // side of the cap
    let context = tight_context();
    for strategy in all_strategies() {
        let fast = measured_genome(0.95, 200.0, 5.0);
        let slow = measured_genome(0.95, 800.0, 5.0);
        assert!(
            strategy.scalarize(&fast, &context) >= strategy.scalarize(&slow, &context),
            "{} rewarded a slower run",
            strategy.report()
        );
    }
}

#[test]
fn crossings_are_penalized() {
    let context = context();
    for strategy in all_strategies() {
        let clean = measured_genome(0.5, 50.0, 5.0);
        let mut crossed = measured_genome(0.5, 50.0, 5.0);
        crossed.crossings = 10;
        assert!(
            strategy.scalarize(&clean, &context) > strategy.scalarize(&crossed, &context),
            "{} ignored crossings",
            strategy.report()
        );
    }
}

#[test]
fn zero_actions_are_penalized() {
    let context = context();
    let with_zeros = {
        let mut genome = measured_genome(0.5, 50.0, 5.0);
        genome.actions.push(build::straight(1.0));
        genome.actions.push(build::straight(2.0));
        genome
    };
    let without = measured_genome(0.5, 50.0, 5.0);
    assert!(Base.scalarize(&without, &context) > Base.scalarize(&with_zeros, &context));
}

#[test]
fn rotation_bias_penalizes_rotation_share() {
    let context = context();
    let calm = measured_genome(0.5, 50.0, 5.0);
    let spinny = measured_genome(0.5, 50.0, 40.0);

    assert!(
        RotationBias.scalarize(&calm, &context) > RotationBias.scalarize(&spinny, &context)
    );
    // the base strategy is blind to the rotation share
    assert_relative_eq!(
        Base.scalarize(&calm, &context),
        Base.scalarize(&spinny, &context)
    );
}

#[test]
fn semi_continuous_is_coverage_dominated_below_the_knee() {
    let context = tight_context();
    // below the knee the time difference must not matter
    let slow = measured_genome(0.5, 800.0, 0.0);
    let fast = measured_genome(0.5, 200.0, 0.0);
    assert_relative_eq!(
        SemiContinuous.scalarize(&slow, &context),
        SemiContinuous.scalarize(&fast, &context)
    );

    // above the knee it must
    let slow = measured_genome(0.95, 800.0, 0.0);
    let fast = measured_genome(0.95, 200.0, 0.0);
    assert!(
        SemiContinuous.scalarize(&fast, &context) > SemiContinuous.scalarize(&slow, &context)
    );
}

#[test]
fn estimate_writes_measurements_onto_the_genome() {
    let mut simulator = build::simulator();
    let context = context();
    let mut genome = build::genome(1, vec![build::straight(120.0)]);

    let fitness = Base.estimate_genome(&mut genome, &mut simulator, &context);

    assert_eq!(genome.fitness, Some(fitness));
    assert!(!genome.dead);
    assert_eq!(genome.free_space_cells, 100);
    assert_relative_eq!(genome.coverage_ratio, 0.05);
    assert_relative_eq!(genome.final_time_s, 6.0, epsilon = 1e-3);
    assert_eq!(genome.waypoints.len(), 2);
}

#[test]
fn simulator_failure_marks_the_genome_dead() {
    let rows = [
        "#.........",
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
    ];
    let mut simulator = GridSimulator::from_rows(
        &rows,
        30.0,
        Pose::new(0.0, 0.0, 0.0),
        RobotSpec::default(),
    );
    let context = context();
    let mut genome = build::genome(1, vec![build::straight(120.0)]);

    let fitness = Base.estimate_genome(&mut genome, &mut simulator, &context);

    assert!(genome.dead);
    assert_eq!(fitness, f32::MIN);
    assert_eq!(genome.fitness, Some(f32::MIN));
}

#[test]
fn pool_call_only_touches_stale_genomes() {
    let mut simulator = build::simulator();
    let context = context();
    let mut pool = build::pool(vec![
        build::scored_genome(1, 123.0, vec![build::straight(60.0)]),
        build::genome(2, vec![build::straight(60.0)]),
    ]);

    Base.call_for_pool(&mut pool, &mut simulator, &context);

    // the pre-scored genome keeps its fitness, the stale one is measured
    assert_eq!(pool.genomes[0].fitness, Some(123.0));
    assert!(pool.genomes[1].fitness.is_some());
    assert_ne!(pool.genomes[1].fitness, Some(123.0));
}
