mod support;
use support::*;

use coverage_evolve::action::normalize_angle_deg;

#[test]
fn equality_and_hash_ignore_id_and_measurements() {
    let mut first = build::scored_genome(1, 0.5, vec![build::straight(60.0), build::rotate(90.0)]);
    let second = build::genome(2, vec![build::straight(60.0), build::rotate(90.0)]);
    first.coverage_ratio = 0.9;

    assert_eq!(first, second);
    assert_eq!(first.actions_hash(), second.actions_hash());
}

#[test]
fn hash_differs_on_action_content() {
    let first = build::genome(1, vec![build::straight(60.0)]);
    let second = build::genome(1, vec![build::straight(61.0)]);

    assert_ne!(first, second);
    assert_ne!(first.actions_hash(), second.actions_hash());
}

#[test]
fn push_and_remove_taint_fitness() {
    let mut genome = build::scored_genome(1, 0.5, vec![build::straight(60.0)]);
    genome.push_action(build::rotate(45.0));
    assert!(genome.is_stale());

    genome.fitness = Some(0.5);
    let removed = genome.remove_action(0);
    assert_eq!(removed, build::straight(60.0));
    assert!(genome.is_stale());
    assert_eq!(genome.len(), 1);
}

#[test]
fn splice_replaces_interior_range() {
    let mut genome = build::genome(
        1,
        vec![
            build::straight(30.0),
            build::straight(60.0),
            build::straight(90.0),
        ],
    );
    let removed = genome.splice_actions(1, 2, &[build::rotate(90.0), build::rotate(-90.0)]);

    assert_eq!(removed, vec![build::straight(60.0)]);
    assert_eq!(
        inspect::genome(&genome),
        vec![
            build::straight(30.0),
            build::rotate(90.0),
            build::rotate(-90.0),
            build::straight(90.0),
        ]
    );
}

#[test]
fn zero_action_pruning_is_idempotent() {
    // at 30 cm per cell a 10 cm straight rounds to zero cells
    let mut genome = build::genome(
        1,
        vec![
            build::straight(10.0),
            build::straight(60.0),
            build::curve(90.0, 2.0),
            build::rotate(45.0),
        ],
    );
    let removed = genome.prune_zero_actions(30.0);
    assert_eq!(removed, 2);
    assert_eq!(genome.len(), 2);

    let removed_again = genome.prune_zero_actions(30.0);
    assert_eq!(removed_again, 0);
    assert_eq!(genome.len(), 2);
}

#[test]
fn rotate_is_never_a_zero_action() {
    assert!(!build::rotate(0.5).is_zero(30.0));
    assert!(build::straight(0.0).is_zero(30.0));
}

#[test]
fn ascending_cmp_breaks_ties_by_length_then_id() {
    let short = build::scored_genome(7, 0.5, vec![build::straight(60.0)]);
    let long = build::scored_genome(2, 0.5, vec![build::straight(60.0), build::rotate(10.0)]);
    // shorter ranks higher
    assert!(short.ascending_cmp(&long).is_gt());

    let low_id = build::scored_genome(1, 0.5, vec![build::straight(60.0)]);
    let high_id = build::scored_genome(9, 0.5, vec![build::straight(60.0)]);
    // lower id ranks higher
    assert!(low_id.ascending_cmp(&high_id).is_gt());

    let better = build::scored_genome(1, 0.9, vec![build::straight(60.0), build::rotate(10.0)]);
    let worse = build::scored_genome(2, 0.1, vec![build::straight(60.0)]);
    assert!(better.ascending_cmp(&worse).is_gt());
}

#[test]
fn unevaluated_ranks_worst() {
    let stale = build::genome(1, vec![build::straight(60.0)]);
    let scored = build::scored_genome(2, -100.0, vec![build::straight(60.0)]);
    assert!(stale.ascending_cmp(&scored).is_lt());
}

#[test]
fn angle_normalization_wraps_into_half_open_range() {
    assert_eq!(normalize_angle_deg(180.0), 180.0);
    assert_eq!(normalize_angle_deg(-180.0), 180.0);
    assert_eq!(normalize_angle_deg(270.0), -90.0);
    assert_eq!(normalize_angle_deg(-270.0), 90.0);
    assert_eq!(normalize_angle_deg(720.0), 0.0);
}

#[test]
fn random_genomes_respect_length_floor() {
    let config = build::config();
    let mut rng = SmallRng::seed_from_u64(3);
    for id in 0..50 {
        let genome = Genome::random(id, &config, &mut rng);
        assert!(genome.len() >= 1);
        for action in &genome.actions {
            if let Some(angle) = action.angle_deg() {
                assert!(angle > -180.0 && angle <= 180.0);
            }
            assert!(action.travel_cm() >= 0.0);
        }
    }
}
