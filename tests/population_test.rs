mod support;
use support::*;

#[test]
fn fitness_stats_cover_min_avg_max() {
    let pool = build::pool(vec![
        build::scored_genome(1, 0.2, vec![build::straight(30.0)]),
        build::scored_genome(2, 0.4, vec![build::straight(30.0)]),
        build::scored_genome(3, 0.9, vec![build::straight(30.0)]),
    ]);
    let stats = pool.fitness_stats();

    assert_relative_eq!(stats.min, 0.2);
    assert_relative_eq!(stats.max, 0.9);
    assert_relative_eq!(stats.avg, 0.5, epsilon = 1e-6);
}

#[test]
fn stats_ignore_stale_and_dead_genomes() {
    let mut dead = build::scored_genome(1, 0.5, vec![build::straight(30.0)]);
    dead.mark_dead();
    let stale = build::genome(2, vec![build::straight(30.0)]);
    let scored = build::scored_genome(3, 0.4, vec![build::straight(30.0)]);
    let pool = build::pool(vec![dead, stale, scored]);

    let stats = pool.fitness_stats();
    assert_relative_eq!(stats.min, 0.4);
    assert_relative_eq!(stats.max, 0.4);
}

#[test]
fn empty_pool_stats_are_zero() {
    let pool = Pool::new();
    let stats = pool.fitness_stats();
    assert_eq!(stats.min, 0.0);
    assert_eq!(stats.avg, 0.0);
    assert_eq!(stats.max, 0.0);
}

#[test]
fn sort_ascending_puts_the_best_last() {
    let mut pool = build::pool(vec![
        build::scored_genome(1, 0.9, vec![build::straight(30.0)]),
        build::scored_genome(2, 0.1, vec![build::straight(30.0)]),
        build::scored_genome(3, 0.5, vec![build::straight(30.0)]),
    ]);
    pool.sort_ascending();

    assert_eq!(inspect::pool_ids(&pool), vec![2, 3, 1]);
    assert_eq!(pool.best().unwrap().id, 1);
}

#[test]
fn sort_breaks_fitness_ties_by_action_count() {
    let mut pool = build::pool(vec![
        build::scored_genome(1, 0.5, vec![build::straight(30.0), build::rotate(5.0)]),
        build::scored_genome(2, 0.5, vec![build::straight(30.0)]),
    ]);
    pool.sort_ascending();

    // the shorter genome ranks better and therefore sorts last
    assert_eq!(inspect::pool_ids(&pool), vec![1, 2]);
    assert_eq!(pool.best().unwrap().id, 2);
}

#[test]
fn zero_action_percent_counts_across_the_pool() {
    let pool = build::pool(vec![
        build::genome(1, vec![build::straight(5.0), build::straight(60.0)]),
        build::genome(2, vec![build::straight(60.0), build::straight(90.0)]),
    ]);
    assert_relative_eq!(pool.zero_action_percent(30.0), 25.0);

    let empty = Pool::new();
    assert_eq!(empty.zero_action_percent(30.0), 0.0);
}

#[test]
fn dead_count_includes_short_genomes() {
    let mut dead = build::scored_genome(1, 0.5, vec![build::straight(30.0); 5]);
    dead.mark_dead();
    let short = build::genome(2, vec![build::straight(30.0)]);
    let healthy = build::genome(3, vec![build::straight(30.0); 5]);
    let pool = build::pool(vec![dead, short, healthy]);

    assert_eq!(pool.dead_count(3), 2);
}

#[test]
fn identical_genomes_have_zero_diversity() {
    let mut pool = build::pool(vec![
        build::genome(1, vec![build::straight(60.0), build::rotate(30.0)]),
        build::genome(2, vec![build::straight(60.0), build::rotate(30.0)]),
        build::genome(3, vec![build::straight(60.0), build::rotate(30.0)]),
    ]);
    let stats = pool.update_diversity();

    assert_eq!(stats.mean, 0.0);
    assert_eq!(stats.std, 0.0);
    for genome in &pool.genomes {
        assert_eq!(genome.diversity_factor, 0.0);
    }
}

#[test]
fn outliers_get_a_higher_diversity_factor() {
    let mut pool = build::pool(vec![
        build::genome(1, vec![build::straight(60.0), build::rotate(10.0)]),
        build::genome(2, vec![build::straight(60.0), build::rotate(10.0)]),
        build::genome(3, vec![build::straight(300.0); 8]),
    ]);
    let stats = pool.update_diversity();

    assert!(stats.max > 0.0);
    assert!(pool.genomes[2].diversity_factor > pool.genomes[0].diversity_factor);
    assert!(stats.min <= stats.mean && stats.mean <= stats.max);
}

#[test]
fn prune_zero_actions_reports_the_total_removed() {
    let mut pool = build::pool(vec![
        build::genome(1, vec![build::straight(5.0), build::straight(60.0)]),
        build::genome(2, vec![build::straight(2.0), build::straight(3.0)]),
    ]);
    assert_eq!(pool.prune_zero_actions(30.0), 3);
    assert_eq!(pool.prune_zero_actions(30.0), 0);
}
