mod support;
use support::*;

use coverage_evolve::simulator::SimulatorError;

#[test]
fn straight_marks_cells_and_reports_time() {
    let mut simulator = build::simulator();
    let measurement = simulator.evaluate(&[build::straight(120.0)]).unwrap();

    // start cell plus four cells along +x
    assert_eq!(measurement.coverage_cells, 5);
    assert_eq!(measurement.crossings, 0);
    assert_eq!(measurement.obstacle_hits, 0);
    assert_relative_eq!(measurement.traveled_cm, 120.0, epsilon = 1e-3);
    assert_relative_eq!(measurement.path_length_cm, 120.0, epsilon = 1e-3);
    assert_relative_eq!(measurement.final_time_s, 6.0, epsilon = 1e-3);
    assert_eq!(measurement.rotation_time_s, 0.0);
    assert_eq!(measurement.waypoints.len(), 2);
}

#[test]
fn drive_speed_travel_is_not_coverage() {
    let mut simulator = build::simulator();
    let measurement = simulator
        .evaluate(&[Action::CStraight { distance_cm: 120.0 }])
        .unwrap();

    // only the start cell counts as cleaned
    assert_eq!(measurement.coverage_cells, 1);
    assert_relative_eq!(measurement.traveled_cm, 120.0, epsilon = 1e-3);
    assert_eq!(measurement.path_length_cm, 0.0);
    assert_relative_eq!(measurement.final_time_s, 2.4, epsilon = 1e-3);
}

#[test]
fn rotation_costs_rotation_time_only() {
    let mut simulator = build::simulator();
    let measurement = simulator.evaluate(&[build::rotate(180.0)]).unwrap();

    assert_eq!(measurement.coverage_cells, 1);
    assert_eq!(measurement.traveled_cm, 0.0);
    assert_relative_eq!(measurement.rotation_time_s, 2.0, epsilon = 1e-3);
    assert_relative_eq!(measurement.final_time_s, 2.0, epsilon = 1e-3);
    assert_relative_eq!(measurement.waypoints[1].theta_deg, 180.0, epsilon = 1e-3);
}

#[test]
fn backtracking_counts_crossings() {
    let mut simulator = build::simulator();
    let measurement = simulator
        .evaluate(&[
            build::straight(60.0),
            build::rotate(180.0),
            build::straight(60.0),
        ])
        .unwrap();

    assert_eq!(measurement.coverage_cells, 3);
    assert_eq!(measurement.crossings, 2);
    assert_relative_eq!(measurement.rotation_time_s, 2.0, epsilon = 1e-3);
    assert_relative_eq!(measurement.final_time_s, 8.0, epsilon = 1e-3);
}

#[test]
fn obstacle_clamps_motion_and_counts_a_hit() {
    let rows = [
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
        ".......#..",
        "..........",
        "..........",
        "..........",
        "..........",
    ];
    let mut simulator = GridSimulator::from_rows(
        &rows,
        30.0,
        Pose::new(5.0, 5.0, 0.0),
        RobotSpec::default(),
    );
    let measurement = simulator.evaluate(&[build::straight(120.0)]).unwrap();

    assert_eq!(measurement.obstacle_hits, 1);
    assert_eq!(measurement.coverage_cells, 2);
    assert_relative_eq!(measurement.traveled_cm, 45.0, epsilon = 1e-3);
}

#[test]
fn curve_changes_heading_over_the_arc() {
    let mut simulator = build::simulator();
    let arc_cm = 90.0f32.to_radians() * 60.0;
    let measurement = simulator
        .evaluate(&[build::curve(90.0, 60.0)])
        .unwrap();

    assert_relative_eq!(measurement.traveled_cm, arc_cm, epsilon = 1e-3);
    assert_relative_eq!(measurement.final_time_s, arc_cm / 20.0, epsilon = 1e-3);
    assert_relative_eq!(
        measurement.waypoints.last().unwrap().theta_deg,
        90.0,
        epsilon = 1e-3
    );
}

#[test]
fn free_area_respects_walls() {
    let rows = [
        "....#.....",
        "....#.....",
        "....#.....",
        "....#.....",
        "....#.....",
        "....#.....",
        "....#.....",
        "....#.....",
        "....#.....",
        "....#.....",
    ];
    let mut simulator = GridSimulator::from_rows(
        &rows,
        30.0,
        Pose::new(5.0, 5.0, 0.0),
        RobotSpec::default(),
    );
    assert_eq!(simulator.free_area(false), 50);

    let mut empty = build::simulator();
    assert_eq!(empty.free_area(false), 100);
}

#[test]
fn blocked_start_is_an_error() {
    let rows = [
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
        ".....#....",
        "..........",
        "..........",
        "..........",
        "..........",
    ];
    let mut simulator = GridSimulator::from_rows(
        &rows,
        30.0,
        Pose::new(5.0, 5.0, 0.0),
        RobotSpec::default(),
    );
    let result = simulator.evaluate(&[build::straight(60.0)]);
    assert!(matches!(result, Err(SimulatorError::StartBlocked { .. })));
    assert_eq!(simulator.free_area(false), 0);
}

#[test]
fn evaluation_is_repeatable() {
    let mut simulator = build::simulator();
    let actions = [
        build::straight(90.0),
        build::rotate(90.0),
        build::curve(-45.0, 60.0),
        build::straight(60.0),
    ];
    let first = simulator.evaluate(&actions).unwrap();
    let second = simulator.evaluate(&actions).unwrap();

    assert_eq!(first.coverage_cells, second.coverage_cells);
    assert_eq!(first.crossings, second.crossings);
    assert_eq!(first.final_time_s, second.final_time_s);
    assert_eq!(first.traveled_cm, second.traveled_cm);
}

#[test]
fn snapshot_distinguishes_visited_and_occupied() {
    let rows = [
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
        "........#.",
        "..........",
        "..........",
        "..........",
        "..........",
    ];
    let mut simulator = GridSimulator::from_rows(
        &rows,
        30.0,
        Pose::new(5.0, 5.0, 0.0),
        RobotSpec::default(),
    );
    simulator.evaluate(&[build::straight(60.0)]).unwrap();

    let map = simulator.grid_snapshot("map");
    assert_eq!(map[5][5], 1);
    assert_eq!(map[5][6], 1);
    assert_eq!(map[5][8], 2);
    assert_eq!(map[0][0], 0);

    let obstacles = simulator.grid_snapshot("obstacles");
    assert_eq!(obstacles[5][5], 0);
    assert_eq!(obstacles[5][8], 2);
}
