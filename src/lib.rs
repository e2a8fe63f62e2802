//! An evolutionary search for coverage paths on a 2D occupancy grid.
//!
//! A candidate path is a [Genome](crate::genome::Genome): a sequence of
//! discrete motion [Actions](crate::action::Action) (straight segments,
//! curves, in-place rotations) executed from a fixed start pose. The engine
//! keeps a [Pool](crate::population::Pool) of candidates, measures each one
//! on the grid through a [Simulator](crate::simulator::Simulator) adapter and
//! improves the pool over generations through selection, crossover and
//! mutation.
//!
//! There are four strategy families, each resolved once at configuration
//! time into a wrapper enum:
//! * [fitness](crate::fitness) - scalarize simulator measurements
//! * [select](crate::select) - sample parents from the pool
//! * [crossover](crate::crossover) - combine two parents into two offspring
//! * [mutate](crate::mutate) - perturb or regenerate genomes
//!
//! ## Quick Usage
//!
//! ```rust
//! use coverage_evolve::action::Pose;
//! use coverage_evolve::config::EvolveConfig;
//! use coverage_evolve::evolve::Evolve;
//! use coverage_evolve::simulator::grid::GridSimulator;
//! use coverage_evolve::simulator::RobotSpec;
//!
//! // the search space: an empty 10x10 grid, robot starting in the center
//! let start = Pose::new(5.0, 5.0, 0.0);
//! let simulator = GridSimulator::empty(10, 10, 30.0, start, RobotSpec::default());
//!
//! // the search configuration
//! let config = EvolveConfig {
//!     seed: 1,
//!     max_iterations: 5,
//!     init_individuals: 8,
//!     init_actions: 4,
//!     select_individuals: 4,
//!     select_keep_best: 2,
//!     pop_min: 4,
//!     map_resolution: 30.0,
//!     start,
//!     ends: vec![Pose::new(5.0, 9.0, 0.0)],
//!     ..EvolveConfig::default()
//! };
//!
//! // the search itself
//! let mut evolve = Evolve::builder()
//!     .with_config(config)
//!     .with_simulator(simulator)
//!     .build()
//!     .unwrap();
//! let outcome = evolve.run().unwrap();
//!
//! // it's all about the best genome after all
//! assert_eq!(outcome.exit_code(), 0);
//! assert!(evolve.best_genome().is_some());
//! ```

pub mod action;
pub mod config;
pub mod crossover;
pub mod errors;
pub mod evolve;
pub mod fitness;
pub mod genome;
pub mod mutate;
pub mod population;
pub mod select;
pub mod simulator;
