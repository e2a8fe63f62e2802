pub mod build;
pub mod inspect;

#[allow(unused_imports)]
pub use approx::assert_relative_eq;
#[allow(unused_imports)]
pub use coverage_evolve::action::{Action, Pose};
#[allow(unused_imports)]
pub use coverage_evolve::config::{
    CrossoverStrategy, EvolveConfig, FitnessStrategy, Scenario, SelectionStrategy,
};
#[allow(unused_imports)]
pub use coverage_evolve::genome::Genome;
#[allow(unused_imports)]
pub use coverage_evolve::population::Pool;
#[allow(unused_imports)]
pub use coverage_evolve::simulator::grid::GridSimulator;
#[allow(unused_imports)]
pub use coverage_evolve::simulator::{RobotSpec, Simulator};
#[allow(unused_imports)]
pub use rand::rngs::SmallRng;
#[allow(unused_imports)]
pub use rand::SeedableRng;
