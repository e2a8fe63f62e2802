//! Engine error kinds and their propagation policy: configuration errors
//! are fatal at startup, simulator failures are recovered per genome,
//! snapshot/log failures are degraded to a single warning.
use crate::simulator::SimulatorError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvolveError {
    #[error("invalid configuration: {0}")]
    ConfigInvalid(String),

    #[error(transparent)]
    Simulator(#[from] SimulatorError),

    #[error("log or snapshot io failed: {0}")]
    Io(#[from] std::io::Error),
}
