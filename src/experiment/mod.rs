//! Concurrent multi-run experiments.
//!
//! An experiment launches R independent annealing runs in parallel, each
//! sweeping every registered cooling schedule with its own RNG. Per-pair
//! trajectories land in one file each; final costs are appended to a shared
//! results log under a mutex. Output errors are local to the run that hit
//! them.

mod config;
mod error;
mod output;
mod runner;

pub use config::ExperimentConfig;
pub use error::{ExperimentError, OutputError};
pub use output::{write_trajectory, ResultsLog};
pub use runner::{ExperimentResult, ExperimentRunner, RunFailure, RunRecord};
