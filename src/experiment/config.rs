//! Experiment-harness configuration.

use std::path::{Path, PathBuf};

use crate::sa::SaConfig;

/// Configuration for a multi-run experiment.
///
/// Every run shares the same annealing parameters and output destinations;
/// only the per-run RNG differs.
#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    /// Number of independent concurrent runs.
    pub runs: usize,

    /// Annealing parameters applied to every (run, schedule) pair.
    pub sa: SaConfig,

    /// Base RNG seed. Each run derives its own seed by offsetting with its
    /// run id; `None` seeds every run from entropy.
    pub seed: Option<u64>,

    /// Directory receiving one trajectory file per (schedule, run) pair.
    pub output_dir: PathBuf,

    /// The shared results log all runs append to.
    pub results_path: PathBuf,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            runs: 10,
            sa: SaConfig::default(),
            seed: None,
            output_dir: PathBuf::from("res"),
            results_path: PathBuf::from("res/results.txt"),
        }
    }
}

impl ExperimentConfig {
    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    pub fn with_sa(mut self, sa: SaConfig) -> Self {
        self.sa = sa;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_output_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn with_results_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.results_path = path.as_ref().to_path_buf();
        self
    }

    /// Validates the configuration, including the nested [`SaConfig`].
    pub fn validate(&self) -> Result<(), String> {
        if self.runs == 0 {
            return Err("runs must be at least 1".into());
        }
        self.sa.validate()
    }
}
