//! The concurrent experiment harness.
//!
//! Fans out independent annealing runs, one rayon task per run id. Every
//! run owns its RNG and working tour and sweeps all registered cooling
//! schedules sequentially; the runs share only the read-only distance
//! matrix and the mutex-guarded results log.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use log::{debug, error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use super::config::ExperimentConfig;
use super::error::{ExperimentError, OutputError};
use super::output::{write_trajectory, ResultsLog};
use crate::instance::DistanceMatrix;
use crate::sa::{CoolingSchedule, SaRunner};

/// One completed (run, schedule) pair. The full trajectory lives in the
/// file at `trajectory_path`; its final line matches `final_cost`.
#[derive(Debug, Clone)]
pub struct RunRecord {
    pub run: usize,
    pub schedule: String,
    pub trajectory_path: PathBuf,
    pub final_cost: f64,
    pub steps: usize,
}

/// A (run, schedule) pair that hit a terminal output error.
#[derive(Debug)]
pub struct RunFailure {
    pub run: usize,
    pub schedule: String,
    pub error: OutputError,
}

/// Aggregated outcome of all runs.
#[derive(Debug)]
pub struct ExperimentResult {
    /// Completed pairs, grouped by run id in run order.
    pub records: Vec<RunRecord>,
    /// Failed pairs; at most one per run since a failure ends its run.
    pub failures: Vec<RunFailure>,
}

/// Drives a full experiment: R concurrent runs sweeping every schedule.
pub struct ExperimentRunner;

impl ExperimentRunner {
    /// Runs the experiment.
    ///
    /// Configuration problems, a rejected schedule registry, and an
    /// uncreatable output directory are fatal before fan-out. Output errors
    /// inside a run are logged, recorded as [`RunFailure`]s, and never
    /// cancel sibling runs.
    pub fn run(
        matrix: &DistanceMatrix,
        schedules: &[Box<dyn CoolingSchedule>],
        config: &ExperimentConfig,
    ) -> Result<ExperimentResult, ExperimentError> {
        config.validate().map_err(ExperimentError::Config)?;
        validate_schedules(schedules)?;
        fs::create_dir_all(&config.output_dir).map_err(|source| ExperimentError::OutputDir {
            path: config.output_dir.clone(),
            source,
        })?;

        let results = ResultsLog::new(&config.results_path);
        info!(
            "starting {} runs x {} schedules on {} sites",
            config.runs,
            schedules.len(),
            matrix.len()
        );

        let outcomes: Vec<(Vec<RunRecord>, Option<RunFailure>)> = (0..config.runs)
            .into_par_iter()
            .map(|run| execute_run(run, matrix, schedules, config, &results))
            .collect();

        let mut records = Vec::new();
        let mut failures = Vec::new();
        for (mut completed, failure) in outcomes {
            records.append(&mut completed);
            failures.extend(failure);
        }
        info!(
            "experiment finished: {} pairs completed, {} failed",
            records.len(),
            failures.len()
        );
        Ok(ExperimentResult { records, failures })
    }
}

fn validate_schedules(schedules: &[Box<dyn CoolingSchedule>]) -> Result<(), ExperimentError> {
    if schedules.is_empty() {
        return Err(ExperimentError::Config("schedule registry is empty".into()));
    }
    let mut names = HashSet::new();
    for schedule in schedules {
        if !names.insert(schedule.name()) {
            return Err(ExperimentError::Config(format!(
                "duplicate schedule name `{}`",
                schedule.name()
            )));
        }
    }
    Ok(())
}

/// One worker: sweeps every schedule with a run-local RNG. The first output
/// error ends the run; records of earlier pairs survive.
fn execute_run(
    run: usize,
    matrix: &DistanceMatrix,
    schedules: &[Box<dyn CoolingSchedule>],
    config: &ExperimentConfig,
    results: &ResultsLog,
) -> (Vec<RunRecord>, Option<RunFailure>) {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(run as u64)),
        None => StdRng::seed_from_u64(rand::random()),
    };

    let mut records = Vec::new();
    for schedule in schedules {
        let result = SaRunner::run(matrix, schedule.as_ref(), &config.sa, &mut rng);
        debug!(
            "run {run} {}: {} steps, final cost {}",
            schedule.name(),
            result.steps,
            result.final_cost
        );

        let trajectory_path = config
            .output_dir
            .join(format!("{}-run{run}.txt", schedule.name()));
        if let Err(source) = write_trajectory(&trajectory_path, &result.trajectory) {
            let failure = RunFailure {
                run,
                schedule: schedule.name().to_string(),
                error: OutputError::Trajectory {
                    path: trajectory_path,
                    source,
                },
            };
            error!("run {run} failed: {}", failure.error);
            return (records, Some(failure));
        }

        if let Err(source) = results.append(schedule.name(), result.final_cost) {
            let failure = RunFailure {
                run,
                schedule: schedule.name().to_string(),
                error: OutputError::Results {
                    path: results.path().to_path_buf(),
                    source,
                },
            };
            error!("run {run} failed: {}", failure.error);
            return (records, Some(failure));
        }

        records.push(RunRecord {
            run,
            schedule: schedule.name().to_string(),
            trajectory_path,
            final_cost: result.final_cost,
            steps: result.steps,
        });
    }
    (records, None)
}
