use std::error::Error;
use std::io::Write;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::Parser;
use env_logger::Builder;

use tsp_anneal::experiment::{ExperimentConfig, ExperimentRunner};
use tsp_anneal::instance::{read_points_file, DistanceMatrix};
use tsp_anneal::sa::{standard_schedules, SaConfig};

#[derive(Parser, Debug)]
#[command(about, long_about = None)]
/// Runs concurrent simulated-annealing trials on a Euclidean TSP instance
struct Args {
    /// Path to the points file (`id x y` per line, integer coordinates)
    points: String,

    /// Number of independent concurrent runs
    #[arg(short, long, default_value_t = 10)]
    runs: usize,

    /// Initial temperature, in normalized distance units
    #[arg(long, default_value_t = 0.5)]
    t0: f64,

    /// Floor temperature
    #[arg(long, default_value_t = 1e-10)]
    t_min: f64,

    /// Temperature steps per schedule sweep
    #[arg(long, default_value_t = 1_500_000)]
    max_steps: usize,

    /// Perturbation trials at each temperature step
    #[arg(long, default_value_t = 1)]
    trials: usize,

    /// Stopping tolerance on the gap to the floor temperature
    #[arg(long, default_value_t = 1e-9)]
    epsilon: f64,

    /// Base RNG seed; omit to seed every run from entropy
    #[arg(long)]
    seed: Option<u64>,

    /// Directory for per-run trajectory files
    #[arg(short, long, default_value = "res")]
    output_dir: PathBuf,

    /// Shared results log, one `schedule finalCost` line per pair
    #[arg(long, default_value = "res/results.txt")]
    results: PathBuf,
}

fn main() {
    Builder::from_default_env()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        log::error!("{err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let points = read_points_file(&args.points)?;
    let matrix = DistanceMatrix::from_points(&points);
    let schedules = standard_schedules();

    let sa = SaConfig::default()
        .with_initial_temperature(args.t0)
        .with_min_temperature(args.t_min)
        .with_max_steps(args.max_steps)
        .with_trials_per_step(args.trials)
        .with_epsilon(args.epsilon);
    let mut config = ExperimentConfig::default()
        .with_runs(args.runs)
        .with_sa(sa)
        .with_output_dir(&args.output_dir)
        .with_results_path(&args.results);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let start = Instant::now();
    let outcome = ExperimentRunner::run(&matrix, &schedules, &config)?;
    println!(
        "{} of {} run/schedule pairs finished in {:.2?} on {} sites",
        outcome.records.len(),
        args.runs * schedules.len(),
        start.elapsed(),
        matrix.len()
    );

    for schedule in &schedules {
        let costs: Vec<f64> = outcome
            .records
            .iter()
            .filter(|record| record.schedule == schedule.name())
            .map(|record| record.final_cost)
            .collect();
        if costs.is_empty() {
            continue;
        }
        let mean = costs.iter().sum::<f64>() / costs.len() as f64;
        let best = costs.iter().copied().fold(f64::INFINITY, f64::min);
        println!(
            "{:<12} best {best:.3}  mean {mean:.3}  over {} runs",
            schedule.name(),
            costs.len()
        );
    }
    if !outcome.failures.is_empty() {
        println!("{} run/schedule pairs failed, see log", outcome.failures.len());
    }
    println!("results appended to {}", args.results.display());
    Ok(())
}
