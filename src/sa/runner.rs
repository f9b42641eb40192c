//! The annealing loop.

use rand::seq::SliceRandom;
use rand::Rng;

use super::config::SaConfig;
use super::cooling::CoolingSchedule;
use super::perturb::perturb;
use crate::instance::DistanceMatrix;

/// Result of one annealing run under a single cooling schedule.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// The final tour; the cycle back to the first site is implicit.
    pub tour: Vec<usize>,

    /// Cost of the final tour, rescaled to original distance units.
    pub final_cost: f64,

    /// Rescaled cost of the current tour after each completed temperature
    /// step. A sample's index is its step number.
    pub trajectory: Vec<f64>,

    /// Temperature steps executed before the loop stopped.
    pub steps: usize,

    /// Temperature at which the loop stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,
}

/// Metropolis acceptance criterion.
///
/// A strictly better candidate is always accepted. Otherwise the candidate
/// is accepted with probability `exp((current - candidate) / temperature)`,
/// by drawing `u` uniformly from `[0, 1)` and accepting iff `u < p`.
///
/// `temperature` must be strictly positive; the annealing loop stops before
/// the floor is reached, so it never calls this with `T <= 0`.
pub fn metropolis_accept<R: Rng>(
    current_cost: f64,
    candidate_cost: f64,
    temperature: f64,
    rng: &mut R,
) -> bool {
    debug_assert!(temperature > 0.0);
    if candidate_cost < current_cost {
        return true;
    }
    let probability = ((current_cost - candidate_cost) / temperature).exp();
    rng.random_range(0.0..1.0) < probability
}

/// Executes the annealing loop for one cooling schedule.
pub struct SaRunner;

impl SaRunner {
    /// Runs simulated annealing on `matrix` under `schedule`.
    ///
    /// Starts from a uniformly random tour and, at each temperature step,
    /// performs `trials_per_step` perturb/evaluate/accept trials with the
    /// cost of every candidate recomputed from scratch (correct for both
    /// move types, and the place to generalize when new moves are added).
    /// The loop ends when the schedule converges onto the floor temperature
    /// or `max_steps` is exhausted.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid (call [`SaConfig::validate`]
    /// first to get a descriptive error).
    pub fn run<R: Rng>(
        matrix: &DistanceMatrix,
        schedule: &dyn CoolingSchedule,
        config: &SaConfig,
        rng: &mut R,
    ) -> SaResult {
        config.validate().expect("invalid SaConfig");

        let mut tour: Vec<usize> = (0..matrix.len()).collect();
        tour.shuffle(rng);
        let mut cost = matrix.tour_cost(&tour);

        let mut trajectory = Vec::new();
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut temperature = config.initial_temperature;
        let mut step = 0usize;

        while step < config.max_steps {
            temperature = schedule.temperature(
                config.initial_temperature,
                config.min_temperature,
                step,
                config.max_steps,
            );
            if temperature - config.min_temperature < config.epsilon {
                break;
            }

            for _ in 0..config.trials_per_step {
                let mut candidate = tour.clone();
                perturb(&mut candidate, rng);
                let candidate_cost = matrix.tour_cost(&candidate);
                if candidate_cost < cost {
                    improving_moves += 1;
                }
                if metropolis_accept(cost, candidate_cost, temperature, rng) {
                    tour = candidate;
                    cost = candidate_cost;
                    accepted_moves += 1;
                }
            }

            trajectory.push(matrix.rescale(cost));
            step += 1;
        }

        SaResult {
            final_cost: matrix.rescale(cost),
            tour,
            trajectory,
            steps: step,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
        }
    }
}
