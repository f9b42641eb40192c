//! Cooling schedules: temperature-decay strategies.

use std::f64::consts::PI;

/// A named temperature-decay strategy.
///
/// A schedule is a pure function of `(T0, TN, step, max_steps)`; it carries
/// no interior mutable state, so one schedule value can drive any number of
/// concurrent runs. The engine depends only on this contract — new
/// schedules plug in without touching the annealing loop.
///
/// Names label output lines and trajectory files and must be unique within
/// a registry.
pub trait CoolingSchedule: Send + Sync {
    /// Unique label for this schedule.
    fn name(&self) -> &str;

    /// Temperature at `step` of `max_steps`, decaying from `t0` to `t_min`.
    ///
    /// Must be monotonically non-increasing in `step`, with
    /// `temperature(t0, t_min, 0, m) ≈ t0` and
    /// `temperature(t0, t_min, m, m) ≈ t_min`.
    fn temperature(&self, t0: f64, t_min: f64, step: usize, max_steps: usize) -> f64;
}

/// Linear interpolation: `T = T0 - (T0 - TN) * step / max_steps`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Linear;

impl CoolingSchedule for Linear {
    fn name(&self) -> &str {
        "linear"
    }

    fn temperature(&self, t0: f64, t_min: f64, step: usize, max_steps: usize) -> f64 {
        t0 - (t0 - t_min) * step as f64 / max_steps as f64
    }
}

/// Geometric decay: `T = T0 * alpha^step` with `alpha = (TN/T0)^(1/max_steps)`,
/// so the floor is reached exactly at the final step.
#[derive(Debug, Clone, Copy, Default)]
pub struct Geometric;

impl CoolingSchedule for Geometric {
    fn name(&self) -> &str {
        "geometric"
    }

    fn temperature(&self, t0: f64, t_min: f64, step: usize, max_steps: usize) -> f64 {
        t0 * (t_min / t0).powf(step as f64 / max_steps as f64)
    }
}

/// Half-period cosine: `T = (T0 - TN)/2 * (1 + cos(pi * step / max_steps)) + TN`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cosine;

impl CoolingSchedule for Cosine {
    fn name(&self) -> &str {
        "cosine"
    }

    fn temperature(&self, t0: f64, t_min: f64, step: usize, max_steps: usize) -> f64 {
        (t0 - t_min) / 2.0 * (1.0 + (PI * step as f64 / max_steps as f64).cos()) + t_min
    }
}

/// The standard schedule set swept by every experiment run.
pub fn standard_schedules() -> Vec<Box<dyn CoolingSchedule>> {
    vec![Box::new(Linear), Box::new(Geometric), Box::new(Cosine)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const T0: f64 = 0.5;
    const T_MIN: f64 = 1e-10;
    const MAX_STEPS: usize = 10_000;

    fn check_endpoints(schedule: &dyn CoolingSchedule) {
        let start = schedule.temperature(T0, T_MIN, 0, MAX_STEPS);
        let end = schedule.temperature(T0, T_MIN, MAX_STEPS, MAX_STEPS);
        assert!(
            (start - T0).abs() < 1e-12,
            "{}: expected start {T0}, got {start}",
            schedule.name()
        );
        assert!(
            (end - T_MIN).abs() < 1e-12,
            "{}: expected end {T_MIN}, got {end}",
            schedule.name()
        );
    }

    fn check_monotone(schedule: &dyn CoolingSchedule) {
        let mut previous = schedule.temperature(T0, T_MIN, 0, MAX_STEPS);
        for step in 1..=MAX_STEPS {
            let t = schedule.temperature(T0, T_MIN, step, MAX_STEPS);
            assert!(
                t <= previous + 1e-15,
                "{}: temperature increased at step {step}: {previous} -> {t}",
                schedule.name()
            );
            previous = t;
        }
    }

    #[test]
    fn test_schedules_hit_their_endpoints() {
        for schedule in standard_schedules() {
            check_endpoints(schedule.as_ref());
        }
    }

    #[test]
    fn test_schedules_are_monotonically_non_increasing() {
        for schedule in standard_schedules() {
            check_monotone(schedule.as_ref());
        }
    }

    #[test]
    fn test_linear_midpoint() {
        let t = Linear.temperature(1.0, 0.0, 5_000, 10_000);
        assert!((t - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_geometric_halfway_is_geometric_mean() {
        let t = Geometric.temperature(1.0, 1e-8, 5_000, 10_000);
        assert!((t - 1e-4).abs() < 1e-12, "expected 1e-4, got {t}");
    }

    #[test]
    fn test_cosine_midpoint_is_arithmetic_mean() {
        let t = Cosine.temperature(1.0, 0.0, 5_000, 10_000);
        assert!((t - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_standard_schedule_names_are_unique() {
        let schedules = standard_schedules();
        let names: HashSet<&str> = schedules.iter().map(|s| s.name()).collect();
        assert_eq!(names.len(), schedules.len());
    }
}
