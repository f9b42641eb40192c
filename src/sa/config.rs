//! Annealing-loop configuration.

/// Configuration for a single annealing run.
///
/// Temperatures are expressed in normalized distance units, matching the
/// matrix the run operates on.
///
/// # Examples
///
/// ```
/// use tsp_anneal::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_max_steps(10_000)
///     .with_trials_per_step(4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SaConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Floor temperature the schedule decays toward.
    pub min_temperature: f64,

    /// Number of temperature steps in a full schedule sweep.
    pub max_steps: usize,

    /// Perturb/accept trials performed at each temperature step before the
    /// schedule advances.
    pub trials_per_step: usize,

    /// Stopping tolerance: the loop ends once `T - min_temperature` drops
    /// below this.
    pub epsilon: f64,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 0.5,
            min_temperature: 1e-10,
            max_steps: 1_500_000,
            trials_per_step: 1,
            epsilon: 1e-9,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_max_steps(mut self, n: usize) -> Self {
        self.max_steps = n;
        self
    }

    pub fn with_trials_per_step(mut self, n: usize) -> Self {
        self.trials_per_step = n;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive".into());
        }
        if !self.min_temperature.is_finite() || self.min_temperature <= 0.0 {
            return Err("min_temperature must be positive".into());
        }
        if self.min_temperature >= self.initial_temperature {
            return Err("min_temperature must be less than initial_temperature".into());
        }
        if self.max_steps == 0 {
            return Err("max_steps must be at least 1".into());
        }
        if self.trials_per_step == 0 {
            return Err("trials_per_step must be at least 1".into());
        }
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err("epsilon must be positive".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SaConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.initial_temperature - 0.5).abs() < 1e-12);
        assert!((config.min_temperature - 1e-10).abs() < 1e-20);
        assert_eq!(config.max_steps, 1_500_000);
        assert_eq!(config.trials_per_step, 1);
    }

    #[test]
    fn test_validate_rejects_non_positive_temperatures() {
        assert!(SaConfig::default()
            .with_initial_temperature(0.0)
            .validate()
            .is_err());
        assert!(SaConfig::default()
            .with_min_temperature(-1.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_rejects_min_above_initial() {
        let config = SaConfig::default()
            .with_initial_temperature(0.1)
            .with_min_temperature(0.2);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_steps_and_trials() {
        assert!(SaConfig::default().with_max_steps(0).validate().is_err());
        assert!(SaConfig::default()
            .with_trials_per_step(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_rejects_bad_epsilon() {
        assert!(SaConfig::default().with_epsilon(0.0).validate().is_err());
        assert!(SaConfig::default()
            .with_epsilon(f64::NAN)
            .validate()
            .is_err());
    }
}
