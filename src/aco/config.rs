//! ACO configuration.

use crate::error::{AcoError, Result};

/// Tunable parameters of the MIN-MAX Ant System.
///
/// # Examples
///
/// ```
/// use u_antcolony::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_ant_count(20)
///     .with_evaporation_rate(0.05)
///     .with_tau_bounds(0.1, 10.0)
///     .with_max_iterations(40)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
///
/// # References
///
/// - Dorigo, Maniezzo & Colorni (1996), "Ant System"
/// - Stützle & Hoos (2000), "MAX-MIN Ant System"
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Pheromone influence exponent (`a`).
    pub alpha: f64,

    /// Heuristic influence exponent (`b`), applied to `1 / grade_item`.
    pub beta: f64,

    /// Fraction of pheromone removed each iteration, in (0, 1).
    pub evaporation_rate: f64,

    /// Number of ants (solutions constructed) per iteration.
    pub ant_count: usize,

    /// Lower pheromone bound. Must be positive.
    pub tau_min: f64,

    /// Upper pheromone bound and initial pheromone value.
    pub tau_max: f64,

    /// Number of iterations. 0 yields an empty solution.
    pub max_iterations: usize,

    /// Return the best solution across all iterations instead of the
    /// best solution of the final iteration.
    pub keep_global_best: bool,

    /// Build the ants of an iteration on the rayon pool.
    ///
    /// Ignored unless the `parallel` feature is enabled.
    pub parallel: bool,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            beta: 1.0,
            evaporation_rate: 0.1,
            ant_count: 10,
            tau_min: 0.1,
            tau_max: 10.0,
            max_iterations: 20,
            keep_global_best: false,
            parallel: false,
            seed: None,
        }
    }
}

impl AcoConfig {
    /// Config with the classic positional parameter set; iterations default to 20.
    pub fn new(
        alpha: f64,
        beta: f64,
        evaporation_rate: f64,
        ant_count: usize,
        tau_min: f64,
        tau_max: f64,
    ) -> Self {
        Self {
            alpha,
            beta,
            evaporation_rate,
            ant_count,
            tau_min,
            tau_max,
            ..Self::default()
        }
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_evaporation_rate(mut self, rate: f64) -> Self {
        self.evaporation_rate = rate;
        self
    }

    pub fn with_ant_count(mut self, n: usize) -> Self {
        self.ant_count = n;
        self
    }

    /// Sets both pheromone bounds.
    pub fn with_tau_bounds(mut self, tau_min: f64, tau_max: f64) -> Self {
        self.tau_min = tau_min;
        self.tau_max = tau_max;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_keep_global_best(mut self, keep: bool) -> Self {
        self.keep_global_best = keep;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(AcoError::config(
                "alpha",
                format!("must be finite and non-negative, got {}", self.alpha),
            ));
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(AcoError::config(
                "beta",
                format!("must be finite and non-negative, got {}", self.beta),
            ));
        }
        if !(self.evaporation_rate > 0.0 && self.evaporation_rate < 1.0) {
            return Err(AcoError::config(
                "evaporation_rate",
                format!("must be in (0, 1), got {}", self.evaporation_rate),
            ));
        }
        if self.ant_count == 0 {
            return Err(AcoError::config("ant_count", "must be positive"));
        }
        if !self.tau_min.is_finite() || self.tau_min <= 0.0 {
            return Err(AcoError::config(
                "tau_min",
                format!("must be finite and positive, got {}", self.tau_min),
            ));
        }
        if !self.tau_max.is_finite() || self.tau_min >= self.tau_max {
            return Err(AcoError::config(
                "tau_max",
                format!(
                    "must be finite and greater than tau_min ({}), got {}",
                    self.tau_min, self.tau_max
                ),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AcoConfig::default();
        assert_eq!(config.ant_count, 10);
        assert_eq!(config.max_iterations, 20);
        assert!((config.tau_max - 10.0).abs() < 1e-12);
        assert!(!config.keep_global_best);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_positional_constructor() {
        let config = AcoConfig::new(2.0, 3.0, 0.2, 5, 0.5, 4.0);
        assert!((config.alpha - 2.0).abs() < 1e-12);
        assert!((config.beta - 3.0).abs() < 1e-12);
        assert_eq!(config.ant_count, 5);
        assert_eq!(config.max_iterations, 20);
    }

    #[test]
    fn test_validate_bad_evaporation() {
        for rate in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            let config = AcoConfig::default().with_evaporation_rate(rate);
            assert!(
                matches!(
                    config.validate(),
                    Err(AcoError::InvalidConfig {
                        field: "evaporation_rate",
                        ..
                    })
                ),
                "rate {rate} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_zero_ants() {
        let config = AcoConfig::default().with_ant_count(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_inverted_bounds() {
        let config = AcoConfig::default().with_tau_bounds(10.0, 0.1);
        assert!(matches!(
            config.validate(),
            Err(AcoError::InvalidConfig { field: "tau_max", .. })
        ));
    }

    #[test]
    fn test_validate_non_positive_tau_min() {
        let config = AcoConfig::default().with_tau_bounds(0.0, 1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_negative_exponent() {
        assert!(AcoConfig::default().with_alpha(-1.0).validate().is_err());
        assert!(AcoConfig::default().with_beta(f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_zero_iterations_is_valid() {
        let config = AcoConfig::default().with_max_iterations(0);
        assert!(config.validate().is_ok());
    }
}
