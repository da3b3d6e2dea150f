//! DE configuration.
//!
//! [`DeConfig`] holds the search box and all parameters that control the
//! generation loop.

use super::types::{Bounds, DeError};

/// Configuration for Differential Evolution.
///
/// Controls population size, the mutation and crossover parameters,
/// termination, parallelism, and reproducibility.
///
/// # Defaults
///
/// The constructor applies the classic reference parameters:
///
/// ```
/// use difevo::de::{Bounds, DeConfig};
///
/// let bounds = Bounds::new(vec![(-10.0, 10.0)]).unwrap();
/// let config = DeConfig::new(bounds);
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.max_generations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use difevo::de::{Bounds, DeConfig};
///
/// let bounds = Bounds::new(vec![(-5.12, 5.12); 10]).unwrap();
/// let config = DeConfig::new(bounds)
///     .with_population_size(100)
///     .with_mutation_factor(0.8)
///     .with_crossover_probability(0.9)
///     .with_max_generations(200)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeConfig {
    /// The search box; its length fixes the problem dimension D.
    pub bounds: Bounds,

    /// Number of individuals in the population (NP).
    ///
    /// Must be at least 4 so that mutation can pick three distinct donors
    /// besides the target. A common sizing rule is `10 * D`.
    pub population_size: usize,

    /// Differential mutation factor (F), scaling the donor difference.
    ///
    /// Recommended range `(0.4, 1.0]`. Values outside are accepted — they
    /// degrade convergence rather than break the algorithm.
    pub mutation_factor: f64,

    /// Binomial crossover probability (CR), in `[0.0, 1.0]`.
    ///
    /// The fraction of dimensions inherited from the mutant; one dimension
    /// is always forced from the mutant regardless.
    pub crossover_probability: f64,

    /// Number of generations to run; the only termination criterion.
    pub max_generations: usize,

    /// Whether to evaluate trial vectors in parallel using rayon.
    ///
    /// Only effective with the `parallel` cargo feature; without it the
    /// flag is ignored and evaluation stays sequential. Either way the
    /// seeded trajectory is identical.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed. With a fixed seed the entire trajectory
    /// (initialization, donor picks, crossover draws) is reproducible.
    pub seed: Option<u64>,
}

impl DeConfig {
    /// Creates a configuration for the given search box with the classic
    /// reference parameters: NP=50, F=0.8, CR=0.7, 100 generations.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            population_size: 50,
            mutation_factor: 0.8,
            crossover_probability: 0.7,
            max_generations: 100,
            parallel: false,
            seed: None,
        }
    }

    /// Sets the population size (NP).
    pub fn with_population_size(mut self, np: usize) -> Self {
        self.population_size = np;
        self
    }

    /// Sets the mutation factor (F).
    pub fn with_mutation_factor(mut self, f: f64) -> Self {
        self.mutation_factor = f;
        self
    }

    /// Sets the crossover probability (CR).
    pub fn with_crossover_probability(mut self, cr: f64) -> Self {
        self.crossover_probability = cr;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Enables or disables parallel trial evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns [`DeError::InvalidConfig`] when `population_size < 4`,
    /// `max_generations < 1`, or `crossover_probability` is outside
    /// `[0, 1]`. Bounds invariants are already enforced by
    /// [`Bounds::new`](super::Bounds::new).
    pub fn validate(&self) -> Result<(), DeError> {
        if self.population_size < 4 {
            return Err(DeError::InvalidConfig(
                "population_size must be at least 4 (target plus three distinct donors)".into(),
            ));
        }
        if self.max_generations < 1 {
            return Err(DeError::InvalidConfig(
                "max_generations must be at least 1".into(),
            ));
        }
        // NaN fails the range check as well.
        if !(0.0..=1.0).contains(&self.crossover_probability) {
            return Err(DeError::InvalidConfig(format!(
                "crossover_probability must be in [0, 1], got {}",
                self.crossover_probability
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds_1d() -> Bounds {
        Bounds::new(vec![(-1.0, 1.0)]).unwrap()
    }

    #[test]
    fn test_reference_defaults() {
        let config = DeConfig::new(bounds_1d());
        assert_eq!(config.population_size, 50);
        assert!((config.mutation_factor - 0.8).abs() < 1e-12);
        assert!((config.crossover_probability - 0.7).abs() < 1e-12);
        assert_eq!(config.max_generations, 100);
        assert!(!config.parallel);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = DeConfig::new(bounds_1d())
            .with_population_size(80)
            .with_mutation_factor(0.5)
            .with_crossover_probability(0.9)
            .with_max_generations(250)
            .with_parallel(true)
            .with_seed(7);

        assert_eq!(config.population_size, 80);
        assert!((config.mutation_factor - 0.5).abs() < 1e-12);
        assert!((config.crossover_probability - 0.9).abs() < 1e-12);
        assert_eq!(config.max_generations, 250);
        assert!(config.parallel);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_validate_population_too_small() {
        let config = DeConfig::new(bounds_1d()).with_population_size(3);
        assert!(matches!(
            config.validate(),
            Err(DeError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_minimum_population_accepted() {
        let config = DeConfig::new(bounds_1d()).with_population_size(4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = DeConfig::new(bounds_1d()).with_max_generations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_crossover_out_of_range() {
        assert!(DeConfig::new(bounds_1d())
            .with_crossover_probability(1.5)
            .validate()
            .is_err());
        assert!(DeConfig::new(bounds_1d())
            .with_crossover_probability(-0.1)
            .validate()
            .is_err());
        assert!(DeConfig::new(bounds_1d())
            .with_crossover_probability(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_crossover_endpoints_accepted() {
        assert!(DeConfig::new(bounds_1d())
            .with_crossover_probability(0.0)
            .validate()
            .is_ok());
        assert!(DeConfig::new(bounds_1d())
            .with_crossover_probability(1.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_extreme_mutation_factor_not_rejected() {
        // F outside the recommended range degrades convergence but is
        // deliberately not a hard error.
        assert!(DeConfig::new(bounds_1d())
            .with_mutation_factor(-0.5)
            .validate()
            .is_ok());
        assert!(DeConfig::new(bounds_1d())
            .with_mutation_factor(3.0)
            .validate()
            .is_ok());
    }
}
