//! Core type and trait definitions for the DE framework.
//!
//! [`Bounds`] describes the search box, [`DeProblem`] is the contract
//! between the generic engine and a user-supplied objective, and
//! [`DeError`] covers the two failure classes: rejected configuration
//! and a failing objective.

use thiserror::Error;

/// Error type for objective evaluation failures.
///
/// Objectives that can fail (I/O, external solvers, …) box whatever error
/// they produce; the engine aborts the run and surfaces it unchanged as
/// [`DeError::ObjectiveEvaluation`].
pub type ObjectiveError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced by the DE engine.
#[derive(Debug, Error)]
pub enum DeError {
    /// The configuration was rejected at validation.
    ///
    /// Not recoverable; fix the configuration and reconstruct.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The objective function failed during evaluation.
    ///
    /// The run is aborted immediately — no retry, no substitute value.
    #[error("objective evaluation failed: {0}")]
    ObjectiveEvaluation(#[source] ObjectiveError),
}

/// The search box: one `(min, max)` pair per dimension.
///
/// Invariants, enforced at construction: at least one dimension, every
/// pair finite with `min < max`.
///
/// ```
/// use difevo::de::Bounds;
///
/// let bounds = Bounds::new(vec![(-5.0, 5.0), (0.0, 1.0)]).unwrap();
/// assert_eq!(bounds.dim(), 2);
/// assert!(Bounds::new(vec![(5.0, 5.0)]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pairs: Vec<(f64, f64)>,
}

impl Bounds {
    /// Creates a search box from `(min, max)` pairs, one per dimension.
    ///
    /// Returns [`DeError::InvalidConfig`] if `pairs` is empty or any pair
    /// is non-finite or has `min >= max`.
    pub fn new(pairs: Vec<(f64, f64)>) -> Result<Self, DeError> {
        if pairs.is_empty() {
            return Err(DeError::InvalidConfig("bounds must not be empty".into()));
        }
        for (j, &(min, max)) in pairs.iter().enumerate() {
            if !min.is_finite() || !max.is_finite() {
                return Err(DeError::InvalidConfig(format!(
                    "bounds for dimension {j} must be finite, got ({min}, {max})"
                )));
            }
            if min >= max {
                return Err(DeError::InvalidConfig(format!(
                    "bounds for dimension {j} must satisfy min < max, got ({min}, {max})"
                )));
            }
        }
        Ok(Self { pairs })
    }

    /// Number of dimensions.
    pub fn dim(&self) -> usize {
        self.pairs.len()
    }

    /// The `(min, max)` pairs, in dimension order.
    pub fn pairs(&self) -> &[(f64, f64)] {
        &self.pairs
    }

    /// Samples one point uniformly at random within the box.
    ///
    /// Consumes exactly `dim()` draws, in dimension order.
    pub fn sample<R: rand::Rng>(&self, rng: &mut R) -> Vec<f64> {
        self.pairs
            .iter()
            .map(|&(min, max)| rng.random_range(min..max))
            .collect()
    }

    /// Clamps every component of `x` to its dimension's `[min, max]`.
    ///
    /// This is the bound-repair policy applied to mutant vectors: simple
    /// componentwise clamping to the nearest bound.
    ///
    /// # Panics
    /// Panics if `x.len() != self.dim()`.
    pub fn clamp(&self, x: &mut [f64]) {
        assert_eq!(x.len(), self.dim(), "vector/bounds dimension mismatch");
        for (v, &(min, max)) in x.iter_mut().zip(&self.pairs) {
            *v = v.clamp(min, max);
        }
    }

    /// Whether every component of `x` lies within its dimension's bounds.
    pub fn contains(&self, x: &[f64]) -> bool {
        x.len() == self.dim()
            && x.iter()
                .zip(&self.pairs)
                .all(|(&v, &(min, max))| v >= min && v <= max)
    }
}

/// Defines a DE optimization problem.
///
/// The engine only needs a way to score a candidate vector; lower is
/// better (minimization). Any `Fn(&[f64]) -> f64` closure implements this
/// trait via the blanket impl, so simple objectives need no boilerplate:
///
/// ```
/// use difevo::de::DeProblem;
///
/// let sphere = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
/// assert_eq!(sphere.evaluate(&[3.0, 4.0]).unwrap(), 25.0);
/// ```
///
/// Implement the trait directly when evaluation can fail or when the
/// per-generation callback is needed.
///
/// # Thread Safety
///
/// `DeProblem` must be `Send + Sync` because the engine may evaluate a
/// generation's trial vectors in parallel (the `parallel` feature).
///
/// # Contract
///
/// The objective must be pure and defined over the full search box. NaN
/// or infinite results are passed through into fitness comparisons — they
/// are a defect of the objective, not handled specially.
pub trait DeProblem: Send + Sync {
    /// Evaluates a candidate vector, returning its fitness.
    ///
    /// Lower fitness values are considered better. An `Err` aborts the
    /// run immediately and is surfaced to the caller unchanged.
    fn evaluate(&self, x: &[f64]) -> Result<f64, ObjectiveError>;

    /// Called at the end of each generation with the best fitness so far.
    ///
    /// Useful for progress logging or convergence reporting. The default
    /// implementation is a no-op.
    fn on_generation(&self, _generation: usize, _best_fitness: f64) {}
}

impl<F> DeProblem for F
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    fn evaluate(&self, x: &[f64]) -> Result<f64, ObjectiveError> {
        Ok(self(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    // ---- Bounds construction ----

    #[test]
    fn test_bounds_valid() {
        let bounds = Bounds::new(vec![(-10.0, 10.0), (0.0, 1.0)]).unwrap();
        assert_eq!(bounds.dim(), 2);
        assert_eq!(bounds.pairs()[1], (0.0, 1.0));
    }

    #[test]
    fn test_bounds_empty_rejected() {
        let err = Bounds::new(vec![]).unwrap_err();
        assert!(matches!(err, DeError::InvalidConfig(_)));
    }

    #[test]
    fn test_bounds_degenerate_pair_rejected() {
        // min == max
        assert!(Bounds::new(vec![(5.0, 5.0)]).is_err());
        // min > max
        assert!(Bounds::new(vec![(1.0, -1.0)]).is_err());
        // one bad pair among good ones
        assert!(Bounds::new(vec![(-1.0, 1.0), (3.0, 2.0)]).is_err());
    }

    #[test]
    fn test_bounds_non_finite_rejected() {
        assert!(Bounds::new(vec![(f64::NEG_INFINITY, 0.0)]).is_err());
        assert!(Bounds::new(vec![(0.0, f64::NAN)]).is_err());
    }

    // ---- Sampling and repair ----

    #[test]
    fn test_sample_within_bounds() {
        let bounds = Bounds::new(vec![(-3.0, -1.0), (10.0, 20.0), (0.0, 1e-6)]).unwrap();
        let mut rng = create_rng(7);
        for _ in 0..100 {
            let x = bounds.sample(&mut rng);
            assert!(bounds.contains(&x), "sample {x:?} escaped bounds");
        }
    }

    #[test]
    fn test_clamp_repairs_out_of_box() {
        let bounds = Bounds::new(vec![(-1.0, 1.0), (0.0, 2.0)]).unwrap();
        let mut x = vec![-5.0, 3.0];
        bounds.clamp(&mut x);
        assert_eq!(x, vec![-1.0, 2.0]);

        // in-box values are untouched
        let mut y = vec![0.5, 1.5];
        bounds.clamp(&mut y);
        assert_eq!(y, vec![0.5, 1.5]);
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn test_clamp_dimension_mismatch_panics() {
        let bounds = Bounds::new(vec![(-1.0, 1.0)]).unwrap();
        let mut x = vec![0.0, 0.0];
        bounds.clamp(&mut x);
    }

    // ---- Objective contract ----

    #[test]
    fn test_closure_implements_problem() {
        let sphere = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
        assert_eq!(sphere.evaluate(&[1.0, 2.0]).unwrap(), 5.0);
    }

    #[test]
    fn test_error_display() {
        let err = DeError::InvalidConfig("population_size must be at least 4".into());
        assert!(err.to_string().contains("invalid configuration"));
    }
}
