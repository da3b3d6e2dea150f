//! Standard continuous benchmark objectives.
//!
//! The usual suspects for exercising a global optimizer, valid for any
//! dimension. All are minimization problems with known optima, so they
//! double as test oracles.

use std::f64::consts::PI;

/// Sphere function: `f(x) = Σ x_i²`.
///
/// Convex and separable; global minimum `f(0, …, 0) = 0`.
pub fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|v| v * v).sum()
}

/// Rastrigin function: `f(x) = 10·n + Σ (x_i² − 10·cos(2π·x_i))`.
///
/// Highly multimodal with a regular grid of local minima; global minimum
/// `f(0, …, 0) = 0`. Usually searched over `[-5.12, 5.12]` per dimension.
pub fn rastrigin(x: &[f64]) -> f64 {
    10.0 * x.len() as f64
        + x.iter()
            .map(|&v| v * v - 10.0 * (2.0 * PI * v).cos())
            .sum::<f64>()
}

/// Rosenbrock function: `f(x) = Σ 100·(x_{i+1} − x_i²)² + (1 − x_i)²`.
///
/// A narrow curved valley; global minimum `f(1, …, 1) = 0`.
pub fn rosenbrock(x: &[f64]) -> f64 {
    x.windows(2)
        .map(|w| {
            let (a, b) = (w[0], w[1]);
            100.0 * (b - a * a).powi(2) + (1.0 - a).powi(2)
        })
        .sum()
}
