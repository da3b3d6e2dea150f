//! DE generation loop execution.
//!
//! [`DeRunner`] orchestrates the complete optimization:
//! initialization → (mutation → repair → crossover → selection) per
//! generation, with deferred replacement so donors always come from the
//! previous generation.

use super::config::DeConfig;
use super::types::{DeError, DeProblem};
use crate::random::create_rng;
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of a DE optimization run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeResult {
    /// The best vector found during the entire run.
    pub best: Vec<f64>,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best fitness so far, recorded once after initialization and once
    /// per generation (`max_generations + 1` entries for a completed run).
    ///
    /// Non-increasing, since selection is greedy.
    pub fitness_history: Vec<f64>,
}

/// Executes the DE generation loop.
///
/// # Usage
///
/// ```
/// use difevo::de::{Bounds, DeConfig, DeRunner};
///
/// let bounds = Bounds::new(vec![(-10.0, 10.0), (-10.0, 10.0)]).unwrap();
/// let config = DeConfig::new(bounds).with_seed(42);
/// let result = DeRunner::run(&|x: &[f64]| x[0] * x[0] + x[1] * x[1], &config).unwrap();
/// assert!(result.best_fitness < 1e-3);
/// ```
pub struct DeRunner;

impl DeRunner {
    /// Runs the optimization to `max_generations`.
    ///
    /// Returns [`DeError::InvalidConfig`] if the configuration is
    /// rejected, or [`DeError::ObjectiveEvaluation`] if the objective
    /// fails; a failed run leaves no usable state behind.
    pub fn run<P: DeProblem>(problem: &P, config: &DeConfig) -> Result<DeResult, DeError> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs the optimization with an optional cancellation token.
    ///
    /// The flag is checked at generation boundaries only: a cancelled run
    /// returns the best solution found so far, and every generation that
    /// did complete has its ordinary semantics (and history entry).
    pub fn run_with_cancel<P: DeProblem>(
        problem: &P,
        config: &DeConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<DeResult, DeError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let np = config.population_size;
        let bounds = &config.bounds;

        // 1. Initialize population uniformly within the box and evaluate.
        let mut population: Vec<Vec<f64>> = (0..np).map(|_| bounds.sample(&mut rng)).collect();
        let mut fitness = evaluate_all(problem, &population, config.parallel)?;

        // 2. Track best-so-far.
        let (best_idx, mut best_fitness) = argmin(&fitness);
        let mut best = population[best_idx].clone();
        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        fitness_history.push(best_fitness);

        let mut generations = 0usize;
        let mut cancelled = false;

        // 3. Generation loop.
        for gen in 0..config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            // Build every trial against the current generation before any
            // replacement, so donors are never partially-updated. RNG
            // consumption per individual: donor pick, then the per-dimension
            // crossover draws, then the forced-dimension pick.
            let trials: Vec<Vec<f64>> = (0..np)
                .map(|i| {
                    let mut mutant =
                        mutant_rand1(i, &population, config.mutation_factor, &mut rng);
                    bounds.clamp(&mut mutant);
                    binomial_crossover(
                        &population[i],
                        &mutant,
                        config.crossover_probability,
                        &mut rng,
                    )
                })
                .collect();

            let trial_fitness = evaluate_all(problem, &trials, config.parallel)?;

            // Greedy one-to-one selection; ties favor the trial.
            for (i, (trial, f_trial)) in trials.into_iter().zip(trial_fitness).enumerate() {
                if f_trial <= fitness[i] {
                    population[i] = trial;
                    fitness[i] = f_trial;
                    if f_trial < best_fitness {
                        best_fitness = f_trial;
                        best = population[i].clone();
                    }
                }
            }

            generations = gen + 1;
            fitness_history.push(best_fitness);
            problem.on_generation(generations, best_fitness);
        }

        Ok(DeResult {
            best,
            best_fitness,
            generations,
            cancelled,
            fitness_history,
        })
    }
}

/// Evaluate a set of vectors, aborting on the first objective failure.
fn evaluate_all<P: DeProblem>(
    problem: &P,
    vectors: &[Vec<f64>],
    parallel: bool,
) -> Result<Vec<f64>, DeError> {
    #[cfg(feature = "parallel")]
    if parallel {
        return vectors
            .par_iter()
            .map(|x| problem.evaluate(x).map_err(DeError::ObjectiveEvaluation))
            .collect();
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    vectors
        .iter()
        .map(|x| problem.evaluate(x).map_err(DeError::ObjectiveEvaluation))
        .collect()
}

/// DE/rand/1 mutation: `v = x_r1 + F * (x_r2 - x_r3)` with three distinct
/// donors, none equal to the target.
fn mutant_rand1<R: Rng>(target: usize, population: &[Vec<f64>], f: f64, rng: &mut R) -> Vec<f64> {
    let [r1, r2, r3] = sample_distinct(target, population.len(), rng);
    population[r1]
        .iter()
        .zip(&population[r2])
        .zip(&population[r3])
        .map(|((&a, &b), &c)| a + f * (b - c))
        .collect()
}

/// Picks three distinct indices in `0..len`, all different from `exclude`,
/// by rejection sampling.
fn sample_distinct<R: Rng>(exclude: usize, len: usize, rng: &mut R) -> [usize; 3] {
    debug_assert!(len >= 4, "need at least 4 individuals for rand/1 mutation");
    let mut picked = [exclude; 3];
    let mut count = 0;
    while count < 3 {
        let idx = rng.random_range(0..len);
        if idx != exclude && !picked[..count].contains(&idx) {
            picked[count] = idx;
            count += 1;
        }
    }
    picked
}

/// Binomial crossover: each dimension comes from the mutant with
/// probability `cr`, and one uniformly chosen dimension is forced from the
/// mutant so the trial always differs from the target.
fn binomial_crossover<R: Rng>(target: &[f64], mutant: &[f64], cr: f64, rng: &mut R) -> Vec<f64> {
    let mut trial: Vec<f64> = target
        .iter()
        .zip(mutant)
        .map(|(&x, &v)| if rng.random_range(0.0..1.0) < cr { v } else { x })
        .collect();
    let forced = rng.random_range(0..target.len());
    trial[forced] = mutant[forced];
    trial
}

/// Index and value of the smallest fitness.
fn argmin(fitness: &[f64]) -> (usize, f64) {
    let mut best_i = 0usize;
    let mut best_v = fitness[0];
    for (i, &v) in fitness.iter().enumerate().skip(1) {
        if v < best_v {
            best_v = v;
            best_i = i;
        }
    }
    (best_i, best_v)
}

// ============================================================================
// Tests
// ============================================================================
