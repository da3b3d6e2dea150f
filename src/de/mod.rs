//! Differential Evolution (DE) framework.
//!
//! The classic DE/rand/1/bin scheme: each generation, every individual is
//! challenged by a trial vector built from three distinct donors
//! (`v = x_r1 + F * (x_r2 - x_r3)`, clamped to the search box) crossed
//! binomially with the target; the trial replaces the target when its
//! fitness is not worse.
//!
//! # Core Traits
//!
//! - [`DeProblem`]: Objective definition — evaluation plus an optional
//!   per-generation callback. Implemented automatically for
//!   `Fn(&[f64]) -> f64` closures.
//!
//! # Key Types
//!
//! - [`Bounds`]: Per-dimension `(min, max)` search box
//! - [`DeConfig`]: Algorithm parameters (NP, F, CR, generations, seed)
//! - [`DeRunner`]: Executes the generation loop
//! - [`DeResult`]: Final optimization result with fitness history
//!
//! # References
//!
//! - Storn & Price (1997), *Differential Evolution — A Simple and
//!   Efficient Heuristic for Global Optimization over Continuous Spaces*
//! - Price, Storn & Lampinen (2005), *Differential Evolution: A Practical
//!   Approach to Global Optimization*

mod config;
mod runner;
mod types;

pub use config::DeConfig;
pub use runner::{DeResult, DeRunner};
pub use types::{Bounds, DeError, DeProblem, ObjectiveError};
