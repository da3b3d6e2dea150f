//! Differential Evolution optimizer for bounded continuous minimization.
//!
//! Implements the classic DE/rand/1/bin scheme of Storn & Price: a
//! population of real vectors evolves through differential mutation,
//! binomial crossover, and greedy one-to-one selection. The user supplies
//! only an objective function and a box of per-dimension bounds.
//!
//! # Key Types
//!
//! - [`de::DeProblem`]: Objective contract — any `Fn(&[f64]) -> f64`
//!   closure works out of the box
//! - [`de::Bounds`]: The search box, one `(min, max)` pair per dimension
//! - [`de::DeConfig`]: Algorithm parameters (NP, F, CR, generations, seed)
//! - [`de::DeRunner`]: Executes the generation loop
//! - [`de::DeResult`]: Best solution plus per-generation fitness history
//!
//! # Example
//!
//! ```
//! use difevo::de::{Bounds, DeConfig, DeRunner};
//!
//! let bounds = Bounds::new(vec![(-10.0, 10.0), (-10.0, 10.0)]).unwrap();
//! let config = DeConfig::new(bounds).with_seed(42);
//! let result = DeRunner::run(&|x: &[f64]| x[0] * x[0] + x[1] * x[1], &config).unwrap();
//! assert!(result.best_fitness < 1e-3);
//! ```
//!
//! # Features
//!
//! - `parallel`: evaluate each generation's trial vectors with rayon.
//!   The seeded trajectory is identical with or without it — randomness
//!   is only consumed while trials are constructed sequentially.
//! - `serde`: Serialize/Deserialize on [`de::Bounds`], [`de::DeConfig`]
//!   and [`de::DeResult`].

pub mod de;
pub mod random;
pub mod testfunctions;
