//! Adaptive penalty method for constrained evolutionary search.
//!
//! Each generation the population's objective values and constraint
//! violations set one penalty coefficient per constraint. Those coefficients
//! then fold a candidate's violations into a single fitness value that
//! unconstrained selection can rank (lower is better).

pub mod config;
pub mod engine;
pub mod error;
pub mod penalty;
pub mod types;

pub use config::*;
pub use engine::*;
pub use error::PenaltyError;
pub use penalty::{coefficients, denominator, is_feasible, objective_magnitude, penalized_fitness};
pub use types::*;
