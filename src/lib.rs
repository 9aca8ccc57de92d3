//! Birthday Puzzle Core - Monte Carlo birthday paradox engine
//!
//! Estimates the probability that at least 2 (or at least 3) of N people
//! in a room share a birthday, under a uniform distribution or an
//! empirical one derived from real daily birth counts. Also renders the
//! descriptive figures for the input data and the probability curves.
//!
//! The estimator takes an explicit `&mut impl Rng`, so seeded runs are
//! fully reproducible and callers own their random state.

pub mod births;
pub mod distribution;
pub mod error;
pub mod estimator;
pub mod plot;

pub use crate::distribution::{DayDistribution, DAYS_IN_YEAR};
pub use crate::error::{BirthdayError, Result};
pub use crate::estimator::{estimate, CollisionEstimator, CollisionProbability, SweepResult};
