//! Error types for the birthday puzzle engine

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Main error type for the birthday puzzle engine
#[derive(Error, Debug)]
pub enum BirthdayError {
    #[error("Invalid room size: {0} (must be at least 1)")]
    InvalidRoomSize(usize),

    #[error("Invalid trial count: {0} (must be at least 1)")]
    InvalidTrialCount(usize),

    #[error("Invalid probability vector length: {0} (expected 365)")]
    InvalidProbabilityLength(usize),

    #[error("Negative or non-finite weight {weight} for day {day}")]
    NegativeWeight { day: u16, weight: f64 },

    #[error("Probability vector sums to {0}, not 1 within tolerance")]
    NonUnitSum(f64),

    #[error("Birth counts are all zero, cannot derive a distribution")]
    EmptyCounts,

    #[error("Invalid calendar date: {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Plot error: {0}")]
    Plot(String),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for BirthdayError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        BirthdayError::Plot(err.to_string())
    }
}

/// Result type alias for the birthday puzzle engine
pub type Result<T> = std::result::Result<T, BirthdayError>;
