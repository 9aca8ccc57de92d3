//! Day-of-year birthday distributions
//!
//! A [`DayDistribution`] is a categorical distribution over the 365
//! non-leap calendar days, used as sampling weights by the estimator.


use crate::error::{BirthdayError, Result};
use once_cell::sync::Lazy;
use rand::Rng;

/// Number of days in a non-leap year
pub const DAYS_IN_YEAR: usize = 365;

/// Tolerance for the sum-to-one check on probability vectors
pub const SUM_TOLERANCE: f64 = 1e-6;

/// Shared precomputed uniform distribution
static UNIFORM: Lazy<DayDistribution> = Lazy::new(|| {
    DayDistribution::with_weights(vec![1.0 / DAYS_IN_YEAR as f64; DAYS_IN_YEAR], true)
});

/// Categorical distribution over days 1-365
///
/// Sampling uses a cumulative weight table built once at construction.
/// The uniform case bypasses the table with a direct range draw.
#[derive(Debug, Clone)]
pub struct DayDistribution {
    weights: Vec<f64>,
    cumulative: Vec<f64>,
    uniform: bool,
}

impl DayDistribution {
    fn with_weights(weights: Vec<f64>, uniform: bool) -> Self {
        let mut cumulative = Vec::with_capacity(weights.len());
        let mut running = 0.0;
        for w in &weights {
            running += w;
            cumulative.push(running);
        }
        Self {
            weights,
            cumulative,
            uniform,
        }
    }

    /// The uniform distribution (1/365 per day)
    pub fn uniform() -> &'static DayDistribution {
        &UNIFORM
    }

    /// Build a distribution from an explicit 365-entry probability vector
    ///
    /// Validates length, non-negativity and that the weights sum to 1
    /// within [`SUM_TOLERANCE`].
    pub fn from_weights(weights: Vec<f64>) -> Result<Self> {
        if weights.len() != DAYS_IN_YEAR {
            return Err(BirthdayError::InvalidProbabilityLength(weights.len()));
        }

        for (i, &w) in weights.iter().enumerate() {
            if !w.is_finite() || w < 0.0 {
                return Err(BirthdayError::NegativeWeight {
                    day: (i + 1) as u16,
                    weight: w,
                });
            }
        }

        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(BirthdayError::NonUnitSum(sum));
        }

        Ok(Self::with_weights(weights, false))
    }

    /// Build an empirical distribution from raw per-day birth totals
    pub fn from_counts(counts: &[u64]) -> Result<Self> {
        if counts.len() != DAYS_IN_YEAR {
            return Err(BirthdayError::InvalidProbabilityLength(counts.len()));
        }

        let total: u64 = counts.iter().sum();
        if total == 0 {
            return Err(BirthdayError::EmptyCounts);
        }

        let weights: Vec<f64> = counts.iter().map(|&c| c as f64 / total as f64).collect();
        Ok(Self::with_weights(weights, false))
    }

    /// Strongly skewed test distribution: sin(day / 120), normalized
    ///
    /// All 365 values of sin(day / 120) are positive, so no validation
    /// can fail here.
    pub fn sinusoidal() -> Self {
        let raw: Vec<f64> = (1..=DAYS_IN_YEAR).map(|d| (d as f64 / 120.0).sin()).collect();
        let sum: f64 = raw.iter().sum();
        let weights: Vec<f64> = raw.into_iter().map(|w| w / sum).collect();
        Self::with_weights(weights, false)
    }

    /// Probability weight for a day number in 1-365
    pub fn weight(&self, day: u16) -> f64 {
        self.weights[(day - 1) as usize]
    }

    /// All 365 weights, indexed by day - 1
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn is_uniform(&self) -> bool {
        self.uniform
    }

    /// Draw one day number in 1-365
    #[inline]
    pub fn sample(&self, rng: &mut impl Rng) -> u16 {
        if self.uniform {
            return rng.gen_range(1..=DAYS_IN_YEAR as u16);
        }

        let total = *self.cumulative.last().unwrap_or(&1.0);
        let r = rng.gen::<f64>() * total;

        // First index whose cumulative weight exceeds r. Zero-weight days
        // repeat their predecessor's cumulative value and are never hit.
        let idx = self.cumulative.partition_point(|&c| c <= r);

        // Fallback to the last day on float shortfall
        (idx.min(DAYS_IN_YEAR - 1) + 1) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn point_mass(day: usize) -> DayDistribution {
        let mut weights = vec![0.0; DAYS_IN_YEAR];
        weights[day - 1] = 1.0;
        DayDistribution::from_weights(weights).unwrap()
    }

    #[test]
    fn test_uniform_weights() {
        let dist = DayDistribution::uniform();
        assert!(dist.is_uniform());
        assert!((dist.weight(1) - 1.0 / 365.0).abs() < 1e-12);
        assert!((dist.weight(365) - 1.0 / 365.0).abs() < 1e-12);
    }

    #[test]
    fn test_wrong_length_rejected() {
        let err = DayDistribution::from_weights(vec![1.0 / 366.0; 366]).unwrap_err();
        assert!(matches!(err, BirthdayError::InvalidProbabilityLength(366)));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let mut weights = vec![1.0 / 365.0; DAYS_IN_YEAR];
        weights[10] = -weights[10];
        let err = DayDistribution::from_weights(weights).unwrap_err();
        assert!(matches!(err, BirthdayError::NegativeWeight { day: 11, .. }));
    }

    #[test]
    fn test_non_unit_sum_rejected() {
        let weights = vec![2.0 / 365.0; DAYS_IN_YEAR];
        let err = DayDistribution::from_weights(weights).unwrap_err();
        assert!(matches!(err, BirthdayError::NonUnitSum(_)));
    }

    #[test]
    fn test_empty_counts_rejected() {
        let counts = vec![0u64; DAYS_IN_YEAR];
        let err = DayDistribution::from_counts(&counts).unwrap_err();
        assert!(matches!(err, BirthdayError::EmptyCounts));
    }

    #[test]
    fn test_counts_normalized() {
        let mut counts = vec![1u64; DAYS_IN_YEAR];
        counts[0] = 366;
        let dist = DayDistribution::from_counts(&counts).unwrap();
        let sum: f64 = dist.weights().iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(dist.weight(1) > dist.weight(2));
    }

    #[test]
    fn test_point_mass_always_sampled() {
        let dist = point_mass(200);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert_eq!(dist.sample(&mut rng), 200);
        }
    }

    #[test]
    fn test_sinusoidal_is_valid() {
        let dist = DayDistribution::sinusoidal();
        let sum: f64 = dist.weights().iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(dist.weights().iter().all(|&w| w > 0.0));
        // Peaks near day 188 (sin argument close to pi/2)
        assert!(dist.weight(188) > dist.weight(1));
        assert!(dist.weight(188) > dist.weight(365));
    }

    #[test]
    fn test_uniform_sample_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let dist = DayDistribution::uniform();
        for _ in 0..10_000 {
            let day = dist.sample(&mut rng);
            assert!((1..=365).contains(&day));
        }
    }
}
