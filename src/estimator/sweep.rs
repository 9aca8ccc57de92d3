//! Room-size sweeps producing probability curves

use crate::distribution::DayDistribution;
use crate::error::Result;
use crate::estimator::CollisionEstimator;
use rand::Rng;
use serde::Serialize;

/// Probability curves over a sequence of room sizes
#[derive(Debug, Clone, Serialize)]
pub struct SweepResult {
    pub room_sizes: Vec<usize>,
    /// p(at least 2 share a day), one entry per room size
    pub at_least_two: Vec<f64>,
    /// p(at least 3 share a day), one entry per room size
    pub at_least_three: Vec<f64>,
}

impl SweepResult {
    pub fn len(&self) -> usize {
        self.room_sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.room_sizes.is_empty()
    }
}

impl CollisionEstimator {
    /// Run one estimate per room size, sharing the RNG sequentially
    pub fn sweep(
        &self,
        room_sizes: impl IntoIterator<Item = usize>,
        dist: &DayDistribution,
        rng: &mut impl Rng,
    ) -> Result<SweepResult> {
        let mut result = SweepResult {
            room_sizes: Vec::new(),
            at_least_two: Vec::new(),
            at_least_three: Vec::new(),
        };

        for room_size in room_sizes {
            let p = self.estimate(room_size, dist, rng)?;
            result.room_sizes.push(room_size);
            result.at_least_two.push(p.at_least_two);
            result.at_least_three.push(p.at_least_three);
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BirthdayError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sweep_collects_parallel_curves() {
        let estimator = CollisionEstimator::new(200).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let result = estimator
            .sweep(1..=10, DayDistribution::uniform(), &mut rng)
            .unwrap();

        assert_eq!(result.len(), 10);
        assert_eq!(result.room_sizes, (1..=10).collect::<Vec<_>>());
        assert_eq!(result.at_least_two.len(), 10);
        assert_eq!(result.at_least_three.len(), 10);
        assert_eq!(result.at_least_two[0], 0.0);
    }

    #[test]
    fn test_sweep_rejects_zero_room_size() {
        let estimator = CollisionEstimator::new(10).unwrap();
        let mut rng = StdRng::seed_from_u64(12);
        let err = estimator
            .sweep(vec![0], DayDistribution::uniform(), &mut rng)
            .unwrap_err();
        assert!(matches!(err, BirthdayError::InvalidRoomSize(0)));
    }

    #[test]
    fn test_sweep_serializes_to_json() {
        let estimator = CollisionEstimator::new(50).unwrap();
        let mut rng = StdRng::seed_from_u64(13);
        let result = estimator
            .sweep(vec![1, 366], DayDistribution::uniform(), &mut rng)
            .unwrap();

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["room_sizes"][1], 366);
        assert_eq!(json["at_least_two"][1], 1.0);
    }
}
