//! Monte Carlo collision estimator
//!
//! Repeatedly fills a room with random birthdays and measures how often
//! at least two (or three) people share a day.

mod sweep;


pub use sweep::*;

use crate::distribution::{DayDistribution, DAYS_IN_YEAR};
use crate::error::{BirthdayError, Result};
use rand::Rng;

/// Estimated collision probabilities for one room size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionProbability {
    /// Fraction of trials where some day was drawn at least twice
    pub at_least_two: f64,
    /// Fraction of trials where some day was drawn at least three times
    pub at_least_three: f64,
}

/// Monte Carlo estimator with a validated trial count
#[derive(Debug)]
pub struct CollisionEstimator {
    trial_count: usize,
}

impl CollisionEstimator {
    pub fn new(trial_count: usize) -> Result<Self> {
        if trial_count == 0 {
            return Err(BirthdayError::InvalidTrialCount(trial_count));
        }
        Ok(Self { trial_count })
    }

    pub fn trial_count(&self) -> usize {
        self.trial_count
    }

    /// Estimate collision probabilities for one room size
    ///
    /// Each trial draws all `room_size` days even after a collision is
    /// found, so RNG consumption depends only on the inputs and seeded
    /// runs reproduce exactly.
    pub fn estimate(
        &self,
        room_size: usize,
        dist: &DayDistribution,
        rng: &mut impl Rng,
    ) -> Result<CollisionProbability> {
        if room_size == 0 {
            return Err(BirthdayError::InvalidRoomSize(room_size));
        }

        let mut pair_trials = 0usize;
        let mut triple_trials = 0usize;
        let mut counts = [0u32; DAYS_IN_YEAR];

        for _ in 0..self.trial_count {
            counts.fill(0);
            let mut has_pair = false;
            let mut has_triple = false;

            for _ in 0..room_size {
                let day = dist.sample(rng);
                let slot = &mut counts[(day - 1) as usize];
                *slot += 1;
                if *slot >= 2 {
                    has_pair = true;
                }
                if *slot >= 3 {
                    has_triple = true;
                }
            }

            if has_pair {
                pair_trials += 1;
            }
            if has_triple {
                triple_trials += 1;
            }
        }

        Ok(CollisionProbability {
            at_least_two: pair_trials as f64 / self.trial_count as f64,
            at_least_three: triple_trials as f64 / self.trial_count as f64,
        })
    }
}

/// Standalone form of the estimator contract
///
/// Convenience wrapper over [`CollisionEstimator`] for one-off calls.
pub fn estimate(
    room_size: usize,
    trial_count: usize,
    dist: &DayDistribution,
    rng: &mut impl Rng,
) -> Result<CollisionProbability> {
    CollisionEstimator::new(trial_count)?.estimate(room_size, dist, rng)
}
