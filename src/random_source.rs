// src/random_source.rs

use rand::{
    rngs::{StdRng, ThreadRng},
    Rng, RngExt, SeedableRng,
};

/// A source of uniformly distributed integers.
///
/// The popularity model draws all of its randomness through this trait so
/// callers can swap the thread-local generator for a seeded or pinned one.
pub trait RandomInt {
    /// Returns an integer in the inclusive range `[min, max]`.
    fn random_int(&mut self, min: i64, max: i64) -> i64;
}

/// Uniform draws backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct UniformSource<R> {
    rng: R,
}

impl<R: Rng> UniformSource<R> {
    pub fn new(rng: R) -> Self {
        UniformSource { rng }
    }
}

impl UniformSource<ThreadRng> {
    /// Uses the thread-local generator, seeded from the OS.
    pub fn thread() -> Self {
        UniformSource::new(rand::rng())
    }
}

impl UniformSource<StdRng> {
    /// Uses a `StdRng` seeded from `seed`, so repeated runs produce the same draws.
    pub fn seeded(seed: u64) -> Self {
        UniformSource::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomInt for UniformSource<R> {
    fn random_int(&mut self, min: i64, max: i64) -> i64 {
        // Reversed bounds are swapped; `random_range` panics on an empty range.
        let (low, high) = if min <= max { (min, max) } else { (max, min) };
        let value = self.rng.random_range(low..=high);
        log::trace!("random_int({}, {}) -> {}", min, max, value);
        value
    }
}

/// Always returns the same value, whatever range is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSource {
    value: i64,
}

impl FixedSource {
    pub fn new(value: i64) -> Self {
        FixedSource { value }
    }
}

impl RandomInt for FixedSource {
    fn random_int(&mut self, _min: i64, _max: i64) -> i64 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{VIEWERS_MAX, VIEWERS_MIN};

    const TRIALS: usize = 10_000;

    #[test]
    fn test_random_int_stays_in_range() {
        let mut source = UniformSource::seeded(7);
        for _ in 0..TRIALS {
            let value = source.random_int(VIEWERS_MIN, VIEWERS_MAX);
            assert!((VIEWERS_MIN..=VIEWERS_MAX).contains(&value));
        }
    }

    #[test]
    fn test_random_int_is_roughly_uniform() {
        let mut source = UniformSource::seeded(42);
        let buckets = (VIEWERS_MAX - VIEWERS_MIN + 1) as usize;
        let mut counts = vec![0usize; buckets];
        for _ in 0..TRIALS {
            let value = source.random_int(VIEWERS_MIN, VIEWERS_MAX);
            counts[(value - VIEWERS_MIN) as usize] += 1;
        }

        let expected = TRIALS as f64 / buckets as f64;
        let chi_square: f64 = counts
            .iter()
            .map(|&observed| {
                let diff = observed as f64 - expected;
                diff * diff / expected
            })
            .sum();

        // Critical value for 20 degrees of freedom at p = 0.001.
        assert!(chi_square < 45.315, "chi-square too large: {}", chi_square);
        assert!(counts.iter().all(|&c| c > 0));
    }

    #[test]
    fn test_random_int_swaps_reversed_bounds() {
        let mut source = UniformSource::seeded(3);
        for _ in 0..1_000 {
            let value = source.random_int(30, 10);
            assert!((10..=30).contains(&value));
        }
    }

    #[test]
    fn test_random_int_single_value_range() {
        let mut source = UniformSource::thread();
        assert_eq!(source.random_int(5, 5), 5);
    }

    #[test]
    fn test_seeded_sources_repeat() {
        let mut a = UniformSource::seeded(99);
        let mut b = UniformSource::seeded(99);
        let left: Vec<i64> = (0..50).map(|_| a.random_int(10, 30)).collect();
        let right: Vec<i64> = (0..50).map(|_| b.random_int(10, 30)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_fixed_source_ignores_range() {
        let mut source = FixedSource::new(20);
        assert_eq!(source.random_int(10, 30), 20);
        assert_eq!(source.random_int(0, 1), 20);
    }
}
