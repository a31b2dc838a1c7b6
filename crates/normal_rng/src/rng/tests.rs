//! Unit tests for the RNG module.
//!
//! This module contains tests verifying:
//! - Seed reproducibility of the rand-backed source
//! - Distribution properties (uniform range, normal moments)
//! - Agreement between `BoxMuller` and the generator path
//! - Statistical properties via property-based testing

use super::*;
use crate::{GeneratorConfig, NormalGenerator};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::Distribution;

fn seeded(seed: u64) -> SeededUniform {
    let mut source = SeededUniform::new();
    source.seed(seed);
    source
}

fn moments(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / n;
    (mean, variance.sqrt())
}

/// Verifies that the same seed produces identical uniform sequences.
#[test]
fn test_seed_reproducibility() {
    let mut a = seeded(12345);
    let mut b = seeded(12345);

    for _ in 0..100 {
        assert_eq!(a.next_uniform().unwrap(), b.next_uniform().unwrap());
    }
}

/// Verifies that uniform values are in [0, 1).
#[test]
fn test_uniform_range() {
    let mut source = seeded(42);

    for _ in 0..10_000 {
        let value = source.next_uniform().unwrap();
        assert!(value >= 0.0, "Uniform value {} is below 0", value);
        assert!(value < 1.0, "Uniform value {} is >= 1", value);
    }
}

/// Sampling `BoxMuller` from `StdRng` matches a generator over the same seed.
#[test]
fn test_distribution_matches_generator() {
    let mut rng = StdRng::seed_from_u64(8);
    let config = GeneratorConfig::builder().seed(8).build().unwrap();
    let mut generator = NormalGenerator::with_config(config);

    for _ in 0..1000 {
        let from_distribution: f64 = BoxMuller.sample(&mut rng);
        assert_eq!(from_distribution, generator.generate_one().unwrap());
    }
}

/// Sample mean and standard deviation over 100k draws are within 0.02.
#[test]
fn test_normal_moments_100k() {
    let config = GeneratorConfig::builder().seed(20190621).build().unwrap();
    let mut generator = NormalGenerator::with_config(config);
    let values = generator.generate_many(100_000).unwrap();

    let (mean, std_dev) = moments(&values);
    assert!(mean.abs() < 0.02, "mean {:.5} too far from 0", mean);
    assert!(
        (std_dev - 1.0).abs() < 0.02,
        "std dev {:.5} too far from 1",
        std_dev
    );
}

/// Roughly 68% of draws fall within one standard deviation.
#[test]
fn test_one_sigma_mass() {
    let mut rng = StdRng::seed_from_u64(7);
    let n = 50_000;
    let inside = (0..n)
        .map(|_| BoxMuller.sample(&mut rng))
        .filter(|z: &f64| z.abs() < 1.0)
        .count();
    let fraction = inside as f64 / n as f64;
    assert!(
        (fraction - 0.6827).abs() < 0.01,
        "one-sigma fraction {:.4}",
        fraction
    );
}

// ============================================================================
// Property-Based Tests with Proptest
// ============================================================================

use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Normal moments should be approximately correct for any seed.
    #[test]
    fn prop_normal_moments(seed in any::<u64>()) {
        let config = GeneratorConfig::builder().seed(seed).build().unwrap();
        let mut generator = NormalGenerator::with_config(config);
        let values = generator.generate_many(100_000).unwrap();
        let (mean, std_dev) = moments(&values);

        prop_assert!(
            mean.abs() < 0.05,
            "Mean {:.4} is too far from 0 (seed={})",
            mean, seed
        );
        prop_assert!(
            (std_dev - 1.0).abs() < 0.05,
            "Std dev {:.4} is too far from 1 (seed={})",
            std_dev, seed
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A batch writes exactly `count` finite values and nothing past them.
    #[test]
    fn prop_batch_length(seed in any::<u64>(), count in 1..2000usize, slack in 0..16usize) {
        let config = GeneratorConfig::builder().seed(seed).build().unwrap();
        let mut generator = NormalGenerator::with_config(config);
        let mut buffer = vec![f64::NAN; count + slack];
        generator.fill(&mut buffer, count).unwrap();

        prop_assert!(buffer[..count].iter().all(|v| v.is_finite()));
        prop_assert!(buffer[count..].iter().all(|v| v.is_nan()));
    }

    /// Same seed must produce identical normal sequences.
    #[test]
    fn prop_seed_determinism(seed in any::<u64>(), count in 1..500usize) {
        let config = GeneratorConfig::builder().seed(seed).build().unwrap();
        let mut a = NormalGenerator::with_config(config.clone());
        let mut b = NormalGenerator::with_config(config);

        prop_assert_eq!(a.generate_many(count).unwrap(), b.generate_many(count).unwrap());
    }

    /// The transform is finite for every valid input pair.
    #[test]
    fn prop_transform_finite(x1 in f64::MIN_POSITIVE..1.0f64, x2 in 0.0..1.0f64) {
        let z = box_muller(x1, x2);
        prop_assert!(z.is_finite());
        prop_assert!(z.abs() <= (-2.0 * x1.ln()).sqrt() + 1e-12);
    }
}
