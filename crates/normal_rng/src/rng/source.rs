//! Uniform sources feeding the transform.
//!
//! A [`UniformSource`] is seeded exactly once by its owning generator and
//! then yields values in [0, 1). Two implementations are provided:
//! [`SeededUniform`] wraps any `rand` generator, and [`ScriptedSource`]
//! replays a fixed sequence for reproducible tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{NormalError, Result};

/// A producer of independent uniform values in the half-open interval [0, 1).
///
/// Implementations are not required to be thread-safe; concurrent callers
/// either own separate instances or serialise access externally.
pub trait UniformSource {
    /// Seeds the source. Generators call this once, before the first draw.
    fn seed(&mut self, value: u64);

    /// Draws the next uniform value.
    ///
    /// # Errors
    ///
    /// Returns `SourceFailure` or `SourceExhausted` when no value can be
    /// produced.
    fn next_uniform(&mut self) -> Result<f64>;
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    #[inline]
    fn seed(&mut self, value: u64) {
        (**self).seed(value)
    }

    #[inline]
    fn next_uniform(&mut self) -> Result<f64> {
        (**self).next_uniform()
    }
}

/// Returns a seed derived from the wall clock.
///
/// Nanosecond resolution, so two processes started within the same second
/// still receive different seeds. A clock set before the Unix epoch yields 0;
/// one past the `u64` nanosecond range saturates to `u64::MAX`.
pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX))
        .unwrap_or_default()
}

/// Uniform source backed by a `rand` generator.
///
/// The inner generator does not exist until [`UniformSource::seed`] is
/// called; drawing earlier is a `SourceFailure`.
///
/// # Examples
///
/// ```rust
/// use normal_rng::rng::{SeededUniform, UniformSource};
///
/// let mut source: SeededUniform = SeededUniform::new();
/// assert!(source.next_uniform().is_err());
///
/// source.seed(42);
/// let u = source.next_uniform().unwrap();
/// assert!((0.0..1.0).contains(&u));
/// assert_eq!(source.seed_count(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct SeededUniform<R = StdRng> {
    inner: Option<R>,
    seed_count: usize,
}

impl<R> SeededUniform<R> {
    /// Creates an unseeded source.
    pub fn new() -> Self {
        Self {
            inner: None,
            seed_count: 0,
        }
    }

    /// Returns how many times the source has been seeded.
    #[inline]
    pub fn seed_count(&self) -> usize {
        self.seed_count
    }

    /// Returns `true` once the source has been seeded.
    #[inline]
    pub fn is_seeded(&self) -> bool {
        self.inner.is_some()
    }
}

impl<R> Default for SeededUniform<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng + SeedableRng> UniformSource for SeededUniform<R> {
    fn seed(&mut self, value: u64) {
        self.inner = Some(R::seed_from_u64(value));
        self.seed_count += 1;
    }

    #[inline]
    fn next_uniform(&mut self) -> Result<f64> {
        match self.inner.as_mut() {
            Some(rng) => Ok(rng.gen::<f64>()),
            None => Err(NormalError::SourceFailure(
                "uniform source drawn before seeding".to_string(),
            )),
        }
    }
}

/// Uniform source replaying a fixed sequence of values.
///
/// Seeding is recorded but does not alter the sequence. Once every value has
/// been consumed, draws return `SourceExhausted`.
///
/// # Examples
///
/// ```rust
/// use normal_rng::rng::{ScriptedSource, UniformSource};
///
/// let mut source = ScriptedSource::new(vec![0.5, 0.25]);
/// source.seed(1);
/// assert_eq!(source.next_uniform().unwrap(), 0.5);
/// assert_eq!(source.next_uniform().unwrap(), 0.25);
/// assert!(source.next_uniform().is_err());
/// assert_eq!(source.seed_calls(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    values: Vec<f64>,
    cursor: usize,
    seed_calls: usize,
    last_seed: Option<u64>,
}

impl ScriptedSource {
    /// Creates a source that yields `values` in order.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            ..Self::default()
        }
    }

    /// Returns how many times [`UniformSource::seed`] was invoked.
    #[inline]
    pub fn seed_calls(&self) -> usize {
        self.seed_calls
    }

    /// Returns the most recent seed passed in, if any.
    #[inline]
    pub fn last_seed(&self) -> Option<u64> {
        self.last_seed
    }

    /// Returns the number of values drawn so far.
    #[inline]
    pub fn drawn(&self) -> usize {
        self.cursor
    }

    /// Returns the number of values not yet drawn.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.values.len() - self.cursor
    }
}

impl UniformSource for ScriptedSource {
    fn seed(&mut self, value: u64) {
        self.seed_calls += 1;
        self.last_seed = Some(value);
    }

    fn next_uniform(&mut self) -> Result<f64> {
        let value = self
            .values
            .get(self.cursor)
            .copied()
            .ok_or(NormalError::SourceExhausted { drawn: self.cursor })?;
        self.cursor += 1;
        Ok(value)
    }
}
