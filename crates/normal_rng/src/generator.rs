//! Standard normal generator with a once-seeded uniform source.
//!
//! [`NormalGenerator`] owns its [`UniformSource`] and seeds it lazily on the
//! first draw, either from the configured seed or from the wall clock. Later
//! calls never re-seed.
//!
//! Output is written into caller-owned storage. Arguments are validated
//! before the first slot is touched, and a batch writes exactly the slots
//! `[0, count)`.

use tracing::debug;

use crate::config::GeneratorConfig;
use crate::error::{NormalError, Result};
use crate::rng::{sample_normal, time_seed, SeededUniform, UniformSource};

/// Where a dispatched call writes its output.
///
/// # Examples
///
/// ```rust
/// use normal_rng::{GeneratorConfig, NormalGenerator, Request};
///
/// let config = GeneratorConfig::builder().seed(3).build().unwrap();
/// let mut generator = NormalGenerator::with_config(config);
///
/// let mut one = 0.0;
/// generator.dispatch(Request::Single(&mut one)).unwrap();
///
/// let mut many = [0.0; 8];
/// generator.dispatch(Request::batch(&mut many)).unwrap();
/// ```
#[derive(Debug)]
pub enum Request<'a> {
    /// Write one value into a scalar location.
    Single(&'a mut f64),
    /// Write `count` values into `output[..count]`.
    Batch {
        /// Destination buffer; must hold at least `count` slots.
        output: &'a mut [f64],
        /// Number of values to write.
        count: usize,
    },
}

impl<'a> Request<'a> {
    /// Requests one value per slot of `output`.
    #[inline]
    pub fn batch(output: &'a mut [f64]) -> Self {
        let count = output.len();
        Request::Batch { output, count }
    }
}

/// Standard normal generator using the Box-Muller transform.
///
/// Not thread-safe; give each thread its own generator or share one behind
/// a lock (see [`crate::process`]).
///
/// # Examples
///
/// ```rust
/// use normal_rng::{GeneratorConfig, NormalGenerator};
///
/// let config = GeneratorConfig::builder().seed(42).build().unwrap();
/// let mut generator = NormalGenerator::with_config(config);
///
/// let z = generator.generate_one().unwrap();
/// assert!(z.is_finite());
///
/// let batch = generator.generate_many(100).unwrap();
/// assert_eq!(batch.len(), 100);
/// assert_eq!(generator.seed(), Some(42));
/// ```
#[derive(Debug)]
pub struct NormalGenerator<S = SeededUniform> {
    source: S,
    config: GeneratorConfig,
    /// Seed applied to `source`; `None` until the first draw.
    seed: Option<u64>,
}

impl NormalGenerator {
    /// Creates a clock-seeded generator over the default `rand` source.
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    /// Creates a generator over the default `rand` source.
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self::with_source(SeededUniform::new(), config)
    }
}

impl Default for NormalGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: UniformSource> NormalGenerator<S> {
    /// Creates a generator drawing from `source`.
    ///
    /// `source` is seeded on the first draw, not here.
    pub fn with_source(source: S, config: GeneratorConfig) -> Self {
        Self {
            source,
            config,
            seed: None,
        }
    }

    /// Returns the seed applied to the source, or `None` before the first draw.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns `true` once the source has been seeded.
    #[inline]
    pub fn is_seeded(&self) -> bool {
        self.seed.is_some()
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Returns the underlying uniform source.
    #[inline]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Consumes the generator, returning its uniform source.
    pub fn into_source(self) -> S {
        self.source
    }

    fn ensure_seeded(&mut self) {
        if self.seed.is_some() {
            return;
        }
        let (seed, origin) = match self.config.seed() {
            Some(fixed) => (fixed, "fixed"),
            None => (time_seed(), "clock"),
        };
        self.source.seed(seed);
        self.seed = Some(seed);
        debug!(seed, origin, "seeded uniform source");
    }

    /// Generates one standard normal variate.
    ///
    /// # Errors
    ///
    /// Propagates source failures, including a run of 0.0 draws longer than
    /// the configured resample limit.
    pub fn generate_one(&mut self) -> Result<f64> {
        self.ensure_seeded();
        sample_normal(&mut self.source, self.config.max_resamples())
    }

    /// Fills `destination[..count]` with independent standard normal variates.
    ///
    /// Slots are written in index order. Slots at or beyond `count` are
    /// never touched.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument`, with nothing written, if `count` is 0 or
    /// exceeds `destination.len()`. A source failure stops the fill; slots
    /// already written keep their values.
    pub fn fill(&mut self, destination: &mut [f64], count: usize) -> Result<()> {
        validate_batch(destination.len(), count)?;
        self.ensure_seeded();
        let max_resamples = self.config.max_resamples();
        for slot in destination[..count].iter_mut() {
            *slot = sample_normal(&mut self.source, max_resamples)?;
        }
        Ok(())
    }

    /// Generates `count` standard normal variates into a new vector.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `count` is 0 or a buffer of `count`
    /// values cannot be allocated, otherwise as [`Self::fill`].
    pub fn generate_many(&mut self, count: usize) -> Result<Vec<f64>> {
        validate_count(count)?;
        let mut values = Vec::new();
        values.try_reserve_exact(count).map_err(|e| {
            NormalError::invalid_argument(
                "count",
                format!("cannot allocate {} values: {}", count, e),
            )
        })?;
        values.resize(count, 0.0);
        self.fill(&mut values, count)?;
        Ok(values)
    }

    /// Serves a single or batched request.
    pub fn dispatch(&mut self, request: Request<'_>) -> Result<()> {
        match request {
            Request::Single(output) => {
                *output = self.generate_one()?;
                Ok(())
            }
            Request::Batch { output, count } => self.fill(output, count),
        }
    }
}

fn validate_count(count: usize) -> Result<()> {
    if count == 0 {
        return Err(NormalError::invalid_argument(
            "count",
            "must be positive, got 0",
        ));
    }
    Ok(())
}

fn validate_batch(capacity: usize, count: usize) -> Result<()> {
    validate_count(count)?;
    if capacity < count {
        return Err(NormalError::invalid_argument(
            "destination",
            format!("holds {} slots but {} values were requested", capacity, count),
        ));
    }
    Ok(())
}
