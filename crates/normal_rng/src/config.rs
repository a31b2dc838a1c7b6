//! Generator configuration.
//!
//! This module provides [`GeneratorConfig`] and its builder. A configuration
//! decides how the uniform source is seeded (fixed override or wall clock)
//! and how many consecutive degenerate draws a single sample may resample.

use crate::error::{NormalError, Result};

/// Default limit on consecutive 0.0 draws resampled for one sample.
pub const DEFAULT_MAX_RESAMPLES: usize = 64;

/// Environment variable holding an optional decimal `u64` seed override.
pub const SEED_ENV_VAR: &str = "NORMAL_RNG_SEED";

/// Normal generator configuration.
///
/// Immutable once built. Use [`GeneratorConfigBuilder`] to construct
/// instances, or [`GeneratorConfig::default`] for time-based seeding.
///
/// # Examples
///
/// ```rust
/// use normal_rng::GeneratorConfig;
///
/// let config = GeneratorConfig::builder()
///     .seed(42)
///     .max_resamples(16)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.seed(), Some(42));
/// assert_eq!(config.max_resamples(), 16);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Explicit seed; `None` seeds from the wall clock on first draw.
    seed: Option<u64>,
    /// Upper bound on consecutive degenerate x1 redraws.
    max_resamples: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_resamples: DEFAULT_MAX_RESAMPLES,
        }
    }
}

impl GeneratorConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }

    /// Returns the explicit seed override, if any.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the resample limit for degenerate draws.
    #[inline]
    pub fn max_resamples(&self) -> usize {
        self.max_resamples
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `max_resamples` is 0.
    pub fn validate(&self) -> Result<()> {
        if self.max_resamples == 0 {
            return Err(NormalError::InvalidConfig(
                "max_resamples must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Loads the configuration from the process environment.
    ///
    /// Reads [`SEED_ENV_VAR`]; when it is unset the seed stays time-based.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the variable is set but is not a decimal
    /// `u64`.
    pub fn from_env() -> Result<Self> {
        let raw = std::env::var(SEED_ENV_VAR).ok();
        Self::from_seed_override(raw.as_deref())
    }

    /// Builds a configuration from a raw seed override string.
    ///
    /// Blank strings are treated as absent.
    pub fn from_seed_override(raw: Option<&str>) -> Result<Self> {
        let mut builder = Self::builder();
        if let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) {
            let seed = value.parse::<u64>().map_err(|e| {
                NormalError::InvalidConfig(format!("{SEED_ENV_VAR}='{value}': {e}"))
            })?;
            builder = builder.seed(seed);
        }
        builder.build()
    }
}

/// Builder for [`GeneratorConfig`].
#[derive(Clone, Debug, Default)]
pub struct GeneratorConfigBuilder {
    seed: Option<u64>,
    max_resamples: Option<usize>,
}

impl GeneratorConfigBuilder {
    /// Fixes the seed instead of deriving it from the clock.
    ///
    /// # Arguments
    ///
    /// * `seed` - 64-bit seed value
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the limit on consecutive degenerate draws for one sample.
    #[inline]
    pub fn max_resamples(mut self, max_resamples: usize) -> Self {
        self.max_resamples = Some(max_resamples);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if validation fails.
    pub fn build(self) -> Result<GeneratorConfig> {
        let config = GeneratorConfig {
            seed: self.seed,
            max_resamples: self.max_resamples.unwrap_or(DEFAULT_MAX_RESAMPLES),
        };

        config.validate()?;
        Ok(config)
    }
}
