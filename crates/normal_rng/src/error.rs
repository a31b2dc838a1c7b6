//! Error types for normal sampling.
//!
//! Argument errors are reported before any output slot is written.
//! Degenerate uniform draws (exactly 0.0 for the logarithm input) are
//! resampled internally and only surface as [`NormalError::SourceFailure`]
//! when the configured resample limit is exceeded.

use thiserror::Error;

/// Errors raised by generators and uniform sources.
///
/// # Examples
/// ```
/// use normal_rng::NormalError;
///
/// let err = NormalError::InvalidArgument {
///     name: "count",
///     reason: "must be positive".to_string(),
/// };
/// assert_eq!(format!("{}", err), "Invalid argument 'count': must be positive");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NormalError {
    /// A caller-supplied argument violates the operation contract.
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument {
        /// Argument name.
        name: &'static str,
        /// Description of the violation.
        reason: String,
    },

    /// Generator configuration failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A finite uniform source has no values left.
    #[error("Uniform source exhausted after {drawn} draws")]
    SourceExhausted {
        /// Number of values drawn before exhaustion.
        drawn: usize,
    },

    /// The uniform source could not produce a usable value.
    #[error("Uniform source failure: {0}")]
    SourceFailure(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NormalError>;

impl NormalError {
    /// Shorthand for [`NormalError::InvalidArgument`].
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}
