//! # normal_rng
//!
//! Standard normal (mean 0, standard deviation 1) samples from a uniform
//! source via the Box-Muller transform, cosine branch only.
//!
//! ## Entry Points
//!
//! - [`NormalGenerator`]: an owned generator; seeds its source once, on the
//!   first draw, from a fixed override or the wall clock
//! - [`process`]: free functions over one process-wide generator
//! - [`Request`]: explicit single-value or batch request for
//!   [`NormalGenerator::dispatch`] and [`process::random_bm`]
//!
//! ## Usage Example
//!
//! ```rust
//! use normal_rng::{GeneratorConfig, NormalGenerator};
//!
//! let config = GeneratorConfig::builder().seed(12345).build().unwrap();
//! let mut generator = NormalGenerator::with_config(config);
//!
//! let z = generator.generate_one().unwrap();
//!
//! let mut buffer = vec![0.0; 1000];
//! generator.fill(&mut buffer, 1000).unwrap();
//! ```
//!
//! ## Logging
//!
//! Events are emitted through `tracing`; install a subscriber to see them.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod generator;
pub mod process;
pub mod rng;

pub use config::{GeneratorConfig, GeneratorConfigBuilder};
pub use error::{NormalError, Result};
pub use generator::{NormalGenerator, Request};
