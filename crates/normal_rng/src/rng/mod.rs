//! # Uniform Sources and the Box-Muller Transform
//!
//! This module holds the pieces a [`crate::NormalGenerator`] is built from:
//!
//! - [`UniformSource`]: the seeded uniform collaborator
//! - [`SeededUniform`]: a source backed by `rand` (`StdRng` by default)
//! - [`ScriptedSource`]: a source replaying fixed values, for determinism
//! - [`box_muller`] and [`BoxMuller`]: the cosine-branch transform
//! - [`time_seed`]: the wall-clock seed used when no override is configured
//!
//! ## Usage Example
//!
//! ```rust
//! use normal_rng::rng::{box_muller, ScriptedSource, UniformSource};
//!
//! let mut source = ScriptedSource::new(vec![0.5, 0.125]);
//! source.seed(0);
//! let x1 = source.next_uniform().unwrap();
//! let x2 = source.next_uniform().unwrap();
//! let z = box_muller(x1, x2);
//! assert!(z > 0.0);
//! ```

mod source;
mod transform;

pub use source::{time_seed, ScriptedSource, SeededUniform, UniformSource};
pub use transform::{box_muller, BoxMuller};

pub(crate) use transform::sample_normal;

#[cfg(test)]
mod tests;
