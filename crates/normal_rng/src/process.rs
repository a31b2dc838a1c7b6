//! Process-wide generator and free-function entry points.
//!
//! The first call constructs a single [`NormalGenerator`] from
//! [`GeneratorConfig::from_env`]; its source is seeded on the first draw and
//! never again for the life of the process. Access is serialised by a mutex.
//!
//! # Examples
//!
//! ```rust
//! use normal_rng::process::{generate_many, generate_one, process_seed, random_bm};
//! use normal_rng::Request;
//!
//! let z = generate_one().unwrap();
//! assert!(z.is_finite());
//!
//! let batch = generate_many(16).unwrap();
//! assert_eq!(batch.len(), 16);
//!
//! let mut buffer = [0.0; 4];
//! random_bm(Request::batch(&mut buffer)).unwrap();
//! assert!(process_seed().is_some());
//! ```

use std::sync::{Mutex, OnceLock};
use tracing::{debug, warn};

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::generator::{NormalGenerator, Request};

static PROCESS_GENERATOR: OnceLock<Mutex<NormalGenerator>> = OnceLock::new();

fn init_process_generator() -> Mutex<NormalGenerator> {
    let config = GeneratorConfig::from_env().unwrap_or_else(|err| {
        warn!(error = %err, "ignoring seed override, falling back to clock seeding");
        GeneratorConfig::default()
    });
    debug!(fixed_seed = ?config.seed(), "process generator created");
    Mutex::new(NormalGenerator::with_config(config))
}

fn with_process_generator<T>(f: impl FnOnce(&mut NormalGenerator) -> T) -> T {
    let lock = PROCESS_GENERATOR.get_or_init(init_process_generator);
    // A panic while holding the lock cannot leave the generator half-updated.
    let mut generator = lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    f(&mut generator)
}

/// Generates one standard normal variate from the process generator.
pub fn generate_one() -> Result<f64> {
    with_process_generator(|generator| generator.generate_one())
}

/// Generates `count` standard normal variates from the process generator.
///
/// # Errors
///
/// Returns `InvalidArgument` if `count` is 0.
pub fn generate_many(count: usize) -> Result<Vec<f64>> {
    with_process_generator(|generator| generator.generate_many(count))
}

/// Serves a single or batched request from the process generator.
pub fn random_bm(request: Request<'_>) -> Result<()> {
    with_process_generator(|generator| generator.dispatch(request))
}

/// Returns the seed applied to the process generator, or `None` before the
/// first draw.
pub fn process_seed() -> Option<u64> {
    PROCESS_GENERATOR
        .get()
        .and_then(|_| with_process_generator(|generator| generator.seed()))
}
