//! Box-Muller transform (cosine branch).
//!
//! Two independent uniforms `x1, x2` map to one standard normal variate:
//!
//! ```text
//! z = sqrt(-2 ln x1) * cos(2 pi x2)
//! ```
//!
//! `x1 = 0.0` would make the logarithm diverge, so it is redrawn.

use rand::Rng;
use rand_distr::Distribution;
use std::f64::consts::TAU;
use tracing::trace;

use super::source::UniformSource;
use crate::error::{NormalError, Result};

/// Applies the transform to a pair of uniforms.
///
/// `x1` must lie in (0, 1) and `x2` in [0, 1); callers that cannot
/// guarantee `x1 > 0` should go through a generator, which resamples.
///
/// # Examples
///
/// ```rust
/// use normal_rng::rng::box_muller;
///
/// let z = box_muller(0.5, 0.0);
/// assert!((z - (2.0_f64 * std::f64::consts::LN_2).sqrt()).abs() < 1e-15);
/// ```
#[inline]
pub fn box_muller(x1: f64, x2: f64) -> f64 {
    (-2.0 * x1.ln()).sqrt() * (TAU * x2).cos()
}

/// Draws one value and checks it lies in [0, 1).
#[inline]
fn checked_draw<S: UniformSource + ?Sized>(source: &mut S) -> Result<f64> {
    let value = source.next_uniform()?;
    if (0.0..1.0).contains(&value) {
        Ok(value)
    } else {
        Err(NormalError::SourceFailure(format!(
            "draw {} outside [0, 1)",
            value
        )))
    }
}

/// Draws `(x1, x2)`, redrawing `x1` while it is exactly 0.0.
///
/// At most `max_resamples` redraws are attempted before giving up.
pub(crate) fn draw_pair<S: UniformSource + ?Sized>(
    source: &mut S,
    max_resamples: usize,
) -> Result<(f64, f64)> {
    let mut x1 = checked_draw(source)?;
    let mut resamples = 0;
    while x1 == 0.0 {
        if resamples == max_resamples {
            return Err(NormalError::SourceFailure(format!(
                "uniform source returned 0.0 on {} consecutive draws",
                resamples + 1
            )));
        }
        resamples += 1;
        trace!(resamples, "resampling degenerate uniform draw");
        x1 = checked_draw(source)?;
    }
    let x2 = checked_draw(source)?;
    Ok((x1, x2))
}

/// Produces one standard normal variate from `source`.
#[inline]
pub(crate) fn sample_normal<S: UniformSource + ?Sized>(
    source: &mut S,
    max_resamples: usize,
) -> Result<f64> {
    let (x1, x2) = draw_pair(source, max_resamples)?;
    Ok(box_muller(x1, x2))
}

/// The transform as a `rand_distr` distribution.
///
/// Lets the same cosine-branch transform be sampled from any `rand::Rng`
/// without going through a [`UniformSource`].
///
/// `Distribution::sample` cannot fail, so 0.0 draws are redrawn without the
/// `max_resamples` cap a generator applies. A `rand::Rng` that yields 0.0
/// forever will not return.
///
/// # Examples
///
/// ```rust
/// use normal_rng::rng::BoxMuller;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use rand_distr::Distribution;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let z: f64 = BoxMuller.sample(&mut rng);
/// assert!(z.is_finite());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoxMuller;

impl Distribution<f64> for BoxMuller {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let mut x1: f64 = rng.gen();
        while x1 == 0.0 {
            x1 = rng.gen();
        }
        let x2: f64 = rng.gen();
        box_muller(x1, x2)
    }
}
