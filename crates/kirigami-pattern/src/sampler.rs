//! Radius sampling between the inner and outer bounds.

use crate::error::Warning;
use crate::params::SpacingLaw;

/// Inner radius substituted when log spacing is requested with a zero
/// inner bound.
///
/// `ln(0)` is undefined, so the sampler clamps the inner bound to this
/// value instead of rejecting the input, and reports a
/// [`Warning::LogSpacingZeroInner`]. This is a documented approximation:
/// the resulting spacing is not exact at the zero-radius limit.
pub const LOG_EPSILON: f64 = 0.01;

/// Sample `count` strictly increasing radii strictly between `inner` and
/// `outer` (both bounds excluded).
///
/// `count = 0` yields an empty sequence, which is a valid result. The
/// returned warning is `Some` only for the log-spacing epsilon
/// substitution described on [`LOG_EPSILON`].
pub fn sample_radii(
    inner: f64,
    outer: f64,
    count: u32,
    law: SpacingLaw,
    exponent: f64,
) -> (Vec<f64>, Option<Warning>) {
    let mut warning = None;
    let inner = if law == SpacingLaw::Log && inner == 0.0 {
        warning = Some(Warning::LogSpacingZeroInner {
            substituted: LOG_EPSILON,
        });
        LOG_EPSILON
    } else {
        inner
    };

    let denom = f64::from(count + 1);
    let mut radii = Vec::with_capacity(count as usize);
    for i in 1..=count {
        let t = f64::from(i) / denom;
        let r = match law {
            SpacingLaw::Linear => inner + (outer - inner) * t,
            SpacingLaw::Power => inner + (outer - inner) * t.powf(exponent),
            SpacingLaw::Log => {
                let log_inner = inner.ln();
                (log_inner + (outer.ln() - log_inner) * t).exp()
            }
        };
        radii.push(r);
    }
    (radii, warning)
}

/// Sample `count + 2` linearly spaced radii including both bounds.
///
/// Used where a bounds-inclusive sequence is needed, such as the dash
/// steps of the radial-lines pattern.
pub fn sample_steps(inner: f64, outer: f64, count: u32) -> Vec<f64> {
    let denom = f64::from(count + 1);
    (0..=count + 1)
        .map(|i| inner + (outer - inner) * f64::from(i) / denom)
        .collect()
}
