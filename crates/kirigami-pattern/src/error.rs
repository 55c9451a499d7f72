//! Error and warning types for pattern generation.

use std::fmt;
use thiserror::Error;

/// Errors from validating parameters or generating a pattern.
///
/// All of these are raised eagerly, before any geometry is produced;
/// there is never partial output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PatternError {
    /// Radii must satisfy `0 <= inner < outer`.
    #[error("invalid radii: inner {inner} must be >= 0 and less than outer {outer}")]
    InvalidRadii {
        /// Inner radius as given.
        inner: f64,
        /// Outer radius as given.
        outer: f64,
    },

    /// Arc fraction must lie in (0, 1].
    #[error("arc fraction {0} is outside (0, 1]")]
    InvalidArcFraction(f64),

    /// Segment count must be at least 1.
    #[error("segment count must be at least 1")]
    ZeroSegments,

    /// Central hole radius must be non-negative.
    #[error("central hole radius {0} is negative")]
    NegativeHole(f64),

    /// Stroke width must be positive.
    #[error("stroke width {0} must be positive")]
    InvalidStrokeWidth(f64),

    /// Radial exponent for power spacing must be positive.
    #[error("radial exponent {0} must be positive")]
    InvalidExponent(f64),
}

/// Result type for pattern operations.
pub type Result<T> = std::result::Result<T, PatternError>;

/// Non-fatal conditions surfaced to the caller during generation.
///
/// Warnings never abort generation; they report a documented substitution
/// or approximation so callers can relay it rather than swallow it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Warning {
    /// Log spacing was requested with a zero inner radius. `ln(0)` is
    /// undefined, so the sampler substituted
    /// [`LOG_EPSILON`](crate::sampler::LOG_EPSILON) for the inner bound.
    LogSpacingZeroInner {
        /// The radius actually used in place of zero.
        substituted: f64,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::LogSpacingZeroInner { substituted } => write!(
                f,
                "log spacing with zero inner radius; substituted {substituted}"
            ),
        }
    }
}
