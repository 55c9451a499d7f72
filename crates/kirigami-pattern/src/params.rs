//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::error::{PatternError, Result};

/// Radial spacing law for intermediate rings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpacingLaw {
    /// Uniform spacing between the inner and outer radius.
    #[default]
    Linear,
    /// Uniform spacing in a normalized [0, 1] parameter raised to
    /// [`Parameters::radial_exponent`] before mapping to the radius range.
    /// An exponent above 1 clusters rings toward the outer edge, below 1
    /// toward the inner edge; exponent 1 degenerates to linear.
    Power,
    /// Uniform spacing in log-space. Requires a strictly positive inner
    /// radius; a zero inner radius is substituted with
    /// [`LOG_EPSILON`](crate::sampler::LOG_EPSILON) and reported as a
    /// [`Warning`](crate::Warning).
    Log,
}

/// Pattern family to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PatternKind {
    /// Intermittent arcs on concentric rings, optionally staggered.
    #[default]
    ConcentricArcs,
    /// Intermittent arcs with a cumulative per-ring angular twist.
    SpiralArcs,
    /// Intermittent line segments running outward along fixed rays.
    RadialLines,
}

/// Immutable configuration for one pattern generation.
///
/// Build one, call [`validate`](Parameters::validate) (or let
/// [`generate`](crate::generate) do it), and hand it to the engine. All
/// lengths share one unit; angles are degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    /// Inner radius of the panel. May be zero for patterns reaching the
    /// center.
    pub inner_radius: f64,
    /// Outer radius of the panel. Must exceed `inner_radius`.
    pub outer_radius: f64,
    /// Number of intermediate rings (or radial dash steps). Zero is valid
    /// and yields no intermediate geometry.
    pub ring_count: u32,
    /// Number of arc segments per ring, or of radial rays.
    pub segment_count: u32,
    /// Fraction of each segment that is drawn versus left as a gap,
    /// in (0, 1].
    pub arc_fraction: f64,
    /// Spacing law for intermediate ring radii.
    pub spacing: SpacingLaw,
    /// Exponent for [`SpacingLaw::Power`]; ignored by the other laws.
    pub radial_exponent: f64,
    /// Cumulative twist per ring in degrees for
    /// [`PatternKind::SpiralArcs`]. May exceed 360; the engine does not
    /// normalize angles.
    pub spiral_twist_deg: f64,
    /// Which pattern family to generate.
    pub pattern: PatternKind,
    /// Stagger adjacent rings by half a segment so gaps do not align
    /// radially (concentric arcs only).
    pub stagger: bool,
    /// Draw full circles at the inner and outer radius.
    pub draw_bounds: bool,
    /// Radius of a central attachment hole; zero for none.
    pub central_hole_radius: f64,
    /// Stroke width carried by every emitted primitive.
    pub stroke_width: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            inner_radius: 0.0,
            outer_radius: 0.0,
            ring_count: 10,
            segment_count: 20,
            arc_fraction: 0.8,
            spacing: SpacingLaw::Linear,
            radial_exponent: 1.0,
            spiral_twist_deg: 10.0,
            pattern: PatternKind::ConcentricArcs,
            stagger: false,
            draw_bounds: false,
            central_hole_radius: 0.0,
            stroke_width: 0.1,
        }
    }
}

impl Parameters {
    /// Parameters for a panel of the given outer radius, with every other
    /// field at its default.
    pub fn new(outer_radius: f64) -> Self {
        Self {
            outer_radius,
            ..Self::default()
        }
    }

    /// Check every invariant, failing fast before any geometry is
    /// generated.
    ///
    /// The comparisons are written so that NaN in any field fails rather
    /// than passes.
    pub fn validate(&self) -> Result<()> {
        if !(self.inner_radius >= 0.0 && self.inner_radius < self.outer_radius) {
            return Err(PatternError::InvalidRadii {
                inner: self.inner_radius,
                outer: self.outer_radius,
            });
        }
        if !(self.arc_fraction > 0.0 && self.arc_fraction <= 1.0) {
            return Err(PatternError::InvalidArcFraction(self.arc_fraction));
        }
        if self.segment_count == 0 {
            return Err(PatternError::ZeroSegments);
        }
        if !(self.central_hole_radius >= 0.0) {
            return Err(PatternError::NegativeHole(self.central_hole_radius));
        }
        if !(self.stroke_width > 0.0) {
            return Err(PatternError::InvalidStrokeWidth(self.stroke_width));
        }
        if self.spacing == SpacingLaw::Power && !(self.radial_exponent > 0.0) {
            return Err(PatternError::InvalidExponent(self.radial_exponent));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid_given_an_outer_radius() {
        let params = Parameters::new(50.0);
        assert!(params.validate().is_ok());
        assert_eq!(params.ring_count, 10);
        assert_eq!(params.segment_count, 20);
        assert!((params.arc_fraction - 0.8).abs() < 1e-15);
    }

    #[test]
    fn inner_must_be_below_outer() {
        let mut params = Parameters::new(10.0);
        params.inner_radius = 10.0;
        assert!(matches!(
            params.validate(),
            Err(PatternError::InvalidRadii { .. })
        ));

        params.inner_radius = -1.0;
        assert!(matches!(
            params.validate(),
            Err(PatternError::InvalidRadii { .. })
        ));
    }

    #[test]
    fn arc_fraction_bounds() {
        let mut params = Parameters::new(10.0);
        params.arc_fraction = 0.0;
        assert_eq!(
            params.validate(),
            Err(PatternError::InvalidArcFraction(0.0))
        );

        params.arc_fraction = 1.0;
        assert!(params.validate().is_ok());

        params.arc_fraction = 1.0 + 1e-9;
        assert!(params.validate().is_err());
    }

    #[test]
    fn zero_segments_rejected() {
        let mut params = Parameters::new(10.0);
        params.segment_count = 0;
        assert_eq!(params.validate(), Err(PatternError::ZeroSegments));
    }

    #[test]
    fn zero_ring_count_is_valid() {
        let mut params = Parameters::new(10.0);
        params.ring_count = 0;
        assert!(params.validate().is_ok());
    }

    #[test]
    fn negative_hole_rejected() {
        let mut params = Parameters::new(10.0);
        params.central_hole_radius = -0.5;
        assert_eq!(params.validate(), Err(PatternError::NegativeHole(-0.5)));
    }

    #[test]
    fn power_spacing_requires_positive_exponent() {
        let mut params = Parameters::new(10.0);
        params.spacing = SpacingLaw::Power;
        params.radial_exponent = 0.0;
        assert_eq!(params.validate(), Err(PatternError::InvalidExponent(0.0)));

        // Only power spacing cares about the exponent.
        params.spacing = SpacingLaw::Linear;
        assert!(params.validate().is_ok());
    }

    #[test]
    fn nan_fields_fail_validation() {
        let mut params = Parameters::new(10.0);
        params.arc_fraction = f64::NAN;
        assert!(params.validate().is_err());

        let mut params = Parameters::new(f64::NAN);
        params.arc_fraction = 0.8;
        assert!(params.validate().is_err());
    }
}
