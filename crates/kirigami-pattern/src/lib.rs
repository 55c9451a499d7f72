#![warn(missing_docs)]

//! Parametric cut-pattern engine for circular kirigami panels.
//!
//! Given a small set of numeric parameters (radii, segment counts, a
//! spacing law, stagger or spiral offsets) the engine deterministically
//! produces an ordered list of geometric primitives — arcs, line
//! segments, circles — laid out in polar coordinates with controlled
//! gaps, forming an intermittent (perforated) cut pattern for folding
//! and cutting.
//!
//! Three pattern families are supported:
//!
//! - **Concentric arcs**: dashed rings, optionally staggered so gaps do
//!   not align radially.
//! - **Spiral arcs**: dashed rings with a cumulative per-ring twist.
//! - **Radial lines**: dashes running outward along fixed rays.
//!
//! Generation is a pure function of its [`Parameters`]: no I/O, no
//! shared state, `O(ring_count * segment_count)`, trivially safe to run
//! concurrently for independent parameter sets. Rendering the resulting
//! [`Scene`] to a file is a downstream concern (see the `kirigami-svg`
//! crate).
//!
//! # Example
//!
//! ```
//! use kirigami_pattern::{generate, Parameters};
//!
//! let mut params = Parameters::new(50.0);
//! params.inner_radius = 10.0;
//! params.stagger = true;
//! params.draw_bounds = true;
//!
//! let generated = generate(&params).unwrap();
//! assert!(!generated.scene.is_empty());
//! assert_eq!(generated.scene.extent, 50.0 * 1.1);
//! ```

pub mod error;
pub mod params;
pub mod pattern;
pub mod sampler;
pub mod scene;

pub use error::{PatternError, Result, Warning};
pub use params::{Parameters, PatternKind, SpacingLaw};
pub use pattern::Segmentation;
pub use scene::{assemble, Point2, Primitive, Scene};

/// Output of [`generate`]: the assembled scene plus any non-fatal
/// warnings raised along the way.
#[derive(Debug, Clone)]
pub struct Generated {
    /// The assembled drawing.
    pub scene: Scene,
    /// Degenerate-input conditions that were worked around rather than
    /// rejected. Empty in the common case.
    pub warnings: Vec<Warning>,
}

/// Generate the complete scene for one parameter set.
///
/// Validates `params` up front and fails before producing any geometry;
/// there is never partial output.
pub fn generate(params: &Parameters) -> Result<Generated> {
    params.validate()?;

    let seg = Segmentation::new(params.segment_count, params.arc_fraction)?;
    let mut warnings = Vec::new();

    let primitives = match params.pattern {
        PatternKind::ConcentricArcs | PatternKind::SpiralArcs => {
            let (radii, warning) = sampler::sample_radii(
                params.inner_radius,
                params.outer_radius,
                params.ring_count,
                params.spacing,
                params.radial_exponent,
            );
            warnings.extend(warning);
            if params.pattern == PatternKind::ConcentricArcs {
                pattern::concentric_arcs(&radii, seg, params.stagger, params.stroke_width)
            } else {
                pattern::spiral_arcs(&radii, seg, params.spiral_twist_deg, params.stroke_width)
            }
        }
        PatternKind::RadialLines => pattern::radial_lines(
            params.inner_radius,
            params.outer_radius,
            params.ring_count,
            seg,
            params.arc_fraction,
            params.stroke_width,
        ),
    };

    Ok(Generated {
        scene: assemble(primitives, params),
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_params() -> Parameters {
        let mut params = Parameters::new(50.0);
        params.inner_radius = 10.0;
        params.ring_count = 5;
        params.segment_count = 8;
        params
    }

    #[test]
    fn concentric_workflow_emits_one_arc_per_sector_per_ring() {
        let generated = generate(&base_params()).unwrap();
        assert_eq!(generated.scene.len(), 5 * 8);
        assert!(generated.warnings.is_empty());
        assert!(generated
            .scene
            .primitives
            .iter()
            .all(|p| matches!(p, Primitive::Arc { .. })));
    }

    #[test]
    fn spiral_workflow_twists_each_ring() {
        let mut params = base_params();
        params.pattern = PatternKind::SpiralArcs;
        params.spiral_twist_deg = 15.0;

        let generated = generate(&params).unwrap();
        assert_eq!(generated.scene.len(), 5 * 8);

        // Ring 1's first arc starts at the twist angle.
        match &generated.scene.primitives[8] {
            Primitive::Arc {
                start_angle_deg, ..
            } => assert!((start_angle_deg - 15.0).abs() < 1e-12),
            other => panic!("expected arc, got {other:?}"),
        }
    }

    #[test]
    fn radial_workflow_emits_dashes_on_every_ray() {
        let mut params = base_params();
        params.pattern = PatternKind::RadialLines;

        let generated = generate(&params).unwrap();
        // ring_count + 1 dashes per ray.
        assert_eq!(generated.scene.len(), 8 * 6);
        assert!(generated
            .scene
            .primitives
            .iter()
            .all(|p| matches!(p, Primitive::Segment { .. })));
    }

    #[test]
    fn zero_segment_count_fails_for_every_family() {
        for kind in [
            PatternKind::ConcentricArcs,
            PatternKind::SpiralArcs,
            PatternKind::RadialLines,
        ] {
            let mut params = base_params();
            params.pattern = kind;
            params.segment_count = 0;
            let err = generate(&params).unwrap_err();
            assert_eq!(err, PatternError::ZeroSegments);
        }
    }

    #[test]
    fn log_spacing_warning_reaches_the_caller() {
        let mut params = base_params();
        params.inner_radius = 0.0;
        params.spacing = SpacingLaw::Log;

        let generated = generate(&params).unwrap();
        assert_eq!(generated.warnings.len(), 1);
        assert!(matches!(
            generated.warnings[0],
            Warning::LogSpacingZeroInner { .. }
        ));
    }

    #[test]
    fn assembly_flags_add_bounds_and_hole() {
        let mut params = base_params();
        params.draw_bounds = true;
        params.central_hole_radius = 2.0;

        let generated = generate(&params).unwrap();
        assert_eq!(generated.scene.len(), 5 * 8 + 3);
        assert!(matches!(
            generated.scene.primitives[0],
            Primitive::Circle { radius, .. } if radius == 10.0
        ));
        assert!(matches!(
            generated.scene.primitives.last().unwrap(),
            Primitive::Circle { radius, .. } if *radius == 2.0
        ));
    }

    #[test]
    fn zero_rings_yields_only_assembly_extras() {
        let mut params = base_params();
        params.ring_count = 0;
        params.draw_bounds = true;

        let generated = generate(&params).unwrap();
        assert_eq!(generated.scene.len(), 2);
    }

    #[test]
    fn generation_is_deterministic() {
        let params = base_params();
        let a = generate(&params).unwrap();
        let b = generate(&params).unwrap();
        assert_eq!(a.scene, b.scene);
    }
}
