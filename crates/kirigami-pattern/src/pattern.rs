//! The three pattern families and their shared angular segmentation.

use crate::error::{PatternError, Result};
use crate::sampler;
use crate::scene::{Point2, Primitive};

/// Division of the full 360 degrees into equal sectors, each drawn for a
/// fraction of its width.
///
/// This is what makes every pattern intermittent: each sector contributes
/// one arc (or dash) of `arc_angle` degrees starting at the sector's
/// start angle, leaving a gap for the remainder of the sector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segmentation {
    /// Number of sectors.
    pub count: u32,
    /// Angular width of one sector in degrees.
    pub segment_angle: f64,
    /// Drawn angular width within each sector in degrees.
    pub arc_angle: f64,
}

impl Segmentation {
    /// Divide the circle into `count` sectors drawn for `arc_fraction` of
    /// their width.
    pub fn new(count: u32, arc_fraction: f64) -> Result<Self> {
        if count == 0 {
            return Err(PatternError::ZeroSegments);
        }
        let segment_angle = 360.0 / f64::from(count);
        Ok(Self {
            count,
            segment_angle,
            arc_angle: segment_angle * arc_fraction,
        })
    }

    /// Sector start angles in degrees, shifted by `offset`.
    fn starts(&self, offset: f64) -> impl Iterator<Item = f64> + '_ {
        (0..self.count).map(move |j| offset + f64::from(j) * self.segment_angle)
    }
}

/// Intermittent arcs on concentric rings.
///
/// When `stagger` is set, odd rings are shifted by half a sector so gaps
/// do not line up radially across rings.
pub fn concentric_arcs(
    radii: &[f64],
    seg: Segmentation,
    stagger: bool,
    stroke_width: f64,
) -> Vec<Primitive> {
    let mut out = Vec::with_capacity(radii.len() * seg.count as usize);
    for (i, &r) in radii.iter().enumerate() {
        let offset = if stagger {
            (i % 2) as f64 * seg.segment_angle / 2.0
        } else {
            0.0
        };
        push_ring(&mut out, r, seg, offset, stroke_width);
    }
    out
}

/// Intermittent arcs with a cumulative per-ring twist.
///
/// Ring `i` is rotated by `i * twist_deg`; the offset is deliberately not
/// normalized modulo 360, the renderer handles wrapping.
pub fn spiral_arcs(
    radii: &[f64],
    seg: Segmentation,
    twist_deg: f64,
    stroke_width: f64,
) -> Vec<Primitive> {
    let mut out = Vec::with_capacity(radii.len() * seg.count as usize);
    for (i, &r) in radii.iter().enumerate() {
        push_ring(&mut out, r, seg, i as f64 * twist_deg, stroke_width);
    }
    out
}

fn push_ring(out: &mut Vec<Primitive>, radius: f64, seg: Segmentation, offset: f64, width: f64) {
    for start in seg.starts(offset) {
        out.push(Primitive::Arc {
            center: Point2::ORIGIN,
            radius,
            start_angle_deg: start,
            end_angle_deg: start + seg.arc_angle,
            stroke_width: width,
        });
    }
}

/// Intermittent line segments running outward along fixed rays.
///
/// `seg.count` rays are placed one per sector start angle. Along each
/// ray the span `[inner, outer]` is split into `ring_count + 1` equal
/// steps; each step draws from its start radius to `arc_fraction` times
/// the next step radius, leaving a gap before the next dash.
pub fn radial_lines(
    inner: f64,
    outer: f64,
    ring_count: u32,
    seg: Segmentation,
    arc_fraction: f64,
    stroke_width: f64,
) -> Vec<Primitive> {
    let steps = sampler::sample_steps(inner, outer, ring_count);
    let dashes_per_ray = steps.len() - 1;
    let mut out = Vec::with_capacity(seg.count as usize * dashes_per_ray);
    for angle in seg.starts(0.0) {
        for pair in steps.windows(2) {
            out.push(Primitive::Segment {
                start: Point2::from_polar(pair[0], angle),
                end: Point2::from_polar(pair[1] * arc_fraction, angle),
                stroke_width,
            });
        }
    }
    out
}
