//! Drawable primitives and the assembled scene.

use serde::{Deserialize, Serialize};

use crate::params::Parameters;

/// Margin factor applied to the outer radius when computing the scene
/// extent.
const EXTENT_MARGIN: f64 = 1.1;

/// A 2D point.
///
/// We use a custom type instead of nalgebra::Point2 to keep the scene
/// serializable without pulling in nalgebra's serde feature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point2 {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new 2D point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from the origin, `angle_deg` degrees
    /// counter-clockwise from the +X axis.
    pub fn from_polar(radius: f64, angle_deg: f64) -> Self {
        let rad = angle_deg.to_radians();
        Self {
            x: radius * rad.cos(),
            y: radius * rad.sin(),
        }
    }

    /// Distance to another point.
    pub fn distance(&self, other: &Self) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

impl Default for Point2 {
    fn default() -> Self {
        Self::ORIGIN
    }
}

/// A drawable shape.
///
/// Primitives are value objects, independently owned by the scene list;
/// none depends on another's presence. Angles are degrees and are not
/// normalized modulo 360 here: wrapping conventions belong to the
/// renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    /// A full circle outline.
    Circle {
        /// Center of the circle.
        center: Point2,
        /// Radius of the circle.
        radius: f64,
        /// Stroke width for rendering.
        stroke_width: f64,
    },
    /// A circular arc swept counter-clockwise from `start_angle_deg` to
    /// `end_angle_deg`.
    Arc {
        /// Center of the underlying circle.
        center: Point2,
        /// Radius of the underlying circle.
        radius: f64,
        /// Start angle in degrees, counter-clockwise from +X.
        start_angle_deg: f64,
        /// End angle in degrees; always greater than the start angle.
        end_angle_deg: f64,
        /// Stroke width for rendering.
        stroke_width: f64,
    },
    /// A straight line segment.
    Segment {
        /// First endpoint.
        start: Point2,
        /// Second endpoint.
        end: Point2,
        /// Stroke width for rendering.
        stroke_width: f64,
    },
}

impl Primitive {
    /// Stroke width carried by this primitive.
    pub fn stroke_width(&self) -> f64 {
        match self {
            Primitive::Circle { stroke_width, .. }
            | Primitive::Arc { stroke_width, .. }
            | Primitive::Segment { stroke_width, .. } => *stroke_width,
        }
    }
}

/// The complete ordered drawing for one generation.
///
/// Immutable after assembly; ordering matters only for render layering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// All primitives, in render order.
    pub primitives: Vec<Primitive>,
    /// Half-width of the square view region centered at the origin,
    /// `outer_radius * 1.1`. Sizes the output viewport downstream.
    pub extent: f64,
}

impl Scene {
    /// Number of primitives in the scene.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Whether the scene contains no primitives.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

/// Compose pattern primitives with optional boundary circles and a
/// central hole into the final scene.
///
/// Boundary circles are prepended (drawn under the pattern), the central
/// hole is appended.
pub fn assemble(pattern: Vec<Primitive>, params: &Parameters) -> Scene {
    let mut primitives = Vec::with_capacity(pattern.len() + 3);
    if params.draw_bounds {
        primitives.push(Primitive::Circle {
            center: Point2::ORIGIN,
            radius: params.inner_radius,
            stroke_width: params.stroke_width,
        });
        primitives.push(Primitive::Circle {
            center: Point2::ORIGIN,
            radius: params.outer_radius,
            stroke_width: params.stroke_width,
        });
    }
    primitives.extend(pattern);
    if params.central_hole_radius > 0.0 {
        primitives.push(Primitive::Circle {
            center: Point2::ORIGIN,
            radius: params.central_hole_radius,
            stroke_width: params.stroke_width,
        });
    }
    Scene {
        primitives,
        extent: params.outer_radius * EXTENT_MARGIN,
    }
}
