#![warn(missing_docs)]

//! SVG rendering for kirigami cut-pattern scenes.
//!
//! Serializes a [`Scene`] into an SVG document. The engine works in a
//! y-up coordinate system with angles in degrees counter-clockwise from
//! +X; SVG is y-down, so points are flipped here and arcs are emitted
//! with sweep flag 0. Angle wrapping is likewise handled here, keeping
//! the engine's output free of any wrapping convention.

use kirigami_pattern::{Point2, Primitive, Scene};
use svg::node::element::path::Data;
use svg::node::element::{Circle, Line, Path};
use svg::Document;

/// Tolerance for treating an arc's angular extent as a full turn.
const FULL_TURN_EPS: f64 = 1e-9;

/// Render a scene into an SVG document with a square viewport sized to
/// the scene extent, centered on the origin.
pub fn render(scene: &Scene) -> Document {
    let m = scene.extent;
    let mut document = Document::new().set("viewBox", (-m, -m, 2.0 * m, 2.0 * m));
    for primitive in &scene.primitives {
        document = match primitive {
            Primitive::Circle {
                center,
                radius,
                stroke_width,
            } => document.add(circle_element(*center, *radius, *stroke_width)),
            Primitive::Arc {
                center,
                radius,
                start_angle_deg,
                end_angle_deg,
                stroke_width,
            } => {
                let extent = end_angle_deg - start_angle_deg;
                // An SVG arc with coincident endpoints draws nothing, so
                // a full turn degenerates to a circle element.
                if extent >= 360.0 - FULL_TURN_EPS {
                    document.add(circle_element(*center, *radius, *stroke_width))
                } else {
                    document.add(arc_element(
                        *center,
                        *radius,
                        *start_angle_deg,
                        extent,
                        *stroke_width,
                    ))
                }
            }
            Primitive::Segment {
                start,
                end,
                stroke_width,
            } => document.add(line_element(*start, *end, *stroke_width)),
        };
    }
    document
}

/// Render a scene and write it to `path` as an SVG file.
pub fn write_scene<P: AsRef<std::path::Path>>(path: P, scene: &Scene) -> std::io::Result<()> {
    svg::save(path, &render(scene))
}

fn circle_element(center: Point2, radius: f64, stroke_width: f64) -> Circle {
    Circle::new()
        .set("cx", center.x)
        .set("cy", -center.y)
        .set("r", radius)
        .set("fill", "none")
        .set("stroke", "black")
        .set("stroke-width", stroke_width)
}

fn line_element(start: Point2, end: Point2, stroke_width: f64) -> Line {
    Line::new()
        .set("x1", start.x)
        .set("y1", -start.y)
        .set("x2", end.x)
        .set("y2", -end.y)
        .set("stroke", "black")
        .set("stroke-width", stroke_width)
}

fn arc_element(
    center: Point2,
    radius: f64,
    start_deg: f64,
    extent_deg: f64,
    stroke_width: f64,
) -> Path {
    let start = on_circle(center, radius, start_deg);
    let end = on_circle(center, radius, start_deg + extent_deg);
    let large_arc = i32::from(extent_deg.rem_euclid(360.0) > 180.0);
    // Engine angles increase counter-clockwise; with the y flip that is
    // SVG's negative-angle direction, hence sweep flag 0.
    let data = Data::new()
        .move_to((start.x, -start.y))
        .elliptical_arc_to((radius, radius, 0, large_arc, 0, end.x, -end.y));
    Path::new()
        .set("d", data)
        .set("fill", "none")
        .set("stroke", "black")
        .set("stroke-width", stroke_width)
}

fn on_circle(center: Point2, radius: f64, angle_deg: f64) -> Point2 {
    let p = Point2::from_polar(radius, angle_deg);
    Point2::new(center.x + p.x, center.y + p.y)
}
