//! Geometry helpers shared across the planning engine.
//!
//! Shapes are open or closed polylines stored as `Vec<(f64, f64)>` in
//! image-pixel coordinates. Nothing here is plate-aware; these are the
//! primitives the simplifier and tour optimizer are built on.

use geo::{Area, LineString, Polygon};

/// A 2D point in image-pixel space.
pub type Point = (f64, f64);

/// Euclidean distance between two points.
pub fn point_distance(a: Point, b: Point) -> f64 {
    point_distance_sq(a, b).sqrt()
}

/// Squared Euclidean distance between two points.
pub fn point_distance_sq(a: Point, b: Point) -> f64 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    dx * dx + dy * dy
}

/// Centroid of a shape: the arithmetic mean of its vertex coordinates.
///
/// This is the vertex mean, not the area centroid; stage positioning
/// targets the boundary points the instrument traced, so all vertices
/// weigh equally. Returns the origin for an empty slice.
pub fn centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return (0.0, 0.0);
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), &(x, y)| (sx + x, sy + y));
    (sx / n, sy / n)
}

/// Area of the polygon described by `points`, via the shoelace formula
/// (absolute value, factor 1/2). Returns 0.0 for fewer than 3 points.
pub fn polygon_area(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let exterior = LineString::from(points.to_vec());
    Polygon::new(exterior, vec![]).unsigned_area()
}

/// Perpendicular distance from `p` to the chord through `a` and `b`.
///
/// A zero-length chord (identical endpoints) is treated as distance 0, so
/// degenerate sub-shapes collapse to their endpoints during simplification.
pub fn perpendicular_distance(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    let length_sq = dx * dx + dy * dy;
    if length_sq == 0.0 {
        return 0.0;
    }
    let cross = dx * (p.1 - a.1) - dy * (p.0 - a.0);
    cross.abs() / length_sq.sqrt()
}
