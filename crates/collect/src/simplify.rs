//! Shape simplification using the Ramer-Douglas-Peucker algorithm.
//!
//! Cell contours traced from microscopy images carry thousands of boundary
//! points; the dissection instrument only needs enough to preserve the cut
//! shape within a tolerance. RDP keeps the point of maximum perpendicular
//! deviation from the first-to-last chord, splits there, and recurses;
//! sub-shapes within tolerance collapse to their endpoints. Reductions of
//! 95%+ are typical at the default tolerance.
//!
//! # References
//!
//! - Ramer (1972), "An iterative procedure for the polygonal approximation
//!   of plane curves"
//! - Douglas & Peucker (1973), "Algorithms for the reduction of the number
//!   of points required to represent a digitized line or its caricature"

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use celldissect_core::{perpendicular_distance, polygon_area, Error, Point, Result};

use crate::specimen::{Shape, SpecimenGroup};

/// Aggregate statistics for a batch reduction.
///
/// Threaded explicitly through [`reduce_shapes`] rather than held in any
/// shared state; informational only, simplification never reads it.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReductionStats {
    /// Number of shapes processed.
    pub shape_count: usize,
    /// Total boundary points before reduction.
    pub initial_points: usize,
    /// Total boundary points after reduction.
    pub final_points: usize,
    /// Summed shoelace area of the input shapes, in square pixels.
    pub total_area: f64,
}

impl ReductionStats {
    /// Point-count reduction as a percentage (0 for an empty batch).
    pub fn reduction_percent(&self) -> f64 {
        if self.initial_points == 0 {
            return 0.0;
        }
        100.0 * (1.0 - self.final_points as f64 / self.initial_points as f64)
    }
}

/// Simplifies one shape with the RDP algorithm.
///
/// The result is an order-preserving subset of the input points with at
/// least the two endpoints; a 2-point input is returned unchanged. Pure:
/// the same `(shape, epsilon)` always yields the same output.
pub fn simplify(shape: &[Point], epsilon: f64) -> Shape {
    if shape.len() <= 2 {
        return shape.to_vec();
    }
    rdp(shape, epsilon)
}

/// Recursive RDP step on a non-empty sub-shape.
fn rdp(points: &[Point], epsilon: f64) -> Shape {
    let n = points.len();
    if n <= 2 {
        return points.to_vec();
    }

    let first = points[0];
    let last = points[n - 1];

    // Farthest interior point from the first-to-last chord; ties go to the
    // first index reached. A zero-length chord yields distance 0 throughout,
    // collapsing the sub-shape to its endpoints.
    let mut max_dist = 0.0;
    let mut max_idx = 0;
    for (i, &p) in points.iter().enumerate().take(n - 1).skip(1) {
        let d = perpendicular_distance(p, first, last);
        if d > max_dist {
            max_dist = d;
            max_idx = i;
        }
    }

    if max_dist > epsilon {
        let mut left = rdp(&points[..=max_idx], epsilon);
        let right = rdp(&points[max_idx..], epsilon);
        // The split point ends the left result and starts the right one.
        left.extend_from_slice(&right[1..]);
        left
    } else {
        vec![first, last]
    }
}

/// Applies RDP to every shape in a batch, accumulating reduction statistics.
///
/// Errors with `InvalidConfig` for a negative or non-finite epsilon and
/// `InvalidInput` for any shape with fewer than 2 points.
pub fn reduce_shapes(shapes: &[Shape], epsilon: f64) -> Result<(Vec<Shape>, ReductionStats)> {
    if !(epsilon >= 0.0) || !epsilon.is_finite() {
        return Err(Error::InvalidConfig(format!(
            "epsilon must be a finite value >= 0, got {epsilon}"
        )));
    }

    let mut stats = ReductionStats {
        shape_count: shapes.len(),
        ..Default::default()
    };
    let mut reduced = Vec::with_capacity(shapes.len());

    for (idx, shape) in shapes.iter().enumerate() {
        if shape.len() < 2 {
            return Err(Error::InvalidInput(format!(
                "shape {} has {} points, need at least 2 to simplify",
                idx,
                shape.len()
            )));
        }
        stats.initial_points += shape.len();
        stats.total_area += polygon_area(shape);

        let simplified = simplify(shape, epsilon);
        stats.final_points += simplified.len();
        reduced.push(simplified);
    }

    Ok((reduced, stats))
}

/// Reduces every shape of a group, keeping label and annotations aligned.
///
/// Shape order is preserved, so the annotation list carries over untouched.
pub fn reduce_group(
    group: &SpecimenGroup,
    epsilon: f64,
) -> Result<(SpecimenGroup, ReductionStats)> {
    group.validate()?;
    let (shapes, stats) = reduce_shapes(&group.shapes, epsilon)?;
    Ok((
        SpecimenGroup {
            label: group.label.clone(),
            shapes,
            annotations: group.annotations.clone(),
        },
        stats,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_points_unchanged() {
        let shape = vec![(0.0, 0.0), (10.0, 0.0)];
        assert_eq!(simplify(&shape, 5.0), shape);
    }

    #[test]
    fn test_collinear_collapses_to_endpoints() {
        let shape = vec![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)];
        assert_eq!(simplify(&shape, 0.5), vec![(0.0, 0.0), (3.0, 0.0)]);
    }

    #[test]
    fn test_zero_epsilon_keeps_non_collinear_points() {
        let shape = vec![(0.0, 0.0), (1.0, 0.5), (2.0, 0.0), (3.0, 0.7), (4.0, 0.0)];
        assert_eq!(simplify(&shape, 0.0), shape);
    }

    #[test]
    fn test_huge_epsilon_keeps_only_endpoints() {
        let shape: Vec<(f64, f64)> = (0..50)
            .map(|i| (i as f64, (i as f64 * 0.7).sin() * 10.0))
            .collect();
        let result = simplify(&shape, 1e12);
        assert_eq!(result, vec![shape[0], shape[49]]);
    }

    #[test]
    fn test_peak_above_tolerance_survives() {
        let shape = vec![(0.0, 0.0), (2.0, 5.0), (4.0, 0.0)];
        assert_eq!(simplify(&shape, 1.0), shape);
        assert_eq!(simplify(&shape, 6.0), vec![(0.0, 0.0), (4.0, 0.0)]);
    }

    #[test]
    fn test_output_is_ordered_subset() {
        let shape: Vec<(f64, f64)> = (0..100)
            .map(|i| {
                let t = i as f64 / 100.0 * std::f64::consts::TAU;
                (100.0 * t.cos(), 100.0 * t.sin())
            })
            .collect();
        let result = simplify(&shape, 5.0);

        assert!(result.len() >= 2);
        assert!(result.len() <= shape.len());

        // Every output point appears in the input, in input order.
        let mut cursor = 0;
        for p in &result {
            let found = shape[cursor..].iter().position(|q| q == p);
            assert!(found.is_some(), "point {p:?} not found in order");
            cursor += found.unwrap() + 1;
        }
    }

    #[test]
    fn test_degenerate_closed_contour() {
        // First and last point identical: zero-length chord at the top level.
        let shape = vec![(0.0, 0.0), (5.0, 5.0), (10.0, 0.0), (0.0, 0.0)];
        let result = simplify(&shape, 1e9);
        assert_eq!(result, vec![(0.0, 0.0), (0.0, 0.0)]);
    }

    #[test]
    fn test_reduce_shapes_stats() {
        let shapes = vec![
            vec![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)],
            vec![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)],
        ];
        let (reduced, stats) = reduce_shapes(&shapes, 0.5).unwrap();

        assert_eq!(reduced.len(), 2);
        assert_eq!(stats.shape_count, 2);
        assert_eq!(stats.initial_points, 8);
        assert_eq!(stats.final_points, reduced[0].len() + reduced[1].len());
        assert!((stats.total_area - 16.0).abs() < 1e-10);
        assert!(stats.reduction_percent() > 0.0);
    }

    #[test]
    fn test_reduce_shapes_negative_epsilon() {
        let shapes = vec![vec![(0.0, 0.0), (1.0, 0.0)]];
        assert!(reduce_shapes(&shapes, -1.0).is_err());
    }

    #[test]
    fn test_reduce_shapes_short_shape() {
        let shapes = vec![vec![(0.0, 0.0)]];
        assert!(reduce_shapes(&shapes, 1.0).is_err());
    }

    #[test]
    fn test_empty_batch_stats() {
        let (reduced, stats) = reduce_shapes(&[], 1.0).unwrap();
        assert!(reduced.is_empty());
        assert_eq!(stats.reduction_percent(), 0.0);
    }

    #[test]
    fn test_reduce_group_keeps_annotations() {
        let group = SpecimenGroup::new(
            "inhib",
            vec![
                vec![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)],
                vec![(0.0, 0.0), (1.0, 5.0), (2.0, 0.0)],
            ],
        )
        .with_annotations(vec!["cap1".to_string(), "cap2".to_string()]);

        let (reduced, _) = reduce_group(&group, 0.5).unwrap();
        assert_eq!(reduced.label, "inhib");
        assert_eq!(
            reduced.annotations.as_deref(),
            Some(&["cap1".to_string(), "cap2".to_string()][..])
        );
        // First shape collapses, second keeps its peak; annotations stay aligned.
        assert_eq!(reduced.shapes[0].len(), 2);
        assert_eq!(reduced.shapes[1].len(), 3);
    }
}
