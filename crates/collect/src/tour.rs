//! Collection tour optimization.
//!
//! Orders a group's centroids to approximate a short stage path:
//!
//! 1. **Nearest Neighbor (NN)**: greedy construction that always moves to
//!    the closest unvisited centroid, ties broken by the lowest index.
//! 2. **2-opt**: local search that reverses a tour segment whenever the two
//!    replaced edges get strictly shorter, in full passes until a pass makes
//!    no improvement or the pass cap is reached. The starting position is
//!    pinned and never used as a reversal boundary.
//!
//! Also hosts the transition linker used to stitch two group tours together:
//! the second group starts at its centroid closest to where the first group's
//! tour ended.
//!
//! # References
//!
//! - Croes (1958), "A method for solving traveling-salesman problems"

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use celldissect_core::{point_distance, Error, Point, Result};

/// Result of tour optimization.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TourResult {
    /// Centroid indices in visiting order; a permutation of `0..n`.
    pub order: Vec<usize>,

    /// Total tour length in pixels, measured as a closed loop (the last
    /// point wraps back to the first). Collection consumes the order as an
    /// open path, so this slightly overstates the travelled distance; the
    /// closed-loop figure is kept because it is the metric the instrument
    /// workflow has always reported.
    pub total_distance: f64,
}

/// Optimizes a visiting order over `centroids` starting from `start_index`.
///
/// Runs NN construction followed by up to `max_passes` full 2-opt passes
/// (0 disables 2-opt). Zero or one centroid yields a trivial tour with
/// distance 0; a `start_index` out of range for a non-empty input fails
/// fast with `InvalidInput`.
pub fn optimize_tour(
    centroids: &[Point],
    start_index: usize,
    max_passes: usize,
) -> Result<TourResult> {
    let n = centroids.len();
    if n == 0 {
        return Ok(TourResult {
            order: Vec::new(),
            total_distance: 0.0,
        });
    }
    if start_index >= n {
        return Err(Error::InvalidInput(format!(
            "tour start index {start_index} out of range for {n} centroids"
        )));
    }

    let mut order = nearest_neighbor(centroids, start_index);
    if n >= 3 && max_passes > 0 {
        improve_2opt(&mut order, centroids, max_passes);
    }

    let total_distance = closed_tour_length(&order, centroids);
    Ok(TourResult {
        order,
        total_distance,
    })
}

/// Greedy nearest-neighbor construction from `start`.
///
/// Scans the unvisited set in ascending index order with a strict-less
/// comparison, so distance ties deterministically go to the lowest index.
pub(crate) fn nearest_neighbor(centroids: &[Point], start: usize) -> Vec<usize> {
    let n = centroids.len();
    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);

    visited[start] = true;
    order.push(start);
    let mut current = start;

    for _ in 1..n {
        let mut best_idx = None;
        let mut best_dist = f64::MAX;

        for (i, &candidate) in centroids.iter().enumerate() {
            if visited[i] {
                continue;
            }
            let d = point_distance(centroids[current], candidate);
            if d < best_dist {
                best_dist = d;
                best_idx = Some(i);
            }
        }

        if let Some(i) = best_idx {
            visited[i] = true;
            order.push(i);
            current = i;
        }
    }

    order
}

/// 2-opt improvement over tour positions `1..n`, position 0 pinned.
///
/// For each pair `(i, j)` the edges `(i-1, i)` and `(j, j+1 mod n)` are
/// compared against the reversed configuration; a strictly shorter pair
/// triggers an in-place reversal of `order[i..=j]`.
pub(crate) fn improve_2opt(order: &mut [usize], centroids: &[Point], max_passes: usize) {
    let n = order.len();
    if n < 3 {
        return;
    }

    let mut improved = true;
    let mut passes = 0;

    while improved && passes < max_passes {
        improved = false;
        for i in 1..n - 1 {
            for j in (i + 1)..n {
                let current = point_distance(centroids[order[i - 1]], centroids[order[i]])
                    + point_distance(centroids[order[j]], centroids[order[(j + 1) % n]]);
                let reversed = point_distance(centroids[order[i - 1]], centroids[order[j]])
                    + point_distance(centroids[order[i]], centroids[order[(j + 1) % n]]);

                if reversed < current {
                    order[i..=j].reverse();
                    improved = true;
                }
            }
        }
        passes += 1;
    }
}

/// Closed-loop tour length: consecutive distances plus the wrap-around edge.
pub(crate) fn closed_tour_length(order: &[usize], centroids: &[Point]) -> f64 {
    let n = order.len();
    (0..n)
        .map(|i| point_distance(centroids[order[i]], centroids[order[(i + 1) % n]]))
        .sum()
}

/// Finds the candidate closest to `reference`: linear scan, ties broken by
/// the lowest index. Returns `None` for an empty candidate list.
pub fn closest_point(reference: Point, candidates: &[Point]) -> Option<(usize, f64)> {
    let mut best_idx = None;
    let mut best_dist = f64::MAX;

    for (i, &candidate) in candidates.iter().enumerate() {
        let d = point_distance(reference, candidate);
        if d < best_dist {
            best_dist = d;
            best_idx = Some(i);
        }
    }

    best_idx.map(|i| (i, best_dist))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let result = optimize_tour(&[], 0, 1000).unwrap();
        assert!(result.order.is_empty());
        assert_eq!(result.total_distance, 0.0);
    }

    #[test]
    fn test_single_centroid() {
        let result = optimize_tour(&[(5.0, 5.0)], 0, 1000).unwrap();
        assert_eq!(result.order, vec![0]);
        assert_eq!(result.total_distance, 0.0);
    }

    #[test]
    fn test_start_index_out_of_range() {
        let centroids = vec![(0.0, 0.0), (1.0, 0.0)];
        assert!(optimize_tour(&centroids, 2, 1000).is_err());
    }

    #[test]
    fn test_order_is_permutation() {
        let centroids: Vec<(f64, f64)> = (0..12)
            .map(|i| ((i * 37 % 12) as f64, (i * 23 % 7) as f64))
            .collect();
        let result = optimize_tour(&centroids, 0, 1000).unwrap();

        let mut sorted = result.order.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..12).collect::<Vec<_>>());
    }

    #[test]
    fn test_nn_visits_nearest_first() {
        // Points on a line at x = 100, 20, 60: from index 0 the greedy
        // order is 0 (start), then whatever is closest.
        let centroids = vec![(100.0, 0.0), (20.0, 0.0), (60.0, 0.0)];
        let order = nearest_neighbor(&centroids, 0);
        assert_eq!(order, vec![0, 2, 1]);
    }

    #[test]
    fn test_nn_ties_go_to_lowest_index() {
        // Both remaining points are 10 away from the start.
        let centroids = vec![(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)];
        let order = nearest_neighbor(&centroids, 0);
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn test_triangle_tour_is_optimal() {
        // All closed triangle tours have the same length, so 2-opt must be
        // a no-op and the reported distance equals the perimeter.
        let centroids = vec![(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)];
        let greedy = nearest_neighbor(&centroids, 0);
        let greedy_len = closed_tour_length(&greedy, &centroids);

        let result = optimize_tour(&centroids, 0, 1000).unwrap();
        assert_eq!(result.order, greedy);
        assert!((result.total_distance - greedy_len).abs() < 1e-10);
        assert!((result.total_distance - 12.0).abs() < 1e-10);
    }

    #[test]
    fn test_2opt_never_worse_than_greedy() {
        let centroids: Vec<(f64, f64)> = (0..20)
            .map(|i| {
                let x = (i * 61 % 97) as f64;
                let y = (i * 31 % 83) as f64;
                (x, y)
            })
            .collect();

        let greedy = nearest_neighbor(&centroids, 0);
        let greedy_len = closed_tour_length(&greedy, &centroids);

        let result = optimize_tour(&centroids, 0, 1000).unwrap();
        assert!(
            result.total_distance <= greedy_len + 1e-9,
            "2-opt length {} exceeds greedy length {}",
            result.total_distance,
            greedy_len
        );
    }

    #[test]
    fn test_2opt_uncrosses_edges() {
        // A tour visiting the square's corners in 0-2-1-3 order crosses
        // itself; 2-opt must recover the 4-edge perimeter.
        let centroids = vec![(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)];
        let mut order = vec![0, 2, 1, 3];
        improve_2opt(&mut order, &centroids, 1000);
        let len = closed_tour_length(&order, &centroids);
        assert!((len - 4.0).abs() < 1e-10, "uncrossed length {len}");
    }

    #[test]
    fn test_start_index_respected() {
        let centroids = vec![(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)];
        let result = optimize_tour(&centroids, 2, 1000).unwrap();
        assert_eq!(result.order[0], 2);
    }

    #[test]
    fn test_zero_passes_returns_greedy() {
        let centroids: Vec<(f64, f64)> = (0..8).map(|i| ((i % 3) as f64, (i / 3) as f64)).collect();
        let greedy = nearest_neighbor(&centroids, 0);
        let result = optimize_tour(&centroids, 0, 0).unwrap();
        assert_eq!(result.order, greedy);
    }

    #[test]
    fn test_closest_point_lowest_index_ties() {
        let candidates = vec![(5.0, 0.0), (0.0, 5.0), (3.0, 4.0)];
        let (idx, dist) = closest_point((0.0, 0.0), &candidates).unwrap();
        assert_eq!(idx, 0);
        assert!((dist - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_closest_point_empty() {
        assert!(closest_point((0.0, 0.0), &[]).is_none());
    }
}
