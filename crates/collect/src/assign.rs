//! Well assignment orchestration.
//!
//! Drives the full planning pipeline for one specimen batch:
//!
//! 1. Compute centroids for both groups.
//! 2. Optimize group A's tour from the configured start index.
//! 3. Link: find the group-B centroid closest to group A's last tour point.
//! 4. Optimize group B's tour starting from the linked index.
//! 5. Concatenate A's tour-ordered shapes, then B's (never interleaved).
//! 6. Generate the serpentine sequence, compute blanks, place them with the
//!    configured seed.
//! 7. Walk the sequence, consuming one specimen per non-blank position.
//!
//! The two groups are solved as independent tours joined by one linking
//! decision, not as a combined tour; re-optimizing jointly is intentionally
//! out of scope.

use std::collections::HashSet;
use std::time::Instant;

use celldissect_core::{centroid, Error, Point, Result};

use crate::blanks::{blanks_needed, distribute};
use crate::config::PlanConfig;
use crate::plate::{serpentine_wells, Quadrant};
use crate::result::{AssignmentResult, CollectedSpecimen, WellEntry, WellRecord};
use crate::specimen::SpecimenGroup;
use crate::tour::{closest_point, optimize_tour};

/// One specimen in combined collection order, before well stamping.
struct CombinedEntry<'a> {
    group_label: &'a str,
    original_index: usize,
    centroid: Point,
    shape: &'a [Point],
    annotation: Option<&'a str>,
}

/// Appends a group's specimens to `combined` in tour order.
fn extend_combined<'a>(
    combined: &mut Vec<CombinedEntry<'a>>,
    group: &'a SpecimenGroup,
    centroids: &[Point],
    order: &[usize],
) {
    for &idx in order {
        combined.push(CombinedEntry {
            group_label: &group.label,
            original_index: idx,
            centroid: centroids[idx],
            shape: &group.shapes[idx],
            annotation: group
                .annotations
                .as_ref()
                .map(|annotations| annotations[idx].as_str()),
        });
    }
}

/// Plans the collection order and well assignment for two specimen groups.
///
/// Group A is collected first, group B second; blanks pad the total to a
/// quadrant boundary and are scattered over the filled positions with the
/// configured seed. Fails with `Capacity` when specimens plus blanks exceed
/// the 231-well traversal, with nothing written.
pub fn assign_wells(
    group_a: &SpecimenGroup,
    group_b: &SpecimenGroup,
    config: &PlanConfig,
) -> Result<AssignmentResult> {
    let start = Instant::now();

    config.validate()?;
    group_a.validate()?;
    group_b.validate()?;

    let a_centroids: Vec<Point> = group_a.shapes.iter().map(|s| centroid(s)).collect();
    let b_centroids: Vec<Point> = group_b.shapes.iter().map(|s| centroid(s)).collect();

    // Group A's tour from the configured start.
    let tour_a = optimize_tour(&a_centroids, config.start_index, config.max_2opt_passes)?;
    let last_a = tour_a
        .order
        .last()
        .copied()
        .ok_or_else(|| Error::Internal("empty tour for a non-empty group".to_string()))?;

    // Link the groups: group B starts at its centroid nearest to where
    // group A's tour ended.
    let (link_index, transition_distance) = closest_point(a_centroids[last_a], &b_centroids)
        .ok_or_else(|| Error::Internal("no centroids in a non-empty group".to_string()))?;
    let tour_b = optimize_tour(&b_centroids, link_index, config.max_2opt_passes)?;

    let mut combined = Vec::with_capacity(group_a.len() + group_b.len());
    extend_combined(&mut combined, group_a, &a_centroids, &tour_a.order);
    extend_combined(&mut combined, group_b, &b_centroids, &tour_b.order);

    let wells = serpentine_wells();
    let total_samples = combined.len();
    let blank_count = blanks_needed(total_samples, config.quadrant_size);
    let required = total_samples + blank_count;
    if required > wells.len() {
        return Err(Error::Capacity {
            required,
            available: wells.len(),
        });
    }

    // Blanks are scattered over the filled prefix only, so specimens plus
    // blanks tile whole quadrants from the front of the traversal.
    let blank_positions = distribute(blank_count, required, config.random_seed)?;
    let blank_set: HashSet<usize> = blank_positions.iter().copied().collect();

    let mut records = Vec::with_capacity(required);
    let mut collected = Vec::with_capacity(total_samples);
    let mut sample_index = 0;

    for (position, &well) in wells.iter().take(required).enumerate() {
        let quadrant = Quadrant::of(well);
        if blank_set.contains(&position) {
            records.push(WellRecord {
                well,
                sequence_position: position,
                quadrant,
                entry: WellEntry::Blank,
            });
        } else {
            let entry = &combined[sample_index];
            records.push(WellRecord {
                well,
                sequence_position: position,
                quadrant,
                entry: WellEntry::Specimen {
                    sample_index,
                    group_label: entry.group_label.to_string(),
                    original_index: entry.original_index,
                    centroid: entry.centroid,
                },
            });
            collected.push(CollectedSpecimen {
                shape: entry.shape.to_vec(),
                annotation: entry.annotation.map(str::to_string),
                well,
            });
            sample_index += 1;
        }
    }
    debug_assert_eq!(sample_index, total_samples);

    Ok(AssignmentResult {
        records,
        collected,
        group_a_count: group_a.len(),
        group_b_count: group_b.len(),
        blank_count,
        group_a_distance: tour_a.total_distance,
        group_b_distance: tour_b.total_distance,
        transition_distance,
        random_seed: config.random_seed,
        computation_time_ms: start.elapsed().as_millis() as u64,
    })
}
