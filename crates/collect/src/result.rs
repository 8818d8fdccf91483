//! Result types for collection planning.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use celldissect_core::Point;

use crate::plate::{Quadrant, Well};
use crate::specimen::Shape;

/// Contents of one filled well position.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WellEntry {
    /// A specimen deposited into this well.
    Specimen {
        /// Index into the combined collection order (0-based).
        sample_index: usize,
        /// Label of the group the specimen came from.
        group_label: String,
        /// Index of the shape within its source group, before reordering.
        original_index: usize,
        /// Specimen centroid in image-pixel coordinates.
        centroid: Point,
    },
    /// A filler well holding no specimen.
    Blank,
}

impl WellEntry {
    /// Returns true for a blank entry.
    pub fn is_blank(&self) -> bool {
        matches!(self, WellEntry::Blank)
    }
}

/// One row of the tracking report: a filled traversal position and what
/// went into it.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WellRecord {
    /// Physical well position.
    pub well: Well,
    /// Position within the serpentine traversal (0-based).
    pub sequence_position: usize,
    /// Parity quadrant of the well.
    pub quadrant: Quadrant,
    /// Specimen or blank.
    pub entry: WellEntry,
}

/// One specimen in final collection order, ready for serialization by an
/// output collaborator: the shape, its surviving annotation, and the well
/// it was assigned to.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CollectedSpecimen {
    /// Boundary shape, in the coordinates it arrived with.
    pub shape: Shape,
    /// Per-shape annotation carried through from the input, if any.
    pub annotation: Option<String>,
    /// Assigned well.
    pub well: Well,
}

/// Result of a full well assignment run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AssignmentResult {
    /// One record per filled traversal position, in traversal order.
    pub records: Vec<WellRecord>,

    /// Specimens in final collection order (all of group A, then all of
    /// group B), paired with their assigned wells.
    pub collected: Vec<CollectedSpecimen>,

    /// Shapes contributed by the first group.
    pub group_a_count: usize,

    /// Shapes contributed by the second group.
    pub group_b_count: usize,

    /// Blank wells inserted to pad to a quadrant boundary.
    pub blank_count: usize,

    /// Closed-loop tour length of the first group, in pixels.
    pub group_a_distance: f64,

    /// Closed-loop tour length of the second group, in pixels.
    pub group_b_distance: f64,

    /// Stage jump from the first group's last specimen to the second
    /// group's first, in pixels.
    pub transition_distance: f64,

    /// Seed used for blank placement.
    pub random_seed: u64,

    /// Wall-clock planning time in milliseconds.
    pub computation_time_ms: u64,
}

impl AssignmentResult {
    /// Total specimens across both groups.
    pub fn specimen_count(&self) -> usize {
        self.group_a_count + self.group_b_count
    }

    /// Filled traversal positions (specimens + blanks).
    pub fn filled_wells(&self) -> usize {
        self.records.len()
    }

    /// Records holding a specimen, in traversal order.
    pub fn specimen_records(&self) -> impl Iterator<Item = &WellRecord> {
        self.records.iter().filter(|r| !r.entry.is_blank())
    }

    /// Records holding a blank, in traversal order.
    pub fn blank_records(&self) -> impl Iterator<Item = &WellRecord> {
        self.records.iter().filter(|r| r.entry.is_blank())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_entry_is_blank() {
        assert!(WellEntry::Blank.is_blank());
        let specimen = WellEntry::Specimen {
            sample_index: 0,
            group_label: "inhib".to_string(),
            original_index: 3,
            centroid: (1.0, 2.0),
        };
        assert!(!specimen.is_blank());
    }
}
