//! Specimen group input types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use celldissect_core::{Error, Point, Result};

/// A boundary polygon: an ordered sequence of points. Order is meaningful,
/// it defines adjacency of consecutive boundary points.
pub type Shape = Vec<Point>;

/// A named collection of shapes sharing one biological label
/// (e.g. the inhibitory or excitatory class of a sort).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpecimenGroup {
    /// Biological class label, stamped onto every well record.
    pub label: String,

    /// Boundary shapes, in source order. The within-group index of a shape
    /// here is its `original_index` in the output.
    pub shapes: Vec<Shape>,

    /// Optional per-shape text annotations (cap identifiers and the like).
    /// When present, must have exactly one entry per shape; annotations
    /// travel with their shape through simplification and reordering.
    pub annotations: Option<Vec<String>>,
}

impl SpecimenGroup {
    /// Creates a group from a label and shapes, without annotations.
    pub fn new(label: impl Into<String>, shapes: Vec<Shape>) -> Self {
        Self {
            label: label.into(),
            shapes,
            annotations: None,
        }
    }

    /// Attaches per-shape annotations.
    pub fn with_annotations(mut self, annotations: Vec<String>) -> Self {
        self.annotations = Some(annotations);
        self
    }

    /// Number of shapes in the group.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns true if the group holds no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Validates the group as planner input: at least one shape, no empty
    /// shapes, and a matching annotation count when annotations are present.
    pub fn validate(&self) -> Result<()> {
        if self.shapes.is_empty() {
            return Err(Error::InvalidInput(format!(
                "group '{}' has no shapes",
                self.label
            )));
        }
        for (idx, shape) in self.shapes.iter().enumerate() {
            if shape.is_empty() {
                return Err(Error::InvalidInput(format!(
                    "group '{}': shape {} has no points",
                    self.label, idx
                )));
            }
        }
        if let Some(annotations) = &self.annotations {
            if annotations.len() != self.shapes.len() {
                return Err(Error::InvalidInput(format!(
                    "group '{}': {} annotations for {} shapes",
                    self.label,
                    annotations.len(),
                    self.shapes.len()
                )));
            }
        }
        Ok(())
    }
}
