//! # Celldissect Core
//!
//! Shared primitives for the celldissect collection planner.
//!
//! This crate provides the foundational pieces used by the planning engine:
//!
//! - **Geometry helpers**: point distances, vertex-mean centroids, shoelace
//!   polygon area, and perpendicular point-to-chord distance ([`geom`])
//! - **Error taxonomy**: [`Error`] and the crate-wide [`Result`] alias
//!
//! Coordinates are plain `(f64, f64)` tuples in image-pixel space.

pub mod error;
pub mod geom;

// Re-exports
pub use error::{Error, Result};
pub use geom::{
    centroid, perpendicular_distance, point_distance, point_distance_sq, polygon_area, Point,
};
