//! Collection planning for laser-microdissection well assignment.
//!
//! Given two groups of cell boundary shapes destined for a 384-well plate,
//! this crate plans an efficient physical collection order:
//!
//! 1. **Shape simplification**: Ramer-Douglas-Peucker reduction of each
//!    boundary to the fewest points that preserve its outline
//! 2. **Tour optimization**: per-group visiting order over specimen
//!    centroids (Nearest Neighbor construction + 2-opt improvement)
//! 3. **Transition linking**: the second group's tour starts at its
//!    centroid nearest the first group's endpoint
//! 4. **Serpentine traversal**: the fixed 231-well collection path across
//!    the plate's working area
//! 5. **Blank distribution**: seeded padding so collection always stops at
//!    a quadrant boundary
//!
//! # Example
//!
//! ```rust
//! use celldissect_collect::{assign_wells, PlanConfig, SpecimenGroup};
//!
//! let inhib = SpecimenGroup::new("inhib", vec![vec![(0.0, 0.0)]]);
//! let excite = SpecimenGroup::new("excite", vec![vec![(10.0, 10.0)]]);
//!
//! let result = assign_wells(&inhib, &excite, &PlanConfig::default()).unwrap();
//! assert_eq!(result.specimen_count(), 2);
//! assert_eq!(result.filled_wells(), 77); // padded to one full quadrant
//! ```
//!
//! # References
//!
//! - Douglas & Peucker (1973), "Algorithms for the reduction of the number
//!   of points required to represent a digitized line or its caricature"
//! - Croes (1958), "A method for solving traveling-salesman problems"

pub mod assign;
pub mod blanks;
pub mod config;
pub mod plate;
pub mod result;
pub mod simplify;
pub mod specimen;
pub mod tour;

pub use assign::assign_wells;
pub use config::PlanConfig;
pub use plate::{serpentine_wells, Quadrant, Well, PLATE_ROWS, SEQUENCE_LEN};
pub use result::{AssignmentResult, CollectedSpecimen, WellEntry, WellRecord};
pub use simplify::{reduce_group, reduce_shapes, simplify, ReductionStats};
pub use specimen::{Shape, SpecimenGroup};
pub use tour::{closest_point, optimize_tour, TourResult};

// Shared primitives re-exported for downstream collaborators.
pub use celldissect_core::{Error, Point, Result};
