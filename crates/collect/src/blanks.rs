//! Blank well calculation and seeded placement.
//!
//! Collection must stop at a quadrant boundary, so the specimen count is
//! padded with filler ("blank") wells up to the next multiple of the
//! quadrant size. Blank positions are drawn without replacement from the
//! filled portion of the traversal with a seeded generator: the seed is a
//! user-facing reproducibility knob, and identical inputs must always yield
//! identical blank placements.

use rand::rngs::StdRng;
use rand::SeedableRng;

use celldissect_core::{Error, Result};

/// Number of blanks needed to pad `sample_count` up to the next multiple
/// of `quadrant_size` (0 if it already lands on a quadrant boundary).
///
/// A `quadrant_size` of 0 means no padding and yields 0.
pub fn blanks_needed(sample_count: usize, quadrant_size: usize) -> usize {
    if quadrant_size == 0 {
        return 0;
    }
    let remainder = sample_count % quadrant_size;
    if remainder > 0 {
        quadrant_size - remainder
    } else {
        0
    }
}

/// Samples `blank_count` distinct positions from `0..sequence_length`,
/// returned sorted ascending.
///
/// Deterministic: the same `(blank_count, sequence_length, seed)` triple
/// always produces the same positions. Errors with `InvalidConfig` when
/// more blanks are requested than positions exist.
pub fn distribute(blank_count: usize, sequence_length: usize, seed: u64) -> Result<Vec<usize>> {
    if blank_count > sequence_length {
        return Err(Error::InvalidConfig(format!(
            "cannot place {blank_count} blanks in {sequence_length} positions"
        )));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut positions = rand::seq::index::sample(&mut rng, sequence_length, blank_count).into_vec();
    positions.sort_unstable();
    Ok(positions)
}
