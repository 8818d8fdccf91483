//! 384-well plate layout: wells, quadrants, and the serpentine traversal.
//!
//! The collection sequence is a fixed property of the instrument, not of the
//! input data. It avoids the outer ring of the plate (row A, rows P-T,
//! columns 1 and 24) and follows four hard-coded phases whose boundaries
//! encode the physical carriage-return pattern of the stage. The phases are
//! enumerated literally below; deriving them from a general serpentine
//! formula would silently mismatch the instrument's path.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Row letters of the 384-well plate, top to bottom.
pub const PLATE_ROWS: &str = "ABCDEFGHIJKLMNOPQRST";

/// Number of wells in the fixed serpentine sequence (3 complete quadrants).
pub const SEQUENCE_LEN: usize = 231;

/// One physical well position: row letter plus 1-based column number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Well {
    /// Row letter, `A..=T`.
    pub row: char,
    /// Column number, `1..=24`.
    pub col: u32,
}

impl Well {
    /// Creates a well from a row letter and column number.
    pub fn new(row: char, col: u32) -> Self {
        Self { row, col }
    }

    /// Zero-based alphabet index of the row letter (A = 0, B = 1, ...).
    pub fn row_index(&self) -> u32 {
        self.row as u32 - 'A' as u32
    }

    /// Position label as printed on the plate, e.g. `"B2"`.
    pub fn label(&self) -> String {
        format!("{}{}", self.row, self.col)
    }
}

impl fmt::Display for Well {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.col)
    }
}

/// Row/column parity partition of the plate.
///
/// Labels name the first well of each parity class: `B2` is the
/// even-lettered-row/even-column class, and so on. Used only for blank
/// bookkeeping, never for path geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Quadrant {
    /// Even-lettered rows (B, D, F, ...), even columns.
    B2,
    /// Even-lettered rows, odd columns.
    B3,
    /// Odd-lettered rows (A, C, E, ...), even columns.
    C2,
    /// Odd-lettered rows, odd columns.
    C3,
}

impl Quadrant {
    /// Quadrant of a well, from row-letter alphabet-index parity crossed
    /// with column parity. Pure function of the well position.
    pub fn of(well: Well) -> Quadrant {
        // B has alphabet index 1: the "even" lettered rows are the ones at
        // odd zero-based indices.
        let row_even_lettered = well.row_index() % 2 == 1;
        let col_even = well.col % 2 == 0;
        match (row_even_lettered, col_even) {
            (true, true) => Quadrant::B2,
            (true, false) => Quadrant::B3,
            (false, true) => Quadrant::C2,
            (false, false) => Quadrant::C3,
        }
    }

    /// Label string used in tracking reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Quadrant::B2 => "B2",
            Quadrant::B3 => "B3",
            Quadrant::C2 => "C2",
            Quadrant::C3 => "C3",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serpentines across `rows`, sweeping `cols` left-to-right on the first
/// row and alternating direction on each following row.
fn serpentine_phase(wells: &mut Vec<Well>, rows: &[char], cols: &[u32]) {
    for (row_idx, &row) in rows.iter().enumerate() {
        if row_idx % 2 == 0 {
            for &col in cols {
                wells.push(Well::new(row, col));
            }
        } else {
            for &col in cols.iter().rev() {
                wells.push(Well::new(row, col));
            }
        }
    }
}

/// Generates the fixed serpentine collection sequence (231 wells).
///
/// Four phases over the working area B2..O23:
///
/// 1. Rows B, D, F, H, J, L, N over even columns 2..=22, serpentine by row.
/// 2. Register switch: row N swept once more across the odd columns in
///    descending order (23, 21, ..., 3). Changes column parity for phase 3
///    without a row change.
/// 3. Rows L, J, H, F, D, B over odd columns 3..=23, serpentine by row.
/// 4. Rows C, E, G, I, K, M, O over even columns 2..=22, serpentine by row.
pub fn serpentine_wells() -> Vec<Well> {
    let mut wells = Vec::with_capacity(SEQUENCE_LEN);

    let even_cols: Vec<u32> = (2..=22).step_by(2).collect();
    let odd_cols: Vec<u32> = (3..=23).step_by(2).collect();

    // Phase 1: even-lettered rows, even columns.
    serpentine_phase(&mut wells, &['B', 'D', 'F', 'H', 'J', 'L', 'N'], &even_cols);

    // Phase 2: register switch on row N, odd columns descending.
    for &col in odd_cols.iter().rev() {
        wells.push(Well::new('N', col));
    }

    // Phase 3: even-lettered rows walked back up, odd columns.
    serpentine_phase(&mut wells, &['L', 'J', 'H', 'F', 'D', 'B'], &odd_cols);

    // Phase 4: odd-lettered rows in natural order, even columns.
    serpentine_phase(&mut wells, &['C', 'E', 'G', 'I', 'K', 'M', 'O'], &even_cols);

    wells
}
