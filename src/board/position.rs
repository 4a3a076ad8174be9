//! Hole positions on the triangular board.
//!
//! The 15 holes sit in 5 rows; row `r` has `r + 1` holes. Positions are
//! addressed by a single index, row by row from the apex:
//!
//! ```text
//!         0
//!        1 2
//!       3 4 5
//!      6 7 8 9
//!    10 11 12 13 14
//! ```
//!
//! Index of row `r`, column `c` is `c + r(r+1)/2`.

use serde::{Deserialize, Serialize};

/// A hole on the 15-hole triangular board.
///
/// Serializes as a bare integer, so UI layers can use indices directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pos(pub u8);

impl Pos {
    /// Number of holes on the board.
    pub const COUNT: usize = 15;

    /// Number of rows.
    pub const ROWS: u8 = 5;

    /// Create a position from a raw index.
    ///
    /// The index must be in `0..15`; use [`Pos::from_index`] for
    /// caller-supplied values.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Create a position from an untrusted index, `None` if out of range.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        (index < Self::COUNT).then(|| Self(index as u8))
    }

    /// Create a position from row and column coordinates.
    ///
    /// ```
    /// use peg_triangle::Pos;
    ///
    /// assert_eq!(Pos::from_row_col(2, 1), Some(Pos::new(4)));
    /// assert_eq!(Pos::from_row_col(4, 4), Some(Pos::new(14)));
    /// assert_eq!(Pos::from_row_col(2, 3), None);
    /// ```
    #[must_use]
    pub fn from_row_col(row: u8, col: u8) -> Option<Self> {
        if row >= Self::ROWS || col > row {
            return None;
        }
        Some(Self(col + row * (row + 1) / 2))
    }

    /// Get the raw index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the row this hole sits in (0 = apex).
    #[must_use]
    pub fn row(self) -> u8 {
        let mut row = 0u8;
        while (row + 1) * (row + 2) / 2 <= self.0 {
            row += 1;
        }
        row
    }

    /// Get the column within the row (0 = leftmost).
    #[must_use]
    pub fn col(self) -> u8 {
        let row = self.row();
        self.0 - row * (row + 1) / 2
    }

    /// Iterate over every hole, apex first.
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..Self::COUNT as u8).map(Pos)
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
