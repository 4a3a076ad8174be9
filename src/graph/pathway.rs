//! Jump pathways and the static 36-entry table.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Pos};

/// One jump: a peg at `src` leaps over the adjacent peg at `victim` and
/// lands in the empty hole at `landing`.
///
/// Pathways are fixed geometry, not game state; the full set lives in
/// [`PATHWAYS`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pathway {
    pub src: Pos,
    pub victim: Pos,
    pub landing: Pos,
}

impl Pathway {
    /// Check whether this jump can be made on the given board: peg at the
    /// source, peg to capture, open landing hole.
    #[must_use]
    pub fn is_legal(&self, board: &Board) -> bool {
        board.has_peg(self.src) && board.has_peg(self.victim) && !board.has_peg(self.landing)
    }
}

impl std::fmt::Display for Pathway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} over {} to {}", self.src, self.victim, self.landing)
    }
}

const fn path(src: u8, victim: u8, landing: u8) -> Pathway {
    Pathway {
        src: Pos::new(src),
        victim: Pos::new(victim),
        landing: Pos::new(landing),
    }
}

/// Every straight line of three holes, in both jump directions: 6 row
/// lines and 12 diagonal lines, 36 pathways total.
///
/// Table order is load-bearing: option sets keep first-occurrence order,
/// so reordering entries would reorder what a UI presents.
pub const PATHWAYS: [Pathway; 36] = [
    path(0, 1, 3),
    path(0, 2, 5),
    path(1, 3, 6),
    path(1, 4, 8),
    path(2, 4, 7),
    path(2, 5, 9),
    path(3, 1, 0),
    path(3, 4, 5),
    path(3, 7, 12),
    path(3, 6, 10),
    path(4, 7, 11),
    path(4, 8, 13),
    path(5, 2, 0),
    path(5, 9, 14),
    path(5, 4, 3),
    path(5, 8, 12),
    path(6, 3, 1),
    path(6, 7, 8),
    path(7, 4, 2),
    path(7, 8, 9),
    path(8, 7, 6),
    path(8, 4, 1),
    path(9, 5, 2),
    path(9, 8, 7),
    path(10, 11, 12),
    path(10, 6, 3),
    path(11, 7, 4),
    path(11, 12, 13),
    path(12, 11, 10),
    path(12, 13, 14),
    path(12, 7, 3),
    path(12, 8, 5),
    path(13, 12, 11),
    path(13, 8, 4),
    path(14, 13, 12),
    path(14, 9, 5),
];
