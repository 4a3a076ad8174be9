//! Peg occupancy for the 15 holes.

use serde::{Deserialize, Serialize};

use super::position::Pos;
use crate::graph::Pathway;

/// Which holes currently hold a peg.
///
/// A plain 15-slot value type: snapshots copy it, they never share storage.
/// The only mutation path is [`Board::apply`], which flips exactly the
/// three slots of one jump and returns the result as a new value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    slots: [bool; Pos::COUNT],
}

impl Board {
    /// The canonical start board: a peg in every hole except the apex
    /// (hole 0), which is the opening.
    #[must_use]
    pub fn start() -> Self {
        let mut slots = [true; Pos::COUNT];
        slots[0] = false;
        Self { slots }
    }

    /// Build a board with pegs exactly at the given positions.
    #[must_use]
    pub fn from_pegs(pegs: impl IntoIterator<Item = Pos>) -> Self {
        let mut slots = [false; Pos::COUNT];
        for pos in pegs {
            slots[pos.index()] = true;
        }
        Self { slots }
    }

    /// Check whether a hole holds a peg.
    #[must_use]
    pub fn has_peg(&self, pos: Pos) -> bool {
        self.slots[pos.index()]
    }

    /// Count the pegs on the board.
    #[must_use]
    pub fn peg_count(&self) -> u32 {
        self.slots.iter().filter(|&&peg| peg).count() as u32
    }

    /// Iterate over the occupied holes, apex first.
    pub fn pegs(&self) -> impl Iterator<Item = Pos> + '_ {
        Pos::all().filter(move |&pos| self.has_peg(pos))
    }

    /// Apply a jump, returning the resulting board.
    ///
    /// Removes the pegs at `src` and `victim` and places one at `landing`.
    /// The caller is responsible for only passing pathways that are legal
    /// on this board; see [`crate::graph::legal_paths`].
    #[must_use]
    pub fn apply(&self, path: &Pathway) -> Self {
        let mut slots = self.slots;
        slots[path.src.index()] = false;
        slots[path.victim.index()] = false;
        slots[path.landing.index()] = true;
        Self { slots }
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Board({self})")
    }
}

/// Renders the five rows, `o` for a peg and `.` for an open hole.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut row = 0;
        for pos in Pos::all() {
            if pos.row() != row {
                row = pos.row();
                write!(f, " / ")?;
            }
            write!(f, "{}", if self.has_peg(pos) { 'o' } else { '.' })?;
        }
        Ok(())
    }
}
