//! Legality queries over the pathway table.
//!
//! All functions here are total and side-effect free: they filter the
//! 36-entry table against a board. O(36) per call, so nothing is cached
//! or incrementally maintained.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use super::pathway::{Pathway, PATHWAYS};
use crate::board::{Board, Pos};

/// Positions that can start a jump. At most one per hole, so never spills.
pub type SourceSet = SmallVec<[Pos; 15]>;

/// Landing holes reachable from one source. A hole sits on at most four
/// outgoing lines, so never spills.
pub type LandingSet = SmallVec<[Pos; 4]>;

/// Every pathway that can be jumped on this board.
#[must_use]
pub fn legal_paths(board: &Board) -> Vec<Pathway> {
    PATHWAYS
        .iter()
        .filter(|p| p.is_legal(board))
        .copied()
        .collect()
}

/// The distinct sources among the legal pathways, in table order.
///
/// These are the pegs a player may pick.
#[must_use]
pub fn sources_with_moves(board: &Board) -> SourceSet {
    let mut seen = FxHashSet::default();
    let mut sources = SourceSet::new();
    for p in PATHWAYS.iter().filter(|p| p.is_legal(board)) {
        if seen.insert(p.src) {
            sources.push(p.src);
        }
    }
    sources
}

/// The landing holes reachable from `src` on this board, in table order.
///
/// These are the move options once the peg at `src` is picked. Landings
/// are unique per source already (one line per direction), so no dedup
/// pass is needed.
#[must_use]
pub fn landings_from(board: &Board, src: Pos) -> LandingSet {
    PATHWAYS
        .iter()
        .filter(|p| p.src == src && p.is_legal(board))
        .map(|p| p.landing)
        .collect()
}

/// The legal pathway jumping from `src` into `landing`, if any.
///
/// (source, landing) pairs are unique in the table, so this is at most
/// one pathway.
#[must_use]
pub fn find_path(board: &Board, src: Pos, landing: Pos) -> Option<Pathway> {
    PATHWAYS
        .iter()
        .find(|p| p.src == src && p.landing == landing && p.is_legal(board))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_board_sources_are_3_and_5() {
        // Only the two pegs whose jumps land in the apex opening can move.
        let sources = sources_with_moves(&Board::start());
        assert_eq!(sources.as_slice(), &[Pos::new(3), Pos::new(5)]);
    }

    #[test]
    fn test_start_board_legal_paths() {
        let paths = legal_paths(&Board::start());
        assert_eq!(paths.len(), 2);
        for p in &paths {
            assert_eq!(p.landing, Pos::new(0));
        }
    }

    #[test]
    fn test_landings_from_start() {
        let board = Board::start();
        assert_eq!(
            landings_from(&board, Pos::new(3)).as_slice(),
            &[Pos::new(0)]
        );
        assert_eq!(
            landings_from(&board, Pos::new(5)).as_slice(),
            &[Pos::new(0)]
        );
        // A peg that is boxed in has nowhere to go.
        assert!(landings_from(&board, Pos::new(7)).is_empty());
        // An empty hole is no source at all.
        assert!(landings_from(&board, Pos::new(0)).is_empty());
    }

    #[test]
    fn test_two_landing_source() {
        // Open holes at 3 and 5: hole 12 can jump over 7 into 3 or over 8
        // into 5.
        let board = Board::from_pegs(
            Pos::all().filter(|&p| p != Pos::new(3) && p != Pos::new(5)),
        );
        let landings = landings_from(&board, Pos::new(12));
        assert_eq!(landings.as_slice(), &[Pos::new(3), Pos::new(5)]);
    }

    #[test]
    fn test_find_path() {
        let board = Board::start();
        let found = find_path(&board, Pos::new(3), Pos::new(0)).unwrap();
        assert_eq!(found.victim, Pos::new(1));

        // Right pair, wrong board state.
        assert!(find_path(&board, Pos::new(0), Pos::new(3)).is_none());
        // Pair not on any line.
        assert!(find_path(&board, Pos::new(3), Pos::new(14)).is_none());
    }

    #[test]
    fn test_stuck_board_has_no_sources() {
        // Pegs with no adjacent peg to jump, or no open landing behind one.
        let board = Board::from_pegs([Pos::new(0), Pos::new(2), Pos::new(5), Pos::new(9), Pos::new(14)]);
        assert!(legal_paths(&board).is_empty());
        assert!(sources_with_moves(&board).is_empty());
    }
}
