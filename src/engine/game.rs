//! Single-game owner around the snapshot state machine.

use super::error::InvalidAction;
use super::state::GameState;
use crate::board::{Board, Pos};

/// Owns the current [`GameState`] and replaces it wholesale on each
/// successful activation.
///
/// This is the surface a presentation layer drives: one `activate` per
/// user action, then read the snapshot back to redraw.
///
/// ```
/// use peg_triangle::{Game, Pos};
///
/// let mut game = Game::new();
/// // Hole 3's only jump lands in the opening, so it resolves at once.
/// game.activate(Pos::new(3)).unwrap();
/// assert_eq!(game.board().peg_count(), 13);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Start a game on the canonical start board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: GameState::new_game(),
        }
    }

    /// Start a game on an arbitrary board.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        Self {
            state: GameState::from_board(board),
        }
    }

    /// The current snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Activate one hole and advance the game.
    ///
    /// On success the previous snapshot is replaced and the new one is
    /// returned. On error the current snapshot is left untouched.
    pub fn activate(&mut self, at: Pos) -> Result<&GameState, InvalidAction> {
        self.state = self.state.activate(at)?;
        Ok(&self.state)
    }

    /// Abandon the current game and start over.
    pub fn reset(&mut self) {
        self.state = GameState::new_game();
    }
}
