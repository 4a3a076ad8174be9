//! Game state snapshots.
//!
//! `GameState` is a sum type rather than one record with optional fields:
//! a selection always carries its move options, and a finished game
//! carries nothing but the board and the final tally. Snapshots are
//! immutable; every transition builds a fresh one.

use serde::{Deserialize, Serialize};

use super::error::InvalidAction;
use crate::board::{Board, Pos};
use crate::graph::{self, LandingSet, SourceSet};

/// One immutable snapshot of a game.
///
/// Serializes internally tagged on `"phase"` so a UI can dispatch on the
/// variant without knowing the Rust type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum GameState {
    /// No peg selected. `pick_options` are the holes whose peg has at
    /// least one legal outgoing jump.
    Idle {
        board: Board,
        pick_options: SourceSet,
    },
    /// The peg at `selected` is picked; `move_options` are the holes it
    /// can land in. Only entered when there are two or more of them.
    Picked {
        board: Board,
        pick_options: SourceSet,
        selected: Pos,
        move_options: LandingSet,
    },
    /// No peg anywhere can jump. Terminal.
    Done { board: Board, remaining: u32 },
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new_game()
    }
}

impl GameState {
    /// Start a new game from the canonical start board.
    ///
    /// ```
    /// use peg_triangle::{GameState, Pos};
    ///
    /// let state = GameState::new_game();
    /// assert_eq!(state.pick_options(), &[Pos::new(3), Pos::new(5)]);
    /// ```
    #[must_use]
    pub fn new_game() -> Self {
        Self::from_board(Board::start())
    }

    /// Classify a board into `Idle` or `Done`.
    ///
    /// The pick options are always derived from the board, never assumed,
    /// so a non-canonical opening still produces a correct state.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        let pick_options = graph::sources_with_moves(&board);
        if pick_options.is_empty() {
            GameState::Done {
                remaining: board.peg_count(),
                board,
            }
        } else {
            GameState::Idle {
                board,
                pick_options,
            }
        }
    }

    /// The board behind this snapshot.
    #[must_use]
    pub fn board(&self) -> &Board {
        match self {
            GameState::Idle { board, .. }
            | GameState::Picked { board, .. }
            | GameState::Done { board, .. } => board,
        }
    }

    /// Holes whose peg may be picked. Empty once the game is done.
    #[must_use]
    pub fn pick_options(&self) -> &[Pos] {
        match self {
            GameState::Idle { pick_options, .. } | GameState::Picked { pick_options, .. } => {
                pick_options
            }
            GameState::Done { .. } => &[],
        }
    }

    /// Landing holes for the picked peg. Empty unless a peg is picked.
    #[must_use]
    pub fn move_options(&self) -> &[Pos] {
        match self {
            GameState::Picked { move_options, .. } => move_options,
            _ => &[],
        }
    }

    /// The picked peg, if any.
    #[must_use]
    pub fn selected(&self) -> Option<Pos> {
        match self {
            GameState::Picked { selected, .. } => Some(*selected),
            _ => None,
        }
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_done(&self) -> bool {
        matches!(self, GameState::Done { .. })
    }

    /// The final peg tally, once the game is done.
    #[must_use]
    pub fn remaining(&self) -> Option<u32> {
        match self {
            GameState::Done { remaining, .. } => Some(*remaining),
            _ => None,
        }
    }

    /// Advance the state machine with one activated hole.
    ///
    /// This is the engine's single operation. It returns a whole new
    /// snapshot; `self` is never modified. Picking a peg whose jump is
    /// forced (exactly one landing) resolves the jump immediately instead
    /// of demanding a second activation.
    ///
    /// Returns [`InvalidAction`] when `at` is outside the permitted set:
    /// `pick_options` in `Idle`, the selected peg or its `move_options`
    /// in `Picked`, nothing at all in `Done`.
    pub fn activate(&self, at: Pos) -> Result<GameState, InvalidAction> {
        match self {
            GameState::Done { .. } => Err(InvalidAction::GameOver { at }),

            GameState::Idle {
                board,
                pick_options,
            } => {
                if !pick_options.contains(&at) {
                    return Err(InvalidAction::NotPickable { at });
                }
                let move_options = graph::landings_from(board, at);
                match move_options.len() {
                    // Sources in pick_options always have a landing; an
                    // empty set here means the options went stale, which
                    // a derived snapshot cannot produce.
                    0 => Err(InvalidAction::NotPickable { at }),
                    // A forced jump resolves without a second activation.
                    1 => Self::apply_jump(board, at, move_options[0]),
                    _ => Ok(GameState::Picked {
                        board: *board,
                        pick_options: pick_options.clone(),
                        selected: at,
                        move_options,
                    }),
                }
            }

            GameState::Picked {
                board,
                pick_options,
                selected,
                move_options,
            } => {
                if at == *selected {
                    // Deselect; board and options are as before the pick.
                    Ok(GameState::Idle {
                        board: *board,
                        pick_options: pick_options.clone(),
                    })
                } else if move_options.contains(&at) {
                    Self::apply_jump(board, *selected, at)
                } else {
                    Err(InvalidAction::NotATarget {
                        at,
                        selected: *selected,
                    })
                }
            }
        }
    }

    /// Resolve the jump `src -> landing` and classify the result.
    fn apply_jump(board: &Board, src: Pos, landing: Pos) -> Result<GameState, InvalidAction> {
        let path = graph::find_path(board, src, landing)
            .ok_or(InvalidAction::NotATarget { at: landing, selected: src })?;
        Ok(Self::from_board(board.apply(&path)))
    }
}
