//! The engine's single error kind.

use crate::board::Pos;

/// An activation outside the current state's permitted set.
///
/// Always a caller-contract violation: a UI should only enable the holes
/// listed in the current snapshot's option sets. The error is recoverable;
/// the state that produced it is still valid and unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidAction {
    /// In `Idle`, the hole is not a peg with a legal outgoing jump.
    #[error("hole {at} has no peg with a legal jump")]
    NotPickable { at: Pos },

    /// In `Picked`, the hole is neither the selected peg nor one of its
    /// landing options.
    #[error("hole {at} is neither the picked peg {selected} nor one of its landings")]
    NotATarget { at: Pos, selected: Pos },

    /// The game is over; no activation is accepted.
    #[error("no moves remain; activation of hole {at} rejected")]
    GameOver { at: Pos },
}
