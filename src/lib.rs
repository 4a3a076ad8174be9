//! # peg-triangle
//!
//! A game engine for triangular 15-hole peg solitaire.
//!
//! ## Design Principles
//!
//! 1. **Engine Only**: No rendering, input mapping, or persistence. The
//!    presentation layer feeds one board index per user action via
//!    [`activate`](engine::GameState::activate) and redraws from the
//!    returned snapshot.
//!
//! 2. **Immutable Snapshots**: Every activation produces a whole new
//!    [`GameState`]; snapshots never share mutable board storage.
//!
//! 3. **States You Can't Misuse**: `Idle` / `Picked` / `Done` are a sum
//!    type, so "a peg is selected but has no destinations" is not
//!    representable.
//!
//! ## Modules
//!
//! - `board`: Hole positions and peg occupancy
//! - `graph`: The static jump table and legality queries
//! - `engine`: The pick/move state machine and its error contract
//! - `outcome`: End-of-game rating from the remaining peg count

pub mod board;
pub mod engine;
pub mod graph;
pub mod outcome;

// Re-export commonly used types
pub use crate::board::{Board, Pos};
pub use crate::engine::{Game, GameState, InvalidAction};
pub use crate::graph::{
    find_path, landings_from, legal_paths, sources_with_moves, LandingSet, Pathway, SourceSet,
    PATHWAYS,
};
pub use crate::outcome::Rating;
