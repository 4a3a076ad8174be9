//! The move graph: every jump the board's geometry allows.
//!
//! The topology never changes at runtime, so the graph is a `const` table
//! of 36 [`Pathway`] triples; the queries here re-filter it against a
//! concrete [`Board`](crate::board::Board) on every call.

pub mod pathway;
pub mod queries;

pub use pathway::{Pathway, PATHWAYS};
pub use queries::{
    find_path, landings_from, legal_paths, sources_with_moves, LandingSet, SourceSet,
};
