//! Board fundamentals: hole positions and peg occupancy.

pub mod board;
pub mod position;

pub use board::Board;
pub use position::Pos;
