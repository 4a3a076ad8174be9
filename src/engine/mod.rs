//! The game engine: state machine, transitions, and error contract.

pub mod error;
pub mod game;
pub mod state;

pub use error::InvalidAction;
pub use game::Game;
pub use state::GameState;
