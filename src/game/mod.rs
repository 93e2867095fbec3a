//! Game state model and update engine.

pub mod direction;
pub mod state;
pub mod update;

pub use direction::Direction;
pub use state::{next_position, GameState, GameStatus, Snake};
