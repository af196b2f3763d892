//! Core Connect Four board logic: cell grid, immutable move simulation, win
//! detection, and player-identity allocation.

mod board;
mod player;

pub use board::{Board, Cell, MoveError, COLS, ROWS};
pub use player::{IdAllocator, PlayerId};

/// Columns currently open for a move, in ascending order.
pub type LegalActions = Vec<usize>;
