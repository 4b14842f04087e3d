//! Shared types for the 8-puzzle: the 3x3 board, blank moves and board parsing.
pub mod board;
pub mod error;
pub mod move_;

pub use crate::board::Board;
pub use crate::error::InvalidBoardError;
pub use crate::move_::Move;
