use thiserror::Error;

/// Reasons a board string or tile array is not a permutation of `0..=8`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidBoardError {
    #[error("invalid board length: expected {expected} symbols, got {got}")]
    InvalidLength { expected: usize, got: usize },

    #[error("invalid symbol '{symbol}' at position {position} (expected a digit 0-8)")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("invalid tile {value} at position {position} (expected 0-8)")]
    InvalidTile { value: u8, position: usize },

    #[error("duplicate symbol '{symbol}' at position {position}")]
    DuplicateSymbol { symbol: u8, position: usize },
}
