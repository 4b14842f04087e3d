use anyhow::{Context, Result};
use eightpuzzle_common::Board;

use std::path::Path;

/// Reads a puzzle file such as `1,2,3` / `4,5,6` / `7,8,0` into a board.
pub fn load_board(path: &Path) -> Result<Board> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read puzzle file '{}'", path.display()))?;
    Board::parse(&content).with_context(|| format!("Failed to parse board in '{}'", path.display()))
}
