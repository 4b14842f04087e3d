use eightpuzzle_common::board::{Board, SIDE};

use std::fmt;

/// Estimators of the remaining cost from a board to the goal. Both count the
/// blank like any other tile.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Heuristic {
    Manhattan,
    MisplacedTiles,
}

impl Heuristic {
    pub fn cost(self, board: &Board, goal: &Board) -> u32 {
        match self {
            Heuristic::Manhattan => manhattan_distance(board, goal),
            Heuristic::MisplacedTiles => misplaced_tiles(board, goal),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Heuristic::Manhattan => "Manhattan Distance",
            Heuristic::MisplacedTiles => "Tiles out of place",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Sum over every symbol of the row and column distance between its position
/// in `board` and in `goal`.
pub fn manhattan_distance(board: &Board, goal: &Board) -> u32 {
    let goal_positions = goal.positions();
    board
        .cells()
        .iter()
        .enumerate()
        .map(|(index, &symbol)| {
            let target = goal_positions[symbol as usize];
            let rows = (index / SIDE).abs_diff(target / SIDE);
            let cols = (index % SIDE).abs_diff(target % SIDE);
            (rows + cols) as u32
        })
        .sum()
}

/// Number of positions whose symbol differs from the goal's.
pub fn misplaced_tiles(board: &Board, goal: &Board) -> u32 {
    board
        .cells()
        .iter()
        .zip(goal.cells())
        .filter(|(a, b)| a != b)
        .count() as u32
}
