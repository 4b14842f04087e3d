use crate::board::{CELLS, SIDE};

use std::fmt;

/// A move of the blank cell. Moving the blank `Down` slides the tile below it up.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Move {
    Down,
    Up,
    Left,
    Right,
}

impl Move {
    /// Every move, in the order children are generated. Traversal order and
    /// expansion counts of the uninformed searches depend on it.
    pub const ALL: [Move; 4] = [Move::Down, Move::Up, Move::Left, Move::Right];

    /// Offset of the blank in the row-major cell array.
    pub fn delta(self) -> isize {
        match self {
            Move::Down => SIDE as isize,
            Move::Up => -(SIDE as isize),
            Move::Left => -1,
            Move::Right => 1,
        }
    }

    /// Whether the blank at `blank` can move without leaving the grid or
    /// wrapping across a row edge.
    pub fn is_legal(self, blank: usize) -> bool {
        if blank >= CELLS {
            return false;
        }
        match self {
            Move::Right => blank % SIDE != SIDE - 1,
            Move::Left => blank % SIDE != 0,
            Move::Up => blank >= SIDE,
            Move::Down => blank < CELLS - SIDE,
        }
    }

    /// Index the blank lands on. Only meaningful for a legal move.
    #[inline]
    pub fn target(self, blank: usize) -> usize {
        blank.wrapping_add_signed(self.delta())
    }

    pub fn inverse(self) -> Self {
        match self {
            Move::Down => Move::Up,
            Move::Up => Move::Down,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Move::Down => 'D',
            Move::Up => 'U',
            Move::Left => 'L',
            Move::Right => 'R',
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::Down => "down",
            Move::Up => "up",
            Move::Left => "left",
            Move::Right => "right",
        };
        f.write_str(name)
    }
}

/// Formats a move list in columns of ten, collapsing runs of the same move
/// into `<count><symbol>` (e.g. `RRR` becomes `3R`).
pub fn format_moves(moves: &[Move]) -> String {
    let mut list = vec![];
    let mut i = 0;
    while i < moves.len() {
        let mov = moves[i];
        let mut count = 1;
        while i + count < moves.len() && moves[i + count] == mov {
            count += 1;
        }
        let str = if count == 1 {
            mov.symbol().to_string()
        } else {
            format!("{count}{}", mov.symbol())
        };
        list.push(str);
        i += count;
    }

    let mut output = String::new();
    let max_width = list.iter().map(|s| s.len()).max().unwrap_or_default() + 1;
    for chunk in list.chunks(10) {
        let mut line = String::new();
        for cmd in chunk {
            line.push_str(&format!("{cmd:<width$}", width = max_width));
        }
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output
}
