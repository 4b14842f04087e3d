use crate::error::InvalidBoardError;
use crate::move_::Move;

use smallvec::SmallVec;
use std::{fmt, str::FromStr};

pub const SIDE: usize = 3;
pub const CELLS: usize = SIDE * SIDE;
pub const BLANK: u8 = 0;

/// Characters a puzzle file may use between symbols.
const SEPARATORS: [char; 2] = [',', '|'];

pub type Successors = SmallVec<[(Move, Board); 4]>;

/// A 3x3 tile configuration stored row-major. Always a permutation of `0..=8`,
/// with `0` as the blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Board([u8; CELLS]);

impl Board {
    pub const SOLVED: Board = Board([1, 2, 3, 4, 5, 6, 7, 8, BLANK]);

    pub fn new(cells: [u8; CELLS]) -> Result<Self, InvalidBoardError> {
        let mut seen = [false; CELLS];
        for (position, &value) in cells.iter().enumerate() {
            let slot = seen
                .get_mut(value as usize)
                .ok_or(InvalidBoardError::InvalidTile { value, position })?;
            if *slot {
                return Err(InvalidBoardError::DuplicateSymbol {
                    symbol: value,
                    position,
                });
            }
            *slot = true;
        }
        Ok(Self(cells))
    }

    /// Parses puzzle-file content: separators, whitespace and line breaks are
    /// dropped and the remaining characters must form a valid board string.
    pub fn parse(content: &str) -> Result<Self, InvalidBoardError> {
        let symbols: String = content
            .chars()
            .filter(|c| !c.is_whitespace() && !SEPARATORS.contains(c))
            .collect();
        symbols.parse()
    }

    pub fn cells(&self) -> &[u8; CELLS] {
        &self.0
    }

    #[inline]
    pub fn get(&self, index: usize) -> u8 {
        self.0[index]
    }

    pub fn blank_index(&self) -> usize {
        self.0
            .iter()
            .position(|&c| c == BLANK)
            .expect("Board must contain a blank")
    }

    /// Index of every symbol: `positions()[s]` is where `s` sits.
    pub fn positions(&self) -> [usize; CELLS] {
        let mut positions = [0; CELLS];
        for (index, &symbol) in self.0.iter().enumerate() {
            positions[symbol as usize] = index;
        }
        positions
    }

    /// Swaps the blank at `blank` with the tile it moves onto. The move must be
    /// legal for `blank`.
    pub fn apply_move(&self, blank: usize, mov: Move) -> Board {
        let mut cells = self.0;
        cells.swap(blank, mov.target(blank));
        Board(cells)
    }

    pub fn try_move(&self, mov: Move) -> Option<Board> {
        let blank = self.blank_index();
        mov.is_legal(blank).then(|| self.apply_move(blank, mov))
    }

    /// Legal moves and their resulting boards, in generation order.
    pub fn successors(&self) -> Successors {
        let blank = self.blank_index();
        Move::ALL
            .into_iter()
            .filter(|mov| mov.is_legal(blank))
            .map(|mov| (mov, self.apply_move(blank, mov)))
            .collect()
    }

    /// Number of tile pairs out of order, ignoring the blank.
    pub fn inversions(&self) -> usize {
        let tiles: SmallVec<[u8; CELLS]> = self.0.iter().copied().filter(|&c| c != BLANK).collect();
        let mut count = 0;
        for i in 0..tiles.len() {
            for j in i + 1..tiles.len() {
                if tiles[i] > tiles[j] {
                    count += 1;
                }
            }
        }
        count
    }

    /// On a 3x3 grid two boards are mutually reachable iff their inversion
    /// counts share parity.
    pub fn same_parity(&self, other: &Board) -> bool {
        self.inversions() % 2 == other.inversions() % 2
    }

    /// Three rows of tiles under a `-----` rule, the blank drawn as a space.
    pub fn to_pretty_string(&self) -> String {
        let mut output = String::from("-----\n");
        for row in self.0.chunks(SIDE) {
            let cells: Vec<String> = row
                .iter()
                .map(|&cell| match cell {
                    BLANK => " ".to_string(),
                    _ => cell.to_string(),
                })
                .collect();
            output.push_str(cells.join(" ").trim_end());
            output.push('\n');
        }
        output
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::SOLVED
    }
}

impl FromStr for Board {
    type Err = InvalidBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let got = s.chars().count();
        if got != CELLS {
            return Err(InvalidBoardError::InvalidLength {
                expected: CELLS,
                got,
            });
        }
        let mut cells = [BLANK; CELLS];
        for (position, symbol) in s.chars().enumerate() {
            match symbol.to_digit(10) {
                Some(digit) if (digit as usize) < CELLS => cells[position] = digit as u8,
                _ => return Err(InvalidBoardError::InvalidSymbol { symbol, position }),
            }
        }
        Board::new(cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in self.0 {
            write!(f, "{cell}")?;
        }
        Ok(())
    }
}
