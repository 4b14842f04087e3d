use eightpuzzle_common::{Board, Move};

use std::fmt;

/// How a search ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Solved(Solution),
    /// The reachable component held no goal match.
    Exhausted { expanded: u32 },
    Interrupted { expanded: u32, reason: Interruption },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Interruption {
    Cancelled,
    ExpansionLimit(u32),
}

/// The goal node reached by a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub board: Board,
    /// Board of the goal node's parent; `None` when the start already matched.
    pub parent: Option<Board>,
    pub expanded: u32,
    pub depth: u32,
    /// Boards from the start to the goal, both included.
    pub path: Vec<Board>,
    pub moves: Vec<Move>,
}

impl SearchOutcome {
    pub fn found(&self) -> bool {
        matches!(self, SearchOutcome::Solved(_))
    }

    pub fn expanded(&self) -> u32 {
        match self {
            SearchOutcome::Solved(solution) => solution.expanded,
            SearchOutcome::Exhausted { expanded } => *expanded,
            SearchOutcome::Interrupted { expanded, .. } => *expanded,
        }
    }

    pub fn depth(&self) -> Option<u32> {
        self.solution().map(|solution| solution.depth)
    }

    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SearchOutcome::Solved(solution) => Some(solution),
            _ => None,
        }
    }
}

impl fmt::Display for Interruption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interruption::Cancelled => f.write_str("search cancelled"),
            Interruption::ExpansionLimit(limit) => write!(f, "reached max expansions {limit}"),
        }
    }
}
