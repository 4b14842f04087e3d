//! Graph search over the 8-puzzle state space.
//!
//! A [`Search`] is built from a start board, a goal board and a [`Strategy`]
//! (breadth-first, depth-first or A* with a [`Heuristic`]). It is driven either
//! as an iterator of expanded boards or through [`Search::run_with`] with a
//! [`SearchObserver`], and finishes with a [`SearchOutcome`].
mod frontier;
mod heuristic;
mod node;
mod observer;
mod outcome;
mod search;
mod strategy;

pub use crate::frontier::{Admission, Frontier};
pub use crate::heuristic::{Heuristic, manhattan_distance, misplaced_tiles};
pub use crate::node::{Children, Node, NodeArena, NodeId, generate_children};
pub use crate::observer::{ExpansionLog, SearchObserver};
pub use crate::outcome::{Interruption, SearchOutcome, Solution};
pub use crate::search::{CancelToken, Search, SearchOptions, solve};
pub use crate::strategy::{Selection, Strategy};

pub use eightpuzzle_common::{Board, InvalidBoardError, Move};
