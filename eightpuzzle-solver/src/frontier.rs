//! Open and closed sets of the three search strategies.
//!
//! Every frontier follows the same protocol: [`Frontier::pop`] hands out the
//! next node to goal-test, [`Frontier::close`] records that the node is being
//! expanded, and [`Frontier::admit`] decides what happens to each generated
//! child. Membership is always by board equality.
use crate::node::{Node, NodeArena, NodeId};
use crate::strategy::Strategy;

use ahash::{AHashMap, AHashSet};
use eightpuzzle_common::Board;
use std::{
    cmp::Ordering,
    collections::{BinaryHeap, VecDeque},
};

/// What a frontier did with a generated child.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Admission {
    /// New board, pushed to the open set.
    Opened,
    /// Cheaper path to a board waiting in the open set; the stale entry was dropped.
    Replaced,
    /// Cheaper path to an expanded board; the closed entry was overwritten but
    /// the board does not return to the open set.
    ClosedUpdated,
    Rejected,
}

#[derive(Debug, Clone)]
pub enum Frontier {
    BreadthFirst(BreadthFirst),
    DepthFirst(DepthFirst),
    BestFirst(BestFirst),
}

impl Frontier {
    pub fn new(strategy: Strategy, start: NodeId, arena: &NodeArena) -> Self {
        match strategy {
            Strategy::BreadthFirst => Frontier::BreadthFirst(BreadthFirst::new(start, arena)),
            Strategy::DepthFirst => Frontier::DepthFirst(DepthFirst::new(start, arena)),
            Strategy::AStar(_) => Frontier::BestFirst(BestFirst::new(start, arena)),
        }
    }

    pub fn pop(&mut self, arena: &NodeArena) -> Option<NodeId> {
        match self {
            Frontier::BreadthFirst(frontier) => frontier.pop(arena),
            Frontier::DepthFirst(frontier) => frontier.pop(),
            Frontier::BestFirst(frontier) => frontier.pop(arena),
        }
    }

    pub fn close(&mut self, id: NodeId, arena: &NodeArena) {
        let board = arena[id].board;
        match self {
            Frontier::BreadthFirst(frontier) => {
                frontier.closed.insert(board);
            }
            Frontier::DepthFirst(frontier) => {
                frontier.closed.insert(board);
            }
            Frontier::BestFirst(frontier) => {
                frontier.closed.insert(board, id);
            }
        }
    }

    pub fn admit(&mut self, child: Node, arena: &mut NodeArena) -> Admission {
        match self {
            Frontier::BreadthFirst(frontier) => frontier.admit(child, arena),
            Frontier::DepthFirst(frontier) => frontier.admit(child, arena),
            Frontier::BestFirst(frontier) => frontier.admit(child, arena),
        }
    }

    /// Entries waiting in the open set. For best-first search this ignores
    /// entries superseded by a cheaper path.
    pub fn open_len(&self) -> usize {
        match self {
            Frontier::BreadthFirst(frontier) => frontier.open.len(),
            Frontier::DepthFirst(frontier) => frontier.open.len(),
            Frontier::BestFirst(frontier) => frontier.open_index.len(),
        }
    }

    pub fn closed_len(&self) -> usize {
        match self {
            Frontier::BreadthFirst(frontier) => frontier.closed.len(),
            Frontier::DepthFirst(frontier) => frontier.closed.len(),
            Frontier::BestFirst(frontier) => frontier.closed.len(),
        }
    }
}

/// FIFO queue. A child is admitted only if its board is neither open nor
/// closed, so the first discovery of a board fixes its parent and depth.
#[derive(Debug, Clone)]
pub struct BreadthFirst {
    open: VecDeque<NodeId>,
    open_boards: AHashSet<Board>,
    closed: AHashSet<Board>,
}

impl BreadthFirst {
    fn new(start: NodeId, arena: &NodeArena) -> Self {
        let board = arena[start].board;
        Self {
            open: VecDeque::from([start]),
            open_boards: AHashSet::from_iter([board]),
            closed: AHashSet::from_iter([board]),
        }
    }

    fn pop(&mut self, arena: &NodeArena) -> Option<NodeId> {
        let id = self.open.pop_front()?;
        self.open_boards.remove(&arena[id].board);
        Some(id)
    }

    fn admit(&mut self, child: Node, arena: &mut NodeArena) -> Admission {
        if self.open_boards.contains(&child.board) || self.closed.contains(&child.board) {
            return Admission::Rejected;
        }
        self.open_boards.insert(child.board);
        self.open.push_back(arena.push(child));
        Admission::Opened
    }
}

/// LIFO stack. Only the closed set is consulted on admission, so a board can
/// be stacked several times before its first copy is expanded.
#[derive(Debug, Clone)]
pub struct DepthFirst {
    open: Vec<NodeId>,
    closed: AHashSet<Board>,
}

impl DepthFirst {
    fn new(start: NodeId, arena: &NodeArena) -> Self {
        Self {
            open: vec![start],
            closed: AHashSet::from_iter([arena[start].board]),
        }
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.open.pop()
    }

    fn admit(&mut self, child: Node, arena: &mut NodeArena) -> Admission {
        if self.closed.contains(&child.board) {
            return Admission::Rejected;
        }
        self.open.push(arena.push(child));
        Admission::Opened
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct OpenEntry {
    priority: u32,
    sequence: u32,
    node: NodeId,
}

// Reversed so the max-heap pops the lowest priority, oldest entry first.
impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue on [`Node::priority`], ties broken by insertion order.
///
/// Replacing an open entry leaves the old heap entry in place; `open_index`
/// names the live node per board and superseded entries are skipped on pop.
#[derive(Debug, Clone)]
pub struct BestFirst {
    open: BinaryHeap<OpenEntry>,
    open_index: AHashMap<Board, NodeId>,
    closed: AHashMap<Board, NodeId>,
    sequence: u32,
}

impl BestFirst {
    fn new(start: NodeId, arena: &NodeArena) -> Self {
        let mut frontier = Self {
            open: BinaryHeap::new(),
            open_index: AHashMap::new(),
            closed: AHashMap::new(),
            sequence: 0,
        };
        frontier.push_open(start, arena);
        frontier
    }

    fn push_open(&mut self, id: NodeId, arena: &NodeArena) {
        let node = &arena[id];
        self.open_index.insert(node.board, id);
        self.open.push(OpenEntry {
            priority: node.priority(),
            sequence: self.sequence,
            node: id,
        });
        self.sequence += 1;
    }

    fn pop(&mut self, arena: &NodeArena) -> Option<NodeId> {
        while let Some(entry) = self.open.pop() {
            let board = arena[entry.node].board;
            if self.open_index.get(&board) == Some(&entry.node) {
                self.open_index.remove(&board);
                return Some(entry.node);
            }
        }
        None
    }

    fn admit(&mut self, child: Node, arena: &mut NodeArena) -> Admission {
        let open_entry = self.open_index.get(&child.board).copied();
        let closed_entry = self.closed.get(&child.board).copied();

        if open_entry.is_none() && closed_entry.is_none() {
            let id = arena.push(child);
            self.push_open(id, arena);
            return Admission::Opened;
        }
        if let Some(existing) = open_entry
            && arena[existing].path_cost > child.path_cost
        {
            let id = arena.push(child);
            self.push_open(id, arena);
            return Admission::Replaced;
        }
        if let Some(existing) = closed_entry
            && arena[existing].path_cost > child.path_cost
        {
            let id = arena.push(child);
            self.closed.insert(child.board, id);
            return Admission::ClosedUpdated;
        }
        Admission::Rejected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::Heuristic;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    fn node(s: &str, cost: u32, heuristic_cost: u32) -> Node {
        Node {
            board: board(s),
            path_cost: cost,
            depth: cost,
            heuristic_cost,
            parent: None,
            mov: None,
        }
    }

    fn start(strategy: Strategy, s: &str) -> (Frontier, NodeArena, NodeId) {
        let mut arena = NodeArena::new();
        let id = arena.push(node(s, 0, 0));
        (Frontier::new(strategy, id, &arena), arena, id)
    }

    #[test]
    fn test_breadth_first_is_fifo_and_deduplicates() {
        let (mut frontier, mut arena, start_id) = start(Strategy::BreadthFirst, "123456780");
        assert_eq!(frontier.admit(node("123456780", 1, 0), &mut arena), Admission::Rejected);
        assert_eq!(frontier.admit(node("123456708", 1, 0), &mut arena), Admission::Opened);
        assert_eq!(frontier.admit(node("123456708", 1, 0), &mut arena), Admission::Rejected);
        assert_eq!(frontier.admit(node("123450786", 1, 0), &mut arena), Admission::Opened);
        assert_eq!(frontier.open_len(), 3);

        assert_eq!(frontier.pop(&arena), Some(start_id));
        frontier.close(start_id, &arena);
        let next = frontier.pop(&arena).unwrap();
        assert_eq!(arena[next].board, board("123456708"));
        frontier.close(next, &arena);
        assert_eq!(frontier.admit(node("123456708", 2, 0), &mut arena), Admission::Rejected);
        assert_eq!(frontier.closed_len(), 2);
    }

    #[test]
    fn test_depth_first_allows_duplicate_entries() {
        let (mut frontier, mut arena, start_id) = start(Strategy::DepthFirst, "123456780");
        assert_eq!(frontier.pop(&arena), Some(start_id));
        frontier.close(start_id, &arena);
        assert_eq!(frontier.admit(node("123456780", 1, 0), &mut arena), Admission::Rejected);
        assert_eq!(frontier.admit(node("123456708", 1, 0), &mut arena), Admission::Opened);
        assert_eq!(frontier.admit(node("123456708", 3, 0), &mut arena), Admission::Opened);
        assert_eq!(frontier.open_len(), 2);

        let top = frontier.pop(&arena).unwrap();
        assert_eq!(arena[top].path_cost, 3);
        frontier.close(top, &arena);
        assert_eq!(frontier.admit(node("123456708", 5, 0), &mut arena), Admission::Rejected);
        // The older copy stays stacked even though its board is closed.
        assert_eq!(frontier.open_len(), 1);
        assert_eq!(arena[frontier.pop(&arena).unwrap()].path_cost, 1);
    }

    #[test]
    fn test_best_first_orders_by_priority_then_insertion() {
        let strategy = Strategy::AStar(Heuristic::Manhattan);
        let (mut frontier, mut arena, start_id) = start(strategy, "123456780");
        assert_eq!(frontier.pop(&arena), Some(start_id));
        frontier.close(start_id, &arena);
        frontier.admit(node("123456708", 1, 4), &mut arena);
        frontier.admit(node("123450786", 1, 2), &mut arena);
        frontier.admit(node("123405786", 2, 0), &mut arena);
        frontier.admit(node("123045786", 1, 2), &mut arena);

        let order: Vec<Board> = std::iter::from_fn(|| frontier.pop(&arena))
            .map(|id| arena[id].board)
            .collect();
        assert_eq!(
            order,
            vec![board("123450786"), board("123405786"), board("123045786"), board("123456708")]
        );
    }

    #[test]
    fn test_best_first_replaces_costlier_open_entry() {
        let strategy = Strategy::AStar(Heuristic::Manhattan);
        let (mut frontier, mut arena, start_id) = start(strategy, "123456780");
        assert_eq!(frontier.pop(&arena), Some(start_id));
        frontier.close(start_id, &arena);

        assert_eq!(frontier.admit(node("123456708", 5, 1), &mut arena), Admission::Opened);
        assert_eq!(frontier.admit(node("123456708", 5, 1), &mut arena), Admission::Rejected);
        assert_eq!(frontier.admit(node("123456708", 2, 1), &mut arena), Admission::Replaced);
        assert_eq!(frontier.open_len(), 1);

        let popped = frontier.pop(&arena).unwrap();
        assert_eq!(arena[popped].path_cost, 2);
        assert_eq!(frontier.pop(&arena), None);
    }

    #[test]
    fn test_best_first_updates_closed_without_reopening() {
        let mut arena = NodeArena::new();
        let start_id = arena.push(node("123456708", 4, 0));
        let strategy = Strategy::AStar(Heuristic::MisplacedTiles);
        let mut frontier = Frontier::new(strategy, start_id, &arena);
        assert_eq!(frontier.pop(&arena), Some(start_id));
        frontier.close(start_id, &arena);

        assert_eq!(frontier.admit(node("123456708", 4, 0), &mut arena), Admission::Rejected);
        assert_eq!(frontier.admit(node("123456708", 1, 0), &mut arena), Admission::ClosedUpdated);
        assert_eq!(frontier.open_len(), 0);
        assert_eq!(frontier.pop(&arena), None);
        // The cheaper closed entry is now the bar to beat.
        assert_eq!(frontier.admit(node("123456708", 2, 0), &mut arena), Admission::Rejected);
        assert_eq!(frontier.closed_len(), 1);
    }
}
