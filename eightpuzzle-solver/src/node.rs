use crate::heuristic::Heuristic;

use eightpuzzle_common::{Board, Move};
use smallvec::SmallVec;
use std::ops::Index;

pub type Children = SmallVec<[Node; 4]>;

/// Position of a node in its search's [`NodeArena`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A board plus its search bookkeeping. Built complete when generated and
/// never changed afterwards.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Node {
    pub board: Board,
    pub path_cost: u32,
    pub depth: u32,
    pub heuristic_cost: u32,
    pub parent: Option<NodeId>,
    /// Blank move that produced this node from its parent.
    pub mov: Option<Move>,
}

impl Node {
    pub fn root(board: Board, heuristic_cost: u32) -> Self {
        Node {
            board,
            path_cost: 0,
            depth: 0,
            heuristic_cost,
            parent: None,
            mov: None,
        }
    }

    /// Best-first ordering key. Depth is counted on top of the path cost, so
    /// on this unit-cost puzzle the key is `2g + h`.
    pub fn priority(&self) -> u32 {
        self.path_cost + self.heuristic_cost + self.depth
    }
}

/// Children of `parent` in move order, each one step deeper. Without a
/// heuristic every child's heuristic cost is 0.
pub fn generate_children(
    parent_id: NodeId,
    parent: &Node,
    goal: &Board,
    heuristic: Option<Heuristic>,
) -> Children {
    parent
        .board
        .successors()
        .into_iter()
        .map(|(mov, board)| Node {
            board,
            path_cost: parent.path_cost + 1,
            depth: parent.depth + 1,
            heuristic_cost: heuristic.map_or(0, |h| h.cost(&board, goal)),
            parent: Some(parent_id),
            mov: Some(mov),
        })
        .collect()
}

/// Append-only storage for every node a search admits. Parent links are
/// indices into it.
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Boards and moves from the root down to `id`.
    pub fn path(&self, id: NodeId) -> (Vec<Board>, Vec<Move>) {
        let mut boards = vec![];
        let mut moves = vec![];
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = &self[node_id];
            boards.push(node.board);
            if let Some(mov) = node.mov {
                moves.push(mov);
            }
            current = node.parent;
        }
        boards.reverse();
        moves.reverse();
        (boards, moves)
    }
}

impl Index<NodeId> for NodeArena {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_children_bookkeeping() {
        let goal = Board::SOLVED;
        let mut arena = NodeArena::new();
        let parent = Node {
            board: board("123405678"),
            path_cost: 4,
            depth: 4,
            heuristic_cost: 0,
            parent: None,
            mov: None,
        };
        let parent_id = arena.push(parent);
        let children = generate_children(parent_id, &parent, &goal, Some(Heuristic::MisplacedTiles));
        assert_eq!(children.len(), 4);
        for child in &children {
            assert_eq!(child.path_cost, 5);
            assert_eq!(child.depth, 5);
            assert_eq!(child.parent, Some(parent_id));
            assert_eq!(child.heuristic_cost, Heuristic::MisplacedTiles.cost(&child.board, &goal));
        }
        let moves: Vec<Move> = children.iter().filter_map(|c| c.mov).collect();
        assert_eq!(moves, Move::ALL.to_vec());
    }

    #[test]
    fn test_uninformed_children_have_zero_heuristic() {
        let root = Node::root(board("023145786"), 0);
        let children = generate_children(NodeId(0), &root, &Board::SOLVED, None);
        assert_eq!(children.len(), 2);
        assert!(children.iter().all(|c| c.heuristic_cost == 0));
    }

    #[test]
    fn test_priority_double_counts_depth() {
        let node = Node {
            board: Board::SOLVED,
            path_cost: 3,
            depth: 3,
            heuristic_cost: 5,
            parent: None,
            mov: None,
        };
        assert_eq!(node.priority(), 11);
    }

    #[test]
    fn test_path() {
        let mut arena = NodeArena::with_capacity(4);
        let root = Node::root(board("123456078"), 0);
        let root_id = arena.push(root);
        let mut current_id = root_id;
        for _ in 0..2 {
            let current = arena[current_id];
            let child = generate_children(current_id, &current, &Board::SOLVED, None)
                .into_iter()
                .find(|c| c.mov == Some(Move::Right))
                .unwrap();
            current_id = arena.push(child);
        }
        assert_eq!(arena.len(), 3);
        assert_eq!(arena[current_id].board, Board::SOLVED);
        let (boards, moves) = arena.path(current_id);
        assert_eq!(boards, vec![board("123456078"), board("123456708"), Board::SOLVED]);
        assert_eq!(moves, vec![Move::Right, Move::Right]);
        assert_eq!(arena.path(root_id), (vec![root.board], vec![]));
        assert!(arena.get(NodeId(3)).is_none());
    }
}
