use crate::frontier::Frontier;
use crate::node::{Node, NodeArena, NodeId, generate_children};
use crate::observer::SearchObserver;
use crate::outcome::{Interruption, SearchOutcome, Solution};
use crate::strategy::{Selection, Strategy};

use eightpuzzle_common::{Board, InvalidBoardError};
use std::{
    iter::FusedIterator,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};
use tracing::{debug, trace};

/// Solves `start` towards `goal` with the strategy named by `mode`
/// (`bfs`, `dfs`, `astar1`, `astar2`; anything else selects `bfs`).
pub fn solve(start: &str, goal: &str, mode: Option<&str>) -> Result<SearchOutcome, InvalidBoardError> {
    Ok(Search::from_input(start, goal, mode)?.run())
}

/// Cooperative cancellation flag, shared between a search and whoever may
/// want to stop it.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Stop once this many nodes have been expanded.
    pub max_expansions: Option<u32>,
    pub cancel: Option<CancelToken>,
}

enum Step {
    Expanded(Board),
    Finished(SearchOutcome),
}

/// One search from a start board to a goal board.
///
/// Each call to [`Iterator::next`] runs one pop/expand cycle and yields the
/// expanded board; `None` means the search is over and [`Search::outcome`]
/// holds the result. A finished search stays finished.
#[derive(Debug, Clone)]
pub struct Search {
    start: Board,
    goal: Board,
    selection: Selection,
    options: SearchOptions,
    arena: NodeArena,
    frontier: Frontier,
    expanded: u32,
    outcome: Option<SearchOutcome>,
}

impl Search {
    pub fn new(start: Board, goal: Board, strategy: Strategy) -> Self {
        Self::with_selection(
            start,
            goal,
            Selection {
                strategy,
                defaulted: false,
            },
        )
    }

    /// Validates both board strings and resolves the mode token.
    pub fn from_input(start: &str, goal: &str, mode: Option<&str>) -> Result<Self, InvalidBoardError> {
        let start: Board = start.parse()?;
        let goal: Board = goal.parse()?;
        Ok(Self::with_selection(start, goal, Strategy::select(mode)))
    }

    fn with_selection(start: Board, goal: Board, selection: Selection) -> Self {
        let strategy = selection.strategy;
        let heuristic_cost = strategy.heuristic().map_or(0, |h| h.cost(&start, &goal));
        let mut arena = NodeArena::new();
        let root = arena.push(Node::root(start, heuristic_cost));
        let frontier = Frontier::new(strategy, root, &arena);
        debug!(%start, %goal, %strategy, defaulted = selection.defaulted, "search created");
        Self {
            start,
            goal,
            selection,
            options: SearchOptions::default(),
            arena,
            frontier,
            expanded: 0,
            outcome: None,
        }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn strategy(&self) -> Strategy {
        self.selection.strategy
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn start(&self) -> Board {
        self.start
    }

    pub fn goal(&self) -> Board {
        self.goal
    }

    pub fn expanded(&self) -> u32 {
        self.expanded
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    /// The result, once the search has finished.
    pub fn outcome(&self) -> Option<&SearchOutcome> {
        self.outcome.as_ref()
    }

    pub fn run(mut self) -> SearchOutcome {
        self.run_with(&mut ())
    }

    pub fn run_with<O: SearchObserver + ?Sized>(&mut self, observer: &mut O) -> SearchOutcome {
        loop {
            match self.advance() {
                Step::Expanded(board) => observer.on_expand(&board, self.expanded),
                Step::Finished(outcome) => {
                    observer.on_finish(&outcome);
                    return outcome;
                }
            }
        }
    }

    fn advance(&mut self) -> Step {
        if let Some(outcome) = &self.outcome {
            return Step::Finished(outcome.clone());
        }

        let Some(id) = self.frontier.pop(&self.arena) else {
            return self.finish(SearchOutcome::Exhausted {
                expanded: self.expanded,
            });
        };
        let node = self.arena[id];
        if node.board == self.goal {
            let solution = self.solution(id);
            return self.finish(SearchOutcome::Solved(solution));
        }
        if let Some(reason) = self.interruption() {
            return self.finish(SearchOutcome::Interrupted {
                expanded: self.expanded,
                reason,
            });
        }

        self.expanded += 1;
        self.frontier.close(id, &self.arena);
        trace!(
            expanded = self.expanded,
            board = %node.board,
            depth = node.depth,
            open = self.frontier.open_len(),
            "expanding"
        );
        let heuristic = self.selection.strategy.heuristic();
        for child in generate_children(id, &node, &self.goal, heuristic) {
            self.frontier.admit(child, &mut self.arena);
        }
        Step::Expanded(node.board)
    }

    fn interruption(&self) -> Option<Interruption> {
        if self.options.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
            return Some(Interruption::Cancelled);
        }
        match self.options.max_expansions {
            Some(limit) if self.expanded >= limit => Some(Interruption::ExpansionLimit(limit)),
            _ => None,
        }
    }

    fn finish(&mut self, outcome: SearchOutcome) -> Step {
        debug!(
            strategy = %self.selection.strategy,
            found = outcome.found(),
            expanded = outcome.expanded(),
            depth = outcome.depth(),
            nodes = self.arena.len(),
            closed = self.frontier.closed_len(),
            "search finished"
        );
        self.outcome = Some(outcome.clone());
        Step::Finished(outcome)
    }

    fn solution(&self, id: NodeId) -> Solution {
        let node = &self.arena[id];
        let (path, moves) = self.arena.path(id);
        Solution {
            board: node.board,
            parent: node.parent.map(|parent| self.arena[parent].board),
            expanded: self.expanded,
            depth: node.depth,
            path,
            moves,
        }
    }
}

impl Iterator for Search {
    type Item = Board;

    fn next(&mut self) -> Option<Board> {
        match self.advance() {
            Step::Expanded(board) => Some(board),
            Step::Finished(_) => None,
        }
    }
}

impl FusedIterator for Search {}
