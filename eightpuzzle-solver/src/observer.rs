use crate::outcome::SearchOutcome;

use eightpuzzle_common::Board;

/// Receives the events of a running search, in order: one `on_expand` per
/// expanded node, then a single `on_finish`.
pub trait SearchObserver {
    /// `expanded` counts this expansion.
    fn on_expand(&mut self, _board: &Board, _expanded: u32) {}

    fn on_finish(&mut self, _outcome: &SearchOutcome) {}
}

impl SearchObserver for () {}

/// Records every expanded board.
#[derive(Debug, Clone, Default)]
pub struct ExpansionLog {
    pub boards: Vec<Board>,
}

impl SearchObserver for ExpansionLog {
    fn on_expand(&mut self, board: &Board, _expanded: u32) {
        self.boards.push(*board);
    }
}
