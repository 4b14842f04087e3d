use crate::utils::format_elapsed;

use eightpuzzle_common::{Board, move_::format_moves};
use eightpuzzle_solver::{SearchObserver, SearchOutcome, Strategy};

use std::{
    io::{self, Write},
    time::Duration,
};

/// Console rendering of a search: header, one grid per expansion, then the
/// summary. Write errors during the search are kept and returned by
/// [`Presenter::take_error`].
pub struct Presenter<W: Write> {
    out: W,
    show_expansions: bool,
    error: Option<io::Error>,
}

impl<W: Write> Presenter<W> {
    pub fn new(out: W, show_expansions: bool) -> Self {
        Self {
            out,
            show_expansions,
            error: None,
        }
    }

    pub fn header(&mut self, strategy: Strategy, start: &Board) -> io::Result<()> {
        writeln!(self.out, "{strategy}")?;
        writeln!(self.out, "Start State:")?;
        write!(self.out, "{}", start.to_pretty_string())?;
        writeln!(self.out, "-----\nBegin Expanding States")
    }

    pub fn report(&mut self, outcome: &SearchOutcome) -> io::Result<()> {
        match outcome {
            SearchOutcome::Solved(solution) => {
                writeln!(self.out, "------\nFound goal state match!")?;
                write!(self.out, "{}", solution.board.to_pretty_string())?;
                writeln!(self.out, "------\nParent to Goal:")?;
                if let Some(parent) = solution.parent {
                    write!(self.out, "{}", parent.to_pretty_string())?;
                }
                writeln!(self.out, "Grid States expanded: {}", solution.expanded)?;
                writeln!(self.out, "Depth: {}", solution.depth)?;
                if !solution.moves.is_empty() {
                    writeln!(self.out, "Moves:")?;
                    write!(self.out, "{}", format_moves(&solution.moves))?;
                }
            }
            SearchOutcome::Exhausted { expanded } => {
                writeln!(self.out, "No GridStates left to explore")?;
                writeln!(self.out, "Grid States expanded: {expanded}")?;
            }
            SearchOutcome::Interrupted { expanded, reason } => {
                writeln!(self.out, "Search stopped: {reason}")?;
                writeln!(self.out, "Grid States expanded: {expanded}")?;
            }
        }
        Ok(())
    }

    pub fn runtime(&mut self, elapsed: Duration) -> io::Result<()> {
        writeln!(self.out, "Runtime: {}", format_elapsed(elapsed))?;
        self.out.flush()
    }

    pub fn take_error(&mut self) -> io::Result<()> {
        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SearchObserver for Presenter<W> {
    fn on_expand(&mut self, board: &Board, _expanded: u32) {
        if !self.show_expansions || self.error.is_some() {
            return;
        }
        if let Err(err) = write!(self.out, "{}", board.to_pretty_string()) {
            self.error = Some(err);
        }
    }
}
