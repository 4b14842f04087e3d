use crate::present::Presenter;

use anyhow::{Context, Result};
use eightpuzzle_common::Board;
use eightpuzzle_solver::{Search, SearchOptions, SearchOutcome, Strategy};

use std::{
    io::{IsTerminal, Write, stderr, stdout},
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::{Duration, Instant},
};
use tracing::warn;

#[derive(Debug, Clone, Copy, Default)]
pub struct Settings {
    pub max_expansions: Option<u32>,
    /// Hide the per-expansion grids.
    pub quiet: bool,
}

pub fn do_solve(
    start: Board,
    goal: Board,
    mode: Option<&str>,
    settings: &Settings,
) -> Result<SearchOutcome> {
    let selection = Strategy::select(mode);
    if let Some(mode) = mode
        && selection.defaulted
    {
        warn!(
            mode,
            expected = ?Strategy::TOKENS,
            "unknown mode, falling back to {}",
            selection.strategy.token()
        );
    }
    if !start.same_parity(&goal) {
        warn!(%start, %goal, "boards have different parity, the goal is unreachable");
    }

    let mut search = Search::new(start, goal, selection.strategy).with_options(SearchOptions {
        max_expansions: settings.max_expansions,
        cancel: None,
    });
    let mut presenter = Presenter::new(stdout().lock(), !settings.quiet);
    presenter
        .header(search.strategy(), &start)
        .context("Failed to write search header")?;

    let started = Instant::now();
    let outcome = if settings.quiet {
        with_spinner("Searching...", || search.run_with(&mut presenter))
    } else {
        search.run_with(&mut presenter)
    };
    let elapsed = started.elapsed();

    presenter
        .take_error()
        .context("Failed to write expanded states")?;
    presenter
        .report(&outcome)
        .context("Failed to write search result")?;
    presenter
        .runtime(elapsed)
        .context("Failed to write search result")?;
    Ok(outcome)
}

fn with_spinner<T, F: FnOnce() -> T>(message: &str, f: F) -> T {
    if stderr().is_terminal() {
        let spinning = Arc::new(AtomicBool::new(true));
        let spinning_clone = Arc::clone(&spinning);
        let message = message.to_string();

        let handle = std::thread::spawn(move || {
            let spinner_chars = ['|', '/', '-', '\\'];
            let mut i = 0;
            let stderr = stderr();
            let mut handle = stderr.lock();

            let _ = write!(handle, "\x1b[?25l"); // hide cursor
            let _ = handle.flush();

            while spinning_clone.load(Ordering::Relaxed) {
                let spinner_char = spinner_chars[i % spinner_chars.len()];
                let _ = write!(handle, "\r{spinner_char} {message}");
                let _ = handle.flush();
                std::thread::sleep(Duration::from_millis(100));
                i += 1;
            }

            let _ = write!(handle, "\r\x1b[2K\r\x1b[?25h"); // clear line and show cursor
            let _ = handle.flush();
        });

        let result = f();
        spinning.store(false, Ordering::Relaxed);
        let _ = handle.join();
        result
    } else {
        f()
    }
}

pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    if secs < 90 {
        let ms = elapsed.subsec_millis();
        format!("{secs}.{ms:03}s")
    } else {
        let minutes = secs / 60;
        let secs = secs % 60;
        format!("{minutes}m {secs}s")
    }
}
