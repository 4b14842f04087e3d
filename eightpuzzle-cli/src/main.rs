mod driver;
mod loader;
mod present;
mod utils;

use crate::driver::{Request, prompt_again};
use crate::loader::load_board;
use crate::utils::*;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use std::{
    io::{stdin, stdout},
    path::PathBuf,
};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Puzzle file with the start board (e.g. `1,2,3` / `4,5,6` / `7,0,8`)
    start: PathBuf,
    /// Puzzle file with the goal board
    goal: PathBuf,
    /// Search mode: bfs, dfs, astar1 (Manhattan) or astar2 (tiles out of place)
    mode: Option<String>,
    /// Stop after expanding this many states
    #[arg(short, long, value_name = "NUM")]
    max_expansions: Option<u32>,
    /// Do not print every expanded state
    #[arg(short, long)]
    quiet: bool,
    /// Offer to run another puzzle after each solve
    #[arg(short, long)]
    interactive: bool,
}

fn main() -> Result<()> {
    init_logging();

    let Cli {
        start,
        goal,
        mode,
        max_expansions,
        quiet,
        interactive,
    } = Cli::parse();
    let settings = Settings {
        max_expansions,
        quiet,
    };

    let mut request = Request { start, goal, mode };
    loop {
        if let Err(err) = run(&request, &settings) {
            if !interactive {
                return Err(err);
            }
            eprintln!("Error: {err:#}");
        }
        if !interactive {
            return Ok(());
        }
        match prompt_again(&mut stdin().lock(), &mut stdout())? {
            Some(next) => request = next,
            None => return Ok(()),
        }
    }
}

fn run(request: &Request, settings: &Settings) -> Result<()> {
    let start = load_board(&request.start)?;
    let goal = load_board(&request.goal)?;
    do_solve(start, goal, request.mode.as_deref(), settings)?;
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
