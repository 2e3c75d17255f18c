// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line front end: read a puzzle file, solve it, print the board.

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{debug, info};
use std::io::Read;
use std::path::PathBuf;

use tents_search::solver::Solver;
use tents_search::{puzzle, verify};

#[derive(Parser)]
#[command(name = "tents", about = "Solve tents-and-trees puzzles")]
struct Cli {
    /// Puzzle file, or `-` to read from standard input.
    puzzle: PathBuf,

    /// Print search statistics after solving.
    #[arg(long)]
    stats: bool,
}

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let cli = Cli::parse();
    let text = if cli.puzzle.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("reading puzzle from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(&cli.puzzle)
            .with_context(|| format!("reading {}", cli.puzzle.display()))?
    };

    let grid = puzzle::parse_puzzle(&text)?;
    debug!(
        "parsed {}x{} puzzle with {} trees",
        grid.rows(),
        grid.cols(),
        grid.positions_of(tents_search::CellState::Tree).len()
    );

    let mut solver = Solver::new(&grid)?;
    let solution = solver.solve();
    if cli.stats {
        eprintln!("{}", solver.statistics());
    }

    match solution {
        Some(tents) => {
            let solved = grid.with_solution(&tents);
            if !verify::is_solved(&solved) {
                bail!("solver produced an invalid board");
            }
            println!("{}", puzzle::render_puzzle(&solved));
            for tent in &tents {
                println!("tent at {tent}");
            }
            Ok(())
        }
        None => {
            info!("no solution exists");
            std::process::exit(1);
        }
    }
}
