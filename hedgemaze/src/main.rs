use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use hedge_core::Maze;

use hedgemaze_lib::{AdjacencyList, Config, Layout, Session, logger};

fn main() -> Result<()> {
    let config = Config::parse();
    logger::init(config.verbose);

    let maze = Maze::open_with(&config.maze_file, config.parse_options())
        .with_context(|| format!("could not load maze from {}", config.maze_file.display()))?;
    tracing::info!(
        rows = maze.rows(),
        cols = maze.cols(),
        passages = maze.edge_count(),
        "maze loaded"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if !config.quiet {
        writeln!(out, "{}", AdjacencyList(&maze))?;
        write!(out, "{}", Layout(&maze))?;
    }

    Session::new(&maze).run(io::stdin().lock(), out)?;
    Ok(())
}
