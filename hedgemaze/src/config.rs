use std::path::PathBuf;

use clap::Parser;
use hedge_core::ParseOptions;

/// Command-line configuration.
#[derive(Parser, Debug, Clone)]
#[command(name = "hedgemaze")]
#[command(about = "Find shortest paths through a hedge maze", long_about = None)]
pub struct Config {
    /// Maze description file
    pub maze_file: PathBuf,

    /// Reject descriptions that end before every declared row
    #[arg(long)]
    pub strict: bool,

    /// Skip printing the adjacency list and layout
    #[arg(short, long)]
    pub quiet: bool,

    /// Log construction and search details
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            strict: self.strict,
        }
    }
}
