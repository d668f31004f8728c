//! The interactive start/finish query loop.

use std::io::{self, BufRead, Write};

use hedge_core::{Coord, Maze, MazeError, ParseCoordError};
use hedge_paths::PathRange;
use log::debug;
use thiserror::Error;

use crate::render::PathDisplay;

/// Word that ends the session at either prompt.
pub const QUIT: &str = "quit";

const START_PROMPT: &str = "Enter starting coordinates. (row, then column) ";
const FINISH_PROMPT: &str = "Enter finish coordinates. (row, then column) ";
const SEARCHING: &str = "Currently finding the shortest path...";

/// A rejected answer to one of the prompts. The session re-prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error(transparent)]
    Coord(#[from] ParseCoordError),
    #[error(transparent)]
    Maze(#[from] MazeError),
}

/// Parse a `"row col"` answer and check it names a cell of `maze`.
pub fn parse_cell(maze: &Maze, line: &str) -> Result<Coord, PromptError> {
    let c: Coord = line.parse()?;
    if !maze.contains(c) {
        return Err(MazeError::OutOfBounds(c).into());
    }
    Ok(c)
}

/// Answers shortest-path queries against one maze.
pub struct Session<'a> {
    maze: &'a Maze,
    paths: PathRange,
}

enum Answer {
    Cell(Coord),
    Retry,
    Quit,
}

impl<'a> Session<'a> {
    pub fn new(maze: &'a Maze) -> Self {
        Self {
            maze,
            paths: PathRange::new(maze.bounds()),
        }
    }

    /// Shortest path between two cells of the session's maze.
    pub fn query(&mut self, start: Coord, finish: Coord) -> Result<Vec<Coord>, MazeError> {
        self.paths.bfs_path(self.maze, start, finish)
    }

    /// Prompt on `output` and read queries from `input` until `quit` or
    /// end of input. Bad answers are reported and the loop starts over.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        loop {
            let start = match self.ask(&mut input, &mut output, START_PROMPT)? {
                Answer::Cell(c) => c,
                Answer::Retry => continue,
                Answer::Quit => return Ok(()),
            };
            let finish = match self.ask(&mut input, &mut output, FINISH_PROMPT)? {
                Answer::Cell(c) => c,
                Answer::Retry => continue,
                Answer::Quit => return Ok(()),
            };

            writeln!(output, "{SEARCHING}")?;
            match self.query(start, finish) {
                Ok(path) => writeln!(output, "{}", PathDisplay(&path))?,
                Err(e) => writeln!(output, "{e}")?,
            }
        }
    }

    fn ask<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
        prompt: &str,
    ) -> io::Result<Answer> {
        write!(output, "{prompt}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(Answer::Quit);
        }
        let line = line.trim();
        if line == QUIT {
            return Ok(Answer::Quit);
        }

        match parse_cell(self.maze, line) {
            Ok(c) => Ok(Answer::Cell(c)),
            Err(e) => {
                debug!("rejected {line:?}: {e}");
                writeln!(output, "{e}")?;
                Ok(Answer::Retry)
            }
        }
    }
}
