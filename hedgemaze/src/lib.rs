//! Hedgemaze — find the shortest way through a hedge maze.
//!
//! The binary loads a maze description, prints its adjacency list and a
//! box drawing of the grid, then answers start/finish queries until the
//! user types `quit`.

pub mod config;
pub mod logger;
pub mod prompt;
pub mod render;

pub use config::Config;
pub use prompt::{PromptError, Session};
pub use render::{AdjacencyList, Layout, PathDisplay};
