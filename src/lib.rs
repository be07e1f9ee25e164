//! A terminal maze round.
//!
//! Each game generates a fresh perfect maze, a maze whose passages form a spanning tree so exactly
//! one path joins any two cells, and lets the player walk it from the top-left cell to the
//! bottom-right one. Solving the maze reveals a code and records the time taken.
//!
//! The maze engine ([`MazeEngine`], [`Grid`], [`Navigator`]) is usable on its own. [`App`] wraps it
//! in a Ratatui interface.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
mod config;
mod events;
mod game;
mod generator;
mod logging;
mod maze;
mod navigator;
mod pathfinding;
mod session;
mod types;
mod ui;

pub use app::App;
pub use config::Settings;
pub use game::{MazeEngine, DEFAULT_SIZE};
pub use generator::{carve_passages, generate};
pub use logging::install as install_logger;
pub use maze::{Cell, Direction, Grid, Position, Walls};
pub use navigator::{MoveOutcome, Navigator, RunState};
pub use pathfinding::{flood_fill, solve};
pub use session::RoundReport;
pub use types::ControlScheme;
