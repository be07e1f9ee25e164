//! Maze game tying generation and navigation together.

use log::info;
use rand::Rng;

use crate::{
    generator,
    maze::{Direction, Grid, Position},
    navigator::{MoveOutcome, Navigator},
};

/// Side length used when no other size is requested.
pub const DEFAULT_SIZE: usize = 15;

/// One maze instance: the grid plus the player walking it.
///
/// The engine is replaced wholesale for every new game. The player always starts on the origin
/// cell and the goal is always the opposite corner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeEngine {
    /// Carved maze, read-only once generated.
    grid: Grid,
    /// Player state for this maze.
    navigator: Navigator,
}

impl MazeEngine {
    /// Generates a fresh maze of the given size and places the player on the origin.
    ///
    /// Sizes below one are raised to one.
    pub fn new_game<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let size = size.max(1);
        let engine = Self::from_grid(generator::generate(size, rng));
        info!("new {size}x{size} maze, goal at {}", engine.goal());
        engine
    }

    /// Wraps an existing grid, placing the player on the origin and the goal in the far corner.
    ///
    /// An empty grid is replaced with a single walled cell.
    #[must_use]
    pub fn from_grid(grid: Grid) -> Self {
        let grid = if grid.size() == 0 { Grid::new(1) } else { grid };
        let last = grid.size() - 1;

        Self {
            navigator: Navigator::new(Position::new(0, 0), Position::new(last, last)),
            grid,
        }
    }

    /// Carved maze.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Starting cell, always the origin.
    #[must_use]
    pub const fn start(&self) -> Position {
        Position::new(0, 0)
    }

    /// Goal cell, always the corner opposite the start.
    #[must_use]
    pub const fn goal(&self) -> Position {
        self.navigator.goal()
    }

    /// Current player cell.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.navigator.position()
    }

    /// Whether the goal has been reached.
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.navigator.is_solved()
    }

    /// Applies one move intent. Illegal moves and moves after the solve are no-ops.
    pub fn move_player(&mut self, direction: Direction) -> MoveOutcome {
        self.navigator.step(&self.grid, direction)
    }

    /// Applies an intent that may not name a direction. Unrecognised intents are no-ops.
    pub fn move_intent(&mut self, intent: Option<Direction>) -> MoveOutcome {
        self.navigator.step_intent(&self.grid, intent)
    }

    /// Route from the player to the goal, as used by the hint overlay.
    #[must_use]
    pub fn route_to_goal(&self) -> Vec<Position> {
        crate::pathfinding::solve(&self.grid, self.position(), self.goal()).unwrap_or_default()
    }
}
