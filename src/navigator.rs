//! Player movement through a generated maze.

use log::{info, trace};

use crate::maze::{Direction, Grid, Position};

/// Progress of a single maze run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    /// The goal has not been reached yet and moves are accepted.
    #[default]
    Active,
    /// The goal has been reached. No further moves are applied.
    Solved,
}

/// Result of applying one move intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Player position after the intent was processed.
    pub position: Position,
    /// Whether the run is solved after the intent was processed.
    pub solved: bool,
    /// Whether the intent actually changed the position.
    pub moved: bool,
}

/// Tracks the player position and the win condition of a maze run.
///
/// Illegal moves are rejected silently: the position stays where it was and nothing is reported as
/// an error. Once the goal is reached the navigator freezes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigator {
    /// Current player cell.
    position: Position,
    /// Cell that ends the run when entered.
    goal: Position,
    /// Whether the run is still going.
    state: RunState,
}

impl Navigator {
    /// Starts a run at `start` towards `goal`.
    #[must_use]
    pub const fn new(start: Position, goal: Position) -> Self {
        Self {
            position: start,
            goal,
            state: RunState::Active,
        }
    }

    /// Current player cell.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Goal cell of the run.
    #[must_use]
    pub const fn goal(&self) -> Position {
        self.goal
    }

    /// Current state of the run.
    #[must_use]
    pub const fn state(&self) -> RunState {
        self.state
    }

    /// Whether the goal has been reached.
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self.state, RunState::Solved)
    }

    /// Applies a move intent against `grid`.
    ///
    /// The move is legal when the current cell's wall facing `direction` is open and the target
    /// cell lies inside the grid. Both are checked on every call. A legal move that lands on the
    /// goal solves the run.
    pub fn step(&mut self, grid: &Grid, direction: Direction) -> MoveOutcome {
        if self.is_solved() {
            return self.outcome(false);
        }

        if !grid.is_open(self.position, direction) {
            trace!("move {direction:?} from {} blocked by wall", self.position);
            return self.outcome(false);
        }
        let Some(next) = self.position.step(direction, grid.size()) else {
            trace!("move {direction:?} from {} leaves the grid", self.position);
            return self.outcome(false);
        };

        self.position = next;
        if next == self.goal {
            self.state = RunState::Solved;
            info!("goal {} reached", self.goal);
        }

        self.outcome(true)
    }

    /// Applies an intent that may not name a direction at all.
    ///
    /// Unrecognised intents are no-ops.
    pub fn step_intent(&mut self, grid: &Grid, intent: Option<Direction>) -> MoveOutcome {
        match intent {
            Some(direction) => self.step(grid, direction),
            None => self.outcome(false),
        }
    }

    /// Snapshot of the current state.
    const fn outcome(&self, moved: bool) -> MoveOutcome {
        MoveOutcome {
            position: self.position,
            solved: self.is_solved(),
            moved,
        }
    }
}
