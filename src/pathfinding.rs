//! Pathfinding and hint animation module.
//!
//! This module contains the breadth-first search used to find the route between two cells of a
//! generated maze, the animation manager that reveals that route as an on-screen hint, and the
//! coordinate transformation used to place maze points on a canvas.

use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

use color_eyre::eyre::Result;

use crate::maze::{Grid, Position};

/// Animation frame delay in milliseconds.
///
/// This constant controls the timing between hint reveal frames. A lower value draws the route
/// faster, while a higher value makes it easier to follow.
pub(crate) const ANIMATION_FRAME_DELAY_MS: u64 = 40;

/// Finds the route from `from` to `to` through open passages.
///
/// The returned path starts with `from` and ends with `to`. In a perfect maze it is the only simple
/// path between them. Returns [`None`] when either end lies outside the grid or the goal cannot be
/// reached.
pub fn solve(grid: &Grid, from: Position, to: Position) -> Option<Vec<Position>> {
    if !grid.contains(from) || !grid.contains(to) {
        return None;
    }

    let size = grid.size();
    let mut parents: Vec<Option<Position>> = vec![None; grid.cell_count()];
    let mut seen = vec![false; grid.cell_count()];
    let mut queue = VecDeque::from([from]);
    mark(&mut seen, from, size);

    while let Some(current) = queue.pop_front() {
        if current == to {
            let mut path = vec![current];
            let mut cursor = current;
            while let Some(parent) = slot(size, cursor)
                .and_then(|idx| parents.get(idx).copied())
                .flatten()
            {
                path.push(parent);
                cursor = parent;
            }
            path.reverse();
            return Some(path);
        }

        for next in grid.open_neighbours(current) {
            if is_marked(&seen, next, size) {
                continue;
            }
            mark(&mut seen, next, size);
            if let Some(parent) = slot(size, next).and_then(|idx| parents.get_mut(idx)) {
                *parent = Some(current);
            }
            queue.push_back(next);
        }
    }

    None
}

/// Returns every cell reachable from `from` through open passages, in breadth-first order.
pub fn flood_fill(grid: &Grid, from: Position) -> Vec<Position> {
    if !grid.contains(from) {
        return Vec::new();
    }

    let size = grid.size();
    let mut seen = vec![false; grid.cell_count()];
    let mut reached = Vec::new();
    let mut queue = VecDeque::from([from]);
    mark(&mut seen, from, size);

    while let Some(current) = queue.pop_front() {
        reached.push(current);
        for next in grid.open_neighbours(current) {
            if !is_marked(&seen, next, size) {
                mark(&mut seen, next, size);
                queue.push_back(next);
            }
        }
    }

    reached
}

/// Row-major index of `position` in a `size`×`size` grid.
const fn slot(size: usize, position: Position) -> Option<usize> {
    if position.x < size && position.y < size {
        Some(position.y * size + position.x)
    } else {
        None
    }
}

/// Records `position` as seen.
fn mark(seen: &mut [bool], position: Position, size: usize) {
    if let Some(flag) = slot(size, position).and_then(|idx| seen.get_mut(idx)) {
        *flag = true;
    }
}

/// Whether `position` has already been seen.
fn is_marked(seen: &[bool], position: Position, size: usize) -> bool {
    slot(size, position)
        .and_then(|idx| seen.get(idx))
        .copied()
        .unwrap_or(true)
}

/// Animation state manager for the hint overlay.
///
/// This structure manages the reveal of a solution route: the full list of cells, how many of them
/// are currently visible, and the timing between reveal frames.
pub(crate) struct AnimationManager {
    /// Cells of the route to reveal, in walking order.
    pub steps: Vec<Position>,
    /// Number of cells of [`steps`](AnimationManager::steps) currently shown.
    pub current_index: usize,
    /// Timestamp of the last animation frame update.
    ///
    /// This field stores the time when the animation last advanced, used to pace the reveal.
    pub last_update_time: Instant,
}

impl Default for AnimationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationManager {
    /// Creates a new animation manager with no route loaded.
    pub(crate) fn new() -> Self {
        Self {
            steps: Vec::new(),
            current_index: 0,
            last_update_time: Instant::now(),
        }
    }

    /// Loads a new route and restarts the reveal from its first cell.
    pub(crate) fn load(&mut self, steps: Vec<Position>) {
        self.steps = steps;
        self.reset();
    }

    /// Resets the animation state to the beginning.
    pub(crate) fn reset(&mut self) {
        self.current_index = 0;
        self.last_update_time = Instant::now();
    }

    /// Clears all animation data and resets state.
    pub(crate) fn clear(&mut self) {
        self.steps.clear();
        self.reset();
    }

    /// Whether a route is loaded.
    pub(crate) fn is_active(&self) -> bool {
        !self.steps.is_empty()
    }

    /// Cells revealed so far.
    pub(crate) fn visible(&self) -> &[Position] {
        let end = self.current_index.min(self.steps.len());
        self.steps.get(..end).unwrap_or_default()
    }

    /// Advances the reveal by one cell when enough time has passed.
    ///
    /// Once every cell is visible the route stays on screen until it is cleared or replaced.
    pub(crate) fn update(&mut self) {
        if self.current_index >= self.steps.len() {
            return;
        }

        if self.last_update_time.elapsed() >= Duration::from_millis(ANIMATION_FRAME_DELAY_MS) {
            self.last_update_time = Instant::now();
            self.current_index += 1;
        }
    }
}

/// Transforms block coordinates to screen coordinates for canvas rendering.
///
/// This function converts `(col, row)` coordinates of a `rows`×`cols` block layout to screen
/// coordinates `(x, y)` centred on the origin, using coordinate[i] = (n - 1) / 2 - i for rows and
/// coordinate[i] = i - (n - 1) / 2 for columns.
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations.
pub(crate) fn transform_maze_to_screen_coords(
    maze_coords: &[(usize, usize)],
    rows: usize,
    cols: usize,
) -> Result<Vec<(f64, f64)>> {
    let rows_n = f64::from(u16::try_from(rows)?);
    let cols_n = f64::from(u16::try_from(cols)?);

    maze_coords
        .iter()
        .map(|&(col, row)| {
            let screen_y = (rows_n - 1.) / 2. - f64::from(u16::try_from(row)?);
            let screen_x = f64::from(u16::try_from(col)?) - (cols_n - 1.) / 2.;

            Ok((screen_x, screen_y))
        })
        .collect()
}
