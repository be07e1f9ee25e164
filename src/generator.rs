//! Perfect maze generation.
//!
//! Passages are carved with a randomized backtracker: an iterative depth-first walk that keeps an
//! explicit stack of cells, steps to a uniformly chosen unvisited neighbour while one exists and
//! backtracks otherwise. Every cell gets visited exactly once and every visit carves exactly one
//! passage, so the result is a spanning tree over the grid.

use log::debug;
use rand::{seq::IndexedRandom as _, Rng};

use crate::maze::{Grid, Position};

/// Builds a new `size`×`size` perfect maze.
///
/// A size of zero yields an empty grid.
pub fn generate<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Grid {
    let mut grid = Grid::new(size);
    carve_passages(&mut grid, rng);
    grid
}

/// Carves a spanning tree of passages into `grid`, starting from the origin cell.
///
/// The grid is expected to be fully walled. The visited set lives only for the duration of this
/// call.
pub fn carve_passages<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    let start = Position::new(0, 0);
    let mut visited = VisitedSet::new(grid.size());
    if !visited.insert(start) {
        return;
    }

    let mut stack = vec![start];
    let mut carved = 0_usize;

    while let Some(&current) = stack.last() {
        let candidates: Vec<_> = grid
            .neighbours(current)
            .into_iter()
            .filter(|&(_, next)| !visited.contains(next))
            .collect();

        let Some(&(direction, next)) = candidates.choose(rng) else {
            let _ = stack.pop();
            continue;
        };

        if grid.carve(current, direction) {
            carved += 1;
        }
        let _ = visited.insert(next);
        stack.push(next);
    }

    debug!(
        "carved {carved} passages in a {size}x{size} maze",
        size = grid.size()
    );
}

/// Generation-phase record of the cells reached so far.
struct VisitedSet {
    /// Side length of the grid being carved.
    size: usize,
    /// One flag per cell in row-major order.
    flags: Vec<bool>,
}

impl VisitedSet {
    /// Creates an empty set for a `size`×`size` grid.
    fn new(size: usize) -> Self {
        Self {
            size,
            flags: vec![false; size * size],
        }
    }

    /// Whether `position` has been visited.
    fn contains(&self, position: Position) -> bool {
        self.slot(position)
            .and_then(|idx| self.flags.get(idx))
            .copied()
            .unwrap_or(true)
    }

    /// Marks `position` as visited, returning `false` when it lies outside the grid.
    fn insert(&mut self, position: Position) -> bool {
        let Some(flag) = self.slot(position).and_then(|idx| self.flags.get_mut(idx)) else {
            return false;
        };
        *flag = true;
        true
    }

    /// Row-major index of `position`.
    const fn slot(&self, position: Position) -> Option<usize> {
        if position.x < self.size && position.y < self.size {
            Some(position.y * self.size + position.x)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng as _};

    use super::*;
    use crate::{maze::Direction, pathfinding};

    /// Asserts that every open side has an open counterpart on the neighbouring cell.
    fn assert_symmetric(grid: &Grid) {
        for cell in grid.cells() {
            for direction in Direction::ALL {
                let Some(next) = cell.position.step(direction, grid.size()) else {
                    assert!(
                        cell.walls.is_blocked(direction),
                        "outer boundary of {} should stay closed",
                        cell.position
                    );
                    continue;
                };
                assert_eq!(
                    grid.is_open(cell.position, direction),
                    grid.is_open(next, direction.opposite()),
                    "wall between {} and {next} is asymmetric",
                    cell.position
                );
            }
        }
    }

    #[test]
    fn test_generate_single_cell() {
        let mut rng = StdRng::seed_from_u64(1);

        let grid = generate(1, &mut rng);

        assert_eq!(grid.cell_count(), 1);
        assert_eq!(grid.passage_count(), 0);
        assert_symmetric(&grid);
    }

    #[test]
    fn test_generate_empty_grid() {
        let mut rng = StdRng::seed_from_u64(1);

        let grid = generate(0, &mut rng);

        assert_eq!(grid.cell_count(), 0);
        assert_eq!(grid.passage_count(), 0);
    }

    #[test]
    fn test_generate_default_size_is_perfect() {
        let mut rng = StdRng::seed_from_u64(15);

        let grid = generate(15, &mut rng);

        assert_eq!(grid.passage_count(), 15 * 15 - 1);
        assert_eq!(
            pathfinding::flood_fill(&grid, Position::new(0, 0)).len(),
            15 * 15
        );
        assert_symmetric(&grid);
    }

    #[test]
    fn test_three_by_three_reaches_every_cell() {
        let mut rng = StdRng::seed_from_u64(3);

        let grid = generate(3, &mut rng);
        let reached = pathfinding::flood_fill(&grid, Position::new(0, 0));

        assert_eq!(reached.len(), 9, "all nine cells should be reachable");
        assert_eq!(grid.passage_count(), 8);
    }

    #[test]
    fn test_same_seed_same_maze() {
        let first = generate(12, &mut StdRng::seed_from_u64(42));
        let second = generate(12, &mut StdRng::seed_from_u64(42));

        assert_eq!(first, second);
    }

    #[test]
    fn test_visited_set_bounds() {
        let mut visited = VisitedSet::new(2);

        assert!(!visited.contains(Position::new(1, 1)));
        assert!(visited.insert(Position::new(1, 1)));
        assert!(visited.contains(Position::new(1, 1)));
        assert!(!visited.insert(Position::new(2, 0)));
        assert!(visited.contains(Position::new(2, 0)));
    }

    proptest! {
        #[test]
        fn generated_mazes_are_spanning_trees(size in 1..24_usize, seed in any::<u64>()) {
            let grid = generate(size, &mut StdRng::seed_from_u64(seed));

            prop_assert_eq!(grid.passage_count(), size * size - 1);
            prop_assert_eq!(
                pathfinding::flood_fill(&grid, Position::new(0, 0)).len(),
                size * size
            );
            assert_symmetric(&grid);
        }

        #[test]
        fn generated_mazes_have_unique_paths(size in 2..12_usize, seed in any::<u64>()) {
            let grid = generate(size, &mut StdRng::seed_from_u64(seed));
            let goal = Position::new(size - 1, size - 1);

            // In a tree, a simple path never revisits a cell and ends exactly on the goal.
            let path = pathfinding::solve(&grid, Position::new(0, 0), goal)
                .expect("the goal should be reachable");
            let mut seen = path.clone();
            seen.sort();
            seen.dedup();

            prop_assert_eq!(seen.len(), path.len());
            prop_assert_eq!(path.first().copied(), Some(Position::new(0, 0)));
            prop_assert_eq!(path.last().copied(), Some(goal));
        }
    }
}
