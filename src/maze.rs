//! Maze grid data and wall bookkeeping.
//!
//! This module contains the [`Grid`] type along with the coordinate, direction and wall types it is
//! built from. Walls are only ever opened in pairs through [`Grid::carve`] or [`Grid::connect`], so
//! two adjacent cells always agree on whether the boundary between them is open.

use std::fmt;

/// Cardinal direction of a move intent or of a cell boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards the row above, that is `y - 1`.
    Up,
    /// Towards the next column, that is `x + 1`.
    Right,
    /// Towards the row below, that is `y + 1`.
    Down,
    /// Towards the previous column, that is `x - 1`.
    Left,
}

impl Direction {
    /// All four directions, in the order neighbours are probed by the generator.
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Returns the direction pointing back the way this one came.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
        }
    }

    /// Returns the direction a quarter turn clockwise from this one.
    #[must_use]
    pub const fn clockwise(self) -> Self {
        match self {
            Self::Up => Self::Right,
            Self::Right => Self::Down,
            Self::Down => Self::Left,
            Self::Left => Self::Up,
        }
    }

    /// Returns the `(dx, dy)` unit offset of the direction.
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Up => (0, -1),
            Self::Right => (1, 0),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
        }
    }

    /// Parses a direction name such as `"up"` or `"Left"`.
    ///
    /// Anything outside the four names yields [`None`], which callers treat as a no-op intent.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "up" => Some(Self::Up),
            "right" => Some(Self::Right),
            "down" => Some(Self::Down),
            "left" => Some(Self::Left),
            _ => None,
        }
    }

    /// Bit used for this direction inside [`Walls`].
    const fn bit(self) -> u8 {
        match self {
            Self::Up => 0b0001,
            Self::Right => 0b0010,
            Self::Down => 0b0100,
            Self::Left => 0b1000,
        }
    }
}

/// Integer cell coordinates inside a grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column, growing to the right.
    pub x: usize,
    /// Row, growing downwards.
    pub y: usize,
}

impl Position {
    /// Builds a position from its column and row.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring position in `direction`, if it lies inside a `size`×`size` grid.
    ///
    /// Both the lower bound (no underflow past zero) and the upper bound are checked here, so the
    /// result never depends on the state of any wall.
    #[must_use]
    pub fn step(self, direction: Direction, size: usize) -> Option<Self> {
        let (dx, dy) = direction.offset();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;

        (x < size && y < size).then_some(Self { x, y })
    }

    /// Returns the direction leading from `self` to `other` when the two are orthogonally
    /// adjacent.
    #[must_use]
    pub fn direction_to(self, other: Self) -> Option<Direction> {
        Direction::ALL.into_iter().find(|direction| {
            let (dx, dy) = direction.offset();
            self.x.checked_add_signed(dx) == Some(other.x)
                && self.y.checked_add_signed(dy) == Some(other.y)
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.x, self.y)
    }
}

/// Set of closed sides of a single cell.
///
/// A set bit means the passage on that side is blocked. Fresh cells start with all four sides
/// closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Walls(u8);

impl Default for Walls {
    fn default() -> Self {
        Self::closed()
    }
}

impl Walls {
    /// All four sides blocked.
    #[must_use]
    pub const fn closed() -> Self {
        Self(0b1111)
    }

    /// Whether the side facing `direction` is blocked.
    #[must_use]
    pub const fn is_blocked(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    /// Whether the side facing `direction` is open.
    #[must_use]
    pub const fn is_open(self, direction: Direction) -> bool {
        !self.is_blocked(direction)
    }

    /// Opens the side facing `direction`.
    ///
    /// Kept private to the grid so that a side is never opened without its counterpart.
    const fn open(&mut self, direction: Direction) {
        self.0 &= !direction.bit();
    }
}

/// A single maze cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Coordinates of the cell.
    pub position: Position,
    /// Blocked sides of the cell.
    pub walls: Walls,
}

/// Square grid of cells.
///
/// The grid is the single owner of wall state. Passages can be carved but never closed again, and
/// every carve touches both cells sharing the boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Side length of the grid.
    size: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a fully walled `size`×`size` grid.
    #[must_use]
    pub fn new(size: usize) -> Self {
        let cells = (0..size)
            .flat_map(|y| (0..size).map(move |x| Position::new(x, y)))
            .map(|position| Cell {
                position,
                walls: Walls::closed(),
            })
            .collect();

        Self { size, cells }
    }

    /// Side length of the grid.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of cells in the grid.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `position` lies inside the grid.
    #[must_use]
    pub const fn contains(&self, position: Position) -> bool {
        position.x < self.size && position.y < self.size
    }

    /// Returns the cell at `position`, or [`None`] outside the grid.
    #[must_use]
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.index(position).and_then(|idx| self.cells.get(idx))
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Whether the side of the cell at `position` facing `direction` is open.
    ///
    /// Positions outside the grid report every side as closed.
    #[must_use]
    pub fn is_open(&self, position: Position, direction: Direction) -> bool {
        self.cell(position)
            .is_some_and(|cell| cell.walls.is_open(direction))
    }

    /// Returns the in-bounds neighbours of `position` together with the direction to reach them.
    #[must_use]
    pub fn neighbours(&self, position: Position) -> Vec<(Direction, Position)> {
        if !self.contains(position) {
            return Vec::new();
        }

        Direction::ALL
            .into_iter()
            .filter_map(|direction| {
                position
                    .step(direction, self.size)
                    .map(|next| (direction, next))
            })
            .collect()
    }

    /// Returns the neighbours of `position` reachable through an open side.
    #[must_use]
    pub fn open_neighbours(&self, position: Position) -> Vec<Position> {
        self.neighbours(position)
            .into_iter()
            .filter(|&(direction, _)| self.is_open(position, direction))
            .map(|(_, next)| next)
            .collect()
    }

    /// Opens the wall pair between `from` and its neighbour in `direction`.
    ///
    /// Both cells are updated in the same call. Returns `false` without touching anything when
    /// either cell falls outside the grid.
    pub fn carve(&mut self, from: Position, direction: Direction) -> bool {
        let Some(to) = from.step(direction, self.size) else {
            return false;
        };
        let (Some(from_idx), Some(to_idx)) = (self.index(from), self.index(to)) else {
            return false;
        };

        if let Some(cell) = self.cells.get_mut(from_idx) {
            cell.walls.open(direction);
        }
        if let Some(cell) = self.cells.get_mut(to_idx) {
            cell.walls.open(direction.opposite());
        }

        true
    }

    /// Opens the wall pair between two adjacent cells.
    ///
    /// Returns `false` when the cells are not orthogonal neighbours inside the grid.
    pub fn connect(&mut self, first: Position, second: Position) -> bool {
        first
            .direction_to(second)
            .is_some_and(|direction| self.carve(first, direction))
    }

    /// Number of carved passages, each open wall pair being counted once.
    #[must_use]
    pub fn passage_count(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| {
                [Direction::Right, Direction::Down]
                    .into_iter()
                    .filter(|&direction| {
                        cell.walls.is_open(direction)
                            && cell.position.step(direction, self.size).is_some()
                    })
                    .count()
            })
            .sum()
    }

    /// Row-major index of `position`.
    const fn index(&self, position: Position) -> Option<usize> {
        if self.contains(position) {
            Some(position.y * self.size + position.x)
        } else {
            None
        }
    }
}

impl fmt::Display for Grid {
    /// Renders the grid with `+` posts, `---` horizontal walls and `|` vertical walls.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            let mut top = String::from("+");
            let mut middle = String::new();
            for x in 0..self.size {
                let position = Position::new(x, y);
                top.push_str(if self.is_open(position, Direction::Up) {
                    "   +"
                } else {
                    "---+"
                });
                middle.push(if self.is_open(position, Direction::Left) {
                    ' '
                } else {
                    '|'
                });
                middle.push_str("   ");
            }
            middle.push('|');
            writeln!(formatter, "{top}")?;
            writeln!(formatter, "{middle}")?;
        }

        let bottom = "---+".repeat(self.size);
        write!(formatter, "+{bottom}")
    }
}
