//! Grid coordinates and compass directions.

use std::fmt;

/// One of the four axis-aligned compass directions.
///
/// Diagonal lines are not supported, so tracing only ever moves along these
/// four directions. Diagonal neighbors are still reachable through
/// [`Cell::north_east`] and friends for pattern windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All four directions in clockwise order starting at north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Returns the direction pointing the other way
    pub fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Returns the `(dx, dy)` offset of a single step in this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::East => (1, 0),
            Self::South => (0, 1),
            Self::West => (-1, 0),
        }
    }

    /// Returns true for east and west
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::East | Self::West)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        };
        f.write_str(name)
    }
}

/// An integer grid coordinate.
///
/// Cells carry no reference to a grid; reading the character at a cell is
/// always done through the grid that owns the buffer.
///
/// # Examples
///
/// ```
/// # use scrawl_core::cell::{Cell, Direction};
/// let cell = Cell::new(4, 2);
///
/// assert_eq!(cell.east(), Cell::new(5, 2));
/// assert_eq!(cell.step(Direction::North), Cell::new(4, 1));
/// assert_eq!(cell.direction_to(cell.west()), Some(Direction::West));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    x: i32,
    y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(self) -> i32 {
        self.x
    }

    pub fn y(self) -> i32 {
        self.y
    }

    /// Returns this cell moved by `(dx, dy)`
    pub fn translate(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Returns the neighbor one step away in `direction`
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        self.translate(dx, dy)
    }

    pub fn north(self) -> Self {
        self.translate(0, -1)
    }

    pub fn south(self) -> Self {
        self.translate(0, 1)
    }

    pub fn east(self) -> Self {
        self.translate(1, 0)
    }

    pub fn west(self) -> Self {
        self.translate(-1, 0)
    }

    pub fn north_east(self) -> Self {
        self.translate(1, -1)
    }

    pub fn north_west(self) -> Self {
        self.translate(-1, -1)
    }

    pub fn south_east(self) -> Self {
        self.translate(1, 1)
    }

    pub fn south_west(self) -> Self {
        self.translate(-1, 1)
    }

    /// The four edge-sharing neighbors, in north, south, east, west order.
    pub fn orthogonal_neighbors(self) -> [Cell; 4] {
        [self.north(), self.south(), self.east(), self.west()]
    }

    /// All eight neighbors, including diagonals.
    pub fn all_neighbors(self) -> [Cell; 8] {
        [
            self.north_west(),
            self.north(),
            self.north_east(),
            self.west(),
            self.east(),
            self.south_west(),
            self.south(),
            self.south_east(),
        ]
    }

    /// Returns the direction of `other` if it is an orthogonal neighbor.
    pub fn direction_to(self, other: Cell) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&direction| self.step(direction) == other)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_opposite() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_ne!(direction.opposite(), direction);
        }
    }

    #[test]
    fn test_cell_neighbors() {
        let cell = Cell::new(0, 0);

        assert_eq!(
            cell.orthogonal_neighbors(),
            [
                Cell::new(0, -1),
                Cell::new(0, 1),
                Cell::new(1, 0),
                Cell::new(-1, 0)
            ]
        );
        assert_eq!(cell.all_neighbors().len(), 8);
        assert!(!cell.all_neighbors().contains(&cell));
    }

    #[test]
    fn test_direction_to_rejects_diagonals() {
        let cell = Cell::new(3, 3);
        assert_eq!(cell.direction_to(cell.south()), Some(Direction::South));
        assert_eq!(cell.direction_to(cell.south_east()), None);
        assert_eq!(cell.direction_to(cell), None);
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::new(-1, 7).to_string(), "(-1, 7)");
    }
}
