use core::fmt;
use smallvec::SmallVec;

use crate::N_SMALLVEC_SIZE;

/// The four orthogonal moves. [Direction::ALL] lists them in the priority order the solvers
/// expand them in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    East,
    South,
    West,
    North,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::North,
    ];

    /// Offset as (row delta, column delta).
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
            Direction::North => (-1, 0),
        }
    }
}

/// A cell position, row first. Rows grow downwards and columns to the right, both starting at 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Coordinate {
        Coordinate { row, col }
    }

    /// The neighbour one step in `direction`, or [None] if that step would leave the
    /// non-negative quadrant. Upper bounds are the concern of the grid.
    pub fn neighbour(&self, direction: Direction) -> Option<Coordinate> {
        let (d_row, d_col) = direction.offset();
        Some(Coordinate {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }

    /// The (up to four) orthogonal neighbours in [Direction::ALL] order.
    pub fn neumann_neighbourhood(&self) -> SmallVec<[Coordinate; N_SMALLVEC_SIZE]> {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| self.neighbour(direction))
            .collect()
    }

    pub fn manhattan_distance(&self, other: &Coordinate) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// True if the two coordinates are exactly one orthogonal step apart.
    pub fn is_adjacent(&self, other: &Coordinate) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Coordinate { row, col }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
