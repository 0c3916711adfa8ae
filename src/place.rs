//! Board coordinates and line directions.
//!
//! `x` is the column (left to right) and `y` is the row (top to bottom),
//! both 0-based.

use std::fmt;

/// One intersection of the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Place {
    // Field order gives row-major ordering.
    pub y: usize,
    pub x: usize,
}

impl Place {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The `len` places starting here and stepping in `direction`.
    ///
    /// Stops early if a step would leave the non-negative quadrant; bounds on
    /// the far side are the caller's business.
    pub fn line(self, direction: Direction, len: usize) -> impl Iterator<Item = Place> {
        std::iter::successors(Some(self), move |&p| direction.step(p)).take(len)
    }
}

impl From<(usize, usize)> for Place {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The four directions a winning row can run in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Fixed row, increasing column.
    Row,
    /// Fixed column, increasing row.
    Column,
    /// Down and to the right.
    Diagonal,
    /// Down and to the left.
    AntiDiagonal,
}

impl Direction {
    /// All directions, in the order rows are searched for.
    pub const ALL: [Direction; 4] = [
        Direction::Row,
        Direction::Column,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    /// Column and row delta of one step.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Row => (1, 0),
            Direction::Column => (0, 1),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (-1, 1),
        }
    }

    /// The place one step further along this direction, if it has
    /// non-negative coordinates.
    pub fn step(self, place: Place) -> Option<Place> {
        let (dx, dy) = self.delta();
        Some(Place::new(
            place.x.checked_add_signed(dx)?,
            place.y.checked_add_signed(dy)?,
        ))
    }
}
