//! The n×n Omok board and win detection.
//!
//! The board borrows its players: every cell is `Option<&Player>`, so an
//! empty intersection is `None` and ownership is compared by identity via
//! [`Player::is`].
//!
//! Cells are stored row-major in a flat `Vec`. Coordinates are `(x, y)` with
//! `x` the column and `y` the row.

use std::fmt;

use thiserror::Error;
use tracing::{debug, trace};

use crate::constants::{DEFAULT_SIZE, WIN_LENGTH};
use crate::place::{Direction, Place};
use crate::player::Player;

/// Errors reported by board operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Board side length is zero, or too large to allocate its cells
    #[error("invalid board size {0}: size must be positive and its cell count must fit in memory")]
    InvalidSize(usize),
    /// Coordinate outside `[0, size)`
    #[error("place ({x}, {y}) is outside the {size}x{size} board")]
    OutOfBounds { x: usize, y: usize, size: usize },
}

/// A square Omok board.
#[derive(Clone, Debug)]
pub struct Board<'a> {
    size: usize,
    cells: Vec<Option<&'a Player>>,
}

impl Default for Board<'_> {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            cells: vec![None; DEFAULT_SIZE * DEFAULT_SIZE],
        }
    }
}

impl<'a> Board<'a> {
    /// Create an empty `size`×`size` board.
    ///
    /// Fails with [`BoardError::InvalidSize`] for a zero size, or when the
    /// `size * size` cells cannot be counted or allocated.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        let len = size
            .checked_mul(size)
            .filter(|&len| len > 0)
            .ok_or(BoardError::InvalidSize(size))?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| BoardError::InvalidSize(size))?;
        cells.resize(len, None);
        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Remove every stone, keeping the size.
    pub fn clear(&mut self) {
        self.cells.fill(None);
        debug!(size = self.size, "cleared board");
    }

    /// Return true if every intersection holds a stone.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of stones on the board.
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Empty intersections in row-major order.
    pub fn empty_places(&self) -> impl Iterator<Item = Place> {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(move |(i, _)| Place::new(i % size, i / size))
    }

    /// Return true if `(x, y)` is on the board.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    fn idx(&self, x: usize, y: usize) -> Result<usize, BoardError> {
        if !self.contains(x, y) {
            return Err(BoardError::OutOfBounds {
                x,
                y,
                size: self.size,
            });
        }
        Ok(y * self.size + x)
    }

    /// Put a stone for `player` at `(x, y)`.
    ///
    /// An existing stone at that place is replaced; enforcing move legality
    /// is left to the caller.
    pub fn place_stone(
        &mut self,
        x: usize,
        y: usize,
        player: &'a Player,
    ) -> Result<(), BoardError> {
        let i = self.idx(x, y)?;
        if let Some(prev) = self.cells[i].filter(|prev| !prev.is(player)) {
            debug!(x, y, previous = %prev, "overwriting stone");
        }
        self.cells[i] = Some(player);
        debug!(x, y, player = %player, "placed stone");
        Ok(())
    }

    pub fn is_empty(&self, x: usize, y: usize) -> Result<bool, BoardError> {
        Ok(self.player_at(x, y)?.is_none())
    }

    pub fn is_occupied(&self, x: usize, y: usize) -> Result<bool, BoardError> {
        Ok(self.player_at(x, y)?.is_some())
    }

    /// Return true if the stone at `(x, y)` belongs to `player`.
    pub fn is_occupied_by(
        &self,
        x: usize,
        y: usize,
        player: &Player,
    ) -> Result<bool, BoardError> {
        Ok(self.player_at(x, y)?.is_some_and(|p| p.is(player)))
    }

    /// The player whose stone is at `(x, y)`, or `None` if it is empty.
    pub fn player_at(&self, x: usize, y: usize) -> Result<Option<&'a Player>, BoardError> {
        Ok(self.cells[self.idx(x, y)?])
    }

    /// Return true if `player` has five (or more) stones in a line.
    pub fn is_won_by(&self, player: &Player) -> bool {
        self.winning_row_by(player).is_some()
    }

    /// The first winning row on the board, whoever owns it.
    ///
    /// Rows are searched in [`Direction::ALL`] order and, within a
    /// direction, by starting place in row-major order. A run of empty
    /// intersections never counts.
    pub fn winning_row(&self) -> Option<[Place; WIN_LENGTH]> {
        self.find_row(|_| true).map(|(_, row)| row)
    }

    /// The first winning row owned by `player`, in the same search order as
    /// [`Board::winning_row`].
    pub fn winning_row_by(&self, player: &Player) -> Option<[Place; WIN_LENGTH]> {
        self.find_row(|owner| owner.is(player)).map(|(_, row)| row)
    }

    /// The owner of the first winning row, if any.
    pub fn winner(&self) -> Option<&'a Player> {
        self.find_row(|_| true).map(|(owner, _)| owner)
    }

    fn find_row<F>(&self, accept: F) -> Option<(&'a Player, [Place; WIN_LENGTH])>
    where
        F: Fn(&Player) -> bool,
    {
        Direction::ALL.into_iter().find_map(|direction| {
            self.starts(direction).find_map(|start| {
                self.run_at(start, direction)
                    .filter(|&(owner, _)| accept(owner))
            })
        })
    }

    /// Starting places whose whole window in `direction` lies on the board.
    fn starts(&self, direction: Direction) -> impl Iterator<Item = Place> {
        // Number of start positions along an axis the window spans.
        let span = (self.size + 1).saturating_sub(WIN_LENGTH);
        let (xs, ys) = match direction {
            Direction::Row => (0..span, 0..self.size),
            Direction::Column => (0..self.size, 0..span),
            Direction::Diagonal => (0..span, 0..span),
            Direction::AntiDiagonal => (WIN_LENGTH - 1..self.size, 0..span),
        };
        ys.flat_map(move |y| xs.clone().map(move |x| Place::new(x, y)))
    }

    /// The owner and places of the run starting at `start`, if all
    /// `WIN_LENGTH` cells hold the same player.
    fn run_at(
        &self,
        start: Place,
        direction: Direction,
    ) -> Option<(&'a Player, [Place; WIN_LENGTH])> {
        let owner = self.cells[start.y * self.size + start.x]?;
        let mut row = [start; WIN_LENGTH];
        for (slot, place) in row.iter_mut().zip(start.line(direction, WIN_LENGTH)) {
            debug_assert!(self.contains(place.x, place.y));
            match self.cells[place.y * self.size + place.x] {
                Some(p) if p.is(owner) => *slot = place,
                _ => return None,
            }
        }
        trace!(?direction, %start, %owner, "found winning row");
        Some((owner, row))
    }
}

impl fmt::Display for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            for (x, cell) in row.iter().enumerate() {
                let ch = match cell {
                    Some(p) => p.name().chars().next().unwrap_or('?'),
                    None => '.',
                };
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
