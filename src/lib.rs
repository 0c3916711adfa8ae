//! Omok: a board-state tracker for the five-in-a-row stone game.
//!
//! This crate models an n×n board of intersections, records which player
//! holds which intersection, and detects a winning line of five stones in a
//! row, column or either diagonal. Turn order, move legality and game flow
//! belong to the caller.
//!
//! ## Modules
//!
//! - [`constants`] - Default board size and winning row length
//! - [`player`] - Players, compared by identity
//! - [`place`] - Board coordinates and line directions
//! - [`board`] - Board state and win detection
//!
//! ## Example
//!
//! ```
//! use omok::board::Board;
//! use omok::player::Player;
//!
//! let black = Player::new("black");
//! let white = Player::new("white");
//! let mut board = Board::new(15)?;
//!
//! for x in 5..10 {
//!     board.place_stone(x, 10, &black)?;
//! }
//! board.place_stone(9, 11, &white)?;
//!
//! assert!(board.is_won_by(&black));
//! assert!(!board.is_won_by(&white));
//! assert_eq!(board.winning_row().map(|row| row[0].x), Some(5));
//! # Ok::<(), omok::board::BoardError>(())
//! ```

pub mod board;
pub mod constants;
pub mod place;
pub mod player;

pub use board::{Board, BoardError};
pub use place::{Direction, Place};
pub use player::Player;
