//! Board geometry constants.
//!
//! # Default Board Size
//!
//! The size used by [`Board::default`](crate::board::Board) is controlled by
//! Cargo features:
//! - `board15x15` (default): 15x15 board
//! - `board19x19`: 19x19 board
//!
//! ```sh
//! cargo build                                              # 15x15 (default)
//! cargo build --no-default-features --features board19x19  # 19x19
//! ```
//!
//! Any other size can still be requested explicitly with `Board::new`.

/// Default board side length.
#[cfg(feature = "board15x15")]
pub const DEFAULT_SIZE: usize = 15;

#[cfg(feature = "board19x19")]
pub const DEFAULT_SIZE: usize = 19;

// Compile-time check: exactly one board size feature must be enabled
#[cfg(all(feature = "board15x15", feature = "board19x19"))]
compile_error!("Cannot enable both 'board15x15' and 'board19x19' features at the same time");

#[cfg(not(any(feature = "board15x15", feature = "board19x19")))]
compile_error!("Must enable exactly one board size feature: 'board15x15' or 'board19x19'");

/// Number of consecutive stones that make a winning row.
pub const WIN_LENGTH: usize = 5;

/// Smallest board on which a winning row fits.
pub const MIN_WINNABLE_SIZE: usize = WIN_LENGTH;
