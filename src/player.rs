//! Players and stone ownership.
//!
//! A [`Player`] is identified by the instance itself, not by its name. The
//! board holds borrowed `&Player` references and compares them with
//! [`Player::is`], so two players that happen to share a name never own each
//! other's stones.

use std::fmt;
use std::ptr;

/// A participant in a game.
#[derive(Debug)]
pub struct Player {
    name: String,
}

impl Player {
    /// Create a new player. Any name is accepted, including an empty one.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return true if `other` is this very player.
    #[inline]
    pub fn is(&self, other: &Player) -> bool {
        ptr::eq(self, other)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
