//! Errors returned by functions related to this crate.

use std::{error, fmt};

/// Error type returned by engine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Settings can't produce a playable game: bad grid size, bad initial
    /// snake length or a start placement which leaves the grid. Variant
    /// argument describes what exactly is wrong.
    InvalidConfiguration(String),

    /// Every cell of the grid is occupied, so there's no place for a fruit.
    BoardFull,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(reason) => write!(f, "invalid game configuration: {}", reason),
            Self::BoardFull => write!(f, "can't spawn a fruit because every cell of the grid is occupied"),
        }
    }
}

impl error::Error for GameError {}

/// Error returned if can't parse [`Direction`](crate::aux::Direction) from a string.
#[derive(Debug, Clone)]
pub struct ParseDirectionError;

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
"can't parse Direction because parsed string is not \"north\", \"south\", \"east\", \"west\" or one of \"up\", \"down\", \"right\", \"left\"")
    }
}

impl error::Error for ParseDirectionError {}

/// Error returned if can't parse [`SnakeLength`](crate::snake::SnakeLength)
/// from a string. Variant argument is the rejected string.
#[derive(Debug, Clone)]
pub struct ParseSnakeLengthError(pub String);

impl fmt::Display for ParseSnakeLengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
"can't parse snake length from \"{}\", expected a number (\"5\") or a range (\"3..6\", \"3..=6\")", self.0)
    }
}

impl error::Error for ParseSnakeLengthError {}
