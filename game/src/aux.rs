//! Cell coordinates and movement directions.

use crate::error::*;
use rand_derive2::RandGen;
use serde::{Deserialize, Serialize};
use std::{fmt, ops, str::FromStr};

/// Coordinates abstraction.
///
/// Unlike the math plot, (0, 0) point is the top left corner of the grid: X
/// grows to the right (columns) and Y grows downwards (rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Coordinates {
    /// Column.
    pub x: i32,

    /// Row.
    pub y: i32,
}

impl Coordinates {
    /// Return a new [`Coordinates`].
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<Coordinates> for (i32, i32) {
    fn from(c: Coordinates) -> Self {
        (c.x, c.y)
    }
}

impl From<(i32, i32)> for Coordinates {
    fn from(t: (i32, i32)) -> Self {
        Self::new(t.0, t.1)
    }
}

impl ops::Add for Coordinates {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl ops::Sub for Coordinates {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Direction the snake's head is facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, RandGen, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Towards row 0.
    North,

    /// Towards the last row.
    South,

    /// Towards the last column.
    East,

    /// Towards column 0.
    West,
}

impl Direction {
    /// All directions, clockwise starting from north.
    pub const ALL: [Direction; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Return opposite direction.
    pub fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Return the unit step of this direction.
    pub fn delta(self) -> Coordinates {
        match self {
            Self::North => Coordinates::new(0, -1),
            Self::South => Coordinates::new(0, 1),
            Self::East => Coordinates::new(1, 0),
            Self::West => Coordinates::new(-1, 0),
        }
    }
}

impl Default for Direction {
    fn default() -> Self {
        Self::East
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lower_case = format!("{:?}", self).to_lowercase();
        write!(f, "{}", lower_case)
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "north" | "up" => Ok(Self::North),
            "south" | "down" => Ok(Self::South),
            "east" | "right" => Ok(Self::East),
            "west" | "left" => Ok(Self::West),
            _ => Err(ParseDirectionError),
        }
    }
}

impl ops::Neg for Direction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.opposite()
    }
}
