//! Snake abstractions.

use crate::{aux::*, error::*, grid::Grid};
use itertools::Itertools;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::{collections::VecDeque, fmt, ops, str::FromStr};

/// Snake body: a chain of cells, each one grid step apart from its
/// neighbours. Front of the chain is the head, back is the tail.
///
/// A snake is never empty: [`new`](Self::new) refuses zero length and
/// [`advance`](Self::advance) pushes the new head before it drops the tail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Snake {
    parts: VecDeque<Coordinates>,

    /// Growth credit. When it's set, the next advance keeps the tail.
    growth: bool,
}

/// What happened to the snake during [`Snake::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advance {
    /// The new head landed on a cell the snake still occupied.
    pub collided: bool,

    /// The tail was kept, so the snake became one part longer.
    pub grew: bool,
}

impl Snake {
    /// Return a [`Snake`] of `length` parts with the head at `head` and the
    /// rest of the chain extending backward, opposite to `facing`.
    ///
    /// Fails if `length` is zero or the chain doesn't fit into the `grid`.
    pub fn new(
        head: Coordinates,
        length: usize,
        facing: Direction,
        grid: &Grid,
    ) -> Result<Self, GameError> {
        if length == 0 {
            return Err(GameError::InvalidConfiguration(
                "snake length must be at least 1".into(),
            ));
        }

        if length > grid.cell_count() {
            return Err(GameError::InvalidConfiguration(format!(
                "snake of length {} doesn't fit into the {} grid",
                length, grid
            )));
        }

        let mut parts = VecDeque::with_capacity(length);
        let mut part = head;
        for _ in 0..length {
            if !grid.in_bounds(part) {
                return Err(GameError::InvalidConfiguration(format!(
                    "snake of length {} with head at {} facing {} leaves the {} grid",
                    length, head, facing, grid
                )));
            }
            parts.push_back(part);
            part = grid.step(part, facing.opposite());
        }

        Ok(Self {
            parts,
            growth: false,
        })
    }

    /// Build a snake from explicit parts, head first.
    #[cfg(test)]
    pub(crate) fn from_parts(parts: impl IntoIterator<Item = Coordinates>) -> Self {
        Self {
            parts: parts.into_iter().collect(),
            growth: false,
        }
    }

    /// Check whether moving the head to `new_head` hits the body. The tail
    /// cell is vacated during the move, so it doesn't count unless the move
    /// is `growing` or a growth credit is already pending.
    pub fn would_collide(&self, new_head: Coordinates, growing: bool) -> bool {
        let keep_tail = growing || self.growth;
        let solid = self.parts.len() - usize::from(!keep_tail);
        self.parts.iter().take(solid).any(|&part| part == new_head)
    }

    /// Push `new_head` to the front. Without a growth credit the tail is
    /// dropped, with it the tail stays and the credit is spent.
    ///
    /// Collision is checked against the body before the tail is removed, see
    /// [`would_collide`](Self::would_collide).
    pub fn advance(&mut self, new_head: Coordinates) -> Advance {
        let collided = self.would_collide(new_head, false);
        let grew = std::mem::take(&mut self.growth);

        self.parts.push_front(new_head);
        if !grew {
            self.parts.pop_back();
        }

        Advance { collided, grew }
    }

    /// Set a growth credit for the next [`advance`](Self::advance).
    pub fn feed(&mut self) {
        self.growth = true;
    }

    /// Return `true` if the next advance keeps the tail.
    pub fn growth_pending(&self) -> bool {
        self.growth
    }

    /// Return coordinates of the head.
    pub fn head(&self) -> Coordinates {
        self.parts[0]
    }

    /// Return coordinates of the tail.
    pub fn tail(&self) -> Coordinates {
        self.parts[self.parts.len() - 1]
    }

    /// Return `true` if any part of the snake is located at `coords`.
    pub fn occupies(&self, coords: Coordinates) -> bool {
        self.parts.contains(&coords)
    }

    /// Iterate over parts from the head to the tail.
    pub fn segments(&self) -> impl ExactSizeIterator<Item = Coordinates> + '_ {
        self.parts.iter().copied()
    }

    /// Return `true` if two parts share the same cell.
    pub fn has_overlap(&self) -> bool {
        !self.parts.iter().all_unique()
    }

    /// Return snake's length (amount of parts).
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Always `false` for a constructed snake, kept for API symmetry with
    /// [`len`](Self::len).
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

/// Snake initial length abstraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnakeLength {
    /// Range to be used for generating random length.
    Random(ops::Range<usize>),

    /// Fixed length.
    Fixed(usize),
}

impl SnakeLength {
    /// Return a length, drawing it from `rng` if it's random.
    pub fn get<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        match self {
            Self::Random(range) if range.is_empty() => range.start,
            Self::Random(range) => rng.gen_range(range.clone()),
            Self::Fixed(number) => *number,
        }
    }

    /// Return the shortest possible length or none if the range is empty.
    pub fn min(&self) -> Option<usize> {
        match self {
            Self::Random(range) => (!range.is_empty()).then(|| range.start),
            Self::Fixed(number) => Some(*number),
        }
    }

    /// Return the longest possible length or none if the range is empty.
    pub fn max(&self) -> Option<usize> {
        match self {
            Self::Random(range) => (!range.is_empty()).then(|| range.end - 1),
            Self::Fixed(number) => Some(*number),
        }
    }
}

impl fmt::Display for SnakeLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Random(range) => write!(f, "{:?}", range),
            Self::Fixed(n) => write!(f, "{}", n),
        }
    }
}

impl From<ops::Range<usize>> for SnakeLength {
    fn from(range: ops::Range<usize>) -> Self {
        Self::Random(range)
    }
}

impl From<usize> for SnakeLength {
    fn from(n: usize) -> Self {
        Self::Fixed(n)
    }
}

impl FromStr for SnakeLength {
    type Err = ParseSnakeLengthError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let err = || ParseSnakeLengthError(s.to_string());
        let number = |token: &str| token.trim().parse::<usize>().map_err(|_| err());

        match s.split_once("..") {
            None => Ok(Self::Fixed(number(s)?)),
            Some((start, end)) => {
                let start = number(start)?;
                match end.strip_prefix('=') {
                    Some(end) => {
                        let end = number(end)?.checked_add(1).ok_or_else(err)?;
                        Ok(Self::Random(start..end))
                    }
                    None => Ok(Self::Random(start..number(end)?)),
                }
            }
        }
    }
}

/// Test helper: fold the snake into a loop so its head faces its own body.
#[cfg(test)]
pub(crate) fn bump_parts(snake: &mut Snake) {
    let head = snake.head();
    snake.parts = [(0, 0), (0, 1), (1, 1), (1, 0), (2, 0)]
        .into_iter()
        .map(|(x, y)| head + Coordinates::new(x, y))
        .collect();
}
