//! Game grid abstractions.
//!
//! Grid is a fixed rectangle of cells, (0, 0) is its top left corner. It has
//! no state of its own besides the size, it only knows which coordinates
//! belong to it and how to step between them.

use crate::{
	aux::{Coordinates, Direction},
	error::GameError,
};
use itertools::iproduct;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Game grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
	/// [`Grid`] size as amount of columns and rows. Valid coordinates are
	/// `[0, columns)` x `[0, rows)`.
	size: (usize, usize),
}

impl Grid {
	/// Default size of the grid used with [`Default`](Self::default) trait
	/// implementation.
	pub const DEFAULT_SIZE: (usize, usize) = (32, 32);

	/// Return a new [`Grid`]. Fails if any of dimensions is zero or doesn't
	/// fit coordinates type.
	pub fn new(size: (usize, usize)) -> Result<Self, GameError> {
		let fits = |n: usize| n > 0 && i32::try_from(n).is_ok();
		if !fits(size.0) || !fits(size.1) {
			return Err(GameError::InvalidConfiguration(format!(
				"grid size {}x{} is not usable",
				size.0, size.1
			)));
		}
		Ok(Self { size })
	}

	/// Return amount of columns and rows.
	pub fn size(&self) -> (usize, usize) {
		self.size
	}

	/// Return amount of cells.
	pub fn cell_count(&self) -> usize {
		self.size.0 * self.size.1
	}

	/// Return the center cell. For even sizes it's the right/lower one of the
	/// two middle cells.
	pub fn center(&self) -> Coordinates {
		Coordinates::new((self.size.0 / 2) as i32, (self.size.1 / 2) as i32)
	}

	/// Check whether `coords` lie inside the grid.
	pub fn in_bounds(&self, coords: Coordinates) -> bool {
		coords.x >= 0
			&& coords.y >= 0
			&& (coords.x as usize) < self.size.0
			&& (coords.y as usize) < self.size.1
	}

	/// Translate `coords` on one cell towards `direction`. Result isn't checked,
	/// stepping off the grid is a valid computation whose result is simply
	/// out of bounds.
	pub fn step(&self, coords: Coordinates, direction: Direction) -> Coordinates {
		coords + direction.delta()
	}

	/// Return row-major index of a cell or none if it's out of bounds.
	pub fn index(&self, coords: Coordinates) -> Option<usize> {
		self.in_bounds(coords)
			.then(|| coords.y as usize * self.size.0 + coords.x as usize)
	}

	/// Iterate over every cell of the grid in row-major order.
	pub fn cells(&self) -> impl Iterator<Item = Coordinates> {
		let (cols, rows) = (self.size.0 as i32, self.size.1 as i32);
		iproduct!(0..rows, 0..cols).map(|(y, x)| Coordinates::new(x, y))
	}

	/// Generate random coordinates framed by grid.
	pub fn random_coords<R: Rng + ?Sized>(&self, rng: &mut R) -> Coordinates {
		Coordinates::new(
			rng.gen_range(0..self.size.0) as i32,
			rng.gen_range(0..self.size.1) as i32,
		)
	}
}

impl Default for Grid {
	fn default() -> Self {
		Self {
			size: Self::DEFAULT_SIZE,
		}
	}
}

impl fmt::Display for Grid {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}x{}", self.size.0, self.size.1)
	}
}
