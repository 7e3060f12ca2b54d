//! Read-only board view for renderers.
//!
//! A [`BoardSnapshot`] is computed on demand from the engine and never
//! written back, so renderers may keep, serialize or send it anywhere.

use crate::{
	aux::{Coordinates, Direction},
	grid::Grid,
	phase::Phase,
	Result,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a single cell of the board contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tile {
	/// Nothing.
	Empty,

	/// The leading part of the snake.
	SnakeHead,

	/// Any other part of the snake.
	SnakeBody,

	/// A fruit.
	Fruit,
}

impl Tile {
	fn symbol(self) -> char {
		match self {
			Self::Empty => '.',
			Self::SnakeHead => '@',
			Self::SnakeBody => 'o',
			Self::Fruit => '*',
		}
	}
}

/// Snapshot of the whole board at some moment of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BoardSnapshot {
	/// Amount of columns and rows.
	pub size: (usize, usize),

	/// Tile of every cell, row-major.
	pub tiles: Vec<Tile>,

	/// Snake parts from the head to the tail.
	pub snake: Vec<Coordinates>,

	/// Current fruit, if there's one.
	pub fruit: Option<Coordinates>,

	/// Game phase.
	pub phase: Phase,

	/// Direction the head is facing.
	pub direction: Direction,

	/// Amount of points scored in the current game.
	pub score: u32,

	/// Snake length.
	pub length: usize,
}

impl BoardSnapshot {
	/// Project snake and fruit onto the `grid`. Head is drawn last, so it
	/// stays visible on a frozen collision frame.
	pub(crate) fn project(
		grid: &Grid,
		snake: Vec<Coordinates>,
		fruit: Option<Coordinates>,
		phase: Phase,
		direction: Direction,
		score: u32,
	) -> Self {
		let mut tiles = vec![Tile::Empty; grid.cell_count()];
		let mut paint = |coords: Coordinates, tile: Tile| {
			if let Some(i) = grid.index(coords) {
				tiles[i] = tile;
			}
		};

		if let Some(fruit) = fruit {
			paint(fruit, Tile::Fruit);
		}
		for &part in snake.iter().skip(1) {
			paint(part, Tile::SnakeBody);
		}
		if let Some(&head) = snake.first() {
			paint(head, Tile::SnakeHead);
		}

		Self {
			size: grid.size(),
			length: snake.len(),
			tiles,
			snake,
			fruit,
			phase,
			direction,
			score,
		}
	}

	/// Return tile at `coords` or none if they're out of the board.
	pub fn tile(&self, coords: Coordinates) -> Option<Tile> {
		let (cols, rows) = self.size;
		if coords.x < 0 || coords.y < 0 || coords.x as usize >= cols || coords.y as usize >= rows {
			return None;
		}
		self.tiles
			.get(coords.y as usize * cols + coords.x as usize)
			.copied()
	}

	/// Convert [`BoardSnapshot`] to binary json.
	pub fn as_bytes(&self) -> Result<Vec<u8>> {
		Ok(serde_json::to_string(self)?.as_bytes().to_vec())
	}

	/// Convert json string to [`BoardSnapshot`].
	pub fn from_string<T: AsRef<str>>(string: T) -> Result<Self> {
		Ok(serde_json::from_str(string.as_ref())?)
	}
}

impl fmt::Display for BoardSnapshot {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(
			f,
			"{} | facing {} | score {} | length {}",
			self.phase, self.direction, self.score, self.length
		)?;
		for row in self.tiles.chunks(self.size.0.max(1)) {
			let line: String = row.iter().map(|tile| tile.symbol()).collect();
			writeln!(f, "{}", line)?;
		}
		Ok(())
	}
}
