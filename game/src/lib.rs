//! Game abstractions crate.
//!
//! Single-snake grid game engine. [`GameEngine`](engine::GameEngine) owns
//! the snake and the fruit and advances them one cell per
//! [`tick`](engine::GameEngine::tick); renderers only read
//! [`snapshots`](snapshot::BoardSnapshot) of it.

pub mod aux;
pub mod engine;
pub mod error;
pub mod fruit;
pub mod grid;
pub mod phase;
pub mod snake;
pub mod snapshot;
pub mod ticker;

/// This is an alias for standart [`Result`](std::result::Result) type which
/// represents failure.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Common reexports in one place.
pub mod prelude {
	pub use crate::{
		aux::*,
		engine::{Collision, GameEngine, TickOutcome},
		error::GameError,
		grid::Grid,
		phase::Phase,
		snake::SnakeLength,
		snapshot::{BoardSnapshot, Tile},
		ticker::{share, SharedEngine, Ticker, GAME_DELAY},
		Settings,
	};
}

use aux::{Coordinates, Direction};
use error::GameError;
use grid::Grid;
use snake::{Snake, SnakeLength};

/// Game settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
	/// Amount of columns and rows of the grid.
	pub grid_size: (usize, usize),

	/// Initial snake length.
	pub snake_length: SnakeLength,

	/// Initial snake direction. If it's none, use random direction for every
	/// new game.
	pub snake_direction: Option<Direction>,

	/// Coordinates of the snake's head when a game starts. If it's none, use
	/// the grid center.
	pub snake_coords: Option<Coordinates>,

	/// How many points a fruit is worth.
	pub fruit_score: u32,
}

impl Settings {
	/// Default grid size.
	pub const GRID_SIZE: (usize, usize) = Grid::DEFAULT_SIZE;

	/// Default snake length when it spawns.
	pub const SNAKE_LENGTH: SnakeLength = SnakeLength::Fixed(3);

	/// Default initial snake direction. If it's none, use random direction for
	/// every new game.
	pub const SNAKE_DIRECTION: Option<Direction> = Some(Direction::East);

	/// Default amount of points for a fruit.
	pub const FRUIT_SCORE: u32 = 1;

	/// Check that these settings produce a playable game and return the grid
	/// they describe.
	///
	/// Every length and direction the settings allow is checked, so a game
	/// built from validated settings can always lay out its snake.
	pub fn validate(&self) -> std::result::Result<Grid, GameError> {
		let grid = Grid::new(self.grid_size)?;

		let (min, max) = match (self.snake_length.min(), self.snake_length.max()) {
			(Some(min), Some(max)) => (min, max),
			_ => {
				return Err(GameError::InvalidConfiguration(format!(
					"snake length range {} is empty",
					self.snake_length
				)))
			}
		};
		if min == 0 {
			return Err(GameError::InvalidConfiguration(
				"snake length must be at least 1".into(),
			));
		}

		let head = self.head(&grid);
		match self.snake_direction {
			Some(direction) => {
				Snake::new(head, max, direction, &grid)?;
			}
			None => {
				for direction in Direction::ALL {
					Snake::new(head, max, direction, &grid)?;
				}
			}
		}

		Ok(grid)
	}

	/// Return where the snake's head is placed on the `grid` at start.
	pub fn head(&self, grid: &Grid) -> Coordinates {
		self.snake_coords.unwrap_or_else(|| grid.center())
	}
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			grid_size: Self::GRID_SIZE,
			snake_length: Self::SNAKE_LENGTH,
			snake_direction: Self::SNAKE_DIRECTION,
			snake_coords: None,
			fruit_score: Self::FRUIT_SCORE,
		}
	}
}
