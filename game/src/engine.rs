//! Game engine.
//!
//! [`GameEngine`] is the only owner of the snake and the fruit. Input
//! handlers call `request_*` methods, a driver calls [`tick`](GameEngine::tick)
//! on a fixed cadence and renderers read [`snapshots`](GameEngine::snapshot).
//!
//! # Tick
//! Every tick while [`Phase::Playing`]:
//! 1. The last requested direction is applied unless it's the opposite of
//!    the current one.
//! 2. The head is stepped one cell forward.
//! 3. Leaving the grid or hitting the body ends the game. The snake isn't
//!    touched in that case, so the last frame shows what happened.
//! 4. Otherwise the snake moves, keeping its tail if it ate the fruit, and a
//!    new fruit is spawned.

use crate::{
    aux::{Coordinates, Direction},
    error::GameError,
    fruit::FruitSpawner,
    grid::Grid,
    phase::{Phase, Trigger},
    snake::Snake,
    snapshot::BoardSnapshot,
    Settings,
};
use log::{debug, error, info, trace, warn};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::{collections::HashSet, fmt};

/// What the snake ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// The head left the grid.
    Wall,

    /// The head entered a cell occupied by the body.
    SelfBody,
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wall => write!(f, "the wall"),
            Self::SelfBody => write!(f, "itself"),
        }
    }
}

/// Result of a single [`tick`](GameEngine::tick).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game isn't running, nothing happened.
    Idle,

    /// The snake moved one cell.
    Moved,

    /// The snake moved one cell and became one part longer.
    Grew,

    /// The snake collided and the game is over.
    Collided(Collision),
}

/// Single-snake game.
///
/// `R` is the random source used for fruit placement and for random initial
/// length or direction. Tests pass a seeded one.
#[derive(Debug)]
pub struct GameEngine<R = StdRng> {
    settings: Settings,
    grid: Grid,
    spawner: FruitSpawner,
    rng: R,
    phase: Phase,
    snake: Snake,
    fruit: Option<Coordinates>,

    /// Facing direction.
    direction: Direction,

    /// Last direction requested since the previous tick.
    requested: Option<Direction>,

    score: u32,

    /// Moves completed in the current game.
    ticks: u64,
}

impl GameEngine<StdRng> {
    /// Return a new [`GameEngine`] with an entropy-seeded random source.
    pub fn new(settings: Settings) -> Result<Self, GameError> {
        Self::with_rng(settings, StdRng::from_entropy())
    }

    /// Return a new [`GameEngine`] whose games are reproducible from `seed`.
    pub fn seeded(settings: Settings, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameEngine<R> {
    /// Return a new [`GameEngine`] using `rng` as its random source.
    ///
    /// Settings are validated here, so a constructed engine never fails to
    /// start a game. The engine is in [`Phase::NewGame`] with the initial
    /// snake already laid out.
    pub fn with_rng(settings: Settings, mut rng: R) -> Result<Self, GameError> {
        let grid = settings.validate()?;
        let (snake, direction) = lay_out(&settings, &grid, &mut rng)?;

        Ok(Self {
            spawner: FruitSpawner::new(grid),
            settings,
            grid,
            rng,
            phase: Phase::NewGame,
            snake,
            fruit: None,
            direction,
            requested: None,
            score: 0,
            ticks: 0,
        })
    }

    /// Buffer a direction change for the next tick. Only the last request
    /// before a tick counts. Ignored unless the game is running.
    ///
    /// Reversal is checked when the request is consumed, see
    /// [`tick`](Self::tick).
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if !self.phase.is_running() {
            trace!("direction {} ignored while {}", direction, self.phase);
            return false;
        }
        self.requested = Some(direction);
        true
    }

    /// Start a new game from [`Phase::NewGame`].
    pub fn request_start(&mut self) -> bool {
        self.apply(Trigger::Start)
    }

    /// Pause a running game.
    pub fn request_pause(&mut self) -> bool {
        self.apply(Trigger::Pause)
    }

    /// Resume a paused game.
    pub fn request_resume(&mut self) -> bool {
        self.apply(Trigger::Resume)
    }

    /// Start over after the game is over. Goes through [`Phase::NewGame`]
    /// straight into a fresh [`Phase::Playing`].
    pub fn request_restart(&mut self) -> bool {
        self.apply(Trigger::Restart) && self.apply(Trigger::Start)
    }

    /// Pause a running game or resume a paused one.
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            Phase::Playing => self.request_pause(),
            Phase::Paused => self.request_resume(),
            _ => false,
        }
    }

    fn apply(&mut self, trigger: Trigger) -> bool {
        let next = match self.phase.next(trigger) {
            Some(next) => next,
            None => {
                trace!("{:?} ignored while {}", trigger, self.phase);
                return false;
            }
        };

        if trigger == Trigger::Start {
            if let Err(e) = self.new_game() {
                error!("Failed to start a new game: {}", e);
                return false;
            }
        }

        info!("Game phase: {} -> {}", self.phase, next);
        self.phase = next;
        true
    }

    /// Lay out a fresh snake, reset counters and spawn the first fruit.
    fn new_game(&mut self) -> Result<(), GameError> {
        let (snake, direction) = lay_out(&self.settings, &self.grid, &mut self.rng)?;
        self.snake = snake;
        self.direction = direction;
        self.requested = None;
        self.score = 0;
        self.ticks = 0;
        self.fruit = None;
        self.replenish_fruit();

        debug!(
            "New game: snake of length {} at {} facing {}",
            self.snake.len(),
            self.snake.head(),
            self.direction
        );
        Ok(())
    }

    /// Advance the game by one step. Does nothing unless the game is running.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.phase.is_running() {
            return TickOutcome::Idle;
        }

        if let Some(requested) = self.requested.take() {
            if requested == self.direction.opposite() {
                trace!("Reversal to {} rejected", requested);
            } else {
                self.direction = requested;
            }
        }

        let new_head = self.grid.step(self.snake.head(), self.direction);
        if !self.grid.in_bounds(new_head) {
            return self.collide(Collision::Wall, new_head);
        }

        let eating = self.fruit == Some(new_head);
        if self.snake.would_collide(new_head, eating) {
            return self.collide(Collision::SelfBody, new_head);
        }

        if eating {
            self.snake.feed();
            self.score += self.settings.fruit_score;
            self.fruit = None;
            debug!("Fruit at {} eaten, score {}", new_head, self.score);
        }

        let advance = self.snake.advance(new_head);
        if advance.collided {
            // Unreachable while `would_collide` above agrees with `advance`.
            error!("Snake advanced into itself at {} after a clean check", new_head);
            return self.game_over(Collision::SelfBody);
        }
        self.ticks += 1;
        trace!("Tick {}: head at {}", self.ticks, new_head);

        self.replenish_fruit();

        if advance.grew {
            TickOutcome::Grew
        } else {
            TickOutcome::Moved
        }
    }

    fn collide(&mut self, collision: Collision, at: Coordinates) -> TickOutcome {
        info!(
            "Snake hit {} at {} after {} moves, score {}",
            collision, at, self.ticks, self.score
        );
        self.game_over(collision)
    }

    fn game_over(&mut self, collision: Collision) -> TickOutcome {
        info!("Game phase: {} -> {}", self.phase, Phase::GameOver);
        self.phase = Phase::GameOver;
        self.requested = None;
        TickOutcome::Collided(collision)
    }

    /// Spawn a fruit if there's none and the snake doesn't cover the whole
    /// grid. A failed spawn leaves the fruit absent until a later tick.
    fn replenish_fruit(&mut self) {
        if self.fruit.is_some() {
            return;
        }
        if self.snake.len() >= self.grid.cell_count() {
            debug!("Snake covers the whole {} grid, no fruit", self.grid);
            return;
        }

        let occupied: HashSet<Coordinates> = self.snake.segments().collect();
        match self.spawner.spawn(&mut self.rng, |c| occupied.contains(&c)) {
            Ok(fruit) => {
                debug!("Fruit spawned at {}", fruit);
                self.fruit = Some(fruit);
            }
            Err(e) => warn!("{}, continuing without a fruit", e),
        }
    }
}

fn lay_out<R: Rng + ?Sized>(
    settings: &Settings,
    grid: &Grid,
    rng: &mut R,
) -> Result<(Snake, Direction), GameError> {
    let direction = settings.snake_direction.unwrap_or_else(|| rng.gen());
    let length = settings.snake_length.get(rng);
    let snake = Snake::new(settings.head(grid), length, direction, grid)?;
    Ok((snake, direction))
}

impl<R> GameEngine<R> {
    /// Return current game phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Return the direction the head is facing.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Return amount of points scored in the current game.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Return snake's length.
    pub fn length(&self) -> usize {
        self.snake.len()
    }

    /// Return coordinates of the fruit if there's one.
    pub fn fruit(&self) -> Option<Coordinates> {
        self.fruit
    }

    /// Return the snake.
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Return game [`Grid`].
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Return game [`settings`](Settings).
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Return amount of moves completed in the current game.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Return a read-only view of the board.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::project(
            &self.grid,
            self.snake.segments().collect(),
            self.fruit,
            self.phase,
            self.direction,
            self.score,
        )
    }
}
