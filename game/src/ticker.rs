//! Fixed-cadence tick driver.
//!
//! Engine is shared behind a [`Mutex`], which makes every mutation and every
//! snapshot exclusive: input handlers and renderers lock it for a moment,
//! the [`Ticker`] thread locks it once per tick. Ticks can't overlap.

use crate::engine::{GameEngine, TickOutcome};
use rand::{rngs::StdRng, Rng};
use std::{
	sync::{
		atomic::{AtomicBool, Ordering},
		Arc, Mutex,
	},
	thread::{self, JoinHandle},
	time::Duration,
};

/// Default delay between ticks.
pub const GAME_DELAY: Duration = Duration::from_millis(70);

/// Engine shared between the ticker, input handling and rendering.
pub type SharedEngine<R = StdRng> = Arc<Mutex<GameEngine<R>>>;

/// Wrap an engine for sharing.
pub fn share<R>(engine: GameEngine<R>) -> SharedEngine<R> {
	Arc::new(Mutex::new(engine))
}

/// Background thread calling [`GameEngine::tick`] every `delay`.
///
/// Ticks received while the game isn't running are no-ops, so the ticker
/// runs for the whole lifetime of the engine. Dropping it stops the thread.
#[derive(Debug)]
pub struct Ticker {
	running: Arc<AtomicBool>,
	handle: Option<JoinHandle<()>>,
}

impl Ticker {
	/// Spawn a ticker thread for `engine`. If `delay` is none, [`GAME_DELAY`]
	/// is used.
	pub fn spawn<R>(engine: SharedEngine<R>, delay: Option<Duration>) -> Self
	where
		R: Rng + Send + 'static,
	{
		let delay = delay.unwrap_or(GAME_DELAY);
		let running = Arc::new(AtomicBool::new(true));
		let flag = running.clone();

		log::debug!("Starting ticker with {:?} delay", delay);
		let handle = thread::spawn(move || {
			while flag.load(Ordering::Acquire) {
				thread::sleep(delay);
				if !flag.load(Ordering::Acquire) {
					break;
				}

				let mut game = match engine.lock() {
					Ok(game) => game,
					Err(e) => {
						log::error!("Engine mutex is poisoned, stopping ticker: {}", e);
						break;
					}
				};
				if let TickOutcome::Collided(collision) = game.tick() {
					log::debug!("Ticker: snake hit {}", collision);
					match game.snapshot().as_bytes() {
						Ok(bytes) => {
							log::trace!("Final board: {}", String::from_utf8_lossy(&bytes))
						}
						Err(e) => log::warn!("Failed to serialize the final board: {}", e),
					}
				}
			}
			log::debug!("Ticker stopped");
		});

		Self {
			running,
			handle: Some(handle),
		}
	}

	/// Return `true` while the thread is ticking.
	pub fn is_running(&self) -> bool {
		self.running.load(Ordering::Acquire)
			&& self.handle.as_ref().map_or(false, |h| !h.is_finished())
	}

	/// Stop the thread and wait for it to finish the current tick.
	pub fn stop(mut self) {
		self.shutdown();
	}

	fn shutdown(&mut self) {
		self.running.store(false, Ordering::Release);
		if let Some(handle) = self.handle.take() {
			if handle.join().is_err() {
				log::error!("Ticker thread panicked");
			}
		}
	}
}

impl Drop for Ticker {
	fn drop(&mut self) {
		self.shutdown();
	}
}
