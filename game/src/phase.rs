//! Game lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level lifecycle state of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Waiting for the first start.
    NewGame,

    /// Snake moves on every tick.
    Playing,

    /// Ticks are ignored until the game is resumed.
    Paused,

    /// Snake collided and is frozen for display until a restart.
    GameOver,
}

/// External request for a phase change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Start,
    Pause,
    Resume,
    Restart,
}

impl Phase {
    /// Return the phase `trigger` leads to or none if it's ignored in the
    /// current phase.
    ///
    /// Collisions aren't triggers, the engine moves to [`Phase::GameOver`]
    /// itself.
    pub fn next(self, trigger: Trigger) -> Option<Phase> {
        match (self, trigger) {
            (Self::NewGame, Trigger::Start) => Some(Self::Playing),
            (Self::Playing, Trigger::Pause) => Some(Self::Paused),
            (Self::Paused, Trigger::Resume) => Some(Self::Playing),
            (Self::GameOver, Trigger::Restart) => Some(Self::NewGame),
            _ => None,
        }
    }

    /// Return `true` if ticks move the snake in this phase.
    pub fn is_running(self) -> bool {
        self == Self::Playing
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::NewGame
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NewGame => "new game",
            Self::Playing => "playing",
            Self::Paused => "paused",
            Self::GameOver => "game over",
        };
        write!(f, "{}", s)
    }
}
