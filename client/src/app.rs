//! Window with the board, a score panel and phase overlays.

use crate::render;
use eframe::{egui, epi};
use game::prelude::*;
use logger::*;
use rand::{rngs::StdRng, SeedableRng};

/// Keys and the direction each of them requests.
const DIRECTION_KEYS: [(egui::Key, Direction); 8] = [
    (egui::Key::ArrowUp, Direction::North),
    (egui::Key::W, Direction::North),
    (egui::Key::ArrowDown, Direction::South),
    (egui::Key::S, Direction::South),
    (egui::Key::ArrowRight, Direction::East),
    (egui::Key::D, Direction::East),
    (egui::Key::ArrowLeft, Direction::West),
    (egui::Key::A, Direction::West),
];

pub struct SnakeApp {
    /// Engine shared with the ticker.
    engine: SharedEngine,

    /// Tick driver. Stopped on exit.
    ticker: Option<Ticker>,

    /// Randomness for presentation only.
    rng: StdRng,

    /// Set once the engine mutex turned out to be poisoned.
    failure: Option<String>,
}

impl SnakeApp {
    pub fn new(engine: SharedEngine, ticker: Ticker) -> Self {
        Self {
            engine,
            ticker: Some(ticker),
            rng: StdRng::from_entropy(),
            failure: None,
        }
    }

    /// Forward this frame's key presses to the engine and return a snapshot
    /// taken under the same lock.
    fn handle_input(&mut self, input: &egui::InputState) -> Option<BoardSnapshot> {
        let mut engine = match self.engine.lock() {
            Ok(engine) => engine,
            Err(e) => {
                error!("Engine mutex is poisoned: {}", e);
                self.failure = Some(e.to_string());
                return None;
            }
        };

        if let Some(&(_, direction)) = DIRECTION_KEYS
            .iter()
            .rev()
            .find(|(key, _)| input.key_pressed(*key))
        {
            engine.request_direction(direction);
        }

        if input.key_pressed(egui::Key::Enter) {
            match engine.phase() {
                Phase::NewGame => {
                    engine.request_start();
                }
                Phase::GameOver => {
                    engine.request_restart();
                }
                _ => {}
            }
        }

        if input.key_pressed(egui::Key::P) {
            engine.toggle_pause();
        }

        Some(engine.snapshot())
    }
}

/// Large and small overlay message for a phase, if it has any.
fn overlay(phase: Phase) -> Option<(&'static str, &'static str)> {
    match phase {
        Phase::NewGame => Some(("Play Snake!", "Press Enter to Start")),
        Phase::GameOver => Some(("Game Over!", "Press Enter to Restart")),
        Phase::Paused => Some(("Paused", "Press P to Resume")),
        Phase::Playing => None,
    }
}

impl epi::App for SnakeApp {
    fn name(&self) -> &str {
        "Snake"
    }

    fn setup(
        &mut self,
        ctx: &egui::CtxRef,
        _frame: &mut epi::Frame<'_>,
        _storage: Option<&dyn epi::Storage>,
    ) {
        ctx.set_visuals(egui::Visuals::dark());
    }

    fn update(&mut self, ctx: &egui::CtxRef, _frame: &mut epi::Frame<'_>) {
        if let Some(failure) = &self.failure {
            egui::Window::new("Error").show(ctx, |ui| {
                ui.label(format!("The game has crashed: {}", failure));
            });
            return;
        }

        let snapshot = match self.handle_input(&ctx.input()) {
            Some(snapshot) => snapshot,
            None => return,
        };

        egui::SidePanel::new(egui::panel::Side::Right, "score_panel").show(ctx, |ui| {
            ui.heading(format!("Score: {}", snapshot.score));
            ui.label(format!("Length: {}", snapshot.length));
            ui.label(format!("Facing: {}", snapshot.direction));
            ui.separator();
            ui.label("Arrows or WASD to turn");
            ui.label("Enter to start");
            ui.label("P to pause");
        });

        let flicker = render::tail_flicker(&mut self.rng);
        egui::CentralPanel::default().show(ctx, |ui| {
            let origin = ui.max_rect().min;
            ui.painter().extend(render::board(&snapshot, origin, flicker));
        });

        if let Some((large, small)) = overlay(snapshot.phase) {
            egui::Window::new(large)
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(small);
                });
        }

        ctx.request_repaint();
    }

    fn on_exit(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.stop();
        }
        info!("Bye");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_idle_phase_has_an_overlay() {
        assert_eq!(overlay(Phase::NewGame).map(|m| m.0), Some("Play Snake!"));
        assert_eq!(overlay(Phase::GameOver).map(|m| m.0), Some("Game Over!"));
        assert_eq!(overlay(Phase::Paused).map(|m| m.1), Some("Press P to Resume"));
        assert_eq!(overlay(Phase::Playing), None);
    }

    #[test]
    fn every_direction_has_two_keys() {
        for direction in Direction::ALL {
            let keys = DIRECTION_KEYS.iter().filter(|(_, d)| *d == direction).count();
            assert_eq!(keys, 2);
        }
    }
}
