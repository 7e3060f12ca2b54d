//! Board drawing. Works on snapshots only, never on the engine itself.

use eframe::egui::{self, epaint, Color32, Pos2, Shape};
use game::prelude::*;
use rand::Rng;

/// Side of a grid cell in points.
pub const CELL: f32 = 16.0;

/// Width of the frame around the board.
pub const FRAME: f32 = CELL / 2.0;

/// Snakes longer than this get a flickering tail.
pub const FLICKER_LENGTH: usize = 41;

/// Every this many segments one is highlighted.
pub const MARKER_EVERY: usize = 10;

pub const BACKGROUND: Color32 = Color32::from_rgb(0, 0, 0);
pub const BORDER: Color32 = Color32::from_rgb(64, 64, 64);
pub const FRUIT: Color32 = Color32::from_rgb(255, 0, 255);
pub const BODY: Color32 = Color32::from_rgb(0, 255, 0);
pub const BODY_DARK: Color32 = Color32::from_rgb(0, 165, 0);
pub const MARKER: Color32 = Color32::from_rgb(240, 240, 0);
pub const EYE: Color32 = Color32::from_rgb(0, 0, 0);

/// Board size in points including the frame.
pub fn board_size(size: (usize, usize)) -> egui::Vec2 {
    egui::vec2(
        size.0 as f32 * CELL + FRAME * 2.0,
        size.1 as f32 * CELL + FRAME * 2.0,
    )
}

/// Red level of a flickering tail, redrawn every frame.
pub fn tail_flicker<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.gen_range(80..=255)
}

/// Color of the segment at `index` (head is `0`) of a snake `length` parts
/// long.
pub fn segment_color(index: usize, length: usize, flicker: u8) -> Color32 {
    if length > FLICKER_LENGTH && index + 1 == length {
        Color32::from_rgb(flicker, 0, 0)
    } else if index >= MARKER_EVERY && index % MARKER_EVERY == 0 {
        MARKER
    } else if index % 2 == 1 {
        BODY_DARK
    } else {
        BODY
    }
}

/// Shapes for the whole board with its top left corner at `origin`.
pub fn board(snapshot: &BoardSnapshot, origin: Pos2, flicker: u8) -> Vec<Shape> {
    let size = board_size(snapshot.size);
    let mut shapes = vec![
        Shape::Rect(epaint::RectShape::filled(
            epaint::Rect::from_min_size(origin, size),
            0.0,
            BACKGROUND,
        )),
        Shape::Rect(epaint::RectShape::stroke(
            epaint::Rect::from_min_size(origin, size).shrink(FRAME / 2.0),
            0.0,
            epaint::Stroke::new(FRAME, BORDER),
        )),
    ];

    let inner = origin + egui::vec2(FRAME, FRAME);

    if let Some(fruit) = snapshot.fruit {
        shapes.push(Shape::circle_filled(
            cell_rect(inner, fruit).center(),
            CELL / 2.0 - 2.0,
            FRUIT,
        ));
    }

    // Tail first so the head ends up on top.
    let length = snapshot.snake.len();
    for (index, &part) in snapshot.snake.iter().enumerate().rev() {
        shapes.push(Shape::Rect(epaint::RectShape::filled(
            cell_rect(inner, part),
            0.0,
            segment_color(index, length, flicker),
        )));
    }

    if let Some(&head) = snapshot.snake.first() {
        shapes.extend(eyes(cell_rect(inner, head), snapshot.direction));
    }

    shapes
}

/// Screen rectangle of the cell at `coords`.
fn cell_rect(inner: Pos2, coords: Coordinates) -> epaint::Rect {
    let min = inner + egui::vec2(coords.x as f32 * CELL, coords.y as f32 * CELL);
    epaint::Rect::from_min_size(min, egui::vec2(CELL, CELL))
}

/// Two short marks near the edge of the head the snake is moving to.
fn eyes(head: epaint::Rect, direction: Direction) -> Vec<Shape> {
    let inset = CELL / 4.0;
    let (long, short) = (CELL / 3.0, CELL / 8.0);

    let (size, corners) = match direction {
        Direction::North => (
            egui::vec2(short, long),
            [head.left_top() + egui::vec2(inset, 1.0), head.right_top() + egui::vec2(-inset - short, 1.0)],
        ),
        Direction::South => (
            egui::vec2(short, long),
            [
                head.left_bottom() + egui::vec2(inset, -1.0 - long),
                head.right_bottom() + egui::vec2(-inset - short, -1.0 - long),
            ],
        ),
        Direction::West => (
            egui::vec2(long, short),
            [head.left_top() + egui::vec2(1.0, inset), head.left_bottom() + egui::vec2(1.0, -inset - short)],
        ),
        Direction::East => (
            egui::vec2(long, short),
            [
                head.right_top() + egui::vec2(-1.0 - long, inset),
                head.right_bottom() + egui::vec2(-1.0 - long, -inset - short),
            ],
        ),
    };

    corners
        .iter()
        .map(|&min| {
            Shape::Rect(epaint::RectShape::filled(
                epaint::Rect::from_min_size(min, size),
                0.0,
                EYE,
            ))
        })
        .collect()
}
