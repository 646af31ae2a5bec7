//! Scene colors

use macroquad::prelude::Color;

/// Sky fill behind the procedural city
pub const SKY: Color = Color::new(135.0 / 255.0, 206.0 / 255.0, 235.0 / 255.0, 1.0);

/// Cloud puffs
pub const CLOUD: Color = Color::new(173.0 / 255.0, 216.0 / 255.0, 230.0 / 255.0, 1.0);

pub const BUILDING: Color = Color::new(169.0 / 255.0, 169.0 / 255.0, 169.0 / 255.0, 1.0);

/// Lit building windows
pub const WINDOW_LIGHT: Color = Color::new(1.0, 1.0, 224.0 / 255.0, 1.0);

pub const GROUND: Color = Color::new(200.0 / 255.0, 200.0 / 255.0, 200.0 / 255.0, 1.0);

pub const ROCK: Color = Color::new(0.5, 0.5, 0.5, 1.0);
pub const ROCK_SHADOW: Color = Color::new(0.25, 0.25, 0.25, 1.0);

/// Stickman strokes and HUD text
pub const INK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// "GAME OVER" title
pub const ALERT: Color = Color::new(1.0, 0.0, 0.0, 1.0);

/// Translucent white wash over the frozen scene
pub const OVERLAY: Color = Color::new(1.0, 1.0, 1.0, 0.5);
