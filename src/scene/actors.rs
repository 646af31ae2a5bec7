//! Player and rock drawing

use macroquad::prelude::*;
use crate::game::{Player, Rock};
use super::palette;

/// Stroke width for the stickman
const STROKE: f32 = 3.0;

/// How the player is drawn, decided once at startup
pub enum PlayerLook {
    /// Image scaled to the player size, mirrored when facing left
    Sprite(Texture2D),
    /// Procedural stick figure
    Stickman,
}

/// Stick figure geometry in screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StickFigure {
    pub head: Vec2,
    pub head_radius: f32,
    /// Body, front arm, back arm, front leg, back leg
    pub strokes: [(Vec2, Vec2); 5],
}

impl StickFigure {
    /// Figure for a player box at (x, y). The reaching arm and the stepping
    /// leg point the way the player faces.
    pub fn new(x: f32, y: f32, width: f32, height: f32, facing_right: bool) -> Self {
        // Authored on a 64x64 box
        let sx = width / 64.0;
        let sy = height / 64.0;
        let dir = if facing_right { 1.0 } else { -1.0 };
        let cx = x + width / 2.0;
        let at = |dx: f32, dy: f32| vec2(cx + dx * dir * sx, y + dy * sy);

        let neck = at(0.0, 25.0);
        let shoulder = at(0.0, 35.0);
        let hip = at(0.0, 50.0);
        Self {
            head: at(0.0, 10.0),
            head_radius: 15.0 * sx.min(sy),
            strokes: [
                (neck, hip),
                (shoulder, at(20.0, 30.0)),
                (shoulder, at(-20.0, 40.0)),
                (hip, at(16.0, 70.0)),
                (hip, at(-20.0, 70.0)),
            ],
        }
    }

    fn draw(&self) {
        draw_circle(self.head.x, self.head.y, self.head_radius, palette::INK);
        for (from, to) in self.strokes {
            draw_line(from.x, from.y, to.x, to.y, STROKE, palette::INK);
        }
    }
}

pub fn draw_player(look: &PlayerLook, player: &Player, width: f32, height: f32) {
    match look {
        PlayerLook::Sprite(texture) => {
            draw_texture_ex(
                texture,
                player.x,
                player.y,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(width, height)),
                    flip_x: !player.facing_right,
                    ..Default::default()
                },
            );
        }
        PlayerLook::Stickman => {
            StickFigure::new(player.x, player.y, width, height, player.facing_right).draw();
        }
    }
}

/// Grey peak with a darker inner facet
pub fn draw_rock(rock: &Rock) {
    let (x, y, w, h) = (rock.x, rock.y, rock.width, rock.height);
    draw_triangle(
        vec2(x, y + h),
        vec2(x + w / 2.0, y),
        vec2(x + w, y + h),
        palette::ROCK,
    );
    draw_triangle(
        vec2(x + w / 4.0, y + h / 2.0),
        vec2(x + w / 2.0, y + h),
        vec2(x + 3.0 * w / 4.0, y + h / 2.0),
        palette::ROCK_SHADOW,
    );
}
