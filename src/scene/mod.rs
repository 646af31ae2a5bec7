//! Scene composition
//!
//! Draws one frame from a `GameState`: background, player, rocks, HUD and,
//! after a collision, the game-over overlay. Whether the background and the
//! player come from images or are drawn procedurally is decided once in
//! `Scene::load` and never re-checked.

mod actors;
mod backdrop;
mod hud;
mod palette;

pub use actors::PlayerLook;
pub use backdrop::Backdrop;

use macroquad::prelude::{draw_texture, Font, Texture2D, WHITE};
use rand::Rng;
use crate::asset::{load_font, load_texture_scaled};
use crate::config::GameConfig;
use crate::game::{GameState, Phase};

/// How the background is drawn, decided once at startup
pub enum Background {
    /// Image scaled to the viewport
    ImageBacked(Texture2D),
    /// Sky, city, clouds and ground
    Procedural(Backdrop),
}

impl Background {
    fn draw(&self) {
        match self {
            Background::ImageBacked(texture) => draw_texture(texture, 0.0, 0.0, WHITE),
            Background::Procedural(backdrop) => backdrop.draw(),
        }
    }
}

/// Everything needed to render frames
pub struct Scene {
    pub background: Background,
    pub player_look: PlayerLook,
    /// HUD font (built-in font when None)
    pub font: Option<Font>,
}

impl Scene {
    /// Load optional assets, falling back to procedural drawing for anything
    /// that is missing or broken
    pub async fn load<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Self {
        let background = match load_texture_scaled(&config.background_path, config.window_width, config.window_height).await {
            Ok(texture) => {
                println!("Loaded background: {}", config.background_path);
                Background::ImageBacked(texture)
            }
            Err(e) => {
                eprintln!("Error loading background: {}, drawing procedural city", e);
                Background::Procedural(Backdrop::generate(config, rng))
            }
        };

        let player_look = match load_texture_scaled(&config.sprite_path, config.player_width, config.player_height).await {
            Ok(texture) => {
                println!("Loaded player sprite: {}", config.sprite_path);
                PlayerLook::Sprite(texture)
            }
            Err(e) => {
                eprintln!("Error loading sprite: {}, drawing stickman", e);
                PlayerLook::Stickman
            }
        };

        let font = match &config.font_path {
            Some(path) => match load_font(path).await {
                Ok(font) => {
                    println!("Loaded HUD font: {}", path);
                    Some(font)
                }
                Err(e) => {
                    eprintln!("Error loading HUD font: {}, using built-in font", e);
                    None
                }
            },
            None => None,
        };

        Self { background, player_look, font }
    }

    /// Draw the full frame
    pub fn draw(&self, state: &GameState) {
        let config = &state.config;
        let font = self.font.as_ref();

        self.background.draw();
        actors::draw_player(&self.player_look, &state.player, config.player_width, config.player_height);
        for rock in state.obstacles.rocks() {
            actors::draw_rock(rock);
        }

        hud::draw_timer(state.display_time(), config.window_width, font);
        if state.phase == Phase::GameOver {
            hud::draw_game_over(state.final_time, config.window_width, config.window_height, font);
        }
    }
}
