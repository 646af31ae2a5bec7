//! Procedural cityscape backdrop
//!
//! Used when no background image is available. Buildings and clouds are
//! rolled once at startup from the supplied RNG and never change afterwards.

use macroquad::prelude::{clear_background, draw_circle, draw_rectangle};
use rand::Rng;
use crate::config::GameConfig;
use super::palette;

/// Gap between neighbouring buildings
const BUILDING_GAP: f32 = 20.0;
/// Window grid pitch (both axes)
const WINDOW_PITCH: f32 = 40.0;
const WINDOW_WIDTH: f32 = 20.0;
const WINDOW_HEIGHT: f32 = 30.0;
/// Circles per cloud
const PUFFS: usize = 3;

/// A building standing on the bottom edge of the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Building {
    pub x: f32,
    pub width: f32,
    pub height: f32,
    pub window_rows: u32,
    pub window_cols: u32,
}

impl Building {
    pub fn new(x: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            width,
            height,
            window_rows: (height / WINDOW_PITCH) as u32,
            window_cols: (width / WINDOW_PITCH) as u32,
        }
    }

    /// Top-left corners of every window, given the viewport height
    pub fn windows(&self, view_height: f32) -> impl Iterator<Item = (f32, f32)> + '_ {
        let top = view_height - self.height;
        (0..self.window_rows).flat_map(move |row| {
            (0..self.window_cols).map(move |col| {
                (
                    self.x + col as f32 * WINDOW_PITCH + 10.0,
                    top + row as f32 * WINDOW_PITCH + 5.0,
                )
            })
        })
    }

    fn draw(&self, view_height: f32) {
        draw_rectangle(self.x, view_height - self.height, self.width, self.height, palette::BUILDING);
        for (wx, wy) in self.windows(view_height) {
            draw_rectangle(wx, wy, WINDOW_WIDTH, WINDOW_HEIGHT, palette::WINDOW_LIGHT);
        }
    }
}

/// A cluster of overlapping circles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cloud {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Per-puff jitter around the cloud center
    pub puffs: [(f32, f32); PUFFS],
}

impl Cloud {
    pub fn generate<R: Rng + ?Sized>(x: f32, rng: &mut R) -> Self {
        let y = rng.gen_range(50..=200) as f32;
        let width = rng.gen_range(60..=120) as f32;
        let height = rng.gen_range(30..=50) as f32;
        let mut puffs = [(0.0, 0.0); PUFFS];
        for puff in &mut puffs {
            *puff = (rng.gen_range(-10..=10) as f32, rng.gen_range(-10..=10) as f32);
        }
        Self { x, y, width, height, puffs }
    }

    pub fn radius(&self) -> f32 {
        self.width / 3.0
    }

    fn draw(&self) {
        let cx = self.x + self.width / 2.0;
        let cy = self.y + self.height / 2.0;
        for (ox, oy) in self.puffs {
            draw_circle(cx + ox, cy + oy, self.radius(), palette::CLOUD);
        }
    }
}

/// Sky, city, clouds and a flat ground band
#[derive(Debug, Clone)]
pub struct Backdrop {
    pub buildings: Vec<Building>,
    pub clouds: Vec<Cloud>,
    width: f32,
    height: f32,
    ground_height: f32,
}

impl Backdrop {
    pub fn generate<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Self {
        let width = config.window_width;

        let mut buildings = Vec::new();
        let mut x = 0.0;
        while x < width {
            let w = rng.gen_range(80..=150) as f32;
            let h = rng.gen_range(100..=400) as f32;
            buildings.push(Building::new(x, w, h));
            x += w + BUILDING_GAP;
        }

        // Start slightly off-screen and run slightly past the right edge
        let mut clouds = Vec::new();
        let mut x = -50.0;
        while x < width + 100.0 {
            clouds.push(Cloud::generate(x, rng));
            x += rng.gen_range(100..=200) as f32;
        }

        Self {
            buildings,
            clouds,
            width,
            height: config.window_height,
            ground_height: config.ground_height,
        }
    }

    pub fn draw(&self) {
        clear_background(palette::SKY);
        for building in &self.buildings {
            building.draw(self.height);
        }
        for cloud in &self.clouds {
            cloud.draw();
        }
        draw_rectangle(0.0, self.height - self.ground_height, self.width, self.ground_height, palette::GROUND);
    }
}
