//! Rocks and the obstacle field
//!
//! Rocks enter from the right, scroll left at constant speed and are culled
//! once fully past the left edge. The field always holds at least one rock
//! while the game is running; the last rock in the list is the newest
//! (rightmost) one and drives spawning.

use rand::Rng;
use crate::config::GameConfig;
use super::rect::Rect;

/// A scrolling hazard sitting on the ground
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rock {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rock {
    pub fn new(x: f32, config: &GameConfig) -> Self {
        Self {
            x,
            y: config.window_height - config.rock_height,
            width: config.rock_width,
            height: config.rock_height,
        }
    }

    /// New rock just past the right edge, at a random distance
    pub fn spawn<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Self {
        let offset = rng.gen_range(config.spawn_offset_min..config.spawn_offset_max);
        Self::new(config.window_width + offset, config)
    }

    pub fn advance(&mut self, speed: f32) {
        self.x -= speed;
    }

    /// Fully past the left edge
    pub fn is_off_screen(&self) -> bool {
        self.x + self.width < 0.0
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Ordered rock sequence, oldest first
#[derive(Debug, Clone)]
pub struct ObstacleField {
    rocks: Vec<Rock>,
}

impl ObstacleField {
    /// Field with a single freshly spawned rock
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Self {
        Self {
            rocks: vec![Rock::spawn(config, rng)],
        }
    }

    /// Field with explicit rocks, oldest first
    #[cfg(test)]
    pub fn from_rocks(rocks: Vec<Rock>) -> Self {
        Self { rocks }
    }

    pub fn rocks(&self) -> &[Rock] {
        &self.rocks
    }

    pub fn len(&self) -> usize {
        self.rocks.len()
    }

    /// Run one frame: scroll, spawn behind the newest rock, then cull.
    /// Returns true if a rock was spawned.
    pub fn advance<R: Rng + ?Sized>(&mut self, config: &GameConfig, rng: &mut R) -> bool {
        for rock in &mut self.rocks {
            rock.advance(config.rock_speed);
        }

        let threshold = config.window_width - config.spawn_margin;
        let needs_spawn = match self.rocks.last() {
            Some(newest) => newest.x < threshold,
            None => true,
        };
        if needs_spawn {
            self.rocks.push(Rock::spawn(config, rng));
        }

        self.rocks.retain(|rock| !rock.is_off_screen());
        needs_spawn
    }

    /// Does any rock overlap the given hit box?
    pub fn collides_with(&self, hit_box: &Rect) -> bool {
        self.rocks.iter().any(|rock| rock.bounds().overlaps(hit_box))
    }
}
