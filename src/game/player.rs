//! Player physics
//!
//! Direct horizontal stepping (no momentum) plus frame-based vertical
//! integration. There is no terminal velocity: constants are tuned for one
//! tick per frame at a fixed frame rate.

use crate::config::GameConfig;
use super::rect::Rect;

/// The player character
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    /// Top-left corner
    pub x: f32,
    pub y: f32,
    /// Vertical velocity (positive = falling)
    pub velocity_y: f32,
    /// Airborne after a jump; cleared on ground contact
    pub is_jumping: bool,
    pub facing_right: bool,
}

impl Player {
    /// Player standing on the ground at the horizontal center of the viewport
    pub fn spawn(config: &GameConfig) -> Self {
        Self {
            x: (config.window_width / 2.0).floor(),
            y: config.ground_line(),
            velocity_y: 0.0,
            is_jumping: false,
            facing_right: true,
        }
    }

    /// Hit box
    pub fn bounds(&self, config: &GameConfig) -> Rect {
        Rect::new(self.x, self.y, config.player_width, config.player_height)
    }

    /// Step horizontally for held directions, staying inside the viewport.
    ///
    /// Facing only changes when the step actually happens.
    pub fn walk(&mut self, left: bool, right: bool, config: &GameConfig) {
        let max_x = config.max_player_x();
        if left && self.x > 0.0 {
            self.x -= config.player_speed;
            self.facing_right = false;
        }
        if right && self.x < max_x {
            self.x += config.player_speed;
            self.facing_right = true;
        }
        self.x = self.x.clamp(0.0, max_x);
    }

    /// Apply gravity and resolve ground contact. Returns true if the player
    /// was clamped to the ground this frame.
    pub fn fall(&mut self, config: &GameConfig) -> bool {
        self.velocity_y += config.gravity;
        self.y += self.velocity_y;

        let ground = config.ground_line();
        if self.y >= ground {
            self.y = ground;
            self.velocity_y = 0.0;
            self.is_jumping = false;
            return true;
        }
        false
    }

    /// Start a jump. No-op while already airborne from a jump.
    pub fn jump(&mut self, config: &GameConfig) -> bool {
        if self.is_jumping {
            return false;
        }
        self.velocity_y = config.jump_speed;
        self.is_jumping = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_position() {
        let config = GameConfig::default();
        let p = Player::spawn(&config);
        assert_eq!(p.x, 400.0);
        assert_eq!(p.y, 536.0);
        assert!(p.facing_right);
        assert!(!p.is_jumping);
    }

    #[test]
    fn test_stays_on_ground_without_input() {
        let config = GameConfig::default();
        let mut p = Player::spawn(&config);
        for _ in 0..60 {
            assert!(p.fall(&config));
            assert_eq!(p.y, config.ground_line());
            assert_eq!(p.velocity_y, 0.0);
        }
    }

    #[test]
    fn test_lands_on_expected_frame() {
        // Dropping 100px with gravity 0.8 from rest: after n frames the drop is
        // 0.8 * n(n+1)/2, which first reaches 100 at n = 16
        let config = GameConfig::default();
        let mut p = Player::spawn(&config);
        p.y = config.ground_line() - 100.0;

        let mut landed_at = None;
        for frame in 1..=60 {
            let clamped = p.fall(&config);
            assert!(p.y <= config.ground_line());
            if clamped {
                assert_eq!(p.velocity_y, 0.0);
                if landed_at.is_none() {
                    landed_at = Some(frame);
                }
            }
        }
        assert_eq!(landed_at, Some(16));
    }

    #[test]
    fn test_jump_arc_returns_to_ground() {
        let config = GameConfig::default();
        let mut p = Player::spawn(&config);
        assert!(p.jump(&config));
        assert_eq!(p.velocity_y, -15.0);

        let mut peak = p.y;
        let mut frames = 0;
        while p.is_jumping {
            p.fall(&config);
            peak = peak.min(p.y);
            frames += 1;
            assert!(frames < 200, "jump never landed");
        }
        assert!(peak < config.ground_line() - 100.0);
        assert_eq!(p.y, config.ground_line());
        assert_eq!(p.velocity_y, 0.0);
    }

    #[test]
    fn test_no_double_jump() {
        let config = GameConfig::default();
        let mut p = Player::spawn(&config);
        assert!(p.jump(&config));
        p.fall(&config);
        let velocity = p.velocity_y;
        assert!(!p.jump(&config));
        assert_eq!(p.velocity_y, velocity);
    }

    #[test]
    fn test_left_edge_clamp() {
        let config = GameConfig::default();
        let mut p = Player::spawn(&config);
        p.x = 0.0;
        for _ in 0..10 {
            p.walk(true, false, &config);
            assert_eq!(p.x, 0.0);
        }
        // Blocked step does not turn the player around
        assert!(p.facing_right);
    }

    #[test]
    fn test_right_edge_clamp() {
        let config = GameConfig::default();
        let mut p = Player::spawn(&config);
        p.x = config.max_player_x() - 2.0;
        p.walk(false, true, &config);
        assert_eq!(p.x, config.max_player_x());
        p.walk(false, true, &config);
        assert_eq!(p.x, config.max_player_x());
    }

    #[test]
    fn test_walk_sets_facing() {
        let config = GameConfig::default();
        let mut p = Player::spawn(&config);
        p.walk(true, false, &config);
        assert_eq!(p.x, 395.0);
        assert!(!p.facing_right);
        p.walk(false, true, &config);
        assert_eq!(p.x, 400.0);
        assert!(p.facing_right);
        // Both held: steps cancel, last direction wins facing
        p.walk(true, true, &config);
        assert_eq!(p.x, 400.0);
        assert!(p.facing_right);
    }
}
