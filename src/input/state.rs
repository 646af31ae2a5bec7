//! Input state management
//!
//! Polls both keyboard (macroquad) and gamepad input, combining them into a
//! unified action-based API. Once per frame the loop turns it into a
//! `Commands` snapshot for the simulation.

use macroquad::prelude::*;
use crate::game::Commands;
use super::gamepad::{button, Gamepad, STICK_THRESHOLD};
use super::Action;

/// Unified input state that handles both keyboard and gamepad
pub struct InputState {
    gamepad: Gamepad,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            gamepad: Gamepad::new(),
        }
    }

    /// Call once per frame before checking actions
    pub fn poll(&mut self) {
        self.gamepad.poll();
    }

    /// Check if action is currently held down
    pub fn action_down(&self, action: Action) -> bool {
        self.keyboard_down(action) || self.gamepad_down(action)
    }

    /// Check if action was just pressed this frame
    pub fn action_pressed(&self, action: Action) -> bool {
        self.keyboard_pressed(action) || self.gamepad_pressed(action)
    }

    /// Snapshot of this frame's commands
    pub fn commands(&self) -> Commands {
        let mut commands = Commands::default();
        for action in Action::ALL {
            let active = if action.is_held() {
                self.action_down(action)
            } else {
                self.action_pressed(action)
            };
            match action {
                Action::MoveLeft => commands.move_left = active,
                Action::MoveRight => commands.move_right = active,
                Action::Jump => commands.jump = active,
                Action::Restart => commands.restart = active,
                Action::Quit => commands.quit = active || is_quit_requested(),
            }
        }
        commands
    }

    fn keyboard_down(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => is_key_down(KeyCode::Left) || is_key_down(KeyCode::A),
            Action::MoveRight => is_key_down(KeyCode::Right) || is_key_down(KeyCode::D),
            _ => false,
        }
    }

    fn gamepad_down(&self, action: Action) -> bool {
        let stick_x = self.gamepad.left_stick().x;
        match action {
            Action::MoveLeft => self.gamepad.is_button_down(button::DPAD_LEFT) || stick_x < -STICK_THRESHOLD,
            Action::MoveRight => self.gamepad.is_button_down(button::DPAD_RIGHT) || stick_x > STICK_THRESHOLD,
            _ => false,
        }
    }

    fn keyboard_pressed(&self, action: Action) -> bool {
        match action {
            Action::Jump => is_key_pressed(KeyCode::Up) || is_key_pressed(KeyCode::W) || is_key_pressed(KeyCode::Space),
            Action::Restart => is_key_pressed(KeyCode::R),
            Action::Quit => is_key_pressed(KeyCode::Escape),
            _ => false,
        }
    }

    fn gamepad_pressed(&self, action: Action) -> bool {
        match action {
            Action::Jump => self.gamepad.is_button_pressed(button::A) || self.gamepad.is_button_pressed(button::DPAD_UP),
            Action::Restart => self.gamepad.is_button_pressed(button::START),
            _ => false,
        }
    }

    /// Check if any gamepad is connected
    pub fn has_gamepad(&self) -> bool {
        self.gamepad.has_gamepad()
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
