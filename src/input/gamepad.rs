//! Gamepad support
//!
//! Native: Uses gilrs crate for cross-platform gamepad input
//! WASM: No gamepad; keyboard only

use macroquad::prelude::Vec2;

// Standard gamepad button indices (matches Web Gamepad API standard mapping)
pub mod button {
    pub const A: u32 = 0;           // ActionDown / South
    pub const START: u32 = 9;       // Start/Options
    pub const DPAD_UP: u32 = 12;
    pub const DPAD_LEFT: u32 = 14;
    pub const DPAD_RIGHT: u32 = 15;
}

/// Left stick deflection that counts as a held direction
pub const STICK_THRESHOLD: f32 = 0.5;

// ============================================================================
// WASM Implementation (no gamepad)
// ============================================================================

#[cfg(target_arch = "wasm32")]
mod platform {
    use super::*;

    pub struct Gamepad;

    impl Gamepad {
        pub fn new() -> Self {
            Self
        }

        pub fn poll(&mut self) {}

        pub fn has_gamepad(&self) -> bool {
            false
        }

        pub fn is_button_down(&self, _button: u32) -> bool {
            false
        }

        pub fn is_button_pressed(&self, _button: u32) -> bool {
            false
        }

        pub fn left_stick(&self) -> Vec2 {
            Vec2::ZERO
        }
    }
}

// ============================================================================
// Native Implementation (gilrs)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use super::*;
    use gilrs::{Gilrs, Button as GilrsButton, Axis};

    pub struct Gamepad {
        /// None when the platform backend failed to start
        gilrs: Option<Gilrs>,
        deadzone: f32,
        buttons: u32,
        pressed: u32,
    }

    impl Gamepad {
        pub fn new() -> Self {
            let gilrs = match Gilrs::new() {
                Ok(gilrs) => Some(gilrs),
                Err(e) => {
                    eprintln!("Gamepad support unavailable: {}", e);
                    None
                }
            };
            Self {
                gilrs,
                deadzone: 0.15,
                buttons: 0,
                pressed: 0,
            }
        }

        /// Drain gilrs events and latch this frame's button edges
        pub fn poll(&mut self) {
            if let Some(gilrs) = self.gilrs.as_mut() {
                while gilrs.next_event().is_some() {}
            }
            let current = self.get_button_mask();
            self.pressed = super::rising_edges(self.buttons, current);
            self.buttons = current;
        }

        pub fn has_gamepad(&self) -> bool {
            self.get_active_gamepad().is_some()
        }

        fn get_active_gamepad(&self) -> Option<gilrs::Gamepad<'_>> {
            self.gilrs.as_ref()?.gamepads().next().map(|(_, gp)| gp)
        }

        fn get_button_mask(&self) -> u32 {
            let Some(gp) = self.get_active_gamepad() else { return 0 };
            let mut mask = 0u32;

            if gp.is_pressed(GilrsButton::South) { mask |= 1 << super::button::A; }
            if gp.is_pressed(GilrsButton::Start) { mask |= 1 << super::button::START; }
            if gp.is_pressed(GilrsButton::DPadUp) { mask |= 1 << super::button::DPAD_UP; }
            if gp.is_pressed(GilrsButton::DPadLeft) { mask |= 1 << super::button::DPAD_LEFT; }
            if gp.is_pressed(GilrsButton::DPadRight) { mask |= 1 << super::button::DPAD_RIGHT; }

            mask
        }

        pub fn is_button_down(&self, button: u32) -> bool {
            (self.buttons & (1 << button)) != 0
        }

        /// Went down since the previous poll
        pub fn is_button_pressed(&self, button: u32) -> bool {
            (self.pressed & (1 << button)) != 0
        }

        pub fn left_stick(&self) -> Vec2 {
            let Some(gp) = self.get_active_gamepad() else { return Vec2::ZERO };
            let x = gp.value(Axis::LeftStickX);
            let y = -gp.value(Axis::LeftStickY); // Invert Y to match Web API
            apply_deadzone(x, y, self.deadzone)
        }
    }
}

impl Default for Gamepad {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Shared utilities
// ============================================================================

/// Bits set in `current` but not in `previous`
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn rising_edges(previous: u32, current: u32) -> u32 {
    current & !previous
}

/// Apply radial deadzone with linear rescaling
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn apply_deadzone(x: f32, y: f32, deadzone: f32) -> Vec2 {
    let len = (x * x + y * y).sqrt();
    if len < deadzone {
        return Vec2::ZERO;
    }
    // Rescale from deadzone..1.0 to 0.0..1.0
    let scale = (len - deadzone) / (1.0 - deadzone) / len;
    Vec2::new(x * scale, y * scale)
}

// Re-export the platform-specific implementation
pub use platform::Gamepad;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deadzone_zeroes_small_input() {
        assert_eq!(apply_deadzone(0.1, 0.05, 0.15), Vec2::ZERO);
    }

    #[test]
    fn test_deadzone_rescales() {
        let full = apply_deadzone(1.0, 0.0, 0.15);
        assert!((full.x - 1.0).abs() < 0.001);
        let half = apply_deadzone(0.575, 0.0, 0.15);
        assert!((half.x - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_rising_edges() {
        let a = 1 << button::A;
        let start = 1 << button::START;
        assert_eq!(rising_edges(0, a), a);
        assert_eq!(rising_edges(a, a), 0);
        assert_eq!(rising_edges(a, a | start), start);
        assert_eq!(rising_edges(a | start, 0), 0);
    }
}
