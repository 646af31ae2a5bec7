//! Gameplay
//!
//! Pure simulation: player physics, the rock field and the Playing/GameOver
//! state machine. Nothing in here draws or reads the keyboard; the main loop
//! hands each frame's `Commands` to `GameState::step`.

pub mod rect;
pub mod player;
pub mod obstacle;
pub mod state;
pub mod pacing;

// Re-export main types
pub use player::Player;
pub use obstacle::Rock;
pub use state::{GameState, Phase, Commands, Transition};
pub use pacing::{FpsLimit, wait_for_frame};
