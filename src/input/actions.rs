//! Game action definitions

/// Everything the player can ask the game to do
///
/// Keyboard / gamepad (Xbox naming):
/// - MoveLeft:  Left arrow, A / D-pad left, left stick
/// - MoveRight: Right arrow, D / D-pad right, left stick
/// - Jump:      Up arrow, W, Space / A (South)
/// - Restart:   R / Start
/// - Quit:      Escape, window close
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement (held)
    MoveLeft,
    MoveRight,

    // Edge-triggered
    Jump,
    Restart,

    // System
    Quit,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::MoveLeft,
        Action::MoveRight,
        Action::Jump,
        Action::Restart,
        Action::Quit,
    ];

    /// Is this action read as "held this frame" rather than "pressed this frame"?
    pub fn is_held(&self) -> bool {
        matches!(self, Action::MoveLeft | Action::MoveRight)
    }
}
