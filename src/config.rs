//! Game configuration
//!
//! Every tunable lives here. Values default to the classic feel of the game
//! (800x600 viewport, 60 FPS, frame-based physics) and can be overridden by an
//! optional `config.ron` next to the executable. Missing fields keep their
//! defaults, so a config file only needs the values it changes.

use serde::{Deserialize, Serialize};
use crate::game::FpsLimit;

/// Default config file location (relative to the working directory)
pub const CONFIG_PATH: &str = "config.ron";

/// Errors produced while loading or validating the configuration
#[derive(Debug)]
pub enum ConfigError {
    /// File could not be read
    Io(String),
    /// RON syntax or type error
    Parse(String),
    /// Parsed fine, but the values make no sense
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "I/O error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e.to_string())
    }
}

/// All game tuning values
///
/// Physics values are per frame, not per second: the simulation advances one
/// tick per rendered frame at a fixed frame rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Viewport ===
    pub window_width: f32,
    pub window_height: f32,
    /// Height of the flat ground band drawn by the procedural backdrop
    pub ground_height: f32,

    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    /// Horizontal step per frame while a direction is held
    pub player_speed: f32,
    /// Vertical velocity applied on jump (negative = up)
    pub jump_speed: f32,
    /// Added to vertical velocity every frame
    pub gravity: f32,

    // === Rocks ===
    pub rock_width: f32,
    pub rock_height: f32,
    /// Leftward step per frame
    pub rock_speed: f32,
    /// A new rock spawns once the newest one is this far left of the right edge
    pub spawn_margin: f32,
    /// Spawn distance past the right edge, sampled from [min, max)
    pub spawn_offset_min: f32,
    pub spawn_offset_max: f32,

    // === Timing ===
    pub fps_limit: FpsLimit,

    // === Assets ===
    pub background_path: String,
    pub sprite_path: String,
    /// Optional TTF font for HUD text (built-in font when absent)
    pub font_path: Option<String>,

    /// Fixed RNG seed for reproducible runs (time-based when absent)
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: 800.0,
            window_height: 600.0,
            ground_height: 50.0,
            player_width: 64.0,
            player_height: 64.0,
            player_speed: 5.0,
            jump_speed: -15.0,
            gravity: 0.8,
            rock_width: 50.0,
            rock_height: 40.0,
            rock_speed: 5.0,
            spawn_margin: 200.0,
            spawn_offset_min: 100.0,
            spawn_offset_max: 300.0,
            fps_limit: FpsLimit::default(),
            background_path: "images/sky_background.png".to_string(),
            sprite_path: "images/boy.png".to_string(),
            font_path: None,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse and validate a RON config string
    pub fn from_ron(source: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file on disk
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_ron(&source)
    }

    /// Reject values that would break the simulation
    pub fn validate(&self) -> Result<(), ConfigError> {
        let all = [
            ("window_width", self.window_width),
            ("window_height", self.window_height),
            ("ground_height", self.ground_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("player_speed", self.player_speed),
            ("jump_speed", self.jump_speed),
            ("gravity", self.gravity),
            ("rock_width", self.rock_width),
            ("rock_height", self.rock_height),
            ("rock_speed", self.rock_speed),
            ("spawn_margin", self.spawn_margin),
            ("spawn_offset_min", self.spawn_offset_min),
            ("spawn_offset_max", self.spawn_offset_max),
        ];
        for (name, value) in all {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!("{} must be finite, got {}", name, value)));
            }
        }

        let positive = [
            ("window_width", self.window_width),
            ("window_height", self.window_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("player_speed", self.player_speed),
            ("rock_width", self.rock_width),
            ("rock_height", self.rock_height),
            ("rock_speed", self.rock_speed),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::Invalid(format!("{} must be positive, got {}", name, value)));
            }
        }
        if self.player_width > self.window_width || self.player_height > self.window_height {
            return Err(ConfigError::Invalid("player does not fit in the window".to_string()));
        }
        if self.spawn_offset_min < 0.0 || self.spawn_offset_min >= self.spawn_offset_max {
            return Err(ConfigError::Invalid(format!(
                "spawn offset range [{}, {}) is empty or negative",
                self.spawn_offset_min, self.spawn_offset_max
            )));
        }
        if self.ground_height < 0.0 || self.ground_height > self.window_height {
            return Err(ConfigError::Invalid(format!("ground_height {} out of range", self.ground_height)));
        }
        Ok(())
    }

    /// Y coordinate of the player's top edge when standing on the ground
    pub fn ground_line(&self) -> f32 {
        self.window_height - self.player_height
    }

    /// Rightmost allowed player x
    pub fn max_player_x(&self) -> f32 {
        self.window_width - self.player_width
    }
}
