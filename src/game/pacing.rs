//! Frame pacing
//!
//! Physics is tuned per frame, so the loop must not run faster than the
//! target rate.

use macroquad::prelude::get_time;
use serde::{Deserialize, Serialize};

/// FPS limit setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FpsLimit {
    /// 30 FPS (half-speed game)
    Fps30,
    /// 60 FPS (the speed the physics constants are tuned for)
    #[default]
    Fps60,
    /// Unlocked (as fast as possible)
    Unlocked,
}

impl FpsLimit {
    /// Get the target frame time in seconds (None = unlocked)
    pub fn frame_time(&self) -> Option<f64> {
        match self {
            FpsLimit::Fps30 => Some(1.0 / 30.0),
            FpsLimit::Fps60 => Some(1.0 / 60.0),
            FpsLimit::Unlocked => None,
        }
    }

    /// Display name
    pub fn label(&self) -> &'static str {
        match self {
            FpsLimit::Fps30 => "30",
            FpsLimit::Fps60 => "60",
            FpsLimit::Unlocked => "Unlocked",
        }
    }
}

/// Block until `frame_start + frame_time` has passed
pub fn wait_for_frame(limit: FpsLimit, frame_start: f64) {
    let Some(target_frame_time) = limit.frame_time() else { return };
    if get_time() - frame_start >= target_frame_time {
        return;
    }

    // Native: use sleep for bulk, then spin-wait for precision
    #[cfg(not(target_arch = "wasm32"))]
    {
        let spin_margin = 0.002; // 2ms
        while get_time() - frame_start + spin_margin < target_frame_time {
            std::thread::sleep(std::time::Duration::from_millis(1));
        }
        while get_time() - frame_start < target_frame_time {
            std::hint::spin_loop();
        }
    }
    // WASM: no thread::sleep, and the browser paces requestAnimationFrame anyway
    #[cfg(target_arch = "wasm32")]
    {
        while get_time() - frame_start < target_frame_time {}
    }
}
