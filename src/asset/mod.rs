//! Optional startup assets
//!
//! The background image, the player sprite and the HUD font are all optional.
//! Each loader returns a typed error; the caller logs it and picks the
//! procedural fallback instead. Nothing here is retried.
//!
//! ```text
//! images/
//! ├── sky_background.png   # scaled to the viewport
//! └── boy.png              # scaled to the player size
//! ```

mod loader;

pub use loader::{load_font, load_texture_scaled};
