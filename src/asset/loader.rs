//! Image and font loading

use image::imageops::FilterType;
use image::RgbaImage;
use macroquad::prelude::{load_file, load_ttf_font_from_bytes, FilterMode, Font, Texture2D};

/// Why an asset could not be used
#[derive(Debug)]
pub enum AssetError {
    /// File does not exist
    NotFound(String),
    /// File exists but could not be read
    Io(String),
    /// Bytes are not a usable image
    Decode(String),
    /// Bytes are not a usable TTF font
    Font(String),
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::NotFound(path) => write!(f, "file not found: {}", path),
            AssetError::Io(msg) => write!(f, "I/O error: {}", msg),
            AssetError::Decode(msg) => write!(f, "decode error: {}", msg),
            AssetError::Font(msg) => write!(f, "font error: {}", msg),
        }
    }
}

impl std::error::Error for AssetError {}

/// Decode image bytes and scale them to exactly `width` x `height`
pub fn decode_scaled(bytes: &[u8], width: u32, height: u32) -> Result<RgbaImage, AssetError> {
    if width == 0 || height == 0 || width > u16::MAX as u32 || height > u16::MAX as u32 {
        return Err(AssetError::Decode(format!("unsupported target size {}x{}", width, height)));
    }
    let img = image::load_from_memory(bytes).map_err(|e| AssetError::Decode(e.to_string()))?;
    Ok(img.resize_exact(width, height, FilterType::Triangle).to_rgba8())
}

/// Fetch raw bytes (filesystem natively, HTTP on WASM)
async fn read_bytes(path: &str) -> Result<Vec<u8>, AssetError> {
    #[cfg(not(target_arch = "wasm32"))]
    if !std::path::Path::new(path).exists() {
        return Err(AssetError::NotFound(path.to_string()));
    }
    load_file(path)
        .await
        .map_err(|e| AssetError::Io(format!("{}: {}", path, e)))
}

/// Load an image file as a GPU texture of the given size
pub async fn load_texture_scaled(path: &str, width: f32, height: f32) -> Result<Texture2D, AssetError> {
    let bytes = read_bytes(path).await?;
    let img = decode_scaled(&bytes, width.round() as u32, height.round() as u32)?;
    let texture = Texture2D::from_rgba8(img.width() as u16, img.height() as u16, img.as_raw());
    texture.set_filter(FilterMode::Linear);
    Ok(texture)
}

/// Load a TTF font
pub async fn load_font(path: &str) -> Result<Font, AssetError> {
    let bytes = read_bytes(path).await?;
    load_ttf_font_from_bytes(&bytes).map_err(|e| AssetError::Font(format!("{}: {}", path, e)))
}
