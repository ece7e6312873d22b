//! Texture sampler: wraps a decoded RGBA image and performs nearest-neighbor
//! lookups. Decoding itself is delegated to the `image` crate, the external
//! "texture loader" collaborator.

use crate::error::RendererError;
use crate::math::{ColorRgb, Vector2};
use std::path::Path;

#[derive(Debug)]
pub struct Texture {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl Texture {
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<[u8; 4]>) -> Self {
        assert_eq!(pixels.len(), (width * height) as usize);
        Texture { width, height, pixels }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Texture, RendererError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(RendererError::AssetNotFound { path: path.to_path_buf() });
        }

        let img = image::open(path)
            .map_err(|source| RendererError::AssetDecodeFailure { path: path.to_path_buf(), source })?
            .to_rgba8();

        let (width, height) = img.dimensions();
        let pixels = img.pixels().map(|p| p.0).collect();

        Ok(Texture { width, height, pixels })
    }

    /// Nearest-neighbor sample. `uv` outside `[0, 1]` is a precondition
    /// violation per the design's texture sampler contract; this
    /// implementation clamps for robustness instead of indexing
    /// out-of-bounds.
    pub fn sample(&self, uv: Vector2) -> ColorRgb {
        let x = ((uv.x * self.width as f32) as i64).clamp(0, self.width as i64 - 1) as u32;
        let y = ((uv.y * self.height as f32) as i64).clamp(0, self.height as i64 - 1) as u32;
        let [r, g, b, _a] = self.pixels[(x + y * self.width) as usize];
        ColorRgb::from_bytes(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard() -> Texture {
        // 2x2: red, green / blue, white
        Texture::from_rgba(
            2,
            2,
            vec![
                [255, 0, 0, 255],
                [0, 255, 0, 255],
                [0, 0, 255, 255],
                [255, 255, 255, 255],
            ],
        )
    }

    #[test]
    fn sample_nearest_neighbor_picks_correct_texel() {
        let tex = checkerboard();
        assert_eq!(tex.sample(Vector2::new(0.1, 0.1)), ColorRgb::from_bytes(255, 0, 0));
        assert_eq!(tex.sample(Vector2::new(0.9, 0.1)), ColorRgb::from_bytes(0, 255, 0));
        assert_eq!(tex.sample(Vector2::new(0.1, 0.9)), ColorRgb::from_bytes(0, 0, 255));
        assert_eq!(tex.sample(Vector2::new(0.9, 0.9)), ColorRgb::from_bytes(255, 255, 255));
    }

    #[test]
    fn sample_clamps_out_of_range_uv() {
        let tex = checkerboard();
        assert_eq!(tex.sample(Vector2::new(1.5, 1.5)), ColorRgb::from_bytes(255, 255, 255));
        assert_eq!(tex.sample(Vector2::new(-0.5, -0.5)), ColorRgb::from_bytes(255, 0, 0));
    }

    #[test]
    fn load_from_file_reports_missing_asset() {
        let err = Texture::load_from_file("/nonexistent/does/not/exist.png").unwrap_err();
        assert!(matches!(err, RendererError::AssetNotFound { .. }));
    }
}
