use std::path::Path;

use crate::color::{Rgb, Rgba8};
use crate::error::{LoadError, LoadResult};

/// CPU-side pixel buffer, always in the RGBA8 upload format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<Rgba8>,
}

impl Surface {
    /// Decodes a PNG or BMP file. Any source layout (palette, RGB, grayscale)
    /// is converted to RGBA8 here, so the uploader only ever sees one format.
    pub fn open(path: &Path) -> LoadResult<Self> {
        let decoded = image::open(path).map_err(|source| LoadError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        let pixels = bytemuck::cast_slice::<u8, Rgba8>(rgba.as_raw()).to_vec();

        Ok(Surface { width, height, pixels })
    }

    /// Wraps an already rasterized buffer. `pixels` must hold `width * height` entries.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<Rgba8>) -> Self {
        assert_eq!(pixels.len(), width as usize * height as usize);
        Surface { width, height, pixels }
    }

    /// A surface filled with one color.
    pub fn solid(width: u32, height: u32, color: Rgba8) -> Self {
        Surface {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Bytes per row
    pub fn pitch(&self) -> usize {
        self.width as usize * size_of::<Rgba8>()
    }

    pub fn pixels(&self) -> &[Rgba8] {
        &self.pixels
    }

    pub fn bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.pixels.as_slice())
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize).copied()
    }

    /// Makes every pixel whose color equals `key` fully transparent.
    /// Returns how many pixels were keyed out.
    pub fn apply_color_key(&mut self, key: Rgb) -> usize {
        let mut keyed = 0;
        for px in self.pixels.iter_mut().filter(|px| px.rgb() == key) {
            px.a = 0;
            keyed += 1;
        }
        keyed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::fake::write_png;

    #[test]
    fn open_decodes_dimensions_and_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "red.png", 3, 2, [255, 0, 0, 255]);

        let surface = Surface::open(&path).unwrap();
        assert_eq!((surface.width(), surface.height()), (3, 2));
        assert_eq!(surface.pitch(), 12);
        assert_eq!(surface.bytes().len(), 24);
        assert_eq!(surface.pixel(2, 1), Some(Rgba8::new(255, 0, 0, 255)));
        assert_eq!(surface.pixel(3, 1), None);
    }

    #[test]
    fn open_missing_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Surface::open(&dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, LoadError::Decode { .. }), "got {:?}", err);
    }

    #[test]
    fn open_garbage_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        assert!(matches!(Surface::open(&path), Err(LoadError::Decode { .. })));
    }

    #[test]
    fn color_key_only_touches_matching_pixels() {
        let cyan = Rgba8::new(0, 255, 255, 255);
        let red = Rgba8::new(255, 0, 0, 255);
        let mut surface = Surface::from_rgba(2, 2, vec![cyan, red, red, cyan]);

        assert_eq!(surface.apply_color_key(Rgb::CYAN), 2);
        assert_eq!(surface.pixel(0, 0).unwrap().a, 0);
        assert_eq!(surface.pixel(1, 0), Some(red));
        assert_eq!(surface.pixel(1, 1).unwrap().a, 0);
    }
}
