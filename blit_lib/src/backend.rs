//! Seam between the demo core and the rendering library.
//!
//! The core never talks to a window or a GPU directly. A platform layer
//! provides a [`TextureFactory`] to create textures, a [`RenderTarget`] to
//! draw them on and an [`EventSource`] to feed input into the frame loop.

use std::path::PathBuf;

use crate::color::{BlendMode, Mirror, Rgb};
use crate::error::{DrawResult, FontError};
use crate::geometry::{Point, Rect};
use crate::input::InputEvent;
use crate::surface::Surface;

#[cfg(test)]
pub mod fake;

/// A GPU-resident texture. Releasing the GPU resource is the job of `Drop`.
///
/// Color, alpha and blend modulation live on the texture itself: once set
/// they apply to every following copy until changed again.
pub trait GpuTexture {
    fn set_color_mod(&mut self, tint: Rgb);
    fn set_alpha_mod(&mut self, alpha: u8);
    fn set_blend_mode(&mut self, mode: BlendMode);
}

#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub path: PathBuf,
    pub point_size: f32,
}

pub trait TextureFactory {
    type Texture: GpuTexture;

    /// Creates a texture holding a copy of `surface`.
    fn upload(&self, surface: &Surface) -> Result<Self::Texture, String>;

    /// Rasterizes a single line of text into a CPU surface.
    fn render_text(&self, font: &FontSpec, text: &str, color: Rgb) -> Result<Surface, FontError>;
}

/// Parameters of one textured copy onto the render target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blit {
    /// Source crop, `None` for the whole texture
    pub src: Option<Rect>,
    /// Destination, `None` to fill the current viewport
    pub dst: Option<Rect>,
    /// Clockwise rotation in degrees
    pub angle: f64,
    /// Rotation center relative to `dst`, `None` for its middle
    pub pivot: Option<Point>,
    pub mirror: Mirror,
}

impl Blit {
    pub fn stretched(dst: Option<Rect>) -> Self {
        Blit {
            src: None,
            dst,
            angle: 0.0,
            pivot: None,
            mirror: Mirror::None,
        }
    }
}

pub trait RenderTarget<T> {
    fn copy(&mut self, texture: &T, blit: &Blit) -> DrawResult<()>;

    fn set_draw_color(&mut self, color: Rgb);
    /// Fills the current viewport with the draw color.
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect) -> DrawResult<()>;
    fn outline_rect(&mut self, rect: Rect) -> DrawResult<()>;
    fn line(&mut self, from: Point, to: Point) -> DrawResult<()>;
    fn point(&mut self, at: Point) -> DrawResult<()>;

    /// Restricts drawing to `area`. `None` restores the whole window.
    fn set_viewport(&mut self, area: Option<Rect>);

    /// Shows the completed frame.
    fn present(&mut self);

    /// Output size in pixels
    fn size(&self) -> (u32, u32);
}

pub trait EventSource {
    /// Drains whatever is queued right now. Never blocks.
    fn poll(&mut self) -> Vec<InputEvent>;
}
