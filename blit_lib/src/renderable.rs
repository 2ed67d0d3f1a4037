
use std::path::Path;

use tracing::{debug, info};

use crate::backend::{Blit, FontSpec, GpuTexture, RenderTarget, TextureFactory};
use crate::color::{BlendMode, Mirror, Rgb};
use crate::error::{DrawError, DrawResult, LoadError, LoadResult};
use crate::geometry::{Point, Rect};
use crate::sprite::SourceRegion;
use crate::surface::Surface;

/// How a decoded image is prepared before upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadOptions {
    /// Source color to treat as fully transparent
    pub color_key: Option<Rgb>,
}

impl LoadOptions {
    pub fn keyed(color: Rgb) -> Self {
        LoadOptions { color_key: Some(color) }
    }
}

/// Options of a single [`RenderableImage::draw`] call. Every field is independent.
///
/// `tint`, `alpha` and `blend` are written to the texture before the copy and
/// stay in effect for later draws until changed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DrawParams {
    pub region: Option<SourceRegion>,
    pub angle: f64,
    pub pivot: Option<Point>,
    pub mirror: Mirror,
    pub tint: Option<Rgb>,
    pub alpha: Option<u8>,
    pub blend: Option<BlendMode>,
}

impl DrawParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(mut self, region: SourceRegion) -> Self {
        self.region = Some(region);
        self
    }

    pub fn angle(mut self, degrees: f64) -> Self {
        self.angle = degrees;
        self
    }

    pub fn pivot(mut self, pivot: Point) -> Self {
        self.pivot = Some(pivot);
        self
    }

    pub fn mirror(mut self, mirror: Mirror) -> Self {
        self.mirror = mirror;
        self
    }

    pub fn tint(mut self, tint: Rgb) -> Self {
        self.tint = Some(tint);
        self
    }

    pub fn alpha(mut self, alpha: u8) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub fn blend(mut self, mode: BlendMode) -> Self {
        self.blend = Some(mode);
        self
    }
}

struct Loaded<T> {
    texture: T,
    width: u32,
    height: u32,
}

/// An image living in GPU memory, plus its size in pixels.
///
/// Either holds a texture with non-zero dimensions or nothing at all. The
/// texture is owned exclusively and freed on [`release`](Self::release), on
/// reload and when the image is dropped.
pub struct RenderableImage<T> {
    loaded: Option<Loaded<T>>,
}

impl<T> Default for RenderableImage<T> {
    fn default() -> Self {
        RenderableImage { loaded: None }
    }
}

impl<T: GpuTexture> RenderableImage<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a fresh image followed by [`load`](Self::load).
    pub fn open<F>(gpu: &F, path: &Path, options: LoadOptions) -> LoadResult<Self>
    where
        F: TextureFactory<Texture = T>,
    {
        let mut image = Self::new();
        image.load(gpu, path, options)?;
        Ok(image)
    }

    /// Replaces the current contents with the image at `path`.
    ///
    /// Whatever was held before is released first. On error the image is left empty.
    pub fn load<F>(&mut self, gpu: &F, path: &Path, options: LoadOptions) -> LoadResult<()>
    where
        F: TextureFactory<Texture = T>,
    {
        self.release();

        let mut surface = Surface::open(path)?;
        if let Some(key) = options.color_key {
            let keyed = surface.apply_color_key(key);
            debug!("Keyed out {} pixels of {}", keyed, path.display());
        }

        self.adopt(gpu, &surface, path.display().to_string())?;
        info!("Loaded {} ({}x{})", path.display(), surface.width(), surface.height());
        Ok(())
    }

    /// Replaces the current contents with `text` rasterized in `font`.
    pub fn load_text<F>(&mut self, gpu: &F, font: &FontSpec, text: &str, color: Rgb) -> LoadResult<()>
    where
        F: TextureFactory<Texture = T>,
    {
        self.release();

        let surface = gpu.render_text(font, text, color)?;
        self.adopt(gpu, &surface, format!("text `{}`", text))
    }

    fn adopt<F>(&mut self, gpu: &F, surface: &Surface, origin: String) -> LoadResult<()>
    where
        F: TextureFactory<Texture = T>,
    {
        if surface.is_empty() {
            return Err(LoadError::Upload {
                origin,
                message: "image has no pixels".to_string(),
            });
        }
        let texture = gpu
            .upload(surface)
            .map_err(|message| LoadError::Upload { origin, message })?;

        self.loaded = Some(Loaded {
            texture,
            width: surface.width(),
            height: surface.height(),
        });
        Ok(())
    }

    /// Frees the texture. Does nothing when already empty.
    pub fn release(&mut self) {
        if let Some(loaded) = self.loaded.take() {
            debug!("Releasing {}x{} texture", loaded.width, loaded.height);
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    pub fn width(&self) -> u32 {
        self.loaded.as_ref().map_or(0, |l| l.width)
    }

    pub fn height(&self) -> u32 {
        self.loaded.as_ref().map_or(0, |l| l.height)
    }

    pub fn set_tint(&mut self, tint: Rgb) {
        if let Some(loaded) = self.loaded.as_mut() {
            loaded.texture.set_color_mod(tint);
        }
    }

    pub fn set_alpha(&mut self, alpha: u8) {
        if let Some(loaded) = self.loaded.as_mut() {
            loaded.texture.set_alpha_mod(alpha);
        }
    }

    pub fn set_blend_mode(&mut self, mode: BlendMode) {
        if let Some(loaded) = self.loaded.as_mut() {
            loaded.texture.set_blend_mode(mode);
        }
    }

    /// Draws with the top-left corner at `(x, y)`.
    ///
    /// The destination size is the region's size when `params.region` is set,
    /// the full image size otherwise. Callers only ever pick the position.
    pub fn draw<R>(&mut self, target: &mut R, x: i32, y: i32, params: &DrawParams) -> DrawResult<()>
    where
        R: RenderTarget<T>,
    {
        let loaded = self.loaded.as_mut().ok_or(DrawError::NotLoaded)?;

        if let Some(tint) = params.tint {
            loaded.texture.set_color_mod(tint);
        }
        if let Some(alpha) = params.alpha {
            loaded.texture.set_alpha_mod(alpha);
        }
        if let Some(mode) = params.blend {
            loaded.texture.set_blend_mode(mode);
        }

        let dst = match params.region {
            Some(region) => Rect::new(x, y, region.w, region.h),
            None => Rect::new(x, y, loaded.width, loaded.height),
        };
        let blit = Blit {
            src: params.region.map(|r| r.rect()),
            dst: Some(dst),
            angle: params.angle,
            pivot: params.pivot,
            mirror: params.mirror,
        };
        target.copy(&loaded.texture, &blit)
    }

    /// Scales the whole image into `dst`, or over the whole viewport when `dst` is `None`.
    pub fn stretch<R>(&self, target: &mut R, dst: Option<Rect>) -> DrawResult<()>
    where
        R: RenderTarget<T>,
    {
        let loaded = self.loaded.as_ref().ok_or(DrawError::NotLoaded)?;
        target.copy(&loaded.texture, &Blit::stretched(dst))
    }
}
