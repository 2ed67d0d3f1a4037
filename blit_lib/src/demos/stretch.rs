use crate::backend::{GpuTexture, RenderTarget, TextureFactory};
use crate::config::Settings;
use crate::demos::Demo;
use crate::error::{DrawResult, LoadResult};
use crate::geometry::Rect;
use crate::renderable::{LoadOptions, RenderableImage};

pub const IMAGE: &str = "stretch.bmp";

/// Soft stretching: one bitmap scaled to cover the whole window.
pub struct Stretch<T> {
    image: RenderableImage<T>,
}

impl<T: GpuTexture> Demo<T> for Stretch<T> {
    fn load<F: TextureFactory<Texture = T>>(gpu: &F, settings: &Settings) -> LoadResult<Self> {
        let image = RenderableImage::open(gpu, &settings.asset(IMAGE), LoadOptions::default())?;
        Ok(Stretch { image })
    }

    fn render<R: RenderTarget<T>>(&mut self, target: &mut R) -> DrawResult<()> {
        let (w, h) = target.size();
        self.image.stretch(target, Some(Rect::new(0, 0, w, h)))
    }
}
