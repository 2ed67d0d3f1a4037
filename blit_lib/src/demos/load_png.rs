use crate::backend::{GpuTexture, RenderTarget, TextureFactory};
use crate::config::Settings;
use crate::demos::Demo;
use crate::error::{DrawResult, LoadResult};
use crate::geometry::Rect;
use crate::renderable::{LoadOptions, RenderableImage};

pub const IMAGE: &str = "loaded.png";

/// A PNG decoded, converted to the upload format and stretched over the window.
pub struct LoadPng<T> {
    image: RenderableImage<T>,
}

impl<T: GpuTexture> Demo<T> for LoadPng<T> {
    fn load<F: TextureFactory<Texture = T>>(gpu: &F, settings: &Settings) -> LoadResult<Self> {
        let image = RenderableImage::open(gpu, &settings.asset(IMAGE), LoadOptions::default())?;
        Ok(LoadPng { image })
    }

    fn render<R: RenderTarget<T>>(&mut self, target: &mut R) -> DrawResult<()> {
        let (w, h) = target.size();
        self.image.stretch(target, Some(Rect::new(0, 0, w, h)))
    }
}
