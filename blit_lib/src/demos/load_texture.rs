use crate::backend::{GpuTexture, RenderTarget, TextureFactory};
use crate::config::Settings;
use crate::demos::Demo;
use crate::error::{DrawResult, LoadResult};
use crate::renderable::{LoadOptions, RenderableImage};

pub const IMAGE: &str = "texture.png";

/// A texture copied over the whole render target.
pub struct LoadTexture<T> {
    image: RenderableImage<T>,
}

impl<T: GpuTexture> Demo<T> for LoadTexture<T> {
    fn load<F: TextureFactory<Texture = T>>(gpu: &F, settings: &Settings) -> LoadResult<Self> {
        let image = RenderableImage::open(gpu, &settings.asset(IMAGE), LoadOptions::default())?;
        Ok(LoadTexture { image })
    }

    fn render<R: RenderTarget<T>>(&mut self, target: &mut R) -> DrawResult<()> {
        self.image.stretch(target, None)
    }
}
