use crate::backend::{GpuTexture, RenderTarget, TextureFactory};
use crate::color::Rgb;
use crate::config::Settings;
use crate::demos::Demo;
use crate::error::{DrawResult, LoadResult};
use crate::renderable::{DrawParams, LoadOptions, RenderableImage};

pub const BACKGROUND: &str = "background.png";
pub const FIGURE: &str = "foo.png";

/// A cyan-keyed figure standing on a background.
pub struct ColorKey<T> {
    background: RenderableImage<T>,
    figure: RenderableImage<T>,
}

impl<T: GpuTexture> Demo<T> for ColorKey<T> {
    fn load<F: TextureFactory<Texture = T>>(gpu: &F, settings: &Settings) -> LoadResult<Self> {
        let figure = RenderableImage::open(gpu, &settings.asset(FIGURE), LoadOptions::keyed(Rgb::CYAN))?;
        let background = RenderableImage::open(gpu, &settings.asset(BACKGROUND), LoadOptions::default())?;
        Ok(ColorKey { background, figure })
    }

    fn render<R: RenderTarget<T>>(&mut self, target: &mut R) -> DrawResult<()> {
        self.background.draw(target, 0, 0, &DrawParams::new())?;
        self.figure.draw(target, 240, 190, &DrawParams::new())
    }
}
