use crate::backend::{FontSpec, GpuTexture, RenderTarget, TextureFactory};
use crate::color::Rgb;
use crate::config::Settings;
use crate::demos::{Demo, centered};
use crate::error::{DrawResult, LoadResult};
use crate::renderable::{DrawParams, RenderableImage};

pub const FONT: &str = "lazy.ttf";
pub const POINT_SIZE: f32 = 28.0;
pub const TEXT: &str = "The quick brown fox jumps over the lazy dog";

/// One line of black text in the middle of the window.
pub struct Ttf<T> {
    text: RenderableImage<T>,
}

impl<T: GpuTexture> Demo<T> for Ttf<T> {
    fn load<F: TextureFactory<Texture = T>>(gpu: &F, settings: &Settings) -> LoadResult<Self> {
        let font = FontSpec {
            path: settings.asset(FONT),
            point_size: POINT_SIZE,
        };
        let mut text = RenderableImage::new();
        text.load_text(gpu, &font, TEXT, Rgb::BLACK)?;
        Ok(Ttf { text })
    }

    fn render<R: RenderTarget<T>>(&mut self, target: &mut R) -> DrawResult<()> {
        let (w, h) = target.size();
        let x = centered(w, self.text.width());
        let y = centered(h, self.text.height());
        self.text.draw(target, x, y, &DrawParams::new())
    }
}
