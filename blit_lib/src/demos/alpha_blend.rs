use crate::backend::{GpuTexture, RenderTarget, TextureFactory};
use crate::color::BlendMode;
use crate::config::Settings;
use crate::demos::Demo;
use crate::error::{DrawResult, LoadResult};
use crate::input::{InputEvent, Key};
use crate::level::Level;
use crate::renderable::{DrawParams, LoadOptions, RenderableImage};

pub const FRONT: &str = "fadeout.png";
pub const BACK: &str = "fadein.png";

/// Alpha blending. W makes the front image more opaque, S fades it out.
pub struct AlphaBlend<T> {
    front: RenderableImage<T>,
    back: RenderableImage<T>,
    alpha: Level,
}

impl<T: GpuTexture> AlphaBlend<T> {
    pub fn alpha(&self) -> u8 {
        self.alpha.value()
    }
}

impl<T: GpuTexture> Demo<T> for AlphaBlend<T> {
    fn load<F: TextureFactory<Texture = T>>(gpu: &F, settings: &Settings) -> LoadResult<Self> {
        let mut front = RenderableImage::open(gpu, &settings.asset(FRONT), LoadOptions::default())?;
        front.set_blend_mode(BlendMode::Blend);
        let back = RenderableImage::open(gpu, &settings.asset(BACK), LoadOptions::default())?;

        Ok(AlphaBlend {
            front,
            back,
            alpha: Level::full(),
        })
    }

    fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown(Key::W) => {
                self.alpha.raise();
            }
            InputEvent::KeyDown(Key::S) => {
                self.alpha.lower();
            }
            _ => {}
        }
    }

    fn render<R: RenderTarget<T>>(&mut self, target: &mut R) -> DrawResult<()> {
        self.back.draw(target, 0, 0, &DrawParams::new())?;
        self.front.draw(target, 0, 0, &DrawParams::new().alpha(self.alpha.value()))
    }
}
