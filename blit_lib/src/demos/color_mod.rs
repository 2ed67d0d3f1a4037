use crate::backend::{GpuTexture, RenderTarget, TextureFactory};
use crate::color::Rgb;
use crate::config::Settings;
use crate::demos::Demo;
use crate::error::{DrawResult, LoadResult};
use crate::input::{InputEvent, Key};
use crate::level::Level;
use crate::renderable::{DrawParams, LoadOptions, RenderableImage};

pub const IMAGE: &str = "colors.png";

/// Color modulation. Q/W/E raise red/green/blue, A/S/D lower them.
pub struct ColorMod<T> {
    image: RenderableImage<T>,
    red: Level,
    green: Level,
    blue: Level,
}

impl<T: GpuTexture> ColorMod<T> {
    pub fn tint(&self) -> Rgb {
        Rgb::new(self.red.value(), self.green.value(), self.blue.value())
    }
}

impl<T: GpuTexture> Demo<T> for ColorMod<T> {
    fn load<F: TextureFactory<Texture = T>>(gpu: &F, settings: &Settings) -> LoadResult<Self> {
        let image = RenderableImage::open(gpu, &settings.asset(IMAGE), LoadOptions::default())?;
        Ok(ColorMod {
            image,
            red: Level::full(),
            green: Level::full(),
            blue: Level::full(),
        })
    }

    fn handle_event(&mut self, event: &InputEvent) {
        let InputEvent::KeyDown(key) = event else {
            return;
        };
        match key {
            Key::Q => self.red.raise(),
            Key::W => self.green.raise(),
            Key::E => self.blue.raise(),
            Key::A => self.red.lower(),
            Key::S => self.green.lower(),
            Key::D => self.blue.lower(),
            _ => return,
        };
    }

    fn render<R: RenderTarget<T>>(&mut self, target: &mut R) -> DrawResult<()> {
        let tint = self.tint();
        self.image.draw(target, 0, 0, &DrawParams::new().tint(tint))
    }
}
