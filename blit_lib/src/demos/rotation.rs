use crate::backend::{GpuTexture, RenderTarget, TextureFactory};
use crate::color::{Mirror, Rgb};
use crate::config::Settings;
use crate::demos::{Demo, centered};
use crate::error::{DrawResult, LoadResult};
use crate::input::{InputEvent, Key};
use crate::renderable::{DrawParams, LoadOptions, RenderableImage};

pub const IMAGE: &str = "arrow.png";
pub const TURN: f64 = 60.0;

/// Rotation and mirroring. A/D turn the arrow, Q/W/E pick horizontal, no or vertical flip.
pub struct Rotation<T> {
    image: RenderableImage<T>,
    angle: f64,
    mirror: Mirror,
}

impl<T: GpuTexture> Rotation<T> {
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn mirror(&self) -> Mirror {
        self.mirror
    }
}

impl<T: GpuTexture> Demo<T> for Rotation<T> {
    fn load<F: TextureFactory<Texture = T>>(gpu: &F, settings: &Settings) -> LoadResult<Self> {
        let image = RenderableImage::open(gpu, &settings.asset(IMAGE), LoadOptions::keyed(Rgb::CYAN))?;
        Ok(Rotation {
            image,
            angle: 0.0,
            mirror: Mirror::None,
        })
    }

    fn handle_event(&mut self, event: &InputEvent) {
        let InputEvent::KeyDown(key) = event else {
            return;
        };
        match key {
            Key::A => self.angle -= TURN,
            Key::D => self.angle += TURN,
            Key::Q => self.mirror = Mirror::Horizontal,
            Key::W => self.mirror = Mirror::None,
            Key::E => self.mirror = Mirror::Vertical,
            _ => {}
        }
    }

    fn render<R: RenderTarget<T>>(&mut self, target: &mut R) -> DrawResult<()> {
        let (w, h) = target.size();
        let x = centered(w, self.image.width());
        let y = centered(h, self.image.height());
        let params = DrawParams::new().angle(self.angle).mirror(self.mirror);
        self.image.draw(target, x, y, &params)
    }
}
