use num_derive::ToPrimitive;

use crate::backend::{GpuTexture, RenderTarget, TextureFactory};
use crate::color::Rgb;
use crate::config::Settings;
use crate::demos::{Demo, centered};
use crate::error::{DrawResult, LoadResult};
use crate::renderable::{DrawParams, LoadOptions, RenderableImage};
use crate::sprite::{Animation, SpriteSheet};

pub const IMAGE: &str = "foo.png";
pub const FRAME_WIDTH: u32 = 64;
pub const FRAME_HEIGHT: u32 = 205;
/// Rendered frames each walk frame stays on screen
pub const TICKS_PER_FRAME: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ToPrimitive)]
pub enum Walk {
    Step0,
    Step1,
    Step2,
    Step3,
}

impl Walk {
    pub const ALL: [Walk; 4] = [Walk::Step0, Walk::Step1, Walk::Step2, Walk::Step3];
}

/// A walking figure, cycling through four frames in the middle of the window.
pub struct Animated<T> {
    image: RenderableImage<T>,
    sheet: SpriteSheet<Walk>,
    animation: Animation,
}

impl<T: GpuTexture> Animated<T> {
    pub fn frame(&self) -> usize {
        self.animation.frame()
    }
}

impl<T: GpuTexture> Demo<T> for Animated<T> {
    fn load<F: TextureFactory<Texture = T>>(gpu: &F, settings: &Settings) -> LoadResult<Self> {
        let image = RenderableImage::open(gpu, &settings.asset(IMAGE), LoadOptions::keyed(Rgb::CYAN))?;
        let sheet = SpriteSheet::columns(
            Walk::ALL.len() as u32,
            FRAME_WIDTH,
            FRAME_HEIGHT,
            image.width(),
            image.height(),
        )?;

        Ok(Animated {
            image,
            sheet,
            animation: Animation::new(Walk::ALL.len(), TICKS_PER_FRAME),
        })
    }

    fn render<R: RenderTarget<T>>(&mut self, target: &mut R) -> DrawResult<()> {
        let (w, h) = target.size();
        let walk = Walk::ALL[self.animation.frame()];
        if let Some(region) = self.sheet.get(walk) {
            let x = centered(w, region.w);
            let y = centered(h, region.h);
            self.image.draw(target, x, y, &DrawParams::new().region(region))?;
        }
        self.animation.advance();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::fake::{FakeFactory, FakeTarget};
    use crate::demos::fixture;
    use crate::geometry::Rect;

    #[test]
    fn cycles_through_the_walk() {
        let (_dir, settings) = fixture::assets(&[(IMAGE, 256, 205)]);
        let gpu = FakeFactory::new();
        let mut target = FakeTarget::new(640, 480);
        let mut demo = Animated::load(&gpu, &settings).unwrap();

        let frames = Walk::ALL.len() * TICKS_PER_FRAME;
        for _ in 0..frames + 1 {
            demo.render(&mut target).unwrap();
        }

        let sources: Vec<_> = target.copies().iter().map(|c| c.1.src.map(|r| r.x)).collect();
        assert_eq!(sources[0], Some(0));
        assert_eq!(sources[TICKS_PER_FRAME - 1], Some(0));
        assert_eq!(sources[TICKS_PER_FRAME], Some(64));
        assert_eq!(sources[frames - 1], Some(192));
        // wrapped back to the first frame
        assert_eq!(sources[frames], Some(0));

        assert_eq!(target.copies()[0].1.dst, Some(Rect::new(288, 137, 64, 205)));
    }

    #[test]
    fn narrow_sheet_fails_to_load() {
        let (_dir, settings) = fixture::assets(&[(IMAGE, 200, 205)]);
        let gpu = FakeFactory::new();
        assert!(Animated::load(&gpu, &settings).is_err());
    }
}
