use num_derive::ToPrimitive;

use crate::backend::{GpuTexture, RenderTarget, TextureFactory};
use crate::color::Rgb;
use crate::config::Settings;
use crate::demos::Demo;
use crate::error::{DrawResult, LoadResult};
use crate::renderable::{DrawParams, LoadOptions, RenderableImage};
use crate::sprite::SpriteSheet;

pub const IMAGE: &str = "dots.png";
pub const DOT_SIZE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ToPrimitive)]
pub enum Dot {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Four dots cut from one sheet, each drawn in its matching window corner.
pub struct SpriteSheetDemo<T> {
    image: RenderableImage<T>,
    sheet: SpriteSheet<Dot>,
}

impl<T: GpuTexture> Demo<T> for SpriteSheetDemo<T> {
    fn load<F: TextureFactory<Texture = T>>(gpu: &F, settings: &Settings) -> LoadResult<Self> {
        let image = RenderableImage::open(gpu, &settings.asset(IMAGE), LoadOptions::keyed(Rgb::CYAN))?;
        let sheet = SpriteSheet::quadrants(DOT_SIZE, DOT_SIZE, image.width(), image.height())?;
        Ok(SpriteSheetDemo { image, sheet })
    }

    fn render<R: RenderTarget<T>>(&mut self, target: &mut R) -> DrawResult<()> {
        let (w, h) = target.size();
        // Small windows push the far corners to negative offsets
        let right = w as i32 - DOT_SIZE as i32;
        let bottom = h as i32 - DOT_SIZE as i32;
        let placements = [
            (Dot::TopLeft, 0, 0),
            (Dot::TopRight, right, 0),
            (Dot::BottomLeft, 0, bottom),
            (Dot::BottomRight, right, bottom),
        ];

        for (dot, x, y) in placements {
            if let Some(region) = self.sheet.get(dot) {
                self.image.draw(target, x, y, &DrawParams::new().region(region))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::fake::{FakeFactory, FakeTarget};
    use crate::demos::fixture;
    use crate::error::LoadError;
    use crate::geometry::Rect;

    #[test]
    fn dots_land_in_the_corners() {
        let (_dir, settings) = fixture::assets(&[(IMAGE, 200, 200)]);
        let gpu = FakeFactory::new();
        let mut target = FakeTarget::new(640, 480);
        let mut demo = SpriteSheetDemo::load(&gpu, &settings).unwrap();
        demo.render(&mut target).unwrap();

        let blits: Vec<_> = target.copies().iter().map(|c| (c.1.src, c.1.dst)).collect();
        assert_eq!(
            blits,
            vec![
                (Some(Rect::new(0, 0, 100, 100)), Some(Rect::new(0, 0, 100, 100))),
                (Some(Rect::new(100, 0, 100, 100)), Some(Rect::new(540, 0, 100, 100))),
                (Some(Rect::new(0, 100, 100, 100)), Some(Rect::new(0, 380, 100, 100))),
                (Some(Rect::new(100, 100, 100, 100)), Some(Rect::new(540, 380, 100, 100))),
            ]
        );
    }

    #[test]
    fn window_smaller_than_a_dot() {
        let (_dir, settings) = fixture::assets(&[(IMAGE, 200, 200)]);
        let gpu = FakeFactory::new();
        let mut target = FakeTarget::new(80, 60);
        let mut demo = SpriteSheetDemo::load(&gpu, &settings).unwrap();
        demo.render(&mut target).unwrap();

        let origins: Vec<_> = target
            .copies()
            .iter()
            .filter_map(|c| c.1.dst.map(|r| (r.x, r.y)))
            .collect();
        assert_eq!(origins, vec![(0, 0), (-20, 0), (0, -40), (-20, -40)]);
    }

    #[test]
    fn undersized_sheet_is_rejected() {
        let (_dir, settings) = fixture::assets(&[(IMAGE, 150, 200)]);
        let gpu = FakeFactory::new();
        assert!(matches!(
            SpriteSheetDemo::load(&gpu, &settings),
            Err(LoadError::Layout(_))
        ));
        assert_eq!(gpu.live(), 0);
    }
}
