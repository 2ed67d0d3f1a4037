use crate::backend::{GpuTexture, RenderTarget, TextureFactory};
use crate::config::Settings;
use crate::demos::Demo;
use crate::error::{DrawResult, LoadResult};
use crate::geometry::Rect;
use crate::renderable::{LoadOptions, RenderableImage};

pub const IMAGE: &str = "viewport.png";

/// The same texture drawn into three viewports: top left, top right and the bottom half.
pub struct Viewport<T> {
    image: RenderableImage<T>,
}

pub fn viewports(w: u32, h: u32) -> [Rect; 3] {
    [
        Rect::new(0, 0, w / 2, h / 2),
        Rect::new((w / 2) as i32, 0, w / 2, h / 2),
        Rect::new(0, (h / 2) as i32, w, h / 2),
    ]
}

impl<T: GpuTexture> Demo<T> for Viewport<T> {
    fn load<F: TextureFactory<Texture = T>>(gpu: &F, settings: &Settings) -> LoadResult<Self> {
        let image = RenderableImage::open(gpu, &settings.asset(IMAGE), LoadOptions::default())?;
        Ok(Viewport { image })
    }

    fn render<R: RenderTarget<T>>(&mut self, target: &mut R) -> DrawResult<()> {
        let (w, h) = target.size();
        for area in viewports(w, h) {
            target.set_viewport(Some(area));
            self.image.stretch(target, None)?;
        }
        target.set_viewport(None);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::fake::{FakeFactory, FakeTarget, Op};
    use crate::demos::fixture;

    #[test]
    fn one_copy_per_viewport() {
        let (_dir, settings) = fixture::assets(&[(IMAGE, 640, 480)]);
        let gpu = FakeFactory::new();
        let mut target = FakeTarget::new(640, 480);
        let mut demo = Viewport::load(&gpu, &settings).unwrap();
        demo.render(&mut target).unwrap();

        let areas: Vec<_> = target
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Viewport(area) => Some(*area),
                _ => None,
            })
            .collect();
        assert_eq!(
            areas,
            vec![
                Some(Rect::new(0, 0, 320, 240)),
                Some(Rect::new(320, 0, 320, 240)),
                Some(Rect::new(0, 240, 640, 240)),
                None
            ]
        );
        assert_eq!(target.copies().len(), 3);
    }
}
