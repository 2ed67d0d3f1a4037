use crate::backend::{GpuTexture, RenderTarget, TextureFactory};
use crate::config::Settings;
use crate::demos::Demo;
use crate::error::{DrawResult, LoadResult};
use crate::renderable::{DrawParams, LoadOptions, RenderableImage};

pub const IMAGE: &str = "hello_world.bmp";

/// A single bitmap copied to the top-left corner of the window at its own size.
pub struct Hello<T> {
    image: RenderableImage<T>,
}

impl<T: GpuTexture> Demo<T> for Hello<T> {
    fn load<F: TextureFactory<Texture = T>>(gpu: &F, settings: &Settings) -> LoadResult<Self> {
        let image = RenderableImage::open(gpu, &settings.asset(IMAGE), LoadOptions::default())?;
        Ok(Hello { image })
    }

    fn render<R: RenderTarget<T>>(&mut self, target: &mut R) -> DrawResult<()> {
        self.image.draw(target, 0, 0, &DrawParams::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::fake::{FakeFactory, FakeTarget};
    use crate::demos::fixture;
    use crate::geometry::Rect;

    #[test]
    fn draws_at_native_size() {
        let (_dir, settings) = fixture::assets(&[(IMAGE, 320, 200)]);
        let gpu = FakeFactory::new();
        let mut target = FakeTarget::new(640, 480);

        let mut demo = Hello::load(&gpu, &settings).unwrap();
        demo.render(&mut target).unwrap();
        assert_eq!(target.copies()[0].1.dst, Some(Rect::new(0, 0, 320, 200)));
    }

    #[test]
    fn missing_bitmap_fails_the_load() {
        let (_dir, settings) = fixture::assets(&[]);
        let gpu = FakeFactory::new();
        assert!(Hello::load(&gpu, &settings).is_err());
        assert_eq!(gpu.live(), 0);
    }
}
