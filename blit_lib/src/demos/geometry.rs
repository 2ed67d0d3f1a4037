use crate::backend::{GpuTexture, RenderTarget, TextureFactory};
use crate::color::Rgb;
use crate::config::Settings;
use crate::demos::Demo;
use crate::error::{DrawResult, LoadResult};
use crate::geometry::{Point, Rect};

/// Primitive drawing without any texture: a filled quad, an outline,
/// a horizontal line and a dotted vertical line.
pub struct Geometry;

impl<T: GpuTexture> Demo<T> for Geometry {
    fn load<F: TextureFactory<Texture = T>>(_gpu: &F, _settings: &Settings) -> LoadResult<Self> {
        Ok(Geometry)
    }

    fn render<R: RenderTarget<T>>(&mut self, target: &mut R) -> DrawResult<()> {
        let (w, h) = target.size();

        target.set_draw_color(Rgb::RED);
        target.fill_rect(Rect::new((w / 4) as i32, (h / 4) as i32, w / 2, h / 2))?;

        target.set_draw_color(Rgb::GREEN);
        target.outline_rect(Rect::new((w / 6) as i32, (h / 6) as i32, w * 2 / 3, h * 2 / 3))?;

        target.set_draw_color(Rgb::BLUE);
        target.line(Point::new(0, (h / 2) as i32), Point::new(w as i32, (h / 2) as i32))?;

        target.set_draw_color(Rgb::YELLOW);
        for y in (0..h).step_by(4) {
            target.point(Point::new((w / 2) as i32, y as i32))?;
        }
        Ok(())
    }
}
