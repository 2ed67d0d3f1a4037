use std::ops::Deref;

use blit_lib::{Blit, DrawError, DrawResult, Point, Rect, RenderTarget, Rgb};
use sdl3::pixels::Color;
use sdl3::render::{FPoint, FRect};
use sdl3::sys::render::SDL_SetRenderVSync;
use tracing::warn;

use super::Window;
use crate::sdl::gpu::SdlTexture;

/// Hardware renderer attached to the window.
pub struct Canvas {
    pub canvas: sdl3::render::WindowCanvas,
}

impl Canvas {
    pub fn new(window: &Window, vsync: bool) -> Self {
        let canvas = window.wnd().clone().into_canvas();

        // SAFETY: `canvas` owns a live renderer, so `raw()` is a valid SDL_Renderer pointer here
        if vsync && !unsafe { SDL_SetRenderVSync(canvas.raw(), 1) } {
            warn!("VSync unavailable: {}", sdl3::get_error());
        }
        Canvas { canvas }
    }
}

impl Deref for Canvas {
    type Target = sdl3::render::WindowCanvas;
    fn deref(&self) -> &Self::Target {
        &self.canvas
    }
}

fn frect(r: Rect) -> FRect {
    FRect::new(r.x as f32, r.y as f32, r.w as f32, r.h as f32)
}

fn fpoint(p: Point) -> FPoint {
    FPoint::new(p.x as f32, p.y as f32)
}

fn refused(e: impl ToString) -> DrawError {
    DrawError::Target(e.to_string())
}

impl<'t> RenderTarget<SdlTexture<'t>> for Canvas {
    fn copy(&mut self, texture: &SdlTexture<'t>, blit: &Blit) -> DrawResult<()> {
        self.canvas
            .copy_ex(
                texture.raw(),
                blit.src.map(frect),
                blit.dst.map(frect),
                blit.angle,
                blit.pivot.map(fpoint),
                blit.mirror.horizontal(),
                blit.mirror.vertical(),
            )
            .map_err(refused)
    }

    fn set_draw_color(&mut self, color: Rgb) {
        self.canvas.set_draw_color(Color::RGB(color.r, color.g, color.b));
    }

    fn clear(&mut self) {
        self.canvas.clear();
    }

    fn fill_rect(&mut self, rect: Rect) -> DrawResult<()> {
        self.canvas.fill_rect(frect(rect)).map_err(refused)
    }

    fn outline_rect(&mut self, rect: Rect) -> DrawResult<()> {
        self.canvas.draw_rect(frect(rect)).map_err(refused)
    }

    fn line(&mut self, from: Point, to: Point) -> DrawResult<()> {
        self.canvas.draw_line(fpoint(from), fpoint(to)).map_err(refused)
    }

    fn point(&mut self, at: Point) -> DrawResult<()> {
        self.canvas.draw_point(fpoint(at)).map_err(refused)
    }

    fn set_viewport(&mut self, area: Option<Rect>) {
        let area = area.map(|r| sdl3::rect::Rect::new(r.x, r.y, r.w, r.h));
        self.canvas.set_viewport(area);
    }

    fn present(&mut self) {
        self.canvas.present();
    }

    fn size(&self) -> (u32, u32) {
        self.canvas.output_size().unwrap_or_default()
    }
}
