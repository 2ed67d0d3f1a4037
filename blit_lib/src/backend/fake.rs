//! In-memory backend used by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::path::Path;
use std::rc::Rc;

use super::{Blit, EventSource, FontSpec, GpuTexture, RenderTarget, TextureFactory};
use crate::color::{BlendMode, Rgb, Rgba8};
use crate::error::{DrawResult, FontError};
use crate::geometry::{Point, Rect};
use crate::input::InputEvent;
use crate::surface::Surface;

/// Modulation state of a texture at the moment it was drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Modulation {
    pub tint: Rgb,
    pub alpha: u8,
    pub blend: BlendMode,
}

impl Default for Modulation {
    fn default() -> Self {
        Modulation {
            tint: Rgb::WHITE,
            alpha: 255,
            blend: BlendMode::Blend,
        }
    }
}

#[derive(Debug)]
pub struct FakeTexture {
    pub id: usize,
    pub width: u32,
    pub height: u32,
    pub modulation: Modulation,
    live: Rc<Cell<usize>>,
}

impl GpuTexture for FakeTexture {
    fn set_color_mod(&mut self, tint: Rgb) {
        self.modulation.tint = tint;
    }

    fn set_alpha_mod(&mut self, alpha: u8) {
        self.modulation.alpha = alpha;
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.modulation.blend = mode;
    }
}

impl Drop for FakeTexture {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

#[derive(Default)]
pub struct FakeFactory {
    live: Rc<Cell<usize>>,
    created: Cell<usize>,
    uploads: RefCell<Vec<Surface>>,
    fail_uploads: bool,
}

impl FakeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_uploads() -> Self {
        FakeFactory {
            fail_uploads: true,
            ..Self::default()
        }
    }

    /// Textures currently alive
    pub fn live(&self) -> usize {
        self.live.get()
    }

    pub fn created(&self) -> usize {
        self.created.get()
    }

    /// Copies of every surface handed to `upload`, in order
    pub fn uploads(&self) -> Vec<Surface> {
        self.uploads.borrow().clone()
    }
}

impl TextureFactory for FakeFactory {
    type Texture = FakeTexture;

    fn upload(&self, surface: &Surface) -> Result<FakeTexture, String> {
        if self.fail_uploads {
            return Err("out of video memory".to_string());
        }
        self.uploads.borrow_mut().push(surface.clone());
        let id = self.created.get();
        self.created.set(id + 1);
        self.live.set(self.live.get() + 1);

        Ok(FakeTexture {
            id,
            width: surface.width(),
            height: surface.height(),
            modulation: Modulation::default(),
            live: Rc::clone(&self.live),
        })
    }

    fn render_text(&self, font: &FontSpec, text: &str, color: Rgb) -> Result<Surface, FontError> {
        if !font.path.exists() {
            return Err(FontError::Open {
                path: font.path.clone(),
                message: "no such font".to_string(),
            });
        }
        // One 8x16 cell per character
        let width = 8 * text.chars().count() as u32;
        Ok(Surface::solid(width, 16, Rgba8::new(color.r, color.g, color.b, 255)))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Copy {
        texture: usize,
        blit: Blit,
        modulation: Modulation,
    },
    DrawColor(Rgb),
    Clear,
    Fill(Rect),
    Outline(Rect),
    Line(Point, Point),
    Point(Point),
    Viewport(Option<Rect>),
    Present,
}

pub struct FakeTarget {
    pub ops: Vec<Op>,
    pub width: u32,
    pub height: u32,
    pub refuse_copies: bool,
}

impl FakeTarget {
    pub fn new(width: u32, height: u32) -> Self {
        FakeTarget {
            ops: Vec::new(),
            width,
            height,
            refuse_copies: false,
        }
    }

    pub fn copies(&self) -> Vec<(usize, Blit, Modulation)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Copy { texture, blit, modulation } => Some((*texture, *blit, *modulation)),
                _ => None,
            })
            .collect()
    }

    pub fn presents(&self) -> usize {
        self.ops.iter().filter(|op| **op == Op::Present).count()
    }
}

impl RenderTarget<FakeTexture> for FakeTarget {
    fn copy(&mut self, texture: &FakeTexture, blit: &Blit) -> DrawResult<()> {
        if self.refuse_copies {
            return Err(crate::error::DrawError::Target("device lost".to_string()));
        }
        self.ops.push(Op::Copy {
            texture: texture.id,
            blit: *blit,
            modulation: texture.modulation,
        });
        Ok(())
    }

    fn set_draw_color(&mut self, color: Rgb) {
        self.ops.push(Op::DrawColor(color));
    }

    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }

    fn fill_rect(&mut self, rect: Rect) -> DrawResult<()> {
        self.ops.push(Op::Fill(rect));
        Ok(())
    }

    fn outline_rect(&mut self, rect: Rect) -> DrawResult<()> {
        self.ops.push(Op::Outline(rect));
        Ok(())
    }

    fn line(&mut self, from: Point, to: Point) -> DrawResult<()> {
        self.ops.push(Op::Line(from, to));
        Ok(())
    }

    fn point(&mut self, at: Point) -> DrawResult<()> {
        self.ops.push(Op::Point(at));
        Ok(())
    }

    fn set_viewport(&mut self, area: Option<Rect>) {
        self.ops.push(Op::Viewport(area));
    }

    fn present(&mut self) {
        self.ops.push(Op::Present);
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Replays scripted batches of events, one batch per poll.
pub struct ScriptedEvents {
    batches: VecDeque<Vec<InputEvent>>,
    pub polls: usize,
}

impl ScriptedEvents {
    pub fn new(batches: Vec<Vec<InputEvent>>) -> Self {
        ScriptedEvents {
            batches: batches.into(),
            polls: 0,
        }
    }
}

impl EventSource for ScriptedEvents {
    fn poll(&mut self) -> Vec<InputEvent> {
        self.polls += 1;
        // Once the script runs dry keep the loop from spinning forever
        self.batches.pop_front().unwrap_or_else(|| vec![InputEvent::Quit])
    }
}

/// Writes a solid RGBA PNG for tests that go through the decoder.
pub fn write_png(dir: &Path, name: &str, width: u32, height: u32, fill: [u8; 4]) -> std::path::PathBuf {
    let path = dir.join(name);
    image::RgbaImage::from_pixel(width, height, image::Rgba(fill))
        .save(&path)
        .unwrap();
    path
}
