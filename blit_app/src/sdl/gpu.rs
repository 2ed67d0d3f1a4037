//! Texture creation on top of the SDL renderer.

use blit_lib::color::Rgba8;
use blit_lib::{BlendMode, FontError, FontSpec, GpuTexture, Rgb, Surface, TextureFactory};
use sdl3::pixels::{Color, PixelFormat};
use sdl3::render::{Texture, TextureCreator};
use sdl3::sys::pixels::SDL_PixelFormat;
use sdl3::ttf::Sdl3TtfContext;
use sdl3::video::WindowContext;

/// Byte order of `Surface` pixels: R, G, B, A whatever the host endianness.
fn upload_format() -> PixelFormat {
    unsafe { PixelFormat::from_ll(SDL_PixelFormat::RGBA32) }
}

pub struct SdlTexture<'t>(Texture<'t>);

impl<'t> SdlTexture<'t> {
    pub fn raw(&self) -> &Texture<'t> {
        &self.0
    }
}

impl GpuTexture for SdlTexture<'_> {
    fn set_color_mod(&mut self, tint: Rgb) {
        self.0.set_color_mod(tint.r, tint.g, tint.b);
    }

    fn set_alpha_mod(&mut self, alpha: u8) {
        self.0.set_alpha_mod(alpha);
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.0.set_blend_mode(sdl_blend(mode));
    }
}

fn sdl_blend(mode: BlendMode) -> sdl3::render::BlendMode {
    match mode {
        BlendMode::None => sdl3::render::BlendMode::None,
        BlendMode::Blend => sdl3::render::BlendMode::Blend,
        BlendMode::Add => sdl3::render::BlendMode::Add,
        BlendMode::Mod => sdl3::render::BlendMode::Mod,
        BlendMode::Mul => sdl3::render::BlendMode::Mul,
    }
}

/// Creates textures owned by the window renderer.
pub struct SdlGpu<'t> {
    creator: &'t TextureCreator<WindowContext>,
    ttf: Option<&'t Sdl3TtfContext>,
}

impl<'t> SdlGpu<'t> {
    pub fn new(creator: &'t TextureCreator<WindowContext>, ttf: Option<&'t Sdl3TtfContext>) -> Self {
        SdlGpu { creator, ttf }
    }
}

impl<'t> TextureFactory for SdlGpu<'t> {
    type Texture = SdlTexture<'t>;

    fn upload(&self, surface: &Surface) -> Result<SdlTexture<'t>, String> {
        let mut texture = self
            .creator
            .create_texture_static(upload_format(), surface.width(), surface.height())
            .map_err(|e| e.to_string())?;
        texture
            .update(None, surface.bytes(), surface.pitch())
            .map_err(|e| e.to_string())?;
        texture.set_blend_mode(sdl3::render::BlendMode::Blend);

        Ok(SdlTexture(texture))
    }

    fn render_text(&self, font: &FontSpec, text: &str, color: Rgb) -> Result<Surface, FontError> {
        let ttf = self
            .ttf
            .ok_or_else(|| FontError::Init("SDL_ttf is not available".to_string()))?;
        let sdl_font = ttf
            .load_font(&font.path, font.point_size)
            .map_err(|e| FontError::Open {
                path: font.path.clone(),
                message: e.to_string(),
            })?;
        let render_err = |e: String| FontError::Render {
            text: text.to_string(),
            message: e,
        };

        let rendered = sdl_font
            .render(text)
            .solid(Color::RGB(color.r, color.g, color.b))
            .map_err(|e| render_err(e.to_string()))?
            .convert_format(upload_format())
            .map_err(|e| render_err(e.to_string()))?;

        // Rows of the SDL surface may be padded past width * 4
        let (width, height) = (rendered.width(), rendered.height());
        let pitch = rendered.pitch() as usize;
        let row = width as usize * size_of::<Rgba8>();
        let mut bytes = Vec::with_capacity(row * height as usize);
        rendered.with_lock(|pixels| {
            for y in 0..height as usize {
                bytes.extend_from_slice(&pixels[y * pitch..y * pitch + row]);
            }
        });

        Ok(Surface::from_rgba(
            width,
            height,
            bytemuck::cast_slice(&bytes).to_vec(),
        ))
    }
}
