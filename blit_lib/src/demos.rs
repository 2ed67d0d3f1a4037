//! The tutorial programs. Each one loads its assets, reacts to input and draws a frame.
//!
//! Demos are generic over the texture type, so the same code runs on the SDL
//! backend and on the in-memory backend of the tests.

pub mod alpha_blend;
pub mod animation;
pub mod color_key;
pub mod color_mod;
pub mod geometry;
pub mod hello;
pub mod key_presses;
pub mod load_png;
pub mod load_texture;
pub mod mouse_buttons;
pub mod rotation;
pub mod sprite_sheet;
pub mod stretch;
pub mod ttf;
pub mod viewport;

use crate::backend::{GpuTexture, RenderTarget, TextureFactory};
use crate::config::Settings;
use crate::error::{DrawResult, LoadResult};
use crate::input::InputEvent;

pub trait Demo<T: GpuTexture>: Sized {
    /// Loads every asset the demo needs. Any failure aborts the demo.
    fn load<F: TextureFactory<Texture = T>>(gpu: &F, settings: &Settings) -> LoadResult<Self>;

    fn handle_event(&mut self, _event: &InputEvent) {}

    /// Draws one frame onto an already cleared target.
    fn render<R: RenderTarget<T>>(&mut self, target: &mut R) -> DrawResult<()>;
}

/// Offset that centers something of size `inner` inside `outer`.
pub(crate) fn centered(outer: u32, inner: u32) -> i32 {
    (outer as i32 - inner as i32) / 2
}

#[cfg(test)]
pub(crate) mod fixture {
    use tempfile::TempDir;

    use crate::backend::fake::write_png;
    use crate::config::Settings;

    /// Writes one solid image per `(name, width, height)` and points the settings at them.
    pub fn assets(files: &[(&str, u32, u32)]) -> (TempDir, Settings) {
        let dir = tempfile::tempdir().unwrap();
        for &(name, w, h) in files {
            write_png(dir.path(), name, w, h, [0, 255, 255, 255]);
        }
        let settings = Settings {
            asset_root: dir.path().to_path_buf(),
            ..Settings::default()
        };
        (dir, settings)
    }
}
