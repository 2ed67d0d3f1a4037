pub mod canvas;

use std::ops::Deref;

use blit_lib::Settings;

use crate::error::InitError;
use crate::sdl;

pub struct Window {
    wnd: sdl3::video::Window,
}

impl Window {
    pub fn new(ctx: &sdl::Context, settings: &Settings) -> Result<Self, InitError> {
        let sdl_window = ctx
            .video()
            .window(&settings.title, settings.width, settings.height)
            .position_centered()
            .build()
            .map_err(|e| InitError::Window(e.to_string()))?;

        Ok(Window { wnd: sdl_window })
    }

    pub fn wnd(&self) -> &sdl3::video::Window {
        &self.wnd
    }
}

impl Deref for Window {
    type Target = sdl3::video::Window;
    fn deref(&self) -> &Self::Target {
        &self.wnd
    }
}
