pub mod wnd;
pub(crate) mod evt;
pub mod gpu;

use std::ops::Deref;

use blit_lib::Settings;
use sdl3::ttf::Sdl3TtfContext;
use tracing::{info, warn};

use crate::error::InitError;

/// SDL library state. Must outlive every window, canvas and texture.
pub struct Context {
    ctx: sdl3::Sdl,
    video: sdl3::VideoSubsystem,
    ttf: Option<Sdl3TtfContext>,
}

impl Context {
    pub fn init(settings: &Settings) -> Result<Self, InitError> {
        let ctx = sdl3::init().map_err(|e| InitError::Subsystem {
            subsystem: "SDL",
            message: e.to_string(),
        })?;
        let video = ctx.video().map_err(|e| InitError::Subsystem {
            subsystem: "video",
            message: e.to_string(),
        })?;

        // Only the text demo needs fonts, the rest run fine without them
        let ttf = match sdl3::ttf::init() {
            Ok(ttf) => Some(ttf),
            Err(e) => {
                warn!("SDL_ttf could not initialize: {}", e);
                None
            }
        };

        info!(
            "SDL initialized for a {}x{} window",
            settings.width, settings.height
        );
        Ok(Context { ctx, video, ttf })
    }

    pub fn video(&self) -> &sdl3::VideoSubsystem {
        &self.video
    }

    pub fn ttf(&self) -> Option<&Sdl3TtfContext> {
        self.ttf.as_ref()
    }
}

impl Deref for Context {
    type Target = sdl3::Sdl;
    fn deref(&self) -> &Self::Target {
        &self.ctx
    }
}
