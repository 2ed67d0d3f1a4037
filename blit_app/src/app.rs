use std::path::Path;

use blit_lib::{Demo, Settings, run};
use tracing::{error, info};

use crate::error::Result;
use crate::sdl;
use crate::sdl::evt::EventPump;
use crate::sdl::gpu::{SdlGpu, SdlTexture};
use crate::sdl::wnd::Window;
use crate::sdl::wnd::canvas::Canvas;

/// Everything a demo needs once SDL is up: a texture factory, the canvas and the event queue.
pub struct Stage<'t> {
    pub settings: &'t Settings,
    pub gpu: SdlGpu<'t>,
    canvas: &'t mut Canvas,
    events: &'t mut EventPump,
}

impl<'t> Stage<'t> {
    /// Loads `D` and runs it until the window is closed. Returns the number of frames shown.
    ///
    /// The demo and all of its textures are dropped before this returns.
    pub fn play<D: Demo<SdlTexture<'t>>>(&mut self) -> Result<u64> {
        let mut demo = D::load(&self.gpu, self.settings)?;
        info!("Media loaded, entering the frame loop");

        let frames = run(&mut demo, &mut *self.canvas, &mut *self.events)?;
        Ok(frames)
    }
}

/// Brings SDL up, hands a [`Stage`] to `play` and tears everything down in reverse.
///
/// Failures are logged rather than returned: every tutorial binary exits normally.
pub fn launch<F>(play: F)
where
    F: for<'t> FnOnce(&mut Stage<'t>) -> Result<u64>,
{
    tracing_subscriber::fmt::init();
    info!("Begin log");

    let settings = Settings::load_or_default(Path::new(Settings::DEFAULT_PATH));
    match start(&settings, play) {
        Ok(frames) => info!("Window closed after {} frames", frames),
        Err(e) => error!("{}", e),
    }
    info!("Shutting down");
}

fn start<F>(settings: &Settings, play: F) -> Result<u64>
where
    F: for<'t> FnOnce(&mut Stage<'t>) -> Result<u64>,
{
    let ctx = sdl::Context::init(settings)?;
    let wnd = Window::new(&ctx, settings)?;
    let mut canvas = Canvas::new(&wnd, settings.vsync);
    let mut events = EventPump::new(&ctx)?;
    let texture_creator = canvas.texture_creator();

    let mut stage = Stage {
        settings,
        gpu: SdlGpu::new(&texture_creator, ctx.ttf()),
        canvas: &mut canvas,
        events: &mut events,
    };
    // The demo is gone once `play` returns. The canvas, window and SDL drop after it in reverse order
    play(&mut stage)
}
