use tracing::{debug, info};

use crate::backend::{EventSource, GpuTexture, RenderTarget};
use crate::color::Rgb;
use crate::demos::Demo;
use crate::error::DrawResult;
use crate::input::InputEvent;

/// Drives `demo` until a quit event arrives. Returns the number of frames presented.
///
/// Every iteration drains the pending events, clears the whole window to
/// white, lets the demo draw and presents the frame.
pub fn run<T, D, R, E>(demo: &mut D, target: &mut R, events: &mut E) -> DrawResult<u64>
where
    T: GpuTexture,
    D: Demo<T>,
    R: RenderTarget<T>,
    E: EventSource,
{
    let mut frames = 0u64;

    loop {
        for event in events.poll() {
            if event == InputEvent::Quit {
                info!("Quit requested after {} frames", frames);
                return Ok(frames);
            }
            debug!("{:?}", event);
            demo.handle_event(&event);
        }

        target.set_viewport(None);
        target.set_draw_color(Rgb::WHITE);
        target.clear();

        demo.render(target)?;

        target.present();
        frames += 1;
    }
}
