use crate::backend::{GpuTexture, RenderTarget, TextureFactory};
use crate::button::{InteractiveRegion, Visual, corner_buttons};
use crate::color::Rgb;
use crate::config::Settings;
use crate::demos::Demo;
use crate::error::{DrawResult, LoadResult};
use crate::input::InputEvent;
use crate::renderable::{DrawParams, LoadOptions, RenderableImage};
use crate::sprite::SpriteSheet;

pub const IMAGE: &str = "button.png";
pub const BUTTON_WIDTH: u32 = 300;
pub const BUTTON_HEIGHT: u32 = 200;

/// Four buttons in the window corners, each showing the sheet row of its state.
pub struct MouseButtons<T> {
    image: RenderableImage<T>,
    sheet: SpriteSheet<Visual>,
    buttons: [InteractiveRegion; 4],
}

impl<T: GpuTexture> MouseButtons<T> {
    pub fn buttons(&self) -> &[InteractiveRegion] {
        &self.buttons
    }
}

impl<T: GpuTexture> Demo<T> for MouseButtons<T> {
    fn load<F: TextureFactory<Texture = T>>(gpu: &F, settings: &Settings) -> LoadResult<Self> {
        let image = RenderableImage::open(gpu, &settings.asset(IMAGE), LoadOptions::keyed(Rgb::CYAN))?;
        let sheet = SpriteSheet::rows(
            Visual::COUNT,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
            image.width(),
            image.height(),
        )?;

        Ok(MouseButtons {
            image,
            sheet,
            buttons: corner_buttons(BUTTON_WIDTH, BUTTON_HEIGHT, settings.width, settings.height),
        })
    }

    fn handle_event(&mut self, event: &InputEvent) {
        for button in &mut self.buttons {
            button.handle_event(event);
        }
    }

    fn render<R: RenderTarget<T>>(&mut self, target: &mut R) -> DrawResult<()> {
        for button in &self.buttons {
            let Some(region) = self.sheet.get(button.state()) else {
                continue;
            };
            let at = button.position();
            self.image.draw(target, at.x, at.y, &DrawParams::new().region(region))?;
        }
        Ok(())
    }
}
