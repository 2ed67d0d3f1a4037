use num_derive::ToPrimitive;
use num_traits::ToPrimitive;

use crate::backend::{GpuTexture, RenderTarget, TextureFactory};
use crate::config::Settings;
use crate::demos::Demo;
use crate::error::{DrawResult, LoadResult};
use crate::input::{InputEvent, Key};
use crate::renderable::{DrawParams, LoadOptions, RenderableImage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ToPrimitive)]
pub enum Prompt {
    Press,
    Up,
    Down,
    Left,
    Right,
}

impl Prompt {
    pub const ALL: [Prompt; 5] = [Prompt::Press, Prompt::Up, Prompt::Down, Prompt::Left, Prompt::Right];

    pub fn file(self) -> &'static str {
        match self {
            Prompt::Press => "press.bmp",
            Prompt::Up => "up.bmp",
            Prompt::Down => "down.bmp",
            Prompt::Left => "left.bmp",
            Prompt::Right => "right.bmp",
        }
    }

    fn for_key(key: Key) -> Prompt {
        match key {
            Key::Up => Prompt::Up,
            Key::Down => Prompt::Down,
            Key::Left => Prompt::Left,
            Key::Right => Prompt::Right,
            _ => Prompt::Press,
        }
    }
}

/// Shows a different bitmap for each arrow key. Any other key goes back to the prompt.
pub struct KeyPresses<T> {
    images: Vec<RenderableImage<T>>,
    current: Prompt,
}

impl<T: GpuTexture> KeyPresses<T> {
    pub fn current(&self) -> Prompt {
        self.current
    }
}

impl<T: GpuTexture> Demo<T> for KeyPresses<T> {
    fn load<F: TextureFactory<Texture = T>>(gpu: &F, settings: &Settings) -> LoadResult<Self> {
        let images = Prompt::ALL
            .iter()
            .map(|p| RenderableImage::open(gpu, &settings.asset(p.file()), LoadOptions::default()))
            .collect::<LoadResult<Vec<_>>>()?;

        Ok(KeyPresses {
            images,
            current: Prompt::Press,
        })
    }

    fn handle_event(&mut self, event: &InputEvent) {
        if let InputEvent::KeyDown(key) = event {
            self.current = Prompt::for_key(*key);
        }
    }

    fn render<R: RenderTarget<T>>(&mut self, target: &mut R) -> DrawResult<()> {
        let index = self.current.to_usize().unwrap_or_default();
        self.images[index].draw(target, 0, 0, &DrawParams::new())
    }
}
