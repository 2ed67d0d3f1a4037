//! Platform-free core of the blit tutorials

// Pixel sizes, angles and window coordinates are constrained by the window
// size, so `as` casts between them are fine.
#![allow(clippy::cast_lossless)]

pub mod backend;
pub mod button;
pub mod color;
pub mod config;
pub mod demos;
pub mod error;
pub mod geometry;
pub mod input;
pub mod level;
pub mod renderable;
pub mod runner;
pub mod sprite;
pub mod surface;

pub use backend::{Blit, EventSource, FontSpec, GpuTexture, RenderTarget, TextureFactory};
pub use button::{InteractiveRegion, Visual};
pub use color::{BlendMode, Mirror, Rgb};
pub use config::Settings;
pub use demos::Demo;
pub use error::{DrawError, DrawResult, FontError, LoadError, LoadResult};
pub use geometry::{Point, Rect};
pub use input::{InputEvent, Key};
pub use renderable::{DrawParams, LoadOptions, RenderableImage};
pub use runner::run;
pub use surface::Surface;
