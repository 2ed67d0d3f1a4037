//! SDL3 front end of the blit tutorials

pub mod app;
pub mod error;
pub mod sdl;

pub use app::{Stage, launch};
