use blit_lib::{DrawError, LoadError};
use thiserror::Error;

pub type Result<T> = ::std::result::Result<T, AppError>;

/// SDL bootstrap failures
#[derive(Error, Debug)]
pub enum InitError {
    #[error("SDL could not initialize {subsystem}: {message}")]
    Subsystem {
        subsystem: &'static str,
        message: String,
    },
    #[error("Failed to build window: {0}")]
    Window(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Init(#[from] InitError),
    #[error("Failed to load media: {0}")]
    Load(#[from] LoadError),
    #[error("Failed to draw: {0}")]
    Draw(#[from] DrawError),
}
