use std::path::PathBuf;
use thiserror::Error;

pub type LoadResult<T> = ::std::result::Result<T, LoadError>;
pub type DrawResult<T> = ::std::result::Result<T, DrawError>;

/// Failure to bring an asset into GPU memory.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Unable to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Unable to create texture from {origin}: {message}")]
    Upload { origin: String, message: String },
    #[error(transparent)]
    Font(#[from] FontError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

#[derive(Error, Debug)]
pub enum FontError {
    #[error("Unable to initialize the font renderer: {0}")]
    Init(String),
    #[error("Failed to open font {path}: {message}")]
    Open { path: PathBuf, message: String },
    #[error("Failed to render text `{text}`: {message}")]
    Render { text: String, message: String },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Region {index} ({x}, {y}, {w}x{h}) lies outside the {width}x{height} image")]
    OutOfBounds {
        index: usize,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        width: u32,
        height: u32,
    },
    #[error("A sprite sheet needs at least one region")]
    Empty,
}

#[derive(Error, Debug)]
pub enum DrawError {
    #[error("Attempt to draw an image that was never loaded")]
    NotLoaded,
    #[error("Render target refused the draw call: {0}")]
    Target(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unable to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: ini::Error,
    },
    #[error("Bad value for {section}.{key}: `{value}`")]
    BadValue {
        section: &'static str,
        key: &'static str,
        value: String,
    },
}
