use thiserror::Error;

#[derive(Error, Debug)]
pub enum LightfieldError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("No image found for grid position ({x}, {y})")]
    ImageNotFound { x: usize, y: usize },

    #[error("{count} images match grid position ({x}, {y}), expected exactly one")]
    AmbiguousImage { x: usize, y: usize, count: usize },

    #[error("No grid views within radius {radius} of aperture center ({cx}, {cy})")]
    NoContributingViews { cx: usize, cy: usize, radius: usize },
}

pub type Result<T> = std::result::Result<T, LightfieldError>;
