//! Grid image sources and image file encode/decode.

mod grid_source;
pub mod image_io;

pub use grid_source::{DirectoryGridSource, GridImageSource};
