//! Gaussian pyramids and the per-session grid pyramid store.

mod builder;
mod grid;

pub use builder::{build_pyramid, Pyramid};
pub use grid::GridPyramidStore;
