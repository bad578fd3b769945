use ndarray::Array2;

use lightfield_core::error::Result;
use lightfield_core::frame::Frame;
use lightfield_core::io::GridImageSource;

/// A fixed in-memory grid of frames, row-major.
#[allow(dead_code)]
pub struct MemoryGridSource {
    frames: Vec<Frame>,
    grid_width: usize,
}

impl MemoryGridSource {
    #[allow(dead_code)]
    pub fn new(frames: Vec<Frame>, grid_width: usize) -> Self {
        assert_eq!(frames.len() % grid_width, 0);
        Self { frames, grid_width }
    }
}

impl GridImageSource for MemoryGridSource {
    fn load_grid_image(&self, x: usize, y: usize) -> Result<Frame> {
        Ok(self.frames[y * self.grid_width + x].clone())
    }
}

/// Uniform image of the given value.
#[allow(dead_code)]
pub fn flat(h: usize, w: usize, value: f32) -> Array2<f32> {
    Array2::from_elem((h, w), value)
}

/// Zero image with a filled bright square of side `side` whose top-left
/// corner is at column `x`, row `y`.
#[allow(dead_code)]
pub fn with_square(h: usize, w: usize, x: usize, y: usize, side: usize, value: f32) -> Array2<f32> {
    let mut data = Array2::<f32>::zeros((h, w));
    for r in y..(y + side).min(h) {
        for c in x..(x + side).min(w) {
            data[[r, c]] = value;
        }
    }
    data
}

/// Deterministic pseudo-random pattern, distinct values per pixel.
#[allow(dead_code)]
pub fn textured(h: usize, w: usize) -> Array2<f32> {
    let mut data = Array2::<f32>::zeros((h, w));
    for (i, v) in data.iter_mut().enumerate() {
        *v = ((i * 37) % 101) as f32 / 100.0;
    }
    data
}
