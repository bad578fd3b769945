use ndarray::Array2;

use crate::consts::PYRAMID_BLUR_SIGMA;
use crate::error::{LightfieldError, Result};
use crate::filters::gaussian_blur::gaussian_blur_array;

/// A fixed-length Gaussian pyramid.
///
/// Level 0 is the source at full resolution; every following level is
/// smoothed and decimated 2x. All levels derive from one source image, and
/// every pyramid in a session has the same length.
#[derive(Clone, Debug)]
pub struct Pyramid {
    levels: Vec<Array2<f32>>,
}

impl Pyramid {
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Level `index`, 0 = full resolution. Panics when out of range.
    pub fn level(&self, index: usize) -> &Array2<f32> {
        &self.levels[index]
    }
}

/// Build a Gaussian pyramid with exactly `layer_count` levels.
///
/// Deterministic: identical input yields identical output. Coarse levels
/// of a deep pyramid may degenerate to a single pixel.
pub fn build_pyramid(data: &Array2<f32>, layer_count: usize) -> Result<Pyramid> {
    if layer_count == 0 {
        return Err(LightfieldError::InvalidConfiguration(
            "pyramid layer count must be positive".into(),
        ));
    }

    let mut levels = Vec::with_capacity(layer_count);
    levels.push(data.clone());

    let mut current = data.clone();
    for _ in 1..layer_count {
        let blurred = gaussian_blur_array(&current, PYRAMID_BLUR_SIGMA);
        current = downsample_2x(&blurred);
        levels.push(current.clone());
    }

    Ok(Pyramid { levels })
}

/// Decimate an image by 2x by taking every other pixel.
fn downsample_2x(data: &Array2<f32>) -> Array2<f32> {
    let (h, w) = data.dim();
    let new_h = h.div_ceil(2);
    let new_w = w.div_ceil(2);
    let mut result = Array2::<f32>::zeros((new_h, new_w));

    for r in 0..new_h {
        for c in 0..new_w {
            result[[r, c]] = data[[r * 2, c * 2]];
        }
    }

    result
}
