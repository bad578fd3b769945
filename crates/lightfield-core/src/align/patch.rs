use ndarray::{s, Array2};

/// Extract the square patch of side `width` centered at `(cx, cy)`.
///
/// The half-width `k = max(1, width / 2)` is additionally bounded by half
/// the smaller image dimension, and the row/column ranges are clamped to
/// the image bounds. The result may therefore be smaller than
/// `width x width` near borders or on coarse pyramid levels; callers must
/// only compare patches cut with the same center and width from equally
/// shaped images.
pub fn crop_square_patch(data: &Array2<f32>, cx: i64, cy: i64, width: usize) -> Array2<f32> {
    let (h, w) = data.dim();

    let mut k = (width / 2).max(1) as i64;
    k = k.min((h.min(w) / 2) as i64);

    let min_x = (cx - k).clamp(0, w as i64) as usize;
    let max_x = (cx + k).clamp(0, w as i64) as usize;
    let min_y = (cy - k).clamp(0, h as i64) as usize;
    let max_y = (cy + k).clamp(0, h as i64) as usize;

    data.slice(s![min_y..max_y, min_x..max_x]).to_owned()
}
