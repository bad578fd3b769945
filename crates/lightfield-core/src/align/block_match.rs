use ndarray::Array2;
use rayon::prelude::*;

use crate::consts::PARALLEL_CANDIDATE_THRESHOLD;
use crate::error::{LightfieldError, Result};
use crate::frame::Displacement;

use super::translate::translate;

/// Sum of squared elementwise differences between two equally shaped
/// buffers. Accumulated in f64.
pub fn ssd(a: &Array2<f32>, b: &Array2<f32>) -> Result<f64> {
    if a.dim() != b.dim() {
        let (ah, aw) = a.dim();
        let (bh, bw) = b.dim();
        return Err(LightfieldError::ShapeMismatch(format!(
            "cannot compare {aw}x{ah} buffer against {bw}x{bh}"
        )));
    }

    Ok(sum_sq_diff(a, b))
}

fn sum_sq_diff(a: &Array2<f32>, b: &Array2<f32>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let d = (x - y) as f64;
            d * d
        })
        .sum()
}

/// Find the integer displacement that, applied to `target` with
/// wrap-around, best matches `reference` under the SSD metric.
///
/// Every candidate in the square window `[-r, r) x [-r, r)` is tested,
/// where `r` is `search_window` bounded by half of each reference
/// dimension. Candidates are enumerated row-major over `(dy, dx)`
/// ascending; ties resolve to the earliest candidate in that order. Larger
/// windows scan in parallel, reduced by (distance, scan index) so the
/// result is identical to the sequential scan. A degenerate window
/// (`r == 0`) yields a zero displacement.
pub fn best_displacement(
    reference: &Array2<f32>,
    target: &Array2<f32>,
    search_window: usize,
) -> Result<Displacement> {
    if reference.dim() != target.dim() {
        let (rh, rw) = reference.dim();
        let (th, tw) = target.dim();
        return Err(LightfieldError::ShapeMismatch(format!(
            "reference patch is {rw}x{rh} but target patch is {tw}x{th}"
        )));
    }

    let (h, w) = reference.dim();
    let radius = search_window.min(h / 2).min(w / 2) as i64;

    let candidates: Vec<Displacement> = (-radius..radius)
        .flat_map(|dy| (-radius..radius).map(move |dx| Displacement { dx, dy }))
        .collect();
    if candidates.is_empty() {
        return Ok(Displacement::default());
    }

    let evaluate = |(index, d): (usize, Displacement)| {
        let shifted = translate(target, d.dx, d.dy);
        (sum_sq_diff(reference, &shifted), index, d)
    };

    let best = if candidates.len() >= PARALLEL_CANDIDATE_THRESHOLD {
        candidates
            .par_iter()
            .copied()
            .enumerate()
            .map(evaluate)
            .min_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)))
    } else {
        candidates
            .iter()
            .copied()
            .enumerate()
            .map(evaluate)
            .min_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)))
    };

    Ok(best.map(|(_, _, d)| d).unwrap_or_default())
}
