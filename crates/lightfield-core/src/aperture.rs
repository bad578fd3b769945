//! Synthetic-aperture averaging over the camera grid.

use ndarray::Array2;
use tracing::debug;

use crate::align::translate;
use crate::error::{LightfieldError, Result};
use crate::frame::{Frame, GridPos};
use crate::pyramid::GridPyramidStore;
use crate::session::RefocusParams;

/// Shift-and-average every grid view within the aperture radius.
///
/// Views farther than `params.radius` grid steps (L1) from the aperture
/// center are rejected, modeling a physical aperture stop. Each
/// contributing view is shifted against its parallax relative to the
/// center view, so the chosen depth stays registered while other depths
/// blur; the center view itself is never shifted. Returns the mean of the
/// shifted views at pyramid level `level`.
///
/// The per-view shift is `trunc(-(x - center.x) * rate.dx)` divided by
/// `2^level` with integer division (and likewise for y), matching the
/// pyramid's resolution halving per level.
pub fn render_refocused_view(
    store: &GridPyramidStore,
    params: &RefocusParams,
    level: usize,
) -> Result<Frame> {
    if level >= store.layer_count() {
        return Err(LightfieldError::InvalidConfiguration(format!(
            "pyramid level {level} out of range, store has {} layers",
            store.layer_count()
        )));
    }

    let scale = 1i64 << level;
    let shape = store.pyramid(GridPos::new(0, 0)).level(level).dim();

    let mut sum = Array2::<f64>::zeros(shape);
    let mut included = 0usize;

    for y in 0..store.grid_height() {
        for x in 0..store.grid_width() {
            let pos = GridPos::new(x, y);
            if pos.l1_dist(&params.center) > params.radius {
                continue;
            }

            let step_x = x as i64 - params.center.x as i64;
            let step_y = y as i64 - params.center.y as i64;
            let shift_x = (-(step_x as f64) * params.rate.dx).trunc() as i64 / scale;
            let shift_y = (-(step_y as f64) * params.rate.dy).trunc() as i64 / scale;

            let shifted = translate(store.pyramid(pos).level(level), shift_x, shift_y);
            sum += &shifted.mapv(|v| v as f64);
            included += 1;
        }
    }

    if included == 0 {
        return Err(LightfieldError::NoContributingViews {
            cx: params.center.x,
            cy: params.center.y,
            radius: params.radius,
        });
    }

    debug!(included, level, "Aperture views accumulated");

    let n = included as f64;
    Ok(Frame::new(sum.mapv(|v| (v / n) as f32)))
}
