use tracing::debug;

use crate::consts::{DEFAULT_ALIGN_WINDOW, DEFAULT_SEARCH_WINDOW};
use crate::error::{LightfieldError, Result};
use crate::frame::Displacement;
use crate::pyramid::Pyramid;

use super::block_match::best_displacement;
use super::patch::crop_square_patch;
use super::translate::translate;

/// Window sizes for coarse-to-fine displacement estimation.
#[derive(Clone, Debug)]
pub struct AlignParams {
    /// Side of the square comparison patch, in pixels.
    pub window: usize,
    /// Half-extent of the per-level displacement search, in pixels.
    pub search_window: usize,
}

impl Default for AlignParams {
    fn default() -> Self {
        Self {
            window: DEFAULT_ALIGN_WINDOW,
            search_window: DEFAULT_SEARCH_WINDOW,
        }
    }
}

/// Estimate the full-resolution displacement that registers the target
/// pyramid's source image onto the reference's at `anchor`
/// (full-resolution coordinates).
///
/// Levels are folded from coarsest to finest, carrying the running
/// estimate: at each level the estimate is doubled, the target level is
/// pre-shifted by it, and the block matcher refines the residual on window
/// patches cut around the level-adjusted anchor. Each coarse level absorbs
/// the bulk of the motion, so the per-level search stays inside a small
/// fixed window while the total displacement can be large.
pub fn estimate_displacement(
    reference: &Pyramid,
    target: &Pyramid,
    anchor: (i64, i64),
    params: &AlignParams,
) -> Result<Displacement> {
    if reference.len() != target.len() {
        return Err(LightfieldError::ShapeMismatch(format!(
            "pyramids have {} and {} levels",
            reference.len(),
            target.len()
        )));
    }

    let mut best = Displacement::default();

    for level in (0..reference.len()).rev() {
        // Project the estimate from the coarser level into this one.
        best.dx *= 2;
        best.dy *= 2;

        let scale = 1i64 << level;
        let cx = anchor.0 / scale + best.dx;
        let cy = anchor.1 / scale + best.dy;

        let ref_level = reference.level(level);
        let tgt_level = translate(target.level(level), best.dx, best.dy);

        let ref_patch = crop_square_patch(ref_level, cx, cy, params.window);
        let tgt_patch = crop_square_patch(&tgt_level, cx, cy, params.window);

        let residual = best_displacement(&ref_patch, &tgt_patch, params.search_window)?;
        best.dx += residual.dx;
        best.dy += residual.dy;

        debug!(level, dx = best.dx, dy = best.dy, "Alignment level refined");
    }

    Ok(best)
}
