use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_APERTURE_RADIUS;
use crate::frame::{Displacement, DisplacementRate, GridPos};

/// Per-request refocus parameters.
///
/// Owned by the surface layer and passed by value into the averager; the
/// engine itself keeps no session state. The center may lie outside the
/// grid, in which case the aperture can end up empty.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct RefocusParams {
    pub center: GridPos,
    /// Aperture radius in grid steps (L1).
    pub radius: usize,
    pub rate: DisplacementRate,
}

impl RefocusParams {
    /// Parameters aimed at the middle of the grid, with the default radius
    /// and a zero rate.
    pub fn centered(grid_width: usize, grid_height: usize) -> Self {
        Self {
            center: GridPos::new(grid_width / 2, grid_height / 2),
            radius: DEFAULT_APERTURE_RADIUS,
            rate: DisplacementRate::default(),
        }
    }
}

/// Convert a corner-to-corner displacement into a per-grid-step rate.
///
/// A displacement measured between the first and last grid views spans the
/// whole grid, so a single grid step accounts for `-d / extent` pixels of
/// apparent motion.
pub fn rate_from_displacement(
    d: Displacement,
    grid_width: usize,
    grid_height: usize,
) -> DisplacementRate {
    DisplacementRate {
        dx: -(d.dx as f64) / grid_width as f64,
        dy: -(d.dy as f64) / grid_height as f64,
    }
}
