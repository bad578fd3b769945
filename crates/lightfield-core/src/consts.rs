/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Minimum candidate count to parallelize the displacement scan.
pub const PARALLEL_CANDIDATE_THRESHOLD: usize = 64;

/// Default camera grid width. Most Stanford archive sets are 17x17.
pub const DEFAULT_GRID_WIDTH: usize = 17;

/// Default camera grid height.
pub const DEFAULT_GRID_HEIGHT: usize = 17;

/// Side length (in pixels) of the square patch used for alignment.
pub const DEFAULT_ALIGN_WINDOW: usize = 100;

/// Half-extent (in pixels) of the per-level displacement search window.
pub const DEFAULT_SEARCH_WINDOW: usize = 20;

/// Number of layers in each Gaussian pyramid. Memory footprint grows
/// steeply with this value times the grid area.
pub const DEFAULT_PYRAMID_LAYERS: usize = 9;

/// Default synthetic-aperture radius, in grid steps (L1).
pub const DEFAULT_APERTURE_RADIUS: usize = 10;

/// Gaussian blur sigma applied before each pyramid decimation.
pub const PYRAMID_BLUR_SIGMA: f32 = 1.0;
