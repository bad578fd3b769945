use tracing::info;

use crate::error::{LightfieldError, Result};
use crate::frame::GridPos;
use crate::io::GridImageSource;

use super::builder::{build_pyramid, Pyramid};

/// All pyramids for one capture session, indexed by grid position.
///
/// Built once at startup and read-only afterwards. This is the largest
/// allocation in the system: `grid_width * grid_height` pyramids held
/// simultaneously, each with `layer_count` levels.
pub struct GridPyramidStore {
    /// Row-major: index = y * grid_width + x.
    pyramids: Vec<Pyramid>,
    grid_width: usize,
    grid_height: usize,
    layer_count: usize,
}

impl GridPyramidStore {
    /// Decode every grid image and build its pyramid.
    ///
    /// One blocking bulk pass, sequential over cells. `progress` is called
    /// with `(cells_done, total_cells)` after each cell.
    pub fn build(
        source: &dyn GridImageSource,
        grid_width: usize,
        grid_height: usize,
        layer_count: usize,
        mut progress: impl FnMut(usize, usize),
    ) -> Result<Self> {
        if grid_width == 0 || grid_height == 0 {
            return Err(LightfieldError::InvalidConfiguration(format!(
                "grid dimensions must be positive, got {grid_width}x{grid_height}"
            )));
        }

        let total = grid_width * grid_height;
        let mut pyramids = Vec::with_capacity(total);

        for y in 0..grid_height {
            for x in 0..grid_width {
                let frame = source.load_grid_image(x, y)?;
                pyramids.push(build_pyramid(&frame.data, layer_count)?);
                progress(pyramids.len(), total);
            }
            info!(row = y + 1, rows = grid_height, "Grid row decoded");
        }

        Ok(Self {
            pyramids,
            grid_width,
            grid_height,
            layer_count,
        })
    }

    pub fn grid_width(&self) -> usize {
        self.grid_width
    }

    pub fn grid_height(&self) -> usize {
        self.grid_height
    }

    pub fn layer_count(&self) -> usize {
        self.layer_count
    }

    /// Whether `pos` addresses a cell of this grid.
    pub fn contains(&self, pos: GridPos) -> bool {
        pos.x < self.grid_width && pos.y < self.grid_height
    }

    /// Pyramid at a grid position. Panics when the position is outside
    /// the grid.
    pub fn pyramid(&self, pos: GridPos) -> &Pyramid {
        assert!(
            self.contains(pos),
            "grid position ({}, {}) outside {}x{} grid",
            pos.x,
            pos.y,
            self.grid_width,
            self.grid_height
        );
        &self.pyramids[pos.y * self.grid_width + pos.x]
    }
}
