use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{LightfieldError, Result};
use crate::frame::Frame;

use super::image_io::load_image;

/// Supplies the raw image for a grid position.
///
/// Implementations own the mapping from grid coordinates to concrete
/// assets; the engine only ever sees decoded frames in [0, 1].
pub trait GridImageSource {
    fn load_grid_image(&self, x: usize, y: usize) -> Result<Frame>;
}

/// Grid images laid out flat in one directory, named `out_YY_XX_*` as in
/// the Stanford Light Field Archive: `out_03_07_-859.7_1022.9.png` is the
/// view at grid x = 7, y = 3.
pub struct DirectoryGridSource {
    dir: PathBuf,
}

impl DirectoryGridSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolve a grid position to its unique source file without decoding.
    pub fn resolve(&self, x: usize, y: usize) -> Result<PathBuf> {
        let prefix = format!("out_{y:02}_{x:02}_");
        let mut found = Vec::new();

        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            let name = match path.file_name().and_then(|n| n.to_str()) {
                Some(name) => name,
                None => continue,
            };
            if name.starts_with(&prefix) {
                found.push(path);
            }
        }

        match found.len() {
            0 => Err(LightfieldError::ImageNotFound { x, y }),
            1 => Ok(found.remove(0)),
            count => Err(LightfieldError::AmbiguousImage { x, y, count }),
        }
    }
}

impl GridImageSource for DirectoryGridSource {
    fn load_grid_image(&self, x: usize, y: usize) -> Result<Frame> {
        let path = self.resolve(x, y)?;
        debug!(path = %path.display(), x, y, "Decoding grid image");
        load_image(&path)
    }
}
