use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use console::style;
use lightfield_core::error::LightfieldError;
use lightfield_core::io::image_io::load_image;
use lightfield_core::io::DirectoryGridSource;

#[derive(Args)]
pub struct InfoArgs {
    /// Light-field image directory
    pub dir: PathBuf,

    /// Grid dimensions as WIDTHxHEIGHT
    #[arg(long, value_parser = super::parse_grid_size, default_value = "17x17")]
    pub grid: (usize, usize),
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let source = DirectoryGridSource::new(&args.dir);
    let (grid_w, grid_h) = args.grid;

    let mut missing = Vec::new();
    let mut ambiguous = Vec::new();
    let mut first = None;

    for y in 0..grid_h {
        for x in 0..grid_w {
            match source.resolve(x, y) {
                Ok(path) => {
                    first.get_or_insert(path);
                }
                Err(LightfieldError::ImageNotFound { .. }) => missing.push((x, y)),
                Err(LightfieldError::AmbiguousImage { count, .. }) => {
                    ambiguous.push((x, y, count))
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    println!("{}", style(format!("Light field: {}", args.dir.display())).bold());
    println!("Grid: {grid_w}x{grid_h} ({} views)", grid_w * grid_h);

    if let Some(path) = &first {
        let frame = load_image(path)?;
        println!("View resolution: {}x{}", frame.width(), frame.height());
    }

    if missing.is_empty() && ambiguous.is_empty() {
        println!("{}", style("All grid positions resolved").green());
    } else {
        for (x, y) in &missing {
            println!("{}", style(format!("Missing view at ({x}, {y})")).red());
        }
        for (x, y, count) in &ambiguous {
            println!(
                "{}",
                style(format!("{count} candidate files for view ({x}, {y})")).red()
            );
        }
    }

    Ok(())
}
