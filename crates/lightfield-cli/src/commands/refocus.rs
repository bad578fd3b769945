use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Deserialize;
use tracing::info;

use lightfield_core::align::{estimate_displacement, AlignParams};
use lightfield_core::aperture::render_refocused_view;
use lightfield_core::consts::{
    DEFAULT_ALIGN_WINDOW, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_PYRAMID_LAYERS,
    DEFAULT_SEARCH_WINDOW,
};
use lightfield_core::frame::{DisplacementRate, GridPos};
use lightfield_core::io::image_io::save_image;
use lightfield_core::io::DirectoryGridSource;
use lightfield_core::pyramid::GridPyramidStore;
use lightfield_core::session::{rate_from_displacement, RefocusParams};

#[derive(Args)]
pub struct RefocusArgs {
    /// Light-field image directory
    pub dir: PathBuf,

    /// Grid dimensions as WIDTHxHEIGHT
    #[arg(long, value_parser = super::parse_grid_size)]
    pub grid: Option<(usize, usize)>,

    /// Pyramid layers per grid image
    #[arg(long)]
    pub layers: Option<usize>,

    /// Image point to bring into focus, as X,Y (full-resolution pixels)
    #[arg(long, value_parser = super::parse_point)]
    pub focus: Option<(i64, i64)>,

    /// Per-grid-step displacement rate as DX,DY (skips focus estimation)
    #[arg(long, value_parser = super::parse_rate, conflicts_with = "focus")]
    pub rate: Option<(f64, f64)>,

    /// Aperture center grid position as X,Y (defaults to the grid middle)
    #[arg(long, value_parser = super::parse_grid_pos)]
    pub center: Option<(usize, usize)>,

    /// Aperture radius in grid steps
    #[arg(long)]
    pub radius: Option<usize>,

    /// Pyramid level to render (0 = full resolution)
    #[arg(long, default_value = "0")]
    pub level: usize,

    /// Optional TOML settings file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output file path
    #[arg(short, long, default_value = "refocused.png")]
    pub output: PathBuf,
}

/// Settings file counterpart of the command-line flags. Flags win over
/// file values, file values win over built-in defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    grid_width: Option<usize>,
    grid_height: Option<usize>,
    layers: Option<usize>,
    window: Option<usize>,
    search_window: Option<usize>,
    radius: Option<usize>,
}

pub fn run(args: &RefocusArgs) -> Result<()> {
    let file_cfg: FileConfig = match &args.config {
        Some(path) => toml::from_str(&fs::read_to_string(path)?)?,
        None => FileConfig::default(),
    };

    let grid_w = args
        .grid
        .map(|g| g.0)
        .or(file_cfg.grid_width)
        .unwrap_or(DEFAULT_GRID_WIDTH);
    let grid_h = args
        .grid
        .map(|g| g.1)
        .or(file_cfg.grid_height)
        .unwrap_or(DEFAULT_GRID_HEIGHT);
    let layers = args
        .layers
        .or(file_cfg.layers)
        .unwrap_or(DEFAULT_PYRAMID_LAYERS);

    let source = DirectoryGridSource::new(&args.dir);

    let total = grid_w * grid_h;
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("Decoding grid [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    let store = GridPyramidStore::build(&source, grid_w, grid_h, layers, |done, _| {
        pb.set_position(done as u64)
    })?;
    pb.finish();

    let align_params = AlignParams {
        window: file_cfg.window.unwrap_or(DEFAULT_ALIGN_WINDOW),
        search_window: file_cfg.search_window.unwrap_or(DEFAULT_SEARCH_WINDOW),
    };

    let rate = if let Some((dx, dy)) = args.rate {
        DisplacementRate { dx, dy }
    } else {
        let focus = args.focus.unwrap_or((0, 0));
        println!("Estimating displacement at ({}, {})...", focus.0, focus.1);
        let first = store.pyramid(GridPos::new(0, 0));
        let last = store.pyramid(GridPos::new(grid_w - 1, grid_h - 1));
        let d = estimate_displacement(first, last, focus, &align_params)?;
        info!(dx = d.dx, dy = d.dy, "Corner-to-corner displacement");
        rate_from_displacement(d, grid_w, grid_h)
    };

    let mut params = RefocusParams::centered(grid_w, grid_h);
    params.rate = rate;
    if let Some((x, y)) = args.center {
        params.center = GridPos::new(x, y);
    }
    if let Some(radius) = args.radius.or(file_cfg.radius) {
        params.radius = radius;
    }

    println!(
        "Rendering level {} view (center ({}, {}), radius {}, rate ({:.3}, {:.3}))...",
        args.level, params.center.x, params.center.y, params.radius, params.rate.dx, params.rate.dy
    );
    let view = render_refocused_view(&store, &params, args.level)?;

    save_image(&view, &args.output)?;
    println!("Saved to {}", args.output.display());
    Ok(())
}
