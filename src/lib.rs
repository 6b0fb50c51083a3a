use image::RgbaImage;

use crate::{colormap::ColorMap, config::PlotConfig, error::Result, ternary::TernaryData};

pub mod colormap;
pub mod config;
pub mod error;
pub mod length;
pub mod logging;
pub mod ternary;
pub mod utils;


pub mod prelude {
    pub use crate::colormap::{ColorMap, ListedColorMap, ScaleParams, make_cmap};
    pub use crate::config::PlotConfig;
    pub use crate::error::{Result, TernplotError};
    pub use crate::length::{DataLength, data_length};
    pub use crate::ternary::{HeatmapStyle, TernaryData, render::render_heatmap};
    pub use crate::utils::prelude::*;
}

/// Build the configured scaled colormap and render `data` with it.
pub fn run(config: &PlotConfig, data: &TernaryData) -> Result<RgbaImage> {
    let cmap = colormap::make_cmap(&config.colormap.base, config.colormap.params)?;
    log::info!(
        "rendering {} points at scale {} with {}",
        data.len(),
        config.scale,
        cmap.name()
    );
    ternary::render::render_heatmap(data, &cmap, config)
}
