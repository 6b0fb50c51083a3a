use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use ternplot::{
    colormap::{ColorMap, ReferenceColorMap, ScaleParams, make_cmap},
    config::PlotConfig,
    length::data_length,
    logging,
    ternary::{TernaryData, render::render_swatch},
    utils::image::write_png,
};

#[derive(Parser)]
#[command(name = "ternplot")]
#[command(about = "Ternary heatmaps with emphasized colormaps", long_about = None)]
struct Cli {
    /// More output on stderr, repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a JSON list of lattice points as a ternary heatmap
    Heatmap {
        data: PathBuf,
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(short, long, default_value = "heatmap.png")]
        output: PathBuf,
    },
    /// Render a scaled colormap as a horizontal strip
    Swatch {
        #[arg(short, long, default_value = ReferenceColorMap::DEFAULT_NAME)]
        base: String,
        #[arg(long, default_value_t = ScaleParams::default().scale_factor)]
        scale_factor: f64,
        #[arg(long, default_value_t = ScaleParams::default().cutoff)]
        cutoff: f64,
        #[arg(long, default_value_t = ScaleParams::default().adjust_factor)]
        adjust_factor: f64,
        #[arg(long, default_value_t = 600)]
        width: u32,
        #[arg(long, default_value_t = 40)]
        height: u32,
        #[arg(short, long, default_value = "swatch.png")]
        output: PathBuf,
    },
    /// Print the byte size of a file, or the length of the argument otherwise
    Length { input: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Heatmap {
            data,
            config,
            output,
        } => heatmap(data, config, output),
        Commands::Swatch {
            base,
            scale_factor,
            cutoff,
            adjust_factor,
            width,
            height,
            output,
        } => swatch(
            &base,
            ScaleParams::new(scale_factor, cutoff, adjust_factor),
            width,
            height,
            output,
        ),
        Commands::Length { input } => {
            println!("{}", data_length(&input));
            Ok(())
        }
    }
}

fn heatmap(data: PathBuf, config: Option<PathBuf>, output: PathBuf) -> Result<()> {
    let config = match config {
        Some(path) => PlotConfig::read_config(&path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => PlotConfig::default(),
    };
    let points = TernaryData::read_json(&data, config.scale)
        .with_context(|| format!("reading data {}", data.display()))?;
    if let Some((min, max)) = points.value_range() {
        if min < config.vmin || max > config.vmax {
            log::warn!(
                "values span [{}, {}], outside the color range [{}, {}]",
                min,
                max,
                config.vmin,
                config.vmax
            );
        }
    }

    let image = ternplot::run(&config, &points)?;
    write_png(&image, &output).with_context(|| format!("writing {}", output.display()))?;
    log::info!("wrote {}", output.display());
    Ok(())
}

fn swatch(base: &str, params: ScaleParams, width: u32, height: u32, output: PathBuf) -> Result<()> {
    let cmap = make_cmap(base, params)?;
    let image = render_swatch(&cmap, width, height)?;
    write_png(&image, &output).with_context(|| format!("writing {}", output.display()))?;
    log::info!("wrote {} to {}", cmap.name(), output.display());
    Ok(())
}
