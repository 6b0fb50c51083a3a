use image::{DynamicImage, RgbImage, RgbaImage};
use plotters::{
    coord::Shift,
    drawing::{DrawingArea, IntoDrawingArea},
    element::{PathElement, Polygon, Rectangle, Text},
    style::{
        Color, IntoFont, RGBAColor,
        text_anchor::{HPos, Pos, VPos},
    },
};
use plotters_bitmap::BitMapBackend;

use crate::{
    colormap::{ColorMap, ListedColorMap},
    config::PlotConfig,
    error::{Result, TernplotError},
    ternary::{
        SQRT3_OVER_2, TernaryData, boundary_corners, gridline_segments, heatmap_cells,
        project_point,
    },
    utils::pixel::RGB,
};

pub type PlotArea<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

/// Pixel height of the corner labels.
pub const LABEL_FONT_SIZE: u32 = 16;

/// Labels sit this fraction of the scale outside the bottom corners.
const LABEL_OFFSET: f64 = 0.05;
/// Height of the apex label's baseline, as a fraction of the scale.
const APEX_LABEL_HEIGHT: f64 = 0.9;

/// Pixel placement of the simplex on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Pixels per lattice step.
    pub unit: f64,
    /// Canvas x of the `k` corner.
    pub left: f64,
    /// Canvas y of the bottom edge.
    pub bottom: f64,
    pub scale: f64,
    /// Color bar rectangle as `(x, y, width, height)`, if drawn.
    pub colorbar: Option<(u32, u32, u32, u32)>,
}

impl Layout {
    /// Fit the simplex and its corner labels into the canvas, leaving the
    /// margins and the color bar column free.
    pub fn new(config: &PlotConfig) -> Result<Self> {
        if config.scale == 0 {
            return Err(TernplotError::InvalidParameter {
                param: "scale",
                value: 0.0,
                reason: "must be at least 1",
            });
        }

        // u64 so that no u32 config value can overflow the sums
        let margin = u64::from(config.margin);
        let bar_width = if config.colorbar {
            u64::from((config.width / 24).max(12))
        } else {
            0
        };
        let reserved_x = 2 * margin + if config.colorbar { bar_width + margin } else { 0 };
        let reserved_y = 2 * margin + u64::from(LABEL_FONT_SIZE);
        let (width, height) = (u64::from(config.width), u64::from(config.height));
        if width <= reserved_x || height <= reserved_y {
            return Err(TernplotError::Config(format!(
                "canvas {}x{} leaves no room for the plot with margin {}",
                config.width, config.height, config.margin
            )));
        }

        let plot_width = (width - reserved_x) as f64;
        let plot_height = (height - reserved_y) as f64;
        let scale = config.scale as f64;
        // simplex units spanned by the triangle plus its labels
        let extent_x = (1.0 + 2.0 * LABEL_OFFSET) * scale;
        let extent_y = (APEX_LABEL_HEIGHT + LABEL_OFFSET) * scale;
        let unit = (plot_width / extent_x).min(plot_height / extent_y);

        let left = margin as f64 + (plot_width - extent_x * unit) / 2.0 + LABEL_OFFSET * scale * unit;
        let label_top = margin as f64
            + f64::from(LABEL_FONT_SIZE)
            + (plot_height - extent_y * unit) / 2.0;
        let bottom = label_top + APEX_LABEL_HEIGHT * scale * unit;

        let triangle_height = unit * scale * SQRT3_OVER_2;
        let colorbar = config.colorbar.then(|| {
            (
                (width - margin - bar_width) as u32,
                (bottom - triangle_height).round() as u32,
                bar_width as u32,
                (triangle_height.round() as u32).max(1),
            )
        });

        Ok(Self {
            unit,
            left,
            bottom,
            scale,
            colorbar,
        })
    }

    /// Canvas position of Cartesian simplex coordinates.
    #[inline]
    pub fn to_pixel(&self, (x, y): (f64, f64)) -> (f64, f64) {
        (self.left + x * self.unit, self.bottom - y * self.unit)
    }

    /// Canvas position of a lattice point.
    #[inline]
    pub fn lattice_to_pixel(&self, (i, j, k): (f64, f64, f64)) -> (f64, f64) {
        self.to_pixel(project_point(i, j, k))
    }

    /// Anchors of the right, apex and left labels with their alignment.
    /// Each label's text ends at its anchor's baseline.
    pub fn label_anchors(&self) -> [((i32, i32), HPos); 3] {
        let s = self.scale;
        [
            ((1.0 + LABEL_OFFSET) * s, -LABEL_OFFSET * s, HPos::Right),
            (0.5 * s, APEX_LABEL_HEIGHT * s, HPos::Center),
            (-LABEL_OFFSET * s, -LABEL_OFFSET * s, HPos::Left),
        ]
        .map(|(x, y, align)| (to_coord(self.to_pixel((x, y))), align))
    }
}

#[inline]
fn to_coord((x, y): (f64, f64)) -> (i32, i32) {
    (x.round() as i32, y.round() as i32)
}

/// Draw `data` as a ternary heatmap colored by `cmap`.
///
/// Cells are filled first, then gridlines every `gridline_multiple` steps,
/// the boundary triangle, the color bar and the corner labels on top.
pub fn render_heatmap(
    data: &TernaryData,
    cmap: &ListedColorMap,
    config: &PlotConfig,
) -> Result<RgbaImage> {
    config.validate()?;
    if data.scale() != config.scale {
        return Err(TernplotError::InvalidData(format!(
            "data scale {} doesn't match plot scale {}",
            data.scale(),
            config.scale
        )));
    }

    let layout = Layout::new(config)?;
    let cells = heatmap_cells(data, config.style);

    let image = draw_to_image(config.width, config.height, |area| {
        area.fill(&RGBAColor::from(config.background))?;

        for cell in &cells {
            let color = RGBAColor::from(cmap.map(cell.value, config.vmin, config.vmax));
            let points = cell
                .vertices
                .iter()
                .map(|&vertex| to_coord(layout.to_pixel(vertex)))
                .collect::<Vec<_>>();
            area.draw(&Polygon::new(points, color.filled()))?;
        }

        let grid_style = RGBAColor::from(config.line_color.lighten(0.6)).stroke_width(1);
        for [start, end] in gridline_segments(config.scale, config.gridline_multiple) {
            let path = vec![
                to_coord(layout.lattice_to_pixel(start)),
                to_coord(layout.lattice_to_pixel(end)),
            ];
            area.draw(&PathElement::new(path, grid_style))?;
        }

        let mut boundary = boundary_corners(config.scale)
            .iter()
            .map(|&corner| to_coord(layout.lattice_to_pixel(corner)))
            .collect::<Vec<_>>();
        boundary.push(boundary[0]);
        let line_style = RGBAColor::from(config.line_color).stroke_width(1);
        area.draw(&PathElement::new(boundary, line_style))?;

        if let Some(rect) = layout.colorbar {
            draw_colorbar(area, cmap, rect, config.line_color)?;
        }
        draw_labels(area, &layout, &config.elems, config.line_color);
        Ok(())
    })?;

    log::debug!(
        "rendered {} cells with {} onto {}x{} canvas",
        cells.len(),
        cmap.name(),
        config.width,
        config.height
    );
    Ok(image)
}

/// Horizontal strip showing `cmap` from 0 (left) to 1 (right).
pub fn render_swatch<C: ColorMap + ?Sized>(cmap: &C, width: u32, height: u32) -> Result<RgbaImage> {
    if width == 0 || height == 0 {
        return Err(TernplotError::Config(format!(
            "swatch size must be non-zero, got {}x{}",
            width, height
        )));
    }

    draw_to_image(width, height, |area| {
        for x in 0..width as i32 {
            let t = (x as f64 + 0.5) / width as f64;
            let color = RGBAColor::from(cmap.eval(t));
            area.draw(&Rectangle::new([(x, 0), (x + 1, height as i32)], color.filled()))?;
        }
        Ok(())
    })
}

/// Run `draw` on an RGB bitmap of the given size and return it as RGBA.
fn draw_to_image<F>(width: u32, height: u32, draw: F) -> Result<RgbaImage>
where
    F: FnOnce(&PlotArea<'_>) -> Result,
{
    let len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(3))
        .ok_or_else(|| {
            TernplotError::Config(format!("canvas {}x{} is too large", width, height))
        })?;
    let mut buffer = vec![0u8; len];
    {
        let area = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        draw(&area)?;
        area.present()?;
    }

    let rgb = RgbImage::from_raw(width, height, buffer)
        .ok_or_else(|| TernplotError::Draw(String::from("bitmap doesn't match canvas size")))?;
    Ok(DynamicImage::ImageRgb8(rgb).into_rgba8())
}

fn draw_colorbar(
    area: &PlotArea<'_>,
    cmap: &ListedColorMap,
    (x, y, width, height): (u32, u32, u32, u32),
    outline: RGB,
) -> Result {
    let (x, y, width, height) = (x as i32, y as i32, width as i32, height as i32);
    for row in 0..height {
        // top of the bar is the high end of the range
        let t = 1.0 - (row as f64 + 0.5) / height as f64;
        let color = RGBAColor::from(cmap.lookup(t));
        area.draw(&Rectangle::new(
            [(x, y + row), (x + width, y + row + 1)],
            color.filled(),
        ))?;
    }

    area.draw(&Rectangle::new(
        [(x, y), (x + width - 1, y + height - 1)],
        RGBAColor::from(outline).stroke_width(1),
    ))?;
    Ok(())
}

/// Corner labels. A missing font only costs the labels, not the plot.
fn draw_labels(area: &PlotArea<'_>, layout: &Layout, elems: &[String; 3], color: RGB) {
    let color = RGBAColor::from(color);
    for (label, (anchor, align)) in elems.iter().zip(layout.label_anchors()) {
        if label.is_empty() {
            continue;
        }
        let style = ("sans-serif", LABEL_FONT_SIZE)
            .into_font()
            .color(&color)
            .pos(Pos::new(align, VPos::Bottom));
        if let Err(err) = area.draw(&Text::new(label.as_str(), anchor, style)) {
            log::warn!("couldn't draw label {:?}: {}", label, err);
        }
    }
}
