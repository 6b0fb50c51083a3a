use crate::{
    error::{Result, TernplotError},
    ternary::{TernaryData, project_point},
};

/// How lattice values are turned into colored triangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeatmapStyle {
    /// Lattice points are triangle vertices; each triangle takes the mean of
    /// its three vertex values.
    #[default]
    Triangular,
    /// Each lattice point owns the upright triangle anchored at it and the
    /// inverted triangle beside it.
    DualTriangular,
}

impl HeatmapStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeatmapStyle::Triangular => "triangular",
            HeatmapStyle::DualTriangular => "dual_triangular",
        }
    }
}

impl std::str::FromStr for HeatmapStyle {
    type Err = TernplotError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "triangular" | "t" => Ok(HeatmapStyle::Triangular),
            "dual_triangular" | "dual-triangular" | "d" => Ok(HeatmapStyle::DualTriangular),
            _ => Err(TernplotError::Config(format!(
                "Not recognized heatmap style {:?}",
                s
            ))),
        }
    }
}

/// A triangle in Cartesian coordinates with the data value it represents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub vertices: [(f64, f64); 3],
    pub value: f64,
}

type Triangle = [(usize, usize, usize); 3];

fn upright_triangle(i: usize, j: usize, k: usize) -> Triangle {
    [(i, j, k), (i + 1, j, k - 1), (i, j + 1, k - 1)]
}

fn inverted_triangle(i: usize, j: usize, k: usize) -> Triangle {
    [(i, j + 1, k - 1), (i + 1, j, k - 1), (i + 1, j + 1, k - 2)]
}

fn project_triangle(triangle: &Triangle) -> [(f64, f64); 3] {
    triangle.map(|(i, j, k)| project_point(i as f64, j as f64, k as f64))
}

/// Mean of the values at the triangle's vertices, `None` if any is missing.
fn blend(data: &TernaryData, triangle: &Triangle) -> Option<f64> {
    let sum = triangle
        .iter()
        .map(|&(i, j, _)| data.get(i, j))
        .sum::<Option<f64>>()?;
    Some(sum / 3.0)
}

/// Colorable triangles for `data` in the given style.
pub fn heatmap_cells(data: &TernaryData, style: HeatmapStyle) -> Vec<Cell> {
    let scale = data.scale();
    let mut cells = Vec::new();
    let mut push = |triangle: Triangle, value: Option<f64>| {
        if let Some(value) = value {
            cells.push(Cell {
                vertices: project_triangle(&triangle),
                value,
            });
        }
    };

    match style {
        HeatmapStyle::Triangular => {
            for (i, j, k) in super::simplex_points(scale) {
                if i < scale && j < scale && k > 0 {
                    let triangle = upright_triangle(i, j, k);
                    push(triangle, blend(data, &triangle));
                }
                if i < scale && j < scale && k > 1 {
                    let triangle = inverted_triangle(i, j, k);
                    push(triangle, blend(data, &triangle));
                }
            }
        }
        HeatmapStyle::DualTriangular => {
            for (i, j, k, value) in data.iter() {
                if k >= 1 {
                    push(upright_triangle(i, j, k), Some(value));
                }
                if i < scale && j < scale && k >= 2 {
                    push(inverted_triangle(i, j, k), Some(value));
                }
            }
        }
    }

    log::trace!(
        "{} {} cells from {} points",
        cells.len(),
        style.as_str(),
        data.len()
    );
    cells
}
