//! Ternary (3-component simplex) geometry.
//!
//! A lattice point `(i, j, k)` with `i + j + k = scale` is a composition of
//! three components. Points are projected onto an equilateral triangle with
//! the `i` axis running along the bottom edge and `j` toward the apex.

use itertools::iproduct;

pub mod data;
pub mod heatmap;
pub mod render;

pub use data::TernaryData;
pub use heatmap::{Cell, HeatmapStyle, heatmap_cells};

pub const SQRT3_OVER_2: f64 = 0.866_025_403_784_438_6;

/// Lattice coordinate on a simplex of a given scale.
pub type LatticePoint = (usize, usize, usize);

/// Cartesian coordinates of a (possibly fractional) simplex point.
#[inline]
pub fn project_point(i: f64, j: f64, _k: f64) -> (f64, f64) {
    (i + j / 2.0, SQRT3_OVER_2 * j)
}

/// Every lattice point of the simplex, `i` major, `j` minor.
pub fn simplex_points(scale: usize) -> impl Iterator<Item = LatticePoint> {
    iproduct!(0..=scale, 0..=scale)
        .filter(move |(i, j)| i + j <= scale)
        .map(move |(i, j)| (i, j, scale - i - j))
}

/// Number of lattice points on a simplex of `scale`.
pub const fn simplex_size(scale: usize) -> usize {
    (scale + 1) * (scale + 2) / 2
}

/// End points, in lattice coordinates, of the gridlines drawn every `multiple`
/// steps parallel to each of the three edges.
pub fn gridline_segments(scale: usize, multiple: usize) -> Vec<[(f64, f64, f64); 2]> {
    if multiple == 0 {
        return Vec::new();
    }
    let s = scale as f64;
    (multiple..scale)
        .step_by(multiple)
        .flat_map(|step| {
            let v = step as f64;
            [
                // constant j, parallel to the bottom edge
                [(0.0, v, s - v), (s - v, v, 0.0)],
                // constant i
                [(v, 0.0, s - v), (v, s - v, 0.0)],
                // constant k
                [(0.0, s - v, v), (s - v, 0.0, v)],
            ]
        })
        .collect()
}

/// Corners of the simplex boundary: the `k`, `i` and `j` vertices.
pub fn boundary_corners(scale: usize) -> [(f64, f64, f64); 3] {
    let s = scale as f64;
    [(0.0, 0.0, s), (s, 0.0, 0.0), (0.0, s, 0.0)]
}
