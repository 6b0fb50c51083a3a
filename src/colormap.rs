//! Colormaps: continuous reference gradients and discrete listed maps.

use crate::utils::{num::normalize, pixel::RGB};

pub mod reference;
pub mod scaled;

pub use reference::ReferenceColorMap;
pub use scaled::{ScaleParams, make_cmap, scale_colormap};

/// A mapping of the normalized range `[0, 1]` to colors.
pub trait ColorMap {
    fn name(&self) -> &str;

    /// Color at normalized position `t`. Out of range positions clamp to the
    /// nearest end.
    fn eval(&self, t: f64) -> RGB;

    /// Evaluate the colormap at each position, in order.
    fn sample(&self, positions: &[f64]) -> Vec<RGB> {
        positions.iter().map(|&t| self.eval(t)).collect()
    }
}

/// A discrete colormap over a fixed list of colors.
///
/// Lookups are not interpolated: `t` selects entry `floor(t * len)`, clamped to
/// the valid index range, the same way matplotlib's `ListedColormap` does.
#[derive(Debug, Clone, PartialEq)]
pub struct ListedColorMap {
    name: String,
    colors: Vec<RGB>,
}

impl ListedColorMap {
    /// # Panics
    /// Panics if `colors` is empty.
    pub fn new(name: impl Into<String>, colors: Vec<RGB>) -> Self {
        assert!(!colors.is_empty(), "a listed colormap needs at least one color");
        Self {
            name: name.into(),
            colors,
        }
    }

    pub fn colors(&self) -> &[RGB] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Index selected by normalized position `t`.
    pub fn index_of(&self, t: f64) -> usize {
        let n = self.colors.len();
        if t.is_nan() || t <= 0.0 {
            return 0;
        }
        ((t * n as f64) as usize).min(n - 1)
    }

    pub fn lookup(&self, t: f64) -> RGB {
        self.colors[self.index_of(t)]
    }

    /// Color for a data value on the `[vmin, vmax]` range.
    ///
    /// Values beyond the range take the end colors; NaN is transparent. An
    /// empty range (`vmin == vmax`) maps everything to the first color.
    pub fn map(&self, value: f64, vmin: f64, vmax: f64) -> RGB {
        if value.is_nan() {
            return RGB::TRANSPARENT;
        }
        self.lookup(normalize(value, vmin, vmax))
    }

    /// Same colors in reverse order, named `<name>_r`.
    pub fn reversed(&self) -> Self {
        Self {
            name: format!("{}_r", self.name),
            colors: self.colors.iter().rev().copied().collect(),
        }
    }
}

impl ColorMap for ListedColorMap {
    fn name(&self) -> &str {
        &self.name
    }

    fn eval(&self, t: f64) -> RGB {
        self.lookup(t)
    }
}
