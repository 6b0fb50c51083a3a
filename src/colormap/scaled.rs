//! Colormaps warped to emphasize the top of the value range.
//!
//! Two kinds of emphasis are applied to a reference colormap:
//! 1. sample positions are raised to a power, so `scale_factor > 1` packs more
//!    of the color variation into the high end;
//! 2. the lower `cutoff` fraction of the samples is lightened toward white,
//!    visually suppressing low values.

use crate::{
    colormap::{ColorMap, ListedColorMap, ReferenceColorMap},
    error::{Result, TernplotError},
    utils::{
        num::{linspace, power_warp},
        pixel::RGB,
    },
};

/// Number of entries in every scaled colormap.
pub const SAMPLE_COUNT: usize = 300;

/// Parameters of the scaling, see [make_cmap].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleParams {
    /// Exponent applied to the sample positions. Must be finite and positive.
    pub scale_factor: f64,
    /// Fraction of the samples, from the low end, to lighten. In `[0, 1]`.
    pub cutoff: f64,
    /// How far each lightened channel moves toward white. In `[0, 1]`.
    pub adjust_factor: f64,
}

impl Default for ScaleParams {
    fn default() -> Self {
        Self {
            scale_factor: 1.5,
            cutoff: 0.9,
            adjust_factor: 0.1,
        }
    }
}

impl ScaleParams {
    pub fn new(scale_factor: f64, cutoff: f64, adjust_factor: f64) -> Self {
        Self {
            scale_factor,
            cutoff,
            adjust_factor,
        }
    }

    /// Reject parameters outside their domain instead of producing a
    /// degenerate colormap.
    pub fn validate(&self) -> Result {
        if !self.scale_factor.is_finite() || self.scale_factor <= 0.0 {
            return Err(TernplotError::InvalidParameter {
                param: "scale_factor",
                value: self.scale_factor,
                reason: "must be finite and greater than 0",
            });
        }
        check_unit_interval("cutoff", self.cutoff)?;
        check_unit_interval("adjust_factor", self.adjust_factor)?;
        Ok(())
    }

    /// First index left untouched by the lightening, `floor(len * cutoff)`.
    pub fn boundary(&self, len: usize) -> usize {
        ((len as f64 * self.cutoff).floor() as usize).min(len)
    }
}

fn check_unit_interval(param: &'static str, value: f64) -> Result {
    // NaN fails the range check as well
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(TernplotError::InvalidParameter {
            param,
            value,
            reason: "must lie in [0, 1]",
        })
    }
}

/// Build a scaled colormap from the reference map named `base`.
///
/// The result has exactly [SAMPLE_COUNT] entries and is named `<base>_scaled`.
///
/// ```
/// use ternplot::colormap::{make_cmap, ColorMap, ScaleParams};
///
/// let cmap = make_cmap("viridis_r", ScaleParams::default()).unwrap();
/// assert_eq!(cmap.name(), "viridis_r_scaled");
/// assert_eq!(cmap.len(), 300);
/// ```
pub fn make_cmap(base: &str, params: ScaleParams) -> Result<ListedColorMap> {
    let reference = ReferenceColorMap::from_name(base)?;
    let colors = scaled_colors(&reference, &params)?;
    Ok(ListedColorMap::new(format!("{}_scaled", base), colors))
}

/// Same as [make_cmap] for a colormap the caller already holds.
pub fn scale_colormap<C: ColorMap + ?Sized>(
    base: &C,
    params: &ScaleParams,
) -> Result<ListedColorMap> {
    let colors = scaled_colors(base, params)?;
    Ok(ListedColorMap::new(format!("{}_scaled", base.name()), colors))
}

fn scaled_colors<C: ColorMap + ?Sized>(
    base: &C,
    params: &ScaleParams,
) -> Result<Vec<RGB>> {
    params.validate()?;

    let positions = power_warp(&linspace(0.0, 1.0, SAMPLE_COUNT), params.scale_factor);
    let mut colors = base.sample(&positions);

    let boundary = params.boundary(colors.len());
    colors[..boundary]
        .iter_mut()
        .for_each(|color| *color = color.lighten(params.adjust_factor));

    log::debug!(
        "scaled colormap {} (scale_factor={}, cutoff={}, adjust_factor={}): {} of {} samples lightened",
        base.name(),
        params.scale_factor,
        params.cutoff,
        params.adjust_factor,
        boundary,
        colors.len()
    );
    Ok(colors)
}
