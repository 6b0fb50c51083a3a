use std::{
    fs::File,
    io::{Read, Write},
    path::Path,
};

use json::{JsonValue, object};

use crate::{
    colormap::{ReferenceColorMap, ScaleParams},
    error::{Result, TernplotError},
    ternary::HeatmapStyle,
    utils::pixel::RGB,
};

pub const DEFAULT_ELEMS: [&str; 3] = ["Left", "Center", "Right"];

/// Which colormap to build and how to scale it.
#[derive(Debug, Clone, PartialEq)]
pub struct ColormapConfig {
    pub base: String,
    pub params: ScaleParams,
}

impl Default for ColormapConfig {
    fn default() -> Self {
        Self {
            base: ReferenceColorMap::DEFAULT_NAME.to_string(),
            params: ScaleParams::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    /// Lattice steps along each edge of the simplex.
    pub scale: usize,
    /// Gridline spacing in lattice steps, 0 disables gridlines.
    pub gridline_multiple: usize,
    pub vmin: f64,
    pub vmax: f64,
    pub style: HeatmapStyle,
    pub width: u32,
    pub height: u32,
    pub margin: u32,
    pub colorbar: bool,
    pub background: RGB,
    pub line_color: RGB,
    /// Corner labels: right (`i`), apex (`j`) and left (`k`) corner.
    pub elems: [String; 3],
    pub colormap: ColormapConfig,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            scale: 32,
            gridline_multiple: 10,
            vmin: 0.5,
            vmax: 1.0,
            style: HeatmapStyle::Triangular,
            width: 640,
            height: 560,
            margin: 24,
            colorbar: true,
            background: RGB::WHITE,
            line_color: RGB::BLACK,
            elems: DEFAULT_ELEMS.map(String::from),
            colormap: ColormapConfig::default(),
        }
    }
}

impl PlotConfig {
    /// The color range must be finite and not inverted.
    pub fn validate(&self) -> Result {
        for (param, value) in [("vmin", self.vmin), ("vmax", self.vmax)] {
            if !value.is_finite() {
                return Err(TernplotError::InvalidParameter {
                    param,
                    value,
                    reason: "must be finite",
                });
            }
        }
        if self.vmin > self.vmax {
            return Err(TernplotError::InvalidParameter {
                param: "vmin",
                value: self.vmin,
                reason: "must not exceed vmax",
            });
        }
        Ok(())
    }

    /// Parse a JSON document. Missing keys keep their [Default] value,
    /// present keys must have the right type.
    pub fn to_config(json_string: &str) -> Result<PlotConfig> {
        let json = json::parse(json_string)?;
        if !json.is_object() {
            return Err(config_error("expected a JSON object"));
        }

        let defaults = PlotConfig::default();

        let scale = optional(&json["scale"], JsonValue::as_usize, "scale")?.unwrap_or(defaults.scale);
        let gridline_multiple =
            optional(&json["gridline_multiple"], JsonValue::as_usize, "gridline_multiple")?
                .unwrap_or(defaults.gridline_multiple);
        let vmin = optional(&json["vmin"], JsonValue::as_f64, "vmin")?.unwrap_or(defaults.vmin);
        let vmax = optional(&json["vmax"], JsonValue::as_f64, "vmax")?.unwrap_or(defaults.vmax);
        let width = optional(&json["width"], JsonValue::as_u32, "width")?.unwrap_or(defaults.width);
        let height =
            optional(&json["height"], JsonValue::as_u32, "height")?.unwrap_or(defaults.height);
        let margin =
            optional(&json["margin"], JsonValue::as_u32, "margin")?.unwrap_or(defaults.margin);
        let colorbar = optional(&json["colorbar"], JsonValue::as_bool, "colorbar")?
            .unwrap_or(defaults.colorbar);

        let style: HeatmapStyle = match optional(&json["style"], JsonValue::as_str, "style")? {
            Some(s) => s.parse()?,
            None => defaults.style,
        };

        let background = match optional(&json["background"], JsonValue::as_str, "background")? {
            Some(hex) => RGB::from_hex(hex)?,
            None => defaults.background,
        };
        let line_color = match optional(&json["line_color"], JsonValue::as_str, "line_color")? {
            Some(hex) => RGB::from_hex(hex)?,
            None => defaults.line_color,
        };

        let elems = if json["elems"].is_null() {
            defaults.elems
        } else {
            parse_elems(&json["elems"])?
        };

        let colormap = if json["colormap"].is_null() {
            defaults.colormap
        } else if !json["colormap"].is_object() {
            return Err(config_error("colormap should be an object"));
        } else {
            let cmap = &json["colormap"];
            let fallback = ScaleParams::default();
            ColormapConfig {
                base: optional(&cmap["base"], JsonValue::as_str, "colormap.base")?
                    .map(str::to_string)
                    .unwrap_or(defaults.colormap.base),
                params: ScaleParams {
                    scale_factor: optional(
                        &cmap["scale_factor"],
                        JsonValue::as_f64,
                        "colormap.scale_factor",
                    )?
                    .unwrap_or(fallback.scale_factor),
                    cutoff: optional(&cmap["cutoff"], JsonValue::as_f64, "colormap.cutoff")?
                        .unwrap_or(fallback.cutoff),
                    adjust_factor: optional(
                        &cmap["adjust_factor"],
                        JsonValue::as_f64,
                        "colormap.adjust_factor",
                    )?
                    .unwrap_or(fallback.adjust_factor),
                },
            }
        };

        let config = PlotConfig {
            scale,
            gridline_multiple,
            vmin,
            vmax,
            style,
            width,
            height,
            margin,
            colorbar,
            background,
            line_color,
            elems,
            colormap,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(config: &PlotConfig) -> String {
        let mut data = json::JsonValue::new_object();

        data["scale"] = config.scale.into();
        data["gridline_multiple"] = config.gridline_multiple.into();
        data["vmin"] = config.vmin.into();
        data["vmax"] = config.vmax.into();
        data["style"] = config.style.into();
        data["width"] = config.width.into();
        data["height"] = config.height.into();
        data["margin"] = config.margin.into();
        data["colorbar"] = config.colorbar.into();
        data["background"] = config.background.into();
        data["line_color"] = config.line_color.into();
        data["elems"] = config.elems.to_vec().into();
        data["colormap"] = config.colormap.clone().into();

        data.pretty(2)
    }

    pub fn read_config<P: AsRef<Path>>(path: P) -> Result<PlotConfig> {
        let mut file = File::open(path)?;
        let mut buff = String::new();
        let _ = file.read_to_string(&mut buff)?;

        PlotConfig::to_config(&buff)
    }

    pub fn write_config<P: AsRef<Path>>(&self, path: P) -> Result {
        let string = PlotConfig::to_json(self);
        let mut file = File::create(path)?;
        file.write_all(string.as_bytes())?;
        Ok(())
    }
}

/// `None` for a missing key, an error for a key of the wrong type.
fn optional<'a, T>(
    value: &'a JsonValue,
    extract: impl Fn(&'a JsonValue) -> Option<T>,
    key: &str,
) -> Result<Option<T>> {
    if value.is_null() {
        return Ok(None);
    }
    match extract(value) {
        Some(val) => Ok(Some(val)),
        None => Err(config_error(&format!("Couldn't parse {}", key))),
    }
}

fn parse_elems(value: &JsonValue) -> Result<[String; 3]> {
    let labels: Option<Vec<String>> = value
        .members()
        .map(|label| label.as_str().map(String::from))
        .collect();
    match labels.map(<[String; 3]>::try_from) {
        Some(Ok(elems)) if value.is_array() => Ok(elems),
        _ => Err(config_error("elems should be an array of 3 strings")),
    }
}

fn config_error(msg: &str) -> TernplotError {
    TernplotError::Config(String::from(msg))
}

impl From<HeatmapStyle> for JsonValue {
    fn from(style: HeatmapStyle) -> Self {
        JsonValue::String(String::from(style.as_str()))
    }
}

impl From<RGB> for JsonValue {
    fn from(rgb: RGB) -> Self {
        rgb.to_hex().into()
    }
}

impl From<ColormapConfig> for JsonValue {
    fn from(cmap: ColormapConfig) -> Self {
        object! {
            base: cmap.base,
            scale_factor: cmap.params.scale_factor,
            cutoff: cmap.params.cutoff,
            adjust_factor: cmap.params.adjust_factor,
        }
    }
}
