use std::fmt::Display;

use crate::error::{Result, TernplotError};

// values are defined in a range [0.0, 1.0]
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct RGB {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl RGB {
    pub const WHITE: RGB = RGB {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    pub const BLACK: RGB = RGB {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    /// Fully transparent black, used for values a colormap can't place (NaN).
    pub const TRANSPARENT: RGB = RGB {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> RGB {
        RGB { r, g, b, a }
    }

    pub fn from_u8(r: u8, g: u8, b: u8, a: u8) -> RGB {
        RGB {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        }
    }

    pub fn from_u8_array(rgba: &[u8; 4]) -> RGB {
        RGB::from_u8(rgba[0], rgba[1], rgba[2], rgba[3])
    }

    /// Round each channel to the nearest 8-bit value.
    pub fn to_u8_array(&self) -> [u8; 4] {
        let quantize = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        ]
    }

    pub fn from_hex(string: &str) -> Result<RGB> {
        let clean_string = string.trim().to_lowercase().replace('#', "");
        if clean_string.len() != 6 || !clean_string.is_ascii() {
            return Err(TernplotError::Config(format!(
                "expected a #RRGGBB color, got {:?}",
                string
            )));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&clean_string[range], 16).map_err(|_| {
                TernplotError::Config(format!("expected a #RRGGBB color, got {:?}", string))
            })
        };

        Ok(RGB::from_u8(channel(0..2)?, channel(2..4)?, channel(4..6)?, 255))
    }

    pub fn to_hex(&self) -> String {
        let [r, g, b, _] = self.to_u8_array();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    /// Move the color channels toward white by `factor`, alpha untouched.
    ///
    /// `c * (1 - factor) + factor` equals `c + (1 - c) * factor`, and is exact
    /// at both `factor = 0` and `factor = 1`.
    pub fn lighten(&self, factor: f64) -> RGB {
        let towards_white = |c: f64| c * (1.0 - factor) + factor;
        RGB {
            r: towards_white(self.r),
            g: towards_white(self.g),
            b: towards_white(self.b),
            a: self.a,
        }
    }

    /// True when every channel, alpha included, lies in `[0, 1]`.
    pub fn is_normalized(&self) -> bool {
        [self.r, self.g, self.b, self.a]
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }
}

impl From<colorous::Color> for RGB {
    fn from(color: colorous::Color) -> Self {
        RGB::from_u8(color.r, color.g, color.b, 255)
    }
}

impl From<RGB> for image::Rgba<u8> {
    fn from(rgb: RGB) -> Self {
        image::Rgba(rgb.to_u8_array())
    }
}

impl From<RGB> for plotters::style::RGBAColor {
    fn from(rgb: RGB) -> Self {
        let [r, g, b, _] = rgb.to_u8_array();
        plotters::style::RGBAColor(r, g, b, rgb.a.clamp(0.0, 1.0))
    }
}

impl Display for RGB {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
