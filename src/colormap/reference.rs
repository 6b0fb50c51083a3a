use colorous::Gradient;

use crate::{
    colormap::ColorMap,
    error::{Result, TernplotError},
    utils::pixel::RGB,
};

/// Base names understood by [ReferenceColorMap::from_name].
///
/// Names follow matplotlib where the gradient is the same one matplotlib
/// ships. Gradients that only exist as d3 schemes (cubehelix, warm, cool,
/// rainbow, sinebow) carry a `d3_` prefix, since matplotlib's maps of the
/// same names look different. Any name may carry an `_r` suffix to reverse
/// the map.
const REFERENCE_MAPS: [(&str, Gradient); 38] = [
    // perceptually uniform
    ("viridis", colorous::VIRIDIS),
    ("magma", colorous::MAGMA),
    ("inferno", colorous::INFERNO),
    ("plasma", colorous::PLASMA),
    ("cividis", colorous::CIVIDIS),
    ("turbo", colorous::TURBO),
    ("d3_cubehelix", colorous::CUBEHELIX),
    ("d3_warm", colorous::WARM),
    ("d3_cool", colorous::COOL),
    // sequential, single hue
    ("blues", colorous::BLUES),
    ("greens", colorous::GREENS),
    ("greys", colorous::GREYS),
    ("oranges", colorous::ORANGES),
    ("purples", colorous::PURPLES),
    ("reds", colorous::REDS),
    // sequential, multi hue
    ("bugn", colorous::BLUE_GREEN),
    ("bupu", colorous::BLUE_PURPLE),
    ("gnbu", colorous::GREEN_BLUE),
    ("orrd", colorous::ORANGE_RED),
    ("pubugn", colorous::PURPLE_BLUE_GREEN),
    ("pubu", colorous::PURPLE_BLUE),
    ("purd", colorous::PURPLE_RED),
    ("rdpu", colorous::RED_PURPLE),
    ("ylgnbu", colorous::YELLOW_GREEN_BLUE),
    ("ylgn", colorous::YELLOW_GREEN),
    ("ylorbr", colorous::YELLOW_ORANGE_BROWN),
    ("ylorrd", colorous::YELLOW_ORANGE_RED),
    // diverging
    ("brbg", colorous::BROWN_GREEN),
    ("prgn", colorous::PURPLE_GREEN),
    ("piyg", colorous::PINK_GREEN),
    ("puor", colorous::PURPLE_ORANGE),
    ("rdbu", colorous::RED_BLUE),
    ("rdgy", colorous::RED_GREY),
    ("rdylbu", colorous::RED_YELLOW_BLUE),
    ("rdylgn", colorous::RED_YELLOW_GREEN),
    ("spectral", colorous::SPECTRAL),
    // cyclical
    ("d3_rainbow", colorous::RAINBOW),
    ("d3_sinebow", colorous::SINEBOW),
];

/// A continuous perceptual colormap resolved by name.
#[derive(Clone)]
pub struct ReferenceColorMap {
    name: String,
    gradient: Gradient,
    reversed: bool,
}

impl ReferenceColorMap {
    /// The map matplotlib would use by default for the ternary heatmaps.
    pub const DEFAULT_NAME: &'static str = "viridis_r";

    /// Resolve a matplotlib-style name such as `viridis`, `Magma` or `RdBu_r`.
    pub fn from_name(name: &str) -> Result<Self> {
        let lowered = name.trim().to_lowercase();
        let (base, reversed) = match lowered.strip_suffix("_r") {
            Some(base) => (base, true),
            None => (lowered.as_str(), false),
        };

        REFERENCE_MAPS
            .iter()
            .find(|(known, _)| *known == base)
            .map(|&(known, gradient)| Self {
                name: if reversed {
                    format!("{}_r", known)
                } else {
                    known.to_string()
                },
                gradient,
                reversed,
            })
            .ok_or_else(|| TernplotError::UnknownColorMap(name.to_string()))
    }

    /// Every base name [ReferenceColorMap::from_name] accepts, without the `_r` variants.
    pub fn names() -> impl Iterator<Item = &'static str> {
        REFERENCE_MAPS.iter().map(|(name, _)| *name)
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }
}

impl ColorMap for ReferenceColorMap {
    /// Lower case base name, `_r` included for reversed maps.
    fn name(&self) -> &str {
        &self.name
    }

    /// Gradient color at `t`.
    ///
    /// The gradients evaluate to 8-bit channels, so nearby positions can
    /// share a color and at most 256 distinct levels exist per channel.
    fn eval(&self, t: f64) -> RGB {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let t = if self.reversed { 1.0 - t } else { t };
        self.gradient.eval_continuous(t).into()
    }
}

impl std::fmt::Debug for ReferenceColorMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReferenceColorMap")
            .field("name", &self.name)
            .field("reversed", &self.reversed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_every_listed_name() {
        for name in ReferenceColorMap::names() {
            let cmap = ReferenceColorMap::from_name(name).unwrap();
            assert_eq!(cmap.name(), name);
            assert!(!cmap.is_reversed());

            let reversed = ReferenceColorMap::from_name(&format!("{}_r", name)).unwrap();
            assert!(reversed.is_reversed());
            assert_eq!(reversed.name(), format!("{}_r", name));
        }
    }

    #[test]
    fn test_names_are_case_insensitive() {
        let upper = ReferenceColorMap::from_name("RdBu_r").unwrap();
        let lower = ReferenceColorMap::from_name("rdbu_r").unwrap();
        assert_eq!(upper.name(), "rdbu_r");
        assert_eq!(upper.eval(0.3), lower.eval(0.3));
    }

    #[test]
    fn test_unknown_name_fails() {
        match ReferenceColorMap::from_name("jet") {
            Err(TernplotError::UnknownColorMap(name)) => assert_eq!(name, "jet"),
            other => panic!("expected UnknownColorMap, got {:?}", other),
        }
        assert!(ReferenceColorMap::from_name("_r").is_err());
        assert!(ReferenceColorMap::from_name("").is_err());
        // d3 schemes only resolve under their prefixed names
        assert!(ReferenceColorMap::from_name("cubehelix").is_err());
        assert!(ReferenceColorMap::from_name("d3_cubehelix_r").is_ok());
    }

    #[test]
    fn test_reversed_mirrors_positions() {
        let forward = ReferenceColorMap::from_name("viridis").unwrap();
        let reversed = ReferenceColorMap::from_name("viridis_r").unwrap();
        for t in [0.0, 0.2, 0.5, 0.9, 1.0] {
            assert_eq!(forward.eval(t), reversed.eval(1.0 - t));
        }
    }

    #[test]
    fn test_eval_is_opaque_and_normalized() {
        let cmap = ReferenceColorMap::from_name(ReferenceColorMap::DEFAULT_NAME).unwrap();
        for t in [-1.0, 0.0, 0.33, 1.0, 2.0, f64::NAN] {
            let color = cmap.eval(t);
            assert!(color.is_normalized());
            assert_eq!(color.a, 1.0);
        }
        assert_eq!(cmap.eval(-1.0), cmap.eval(0.0));
        assert_eq!(cmap.eval(2.0), cmap.eval(1.0));
    }

    #[test]
    fn test_eval_is_quantized_to_8_bits() {
        let cmap = ReferenceColorMap::from_name("magma").unwrap();
        for t in [0.013, 0.5, 0.777] {
            let color = cmap.eval(t);
            for channel in [color.r, color.g, color.b] {
                let level = channel * 255.0;
                assert!((level - level.round()).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_viridis_runs_dark_to_light() {
        // viridis starts dark purple and ends bright yellow
        let cmap = ReferenceColorMap::from_name("viridis").unwrap();
        let [r0, _, b0, _] = cmap.eval(0.0).to_u8_array();
        let [r1, g1, _, _] = cmap.eval(1.0).to_u8_array();
        assert!(b0 > r0);
        assert!(r1 > 200 && g1 > 200);
    }
}
