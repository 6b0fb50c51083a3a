use std::collections::BTreeMap;
use std::path::Path;

use json::JsonValue;

use crate::error::{Result, TernplotError};

/// Sparse scalar data over the lattice of a simplex.
///
/// Keyed by `(i, j)`; the third coordinate is implied as `scale - i - j`.
#[derive(Debug, Clone, PartialEq)]
pub struct TernaryData {
    scale: usize,
    values: BTreeMap<(usize, usize), f64>,
}

impl TernaryData {
    pub fn new(scale: usize) -> Self {
        Self {
            scale,
            values: BTreeMap::new(),
        }
    }

    /// Fill every lattice point with `f(i, j, k)`.
    pub fn from_fn<F>(scale: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize, usize) -> f64,
    {
        let values = super::simplex_points(scale)
            .map(|(i, j, k)| ((i, j), f(i, j, k)))
            .collect();
        Self { scale, values }
    }

    pub fn scale(&self) -> usize {
        self.scale
    }

    /// Set the value at `(i, j)`, replacing any previous one.
    pub fn insert(&mut self, i: usize, j: usize, value: f64) -> Result {
        if i + j > self.scale {
            return Err(TernplotError::InvalidData(format!(
                "point ({}, {}) lies outside a simplex of scale {}",
                i, j, self.scale
            )));
        }
        if !value.is_finite() {
            return Err(TernplotError::InvalidData(format!(
                "value at ({}, {}) is not finite: {}",
                i, j, value
            )));
        }
        self.values.insert((i, j), value);
        Ok(())
    }

    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.values.get(&(i, j)).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Points in `(i, j, k, value)` form, ordered by `(i, j)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, usize, f64)> + '_ {
        self.values
            .iter()
            .map(|(&(i, j), &value)| (i, j, self.scale - i - j, value))
    }

    /// Smallest and largest stored values, if any.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.values.values().fold(None, |range, &value| match range {
            None => Some((value, value)),
            Some((min, max)) => Some((min.min(value), max.max(value))),
        })
    }

    /// Parse a JSON array of points.
    ///
    /// Each entry is either `[i, j, value]`, `[i, j, k, value]` or an object
    /// `{"i": .., "j": .., "k": .., "value": ..}` with `k` optional. When `k`
    /// is given it must complete `i + j` to `scale`.
    pub fn from_json(text: &str, scale: usize) -> Result<Self> {
        let parsed = json::parse(text)?;
        if !parsed.is_array() {
            return Err(TernplotError::InvalidData(
                "expected a JSON array of points".to_string(),
            ));
        }

        let mut data = Self::new(scale);
        for (index, entry) in parsed.members().enumerate() {
            let (i, j, k, value) = parse_entry(entry)
                .ok_or_else(|| TernplotError::InvalidData(format!("malformed point #{}", index)))?;
            if let Some(k) = k {
                if i + j + k != scale {
                    return Err(TernplotError::InvalidData(format!(
                        "point #{} ({}, {}, {}) doesn't sum to scale {}",
                        index, i, j, k, scale
                    )));
                }
            }
            data.insert(i, j, value)?;
        }
        log::debug!("parsed {} ternary points at scale {}", data.len(), scale);
        Ok(data)
    }

    pub fn read_json<P: AsRef<Path>>(path: P, scale: usize) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text, scale)
    }

    pub fn to_json(&self) -> String {
        let mut points = JsonValue::new_array();
        for (i, j, k, value) in self.iter() {
            // pushing onto an array value can't fail
            let _ = points.push(json::array![i, j, k, value]);
        }
        points.to_string()
    }
}

fn parse_entry(entry: &JsonValue) -> Option<(usize, usize, Option<usize>, f64)> {
    if entry.is_array() {
        match entry.len() {
            3 => Some((entry[0].as_usize()?, entry[1].as_usize()?, None, entry[2].as_f64()?)),
            4 => Some((
                entry[0].as_usize()?,
                entry[1].as_usize()?,
                Some(entry[2].as_usize()?),
                entry[3].as_f64()?,
            )),
            _ => None,
        }
    } else if entry.is_object() {
        let k = if entry["k"].is_null() {
            None
        } else {
            Some(entry["k"].as_usize()?)
        };
        Some((
            entry["i"].as_usize()?,
            entry["j"].as_usize()?,
            k,
            entry["value"].as_f64()?,
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_rejects_outside_simplex() {
        let mut data = TernaryData::new(4);
        assert!(data.insert(2, 2, 1.0).is_ok());
        assert!(data.insert(3, 2, 1.0).is_err());
        assert!(data.insert(0, 0, f64::NAN).is_err());
        assert_eq!(data.len(), 1);
        assert_eq!(data.get(2, 2), Some(1.0));
        assert_eq!(data.get(0, 0), None);
    }

    #[test]
    fn test_iter_fills_in_k() {
        let mut data = TernaryData::new(5);
        data.insert(1, 2, 0.5).unwrap();
        assert_eq!(data.iter().collect::<Vec<_>>(), vec![(1, 2, 2, 0.5)]);
    }

    #[test]
    fn test_from_fn_and_value_range() {
        let data = TernaryData::from_fn(3, |i, _, _| i as f64);
        assert_eq!(data.len(), crate::ternary::simplex_size(3));
        assert_eq!(data.value_range(), Some((0.0, 3.0)));
        assert_eq!(TernaryData::new(3).value_range(), None);
    }

    #[test]
    fn test_from_json_formats() {
        let text = r#"[[0, 1, 0.5], [1, 1, 2, 0.75], {"i": 2, "j": 0, "value": 1.0}, {"i": 0, "j": 0, "k": 4, "value": 0.1}]"#;
        let data = TernaryData::from_json(text, 4).unwrap();
        assert_eq!(data.len(), 4);
        assert_eq!(data.get(0, 1), Some(0.5));
        assert_eq!(data.get(1, 1), Some(0.75));
        assert_eq!(data.get(2, 0), Some(1.0));
        assert_eq!(data.get(0, 0), Some(0.1));
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        assert!(TernaryData::from_json("{}", 4).is_err());
        assert!(TernaryData::from_json("[[0, 1]]", 4).is_err());
        assert!(TernaryData::from_json("[[1, 1, 1, 0.5]]", 4).is_err());
        assert!(TernaryData::from_json("[[5, 0, 0.5]]", 4).is_err());
        assert!(TernaryData::from_json("not json", 4).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let data = TernaryData::from_fn(2, |i, j, _| (i * 10 + j) as f64 / 4.0);
        let parsed = TernaryData::from_json(&data.to_json(), 2).unwrap();
        assert_eq!(parsed, data);
    }
}
