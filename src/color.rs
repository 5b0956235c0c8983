use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Value;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: size value → Color32
// ---------------------------------------------------------------------------

/// Maps the distinct values of the grouping column to distinct colours.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<Value, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build a colour map from the sorted set of grouping values, so colour
    /// assignment is deterministic across runs.
    pub fn new(unique_values: &BTreeSet<Value>) -> Self {
        let palette = generate_palette(unique_values.len());
        let mapping: BTreeMap<Value, Color32> = unique_values
            .iter()
            .cloned()
            .zip(palette)
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a given grouping value.
    pub fn color_for(&self, value: &Value) -> Color32 {
        self.mapping
            .get(value)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_distinct() {
        let palette = generate_palette(8);
        assert_eq!(palette.len(), 8);
        for (i, a) in palette.iter().enumerate() {
            for b in palette.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_palette_empty() {
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn test_color_map_deterministic() {
        let values: BTreeSet<Value> =
            [Value::Float(0.5), Value::Float(0.6), Value::Float(0.7)]
                .into_iter()
                .collect();
        let a = ColorMap::new(&values);
        let b = ColorMap::new(&values);
        for v in &values {
            assert_eq!(a.color_for(v), b.color_for(v));
        }
    }

    #[test]
    fn test_unknown_value_gets_default() {
        let values: BTreeSet<Value> = [Value::Float(0.5)].into_iter().collect();
        let map = ColorMap::new(&values);
        assert_eq!(map.color_for(&Value::Float(0.9)), Color32::GRAY);
    }
}
