//! Chart-ready snapshots of simulation fields
//!
//! An [`ExportedLayer`] is an owned copy of one 2D field: `width` longitudes
//! by `height` latitudes, flattened row-major. Hosts draw it directly; the
//! grayscale helper reproduces the min-max scaling of a simple heatmap.

use serde::{Deserialize, Serialize};

/// Which field to export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    /// Ground temperature (K)
    Ground,
    /// Solar flux from the most recent step (W/m²)
    Solar,
    /// Temperature of one atmosphere layer (K)
    Atmosphere,
}

/// Owned snapshot of one 2D field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedLayer {
    /// Number of columns (longitudes)
    pub width: usize,
    /// Number of rows (latitudes)
    pub height: usize,
    /// Row-major values, `width * height` long
    pub values: Vec<f64>,
}

impl ExportedLayer {
    /// Copy a row-major slice into a new snapshot
    #[must_use]
    pub fn from_slice(width: usize, height: usize, values: &[f64]) -> Self {
        debug_assert_eq!(values.len(), width * height);
        Self {
            width,
            height,
            values: values.to_vec(),
        }
    }

    /// Value at column `x`, row `y`
    #[must_use]
    pub fn value_at(&self, x: usize, y: usize) -> Option<f64> {
        if x < self.width && y < self.height {
            self.values.get(y * self.width + x).copied()
        } else {
            None
        }
    }

    /// Smallest and largest value, ignoring NaN. `None` if nothing is left.
    #[must_use]
    pub fn min_max(&self) -> Option<(f64, f64)> {
        let (min, max) = self
            .values
            .iter()
            .filter(|v| !v.is_nan())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        (min <= max).then_some((min, max))
    }

    /// Min-max scale every value to `0..=255`.
    ///
    /// A uniform layer has no range to scale over and maps to mid-gray (127).
    #[must_use]
    pub fn to_grayscale(&self) -> Vec<u8> {
        let Some((min, max)) = self.min_max() else {
            return vec![0; self.values.len()];
        };
        if min == max {
            return vec![127; self.values.len()];
        }

        let range = max - min;
        self.values
            .iter()
            .map(|&v| (((v - min) / range) * 255.0).round().clamp(0.0, 255.0) as u8)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_at_row_major() {
        let layer = ExportedLayer::from_slice(3, 2, &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(layer.value_at(0, 0), Some(0.0));
        assert_eq!(layer.value_at(2, 0), Some(2.0));
        assert_eq!(layer.value_at(0, 1), Some(3.0));
        assert_eq!(layer.value_at(3, 0), None);
        assert_eq!(layer.value_at(0, 2), None);
    }

    #[test]
    fn test_min_max_ignores_nan() {
        let layer = ExportedLayer::from_slice(4, 1, &[f64::NAN, 3.0, -1.0, 7.5]);
        assert_eq!(layer.min_max(), Some((-1.0, 7.5)));

        let empty = ExportedLayer::from_slice(0, 0, &[]);
        assert_eq!(empty.min_max(), None);
    }

    #[test]
    fn test_grayscale_scales_to_full_range() {
        let layer = ExportedLayer::from_slice(3, 1, &[260.0, 270.0, 280.0]);
        assert_eq!(layer.to_grayscale(), vec![0, 128, 255]);
    }

    #[test]
    fn test_grayscale_uniform_is_mid_gray() {
        let layer = ExportedLayer::from_slice(2, 2, &[270.0; 4]);
        assert_eq!(layer.to_grayscale(), vec![127; 4]);
    }

    #[test]
    fn test_layer_kind_serializes_lowercase() {
        let kind: LayerKind = serde::Deserialize::deserialize(
            serde::de::value::StrDeserializer::<serde::de::value::Error>::new("atmosphere"),
        )
        .unwrap();
        assert_eq!(kind, LayerKind::Atmosphere);
    }
}
