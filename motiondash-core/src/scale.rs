use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Rounding policy for a value axis.
///
/// The axis maximum is the smallest multiple of `step` that is at least the
/// largest observed value, never below `floor`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisScale {
    pub floor: f64,
    pub step: f64,
}

impl AxisScale {
    pub const DISTANCE: AxisScale = AxisScale {
        floor: 500.0,
        step: 100.0,
    };
    pub const SPEED: AxisScale = AxisScale {
        floor: 25.0,
        step: 5.0,
    };

    pub fn axis_max(&self, series: &[f64]) -> f64 {
        axis_max(series, self.floor, self.step)
    }
}

/// Smallest multiple of `step` that is >= max(series ∪ {floor}).
///
/// Non-finite samples are skipped. A non-positive or non-finite `step`
/// disables rounding and yields the raw maximum.
pub fn axis_max(series: &[f64], floor: f64, step: f64) -> f64 {
    let observed = series
        .iter()
        .copied()
        .filter(|value| value.is_finite())
        .fold(floor, f64::max);
    if step <= 0.0 || !step.is_finite() {
        return observed;
    }
    (observed / step).ceil() * step
}

/// Memoizes [`axis_max`] for the last series content seen.
///
/// Keyed by a hash of the sample bits, so a re-render with an identical
/// series skips the scan.
#[derive(Debug, Clone)]
pub struct AxisScaleCache {
    scale: AxisScale,
    entry: Option<(u64, f64)>,
}

impl AxisScaleCache {
    pub fn new(scale: AxisScale) -> Self {
        Self { scale, entry: None }
    }

    pub fn scale(&self) -> AxisScale {
        self.scale
    }

    pub fn get(&mut self, series: &[f64]) -> f64 {
        let key = content_key(series);
        if let Some((cached_key, value)) = self.entry {
            if cached_key == key {
                log::debug!("axis max cache hit ({} samples)", series.len());
                return value;
            }
        }
        let value = self.scale.axis_max(series);
        log::debug!(
            "axis max recomputed ({} samples) -> {value}",
            series.len()
        );
        self.entry = Some((key, value));
        value
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

fn content_key(series: &[f64]) -> u64 {
    let mut hasher = DefaultHasher::new();
    series.len().hash(&mut hasher);
    for value in series {
        value.to_bits().hash(&mut hasher);
    }
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_dominates_small_and_empty_series() {
        assert_eq!(axis_max(&[], 500.0, 100.0), 500.0);
        assert_eq!(axis_max(&[450.0], 500.0, 100.0), 500.0);
        assert_eq!(axis_max(&[], 25.0, 5.0), 25.0);
    }

    #[test]
    fn rounds_up_to_step() {
        assert_eq!(axis_max(&[550.0], 500.0, 100.0), 600.0);
        assert_eq!(axis_max(&[1000.0], 500.0, 100.0), 1000.0);
        assert_eq!(axis_max(&[3.0, 26.2, 10.0], 25.0, 5.0), 30.0);
    }

    #[test]
    fn non_finite_samples_are_skipped() {
        assert_eq!(axis_max(&[f64::NAN, 620.0, f64::INFINITY], 500.0, 100.0), 700.0);
    }

    #[test]
    fn zero_step_returns_raw_maximum() {
        assert_eq!(axis_max(&[12.5], 10.0, 0.0), 12.5);
    }

    #[test]
    fn cache_matches_uncached_result() {
        let mut cache = AxisScaleCache::new(AxisScale::DISTANCE);
        let first = vec![0.0, 120.0, 640.0];
        assert_eq!(cache.get(&first), 700.0);
        assert_eq!(cache.get(&first), 700.0);

        let grown = vec![0.0, 120.0, 640.0, 810.0];
        assert_eq!(cache.get(&grown), AxisScale::DISTANCE.axis_max(&grown));
        assert_eq!(cache.get(&grown), 900.0);

        cache.invalidate();
        assert_eq!(cache.get(&[]), 500.0);
    }
}
