use serde::{Deserialize, Serialize};

/// A sample position on a chart panel, in percent of the panel size.
///
/// `y` grows downward like screen coordinates, so a value at the axis
/// maximum sits at `y = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub x: f64,
    pub y: f64,
}

impl NormalizedPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for NormalizedPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Maps parallel time/value samples onto the 0-100 plane.
///
/// One point per pair, in input order; extra samples in the longer slice
/// are ignored. Points are not clamped, so samples past `time_span_s` land
/// beyond `x = 100`.
pub fn project_points(
    time: &[f64],
    values: &[f64],
    axis_max: f64,
    time_span_s: f64,
) -> Vec<NormalizedPoint> {
    time.iter()
        .zip(values)
        .map(|(t, value)| NormalizedPoint {
            x: percent_of(*t, time_span_s),
            y: 100.0 - percent_of(*value, axis_max),
        })
        .collect()
}

fn percent_of(value: f64, max: f64) -> f64 {
    if max <= 0.0 || !max.is_finite() {
        return 0.0;
    }
    value / max * 100.0
}
