use crate::format::to_fixed;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadoutKind {
    Time,
    Distance,
    Speed,
}

impl ReadoutKind {
    pub const ALL: [ReadoutKind; 3] = [ReadoutKind::Time, ReadoutKind::Distance, ReadoutKind::Speed];

    pub fn unit(&self) -> &'static str {
        match self {
            ReadoutKind::Time => "s",
            ReadoutKind::Distance => "m",
            ReadoutKind::Speed => "m/s",
        }
    }
}

/// Latest value of one series, ready for the summary panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Readout {
    pub kind: ReadoutKind,
    pub label: String,
    pub value: f64,
    pub text: String,
}

impl Readout {
    pub fn new(kind: ReadoutKind, label: impl Into<String>, series: &[f64]) -> Self {
        let value = latest_or_zero(series);
        Self {
            kind,
            label: label.into(),
            value,
            text: format!("{} {}", to_fixed(value, 1), kind.unit()),
        }
    }
}

/// Last sample of `series`, or 0 when it is empty, zero or not a finite number.
///
/// Negative zero reads as plain 0 so it never displays as `-0.0`.
pub fn latest_or_zero(series: &[f64]) -> f64 {
    series
        .last()
        .copied()
        .filter(|value| value.is_finite() && *value != 0.0)
        .unwrap_or(0.0)
}
