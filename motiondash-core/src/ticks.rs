use crate::format::to_fixed;
use serde::Serialize;

/// Labels per axis. Five grid divisions give six labels.
pub const TICK_COUNT: usize = 6;
const DIVISIONS: f64 = (TICK_COUNT - 1) as f64;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickLabel {
    pub value: f64,
    pub text: String,
}

impl TickLabel {
    fn new(value: f64, unit: &str) -> Self {
        Self {
            value,
            text: format!("{}{unit}", to_fixed(value, 0)),
        }
    }
}

/// Value axis labels, top to bottom: `axis_max` down to 0.
pub fn value_ticks(axis_max: f64, unit: &str) -> Vec<TickLabel> {
    (0..TICK_COUNT)
        .map(|idx| TickLabel::new((DIVISIONS - idx as f64) * axis_max / DIVISIONS, unit))
        .collect()
}

/// Time axis labels, left to right: 0 up to `time_span_s`.
pub fn time_ticks(time_span_s: f64, unit: &str) -> Vec<TickLabel> {
    (0..TICK_COUNT)
        .map(|idx| TickLabel::new(idx as f64 * time_span_s / DIVISIONS, unit))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(ticks: &[TickLabel]) -> Vec<&str> {
        ticks.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn distance_ticks_descend() {
        let ticks = value_ticks(500.0, "m");
        assert_eq!(texts(&ticks), vec!["500m", "400m", "300m", "200m", "100m", "0m"]);
    }

    #[test]
    fn speed_ticks_use_unit_suffix() {
        let ticks = value_ticks(35.0, "m/s");
        assert_eq!(
            texts(&ticks),
            vec!["35m/s", "28m/s", "21m/s", "14m/s", "7m/s", "0m/s"]
        );
    }

    #[test]
    fn time_ticks_ascend() {
        let ticks = time_ticks(50.0, "s");
        let values: Vec<f64> = ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0]);
        assert_eq!(texts(&ticks)[5], "50s");
    }
}
