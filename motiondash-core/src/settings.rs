use crate::scale::AxisScale;
use crate::MotionError;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

pub const DEFAULT_TIME_SPAN_S: f64 = 50.0;
pub const DEFAULT_DISTANCE_COLOR: &str = "#3B82F6";
pub const DEFAULT_SPEED_COLOR: &str = "#EF4444";
pub const DEFAULT_STROKE_WIDTH: f32 = 2.0;

/// Dashboard configuration, read from TOML.
///
/// Every key is optional; missing keys keep the defaults below.
///
/// ```toml
/// time_span_s = 50.0
/// distance_axis = { floor = 500.0, step = 100.0 }
/// speed_axis = { floor = 25.0, step = 5.0 }
/// distance_title = "Distance - Time"
/// speed_color = "#EF4444"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    pub time_span_s: f64,
    pub distance_axis: AxisScale,
    pub speed_axis: AxisScale,
    pub time_label: String,
    pub distance_label: String,
    pub speed_label: String,
    pub distance_title: String,
    pub speed_title: String,
    pub distance_color: String,
    pub speed_color: String,
    pub stroke_width: f32,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            time_span_s: DEFAULT_TIME_SPAN_S,
            distance_axis: AxisScale::DISTANCE,
            speed_axis: AxisScale::SPEED,
            time_label: "Time".to_string(),
            distance_label: "Distance".to_string(),
            speed_label: "Speed".to_string(),
            distance_title: "Distance - Time".to_string(),
            speed_title: "Speed - Time".to_string(),
            distance_color: DEFAULT_DISTANCE_COLOR.to_string(),
            speed_color: DEFAULT_SPEED_COLOR.to_string(),
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

impl DashboardSettings {
    pub fn from_toml_str(text: &str) -> Result<Self, MotionError> {
        let settings: Self = toml::from_str(text)?;
        settings.normalize()
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, MotionError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        log::debug!("loaded dashboard settings from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// Rejects values the renderer cannot scale with and canonicalizes colors.
    pub fn normalize(mut self) -> Result<Self, MotionError> {
        if !(self.time_span_s.is_finite() && self.time_span_s > 0.0) {
            return Err(MotionError::InvalidSettings(format!(
                "time_span_s must be positive, got {}",
                self.time_span_s
            )));
        }
        check_axis("distance_axis", &self.distance_axis)?;
        check_axis("speed_axis", &self.speed_axis)?;
        if !(self.stroke_width.is_finite() && self.stroke_width > 0.0) {
            return Err(MotionError::InvalidSettings(format!(
                "stroke_width must be positive, got {}",
                self.stroke_width
            )));
        }
        self.distance_color = self.distance_color.parse::<Rgb>()?.to_string();
        self.speed_color = self.speed_color.parse::<Rgb>()?.to_string();
        Ok(self)
    }
}

fn check_axis(name: &str, axis: &AxisScale) -> Result<(), MotionError> {
    if !(axis.floor.is_finite() && axis.floor >= 0.0) {
        return Err(MotionError::InvalidSettings(format!(
            "{name}.floor must be non-negative, got {}",
            axis.floor
        )));
    }
    if !(axis.step.is_finite() && axis.step > 0.0) {
        return Err(MotionError::InvalidSettings(format!(
            "{name}.step must be positive, got {}",
            axis.step
        )));
    }
    Ok(())
}

/// An opaque stroke color, written as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl FromStr for Rgb {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MotionError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
        };
        Ok(Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
