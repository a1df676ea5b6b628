use crate::path::{build_path, VectorPath};
use crate::projection::{project_points, NormalizedPoint};
use crate::readout::{Readout, ReadoutKind};
use crate::scale::AxisScaleCache;
use crate::series::MotionSamples;
use crate::settings::{DashboardSettings, Rgb};
use crate::ticks::{time_ticks, value_ticks, TickLabel, TICK_COUNT};
use crate::MotionError;
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Distance,
    Speed,
}

impl ChartKind {
    pub const ALL: [ChartKind; 2] = [ChartKind::Distance, ChartKind::Speed];

    pub fn unit(&self) -> &'static str {
        match self {
            ChartKind::Distance => "m",
            ChartKind::Speed => "m/s",
        }
    }

    /// Time and value slices of the complete observations for this chart.
    pub fn series<'a>(&self, samples: &'a MotionSamples) -> (&'a [f64], &'a [f64]) {
        match self {
            ChartKind::Distance => samples.time_distance(),
            ChartKind::Speed => samples.time_speed(),
        }
    }
}

impl FromStr for ChartKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "distance" => Ok(ChartKind::Distance),
            "speed" => Ok(ChartKind::Speed),
            other => Err(format!("unknown chart '{other}', expected distance or speed")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridSpec {
    pub rows: usize,
    pub cols: usize,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            rows: TICK_COUNT - 1,
            cols: TICK_COUNT - 1,
        }
    }
}

/// One chart of the dashboard, already mapped onto the 0-100 plane.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPanel {
    pub kind: ChartKind,
    pub title: String,
    pub axis_max: f64,
    pub time_span_s: f64,
    pub y_ticks: Vec<TickLabel>,
    pub x_ticks: Vec<TickLabel>,
    pub grid: GridSpec,
    pub points: Vec<NormalizedPoint>,
    pub path: VectorPath,
    pub color: Rgb,
    pub stroke_width: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub summary: Vec<Readout>,
    pub charts: Vec<ChartPanel>,
}

impl DashboardView {
    pub fn chart(&self, kind: ChartKind) -> Option<&ChartPanel> {
        self.charts.iter().find(|chart| chart.kind == kind)
    }

    pub fn readout(&self, kind: ReadoutKind) -> Option<&Readout> {
        self.summary.iter().find(|readout| readout.kind == kind)
    }
}

/// Renders [`DashboardView`]s, remembering the last axis maxima.
///
/// Output depends only on the samples and settings; the cached maxima only
/// skip rescanning an unchanged series.
#[derive(Debug, Clone)]
pub struct Dashboard {
    settings: DashboardSettings,
    distance_color: Rgb,
    speed_color: Rgb,
    distance_scale: AxisScaleCache,
    speed_scale: AxisScaleCache,
}

impl Dashboard {
    pub fn new(settings: DashboardSettings) -> Result<Self, MotionError> {
        let settings = settings.normalize()?;
        Ok(Self {
            distance_color: settings.distance_color.parse()?,
            speed_color: settings.speed_color.parse()?,
            distance_scale: AxisScaleCache::new(settings.distance_axis),
            speed_scale: AxisScaleCache::new(settings.speed_axis),
            settings,
        })
    }

    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: DashboardSettings) -> Result<(), MotionError> {
        *self = Self::new(settings)?;
        Ok(())
    }

    pub fn render(&mut self, samples: &MotionSamples) -> DashboardView {
        let summary = vec![
            Readout::new(ReadoutKind::Time, &self.settings.time_label, &samples.time),
            Readout::new(
                ReadoutKind::Distance,
                &self.settings.distance_label,
                &samples.distance,
            ),
            Readout::new(ReadoutKind::Speed, &self.settings.speed_label, &samples.speed),
        ];
        let charts = ChartKind::ALL
            .iter()
            .map(|kind| self.chart(*kind, samples))
            .collect();
        DashboardView { summary, charts }
    }

    fn chart(&mut self, kind: ChartKind, samples: &MotionSamples) -> ChartPanel {
        let (time, values) = kind.series(samples);
        let (axis_max, title, color) = match kind {
            ChartKind::Distance => (
                self.distance_scale.get(values),
                &self.settings.distance_title,
                self.distance_color,
            ),
            ChartKind::Speed => (
                self.speed_scale.get(values),
                &self.settings.speed_title,
                self.speed_color,
            ),
        };
        let time_span_s = self.settings.time_span_s;
        let points = project_points(time, values, axis_max, time_span_s);
        let path = build_path(&points);
        ChartPanel {
            kind,
            title: title.clone(),
            axis_max,
            time_span_s,
            y_ticks: value_ticks(axis_max, kind.unit()),
            x_ticks: time_ticks(time_span_s, ReadoutKind::Time.unit()),
            grid: GridSpec::default(),
            points,
            path,
            color,
            stroke_width: self.settings.stroke_width,
        }
    }
}

/// Renders one view without keeping any cache around.
pub fn render_dashboard(
    samples: &MotionSamples,
    settings: &DashboardSettings,
) -> Result<DashboardView, MotionError> {
    Ok(Dashboard::new(settings.clone())?.render(samples))
}
