pub mod format;
pub mod path;
pub mod projection;
pub mod readout;
pub mod scale;
pub mod series;
pub mod settings;
pub mod ticks;
pub mod view;

pub use format::to_fixed;
pub use path::{build_path, PathCommand, VectorPath};
pub use projection::{project_points, NormalizedPoint};
pub use readout::{latest_or_zero, Readout, ReadoutKind};
pub use scale::{axis_max, AxisScale, AxisScaleCache};
pub use series::MotionSamples;
pub use settings::{DashboardSettings, Rgb};
pub use ticks::{time_ticks, value_ticks, TickLabel, TICK_COUNT};
pub use view::{
    render_dashboard, ChartKind, ChartPanel, Dashboard, DashboardView, GridSpec,
};

#[derive(thiserror::Error, Debug)]
pub enum MotionError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
    #[error("invalid color '{0}', expected #RRGGBB")]
    InvalidColor(String),
}
