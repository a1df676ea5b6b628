use motiondash_core::{ChartPanel, MotionSamples};
use plotters::backend::SVGBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

pub const DEFAULT_EXPORT_SIZE: (u32, u32) = (1200, 700);

#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error("unsupported export format for '{0}', expected .svg or .png")]
    UnsupportedFormat(String),
    #[error("draw error: {0}")]
    Draw(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Svg,
    Png,
}

impl ExportFormat {
    pub fn from_path(path: &Path) -> Result<Self, ExportError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        match extension.as_deref() {
            Some("svg") => Ok(ExportFormat::Svg),
            Some("png") => Ok(ExportFormat::Png),
            _ => Err(ExportError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Writes one chart in physical units: seconds against meters or m/s.
///
/// Axis ranges, grid lines and tick texts all come from `panel`, so the
/// image matches the dashboard scaling. The image type follows the file
/// extension.
pub fn export_chart(
    samples: &MotionSamples,
    panel: &ChartPanel,
    path: &Path,
    size: (u32, u32),
) -> Result<(), ExportError> {
    let format = ExportFormat::from_path(path)?;
    let (time, values) = panel.kind.series(samples);
    let data: Vec<(f64, f64)> = time
        .iter()
        .copied()
        .zip(values.iter().copied())
        .filter(|(t, _)| *t <= panel.time_span_s)
        .collect();
    log::info!(
        "exporting {:?} chart ({} points) to {}",
        panel.kind,
        data.len(),
        path.display()
    );
    match format {
        ExportFormat::Svg => {
            draw_chart(SVGBackend::new(path, size).into_drawing_area(), panel, &data)
        }
        ExportFormat::Png => {
            draw_chart(BitMapBackend::new(path, size).into_drawing_area(), panel, &data)
        }
    }
}

fn draw_chart<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    panel: &ChartPanel,
    data: &[(f64, f64)],
) -> Result<(), ExportError> {
    let text_color = RGBColor(40, 40, 40);
    let axis_color = RGBColor(120, 120, 120);
    let grid_color = RGBColor(225, 225, 225);
    let line_color = RGBColor(panel.color.0, panel.color.1, panel.color.2);

    root.fill(&WHITE).map_err(draw_error)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(&panel.title, ("sans-serif", 24).into_font().color(&text_color))
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(0f64..panel.time_span_s, 0f64..panel.axis_max)
        .map_err(draw_error)?;

    let span = panel.time_span_s;
    chart
        .draw_series(panel.y_ticks.iter().map(|tick| {
            PathElement::new(vec![(0.0, tick.value), (span, tick.value)], grid_color)
        }))
        .map_err(draw_error)?;
    chart
        .draw_series(panel.x_ticks.iter().map(|tick| {
            PathElement::new(vec![(tick.value, 0.0), (tick.value, panel.axis_max)], grid_color)
        }))
        .map_err(draw_error)?;
    chart
        .draw_series([
            PathElement::new(vec![(0.0, 0.0), (span, 0.0)], axis_color),
            PathElement::new(vec![(0.0, 0.0), (0.0, panel.axis_max)], axis_color),
        ])
        .map_err(draw_error)?;

    // Tick texts are the dashboard's own labels, placed at their plot positions.
    let label_font = ("sans-serif", 14).into_font().color(&text_color);
    let left = label_font.pos(Pos::new(HPos::Right, VPos::Center));
    for tick in &panel.y_ticks {
        let (x, y) = chart.backend_coord(&(0.0, tick.value));
        root.draw(&Text::new(tick.text.clone(), (x - 6, y), left.clone()))
            .map_err(draw_error)?;
    }
    let below = label_font.pos(Pos::new(HPos::Center, VPos::Top));
    for tick in &panel.x_ticks {
        let (x, y) = chart.backend_coord(&(tick.value, 0.0));
        root.draw(&Text::new(tick.text.clone(), (x, y + 6), below.clone()))
            .map_err(draw_error)?;
    }

    let stroke = panel.stroke_width.round().max(1.0) as u32;
    chart
        .draw_series(LineSeries::new(
            data.iter().copied(),
            line_color.stroke_width(stroke),
        ))
        .map_err(draw_error)?;

    root.present().map_err(draw_error)?;
    Ok(())
}

fn draw_error<E: std::fmt::Display>(err: E) -> ExportError {
    ExportError::Draw(err.to_string())
}
