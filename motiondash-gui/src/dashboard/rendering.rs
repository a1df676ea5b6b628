use crate::dashboard::to_color32;
use egui::{Align2, FontId, Pos2, Rect, RichText, Sense, Shape, Stroke, Vec2};
use motiondash_core::{ChartPanel, NormalizedPoint, Readout};

const Y_LABEL_GUTTER: f32 = 52.0;
const X_LABEL_GUTTER: f32 = 20.0;
const TICK_FONT_SIZE: f32 = 11.0;

/// Draws the readouts side by side, one framed card each.
pub fn render_summary(ui: &mut egui::Ui, readouts: &[Readout]) {
    if readouts.is_empty() {
        return;
    }
    ui.columns(readouts.len(), |columns| {
        for (column, readout) in columns.iter_mut().zip(readouts) {
            let fill = column.visuals().faint_bg_color;
            let label_color = column.visuals().weak_text_color();
            egui::Frame::group(column.style())
                .fill(fill)
                .show(column, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new(&readout.label).small().color(label_color));
                    ui.label(RichText::new(&readout.text).strong().size(18.0));
                });
        }
    });
}

/// Draws one chart panel: title, grid, tick labels and the series polyline.
pub fn render_chart(ui: &mut egui::Ui, panel: &ChartPanel, height: f32) {
    ui.label(RichText::new(&panel.title).strong());
    let (response, painter) =
        ui.allocate_painter(Vec2::new(ui.available_width(), height), Sense::hover());
    let outer = response.rect;
    let plot = Rect::from_min_max(
        Pos2::new(outer.left() + Y_LABEL_GUTTER, outer.top() + 6.0),
        Pos2::new(outer.right() - 8.0, outer.bottom() - X_LABEL_GUTTER),
    );

    let visuals = ui.visuals();
    let grid_stroke = Stroke::new(1.0, visuals.widgets.noninteractive.bg_stroke.color);
    let axis_stroke = Stroke::new(1.0, visuals.text_color());
    let tick_color = visuals.weak_text_color();

    let rows = panel.grid.rows.max(1);
    for row in 0..=rows {
        let y = plot.top() + plot.height() * row as f32 / rows as f32;
        painter.line_segment([Pos2::new(plot.left(), y), Pos2::new(plot.right(), y)], grid_stroke);
    }
    let cols = panel.grid.cols.max(1);
    for col in 0..=cols {
        let x = plot.left() + plot.width() * col as f32 / cols as f32;
        painter.line_segment([Pos2::new(x, plot.top()), Pos2::new(x, plot.bottom())], grid_stroke);
    }
    painter.line_segment([plot.left_top(), plot.left_bottom()], axis_stroke);
    painter.line_segment([plot.left_bottom(), plot.right_bottom()], axis_stroke);

    let y_steps = panel.y_ticks.len().saturating_sub(1).max(1) as f32;
    for (idx, tick) in panel.y_ticks.iter().enumerate() {
        let y = plot.top() + plot.height() * idx as f32 / y_steps;
        painter.text(
            Pos2::new(plot.left() - 6.0, y),
            Align2::RIGHT_CENTER,
            &tick.text,
            FontId::proportional(TICK_FONT_SIZE),
            tick_color,
        );
    }
    let x_steps = panel.x_ticks.len().saturating_sub(1).max(1) as f32;
    for (idx, tick) in panel.x_ticks.iter().enumerate() {
        let x = plot.left() + plot.width() * idx as f32 / x_steps;
        painter.text(
            Pos2::new(x, plot.bottom() + 4.0),
            Align2::CENTER_TOP,
            &tick.text,
            FontId::proportional(TICK_FONT_SIZE),
            tick_color,
        );
    }

    let color = to_color32(panel.color);
    let clipped = painter.with_clip_rect(plot);
    let points: Vec<Pos2> = panel.path.points().map(|p| map_point(plot, p)).collect();
    match points.len() {
        0 => {}
        1 => {
            clipped.circle_filled(points[0], panel.stroke_width, color);
        }
        _ => {
            clipped.add(Shape::line(points, Stroke::new(panel.stroke_width, color)));
        }
    }
}

/// Scales a 0-100 point into `rect`, keeping screen orientation.
pub fn map_point(rect: Rect, point: NormalizedPoint) -> Pos2 {
    Pos2::new(
        rect.left() + rect.width() * (point.x / 100.0) as f32,
        rect.top() + rect.height() * (point.y / 100.0) as f32,
    )
}
