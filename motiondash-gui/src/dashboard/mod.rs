pub mod rendering;

pub use rendering::{render_chart, render_summary};

use motiondash_core::Rgb;

pub(crate) const CHART_HEIGHT: f32 = 220.0;

fn to_color32(color: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(color.0, color.1, color.2)
}
