use eframe::egui;
use motiondash_core::{ChartKind, Dashboard, DashboardSettings, DashboardView, MotionError};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

mod dashboard;
pub mod export;
pub mod source;

use dashboard::{render_chart, render_summary, CHART_HEIGHT};
use export::{export_chart, DEFAULT_EXPORT_SIZE};
use source::SampleSource;

#[derive(Debug, Clone)]
pub struct GuiConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub poll_interval: Duration,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            title: "Motion Dashboard".to_string(),
            width: 1024.0,
            height: 600.0,
            poll_interval: Duration::from_millis(250),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum GuiError {
    #[error("gui error: {0}")]
    Gui(String),
    #[error(transparent)]
    Settings(#[from] MotionError),
}

/// Opens the dashboard window and blocks until it is closed.
///
/// With an `input` file the window follows it, re-rendering whenever the
/// producer rewrites it; without one the dashboard shows an empty run.
pub fn run_gui(
    config: GuiConfig,
    settings: DashboardSettings,
    input: Option<PathBuf>,
) -> Result<(), GuiError> {
    let dashboard = Dashboard::new(settings)?;
    let source = match input {
        Some(path) => SampleSource::from_file(path),
        None => SampleSource::empty(),
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([config.width, config.height]),
        ..Default::default()
    };
    let poll_interval = config.poll_interval;

    eframe::run_native(
        &config.title,
        options,
        Box::new(move |_cc| Box::new(DashboardApp::new(dashboard, source, poll_interval))),
    )
    .map_err(|err| GuiError::Gui(err.to_string()))
}

struct DashboardApp {
    dashboard: Dashboard,
    source: SampleSource,
    view: DashboardView,
    poll_interval: Duration,
    last_poll: Instant,
    export_dialog_rx: Option<Receiver<(ChartKind, Option<PathBuf>)>>,
    status: String,
}

impl DashboardApp {
    fn new(mut dashboard: Dashboard, source: SampleSource, poll_interval: Duration) -> Self {
        let view = dashboard.render(source.samples());
        Self {
            dashboard,
            source,
            view,
            poll_interval,
            last_poll: Instant::now(),
            export_dialog_rx: None,
            status: String::new(),
        }
    }

    fn poll_source(&mut self) {
        if self.last_poll.elapsed() < self.poll_interval {
            return;
        }
        self.last_poll = Instant::now();
        if self.source.poll() {
            self.view = self.dashboard.render(self.source.samples());
        }
    }

    fn open_export_dialog(&mut self, kind: ChartKind) {
        if self.export_dialog_rx.is_some() {
            return;
        }
        let (tx, rx) = mpsc::channel();
        self.export_dialog_rx = Some(rx);
        let file_name = match kind {
            ChartKind::Distance => "distance.svg",
            ChartKind::Speed => "speed.svg",
        };
        std::thread::spawn(move || {
            let file = rfd::FileDialog::new()
                .add_filter("SVG image", &["svg"])
                .add_filter("PNG image", &["png"])
                .set_file_name(file_name)
                .save_file();
            let _ = tx.send((kind, file));
        });
    }

    fn poll_export_dialog(&mut self) {
        let result = match &self.export_dialog_rx {
            Some(rx) => rx.try_recv().ok(),
            None => None,
        };
        let Some((kind, selection)) = result else {
            return;
        };
        self.export_dialog_rx = None;
        let (Some(path), Some(panel)) = (selection, self.view.chart(kind)) else {
            return;
        };
        self.status = match export_chart(self.source.samples(), panel, &path, DEFAULT_EXPORT_SIZE)
        {
            Ok(()) => format!("Exported {}", path.display()),
            Err(err) => {
                log::error!("chart export failed: {err}");
                format!("Export failed: {err}")
            }
        };
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_source();
        self.poll_export_dialog();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                match self.source.path() {
                    Some(path) => ui.label(format!("Source: {}", path.display())),
                    None => ui.label("No sample file"),
                };
                if let Some(err) = self.source.last_error() {
                    ui.colored_label(ui.visuals().error_fg_color, err);
                } else if !self.status.is_empty() {
                    ui.label(&self.status);
                }
            });
        });

        let mut export_request = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            render_summary(ui, &self.view.summary);
            ui.add_space(12.0);
            ui.columns(self.view.charts.len().max(1), |columns| {
                for (column, panel) in columns.iter_mut().zip(&self.view.charts) {
                    render_chart(column, panel, CHART_HEIGHT);
                    if column.small_button("Export…").clicked() {
                        export_request = Some(panel.kind);
                    }
                }
            });
        });
        if let Some(kind) = export_request {
            self.open_export_dialog(kind);
        }

        ctx.request_repaint_after(self.poll_interval);
    }
}
