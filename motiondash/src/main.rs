use clap::Parser;
use motiondash_core::{render_dashboard, ChartKind, DashboardSettings, MotionSamples};
use motiondash_gui::export::export_chart;
use motiondash_gui::{run_gui, GuiConfig};
use std::error::Error;
use std::path::Path;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{Cli, Commands, OutputFormat};
use output::{print_dashboard, print_error, print_info, print_json};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli).inspect_err(|err| print_error(&err.to_string()))
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let settings = load_settings(cli.settings.as_deref())?;
    match cli.command {
        None => run_gui(GuiConfig::default(), settings, None)?,
        Some(Commands::Gui { input }) => run_gui(GuiConfig::default(), settings, input)?,
        Some(Commands::Render { input, format }) => {
            let samples = MotionSamples::load_from_file(&input)?;
            let view = render_dashboard(&samples, &settings)?;
            match format {
                OutputFormat::Text => print_dashboard(&view),
                OutputFormat::Json => print_json(&view)?,
            }
        }
        Some(Commands::Export {
            input,
            chart,
            output,
            width,
            height,
        }) => {
            let samples = MotionSamples::load_from_file(&input)?;
            let view = render_dashboard(&samples, &settings)?;
            let kind = ChartKind::from(chart);
            let panel = view
                .chart(kind)
                .ok_or_else(|| format!("no {kind:?} chart in the rendered view"))?;
            export_chart(&samples, panel, &output, (width, height))?;
            print_info(&format!("Chart written to {}", output.display()));
        }
    }
    Ok(())
}

fn load_settings(path: Option<&Path>) -> Result<DashboardSettings, Box<dyn Error>> {
    match path {
        Some(path) => {
            log::info!("using settings from {}", path.display());
            Ok(DashboardSettings::load_from_file(path)?)
        }
        None => Ok(DashboardSettings::default()),
    }
}
