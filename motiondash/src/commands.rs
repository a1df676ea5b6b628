use clap::{Parser, Subcommand, ValueEnum};
use motiondash_core::ChartKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "motiondash", version, about = "Motion dashboard renderer")]
pub struct Cli {
    /// Dashboard settings (TOML)
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the rendered dashboard for a sample file
    Render {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Write one chart as an SVG or PNG image
    Export {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_enum)]
        chart: ChartArg,
        #[arg(long)]
        output: PathBuf,
        #[arg(long, default_value_t = 1200)]
        width: u32,
        #[arg(long, default_value_t = 700)]
        height: u32,
    },
    /// Open the dashboard window (default)
    Gui {
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartArg {
    Distance,
    Speed,
}

impl From<ChartArg> for ChartKind {
    fn from(arg: ChartArg) -> Self {
        match arg {
            ChartArg::Distance => ChartKind::Distance,
            ChartArg::Speed => ChartKind::Speed,
        }
    }
}
