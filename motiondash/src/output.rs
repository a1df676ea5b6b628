use motiondash_core::{ChartPanel, DashboardView, TickLabel};

pub fn print_info(message: &str) {
    println!("[motiondash][INFO] {message}");
}

pub fn print_error(message: &str) {
    eprintln!("[motiondash][ERROR]: {message}");
}

pub fn print_dashboard(view: &DashboardView) {
    for readout in &view.summary {
        println!("{}: {}", readout.label, readout.text);
    }
    for chart in &view.charts {
        println!();
        print_chart(chart);
    }
}

fn print_chart(chart: &ChartPanel) {
    println!("{}", chart.title);
    println!("\ty: {}", tick_row(&chart.y_ticks));
    println!("\tx: {}", tick_row(&chart.x_ticks));
    if chart.path.is_empty() {
        println!("\tpath: (empty)");
    } else {
        println!("\tpath: {}", chart.path);
    }
}

fn tick_row(ticks: &[TickLabel]) -> String {
    ticks
        .iter()
        .map(|tick| tick.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn print_json(view: &DashboardView) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(view)?);
    Ok(())
}
