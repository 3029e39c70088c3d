mod ui;

use clap::Parser;
use eframe::egui;

use crate::ui::SwotBoardApp;

/// Desktop rendition of the SWOT analysis board.
#[derive(Debug, Parser)]
#[command(name = "swot-board")]
struct Cli {
    /// Tracing env filter, e.g. `info` or `swot_core=debug`.
    #[arg(long, default_value = "info")]
    log_filter: String,
}

fn main() -> eframe::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(cli.log_filter)
        .init();
    tracing::info!("starting SWOT board");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("SWOT Analysis")
            .with_inner_size([480.0, 820.0])
            .with_min_inner_size([360.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "SWOT Analysis",
        options,
        Box::new(|_cc| Ok(Box::new(SwotBoardApp::new()))),
    )
}
