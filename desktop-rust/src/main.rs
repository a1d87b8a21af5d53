mod app;
mod io;
mod model;

use app::{configure_fonts, IdiomApp};
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([560.0, 780.0]),
        ..Default::default()
    };
    eframe::run_native(
        model::WINDOW_TITLE,
        options,
        Box::new(|cc| {
            configure_fonts(&cc.egui_ctx);
            Box::new(IdiomApp::default())
        }),
    )
}
