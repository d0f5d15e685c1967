//! Tessera desktop application using egui/eframe.

use clap::Parser as _;
use tessera_app::{Args, TesseraApp};

fn main() -> eframe::Result<()> {
    const APP_ID: &str = "io.github.gifnksm.tessera";

    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    log::info!(
        "starting Tessera (completion delay {} ms)",
        args.completion_delay_ms
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_inner_size((960.0, 540.0))
            .with_min_inner_size((560.0, 320.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Tessera",
        options,
        Box::new(move |cc| Ok(Box::new(TesseraApp::new(cc, &args)))),
    )
}
