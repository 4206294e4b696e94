//! FileFixr — cleans file and directory names for cross-platform use.
//!
//! Thin binary entry point. All logic lives in the `filefixr-core`
//! and `filefixr-gui` crates.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("FileFixr starting");

    // Load settings before opening the window so the first frame already
    // shows the remembered directories.
    let state = filefixr_gui::FileFixrState::build();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("FileFixr")
            .with_inner_size([640.0, 520.0])
            .with_min_inner_size([480.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "FileFixr",
        options,
        Box::new(|cc| Ok(Box::new(filefixr_gui::FileFixrApp::with_state(cc, state)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
