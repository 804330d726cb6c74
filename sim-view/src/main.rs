//! Application entry point for the waterfall viewer.
//!
//! This binary sets up logging and eframe/egui, and delegates all
//! interactive logic and rendering to [`Viewer`] from the `viewer`
//! module.

mod viewer;

use viewer::Viewer;

/// Starts the native eframe application.
///
/// This function initializes `env_logger` (info level unless `RUST_LOG`
/// says otherwise), configures [`eframe::NativeOptions`] with default
/// settings and launches the main window titled `"Waterfall"`. All UI
/// state and rendering are handled by [`Viewer`].
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("starting waterfall viewer");

    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Waterfall",
        options,
        Box::new(|_cc| {
            // Construct the root app state for the viewer.
            Ok(Box::new(Viewer::new()))
        }),
    )
}
