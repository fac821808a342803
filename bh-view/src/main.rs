//! Binary entry point: opens the window and hands control to the viewer.

mod viewer;

use viewer::Viewer;

/// Launches the animation in a native window.
///
/// Everything interesting — input, simulation phases, painting — lives in
/// [`Viewer`]; this function only picks the window options and title.
///
/// ### Returns
/// - `Ok(())` once the window is closed normally.
/// - `Err` if the native window or event loop cannot be created, which is
///   the one unrecoverable failure this program has.
fn main() -> eframe::Result<()> {
    eframe::run_native(
        "Black Hole",
        eframe::NativeOptions::default(),
        Box::new(|_cc| Ok(Box::new(Viewer::new()))),
    )
}
