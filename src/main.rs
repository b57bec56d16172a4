//! Cubic AI Engine GUI
//!
//! A graphical interface for playing 4x4x4 tic-tac-toe against the AI or
//! another player.

use cubic::ui::CubicApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([860.0, 620.0])
            .with_title("Cubic - 4x4x4 Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Cubic",
        options,
        Box::new(|cc| Ok(Box::new(CubicApp::new(cc)))),
    )
}
