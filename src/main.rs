#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

// When compiling natively:
fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 380.0])
            .with_min_inner_size([600.0, 340.0])
            .with_title("Shape Drawer"),
        ..Default::default()
    };
    eframe::run_native(
        "Shape Drawer",
        native_options,
        Box::new(|cc| Ok(Box::new(shape_drawer::ShapeDrawerApp::new(cc)))),
    )
}
