mod app;
mod color;
mod ui;

use aim_trends::config::Settings;
use app::AimTrendsApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let settings = Settings::from_env();
    log::debug!("Starting with {settings:?}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Aim Trends – Score History",
        options,
        Box::new(|_cc| Ok(Box::new(AimTrendsApp::new(settings)))),
    )
}
