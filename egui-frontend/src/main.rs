use eframe::egui;
use log::{error, info};

mod backend;
mod ui;

use shared::TrackerConfig;
use ui::app_state::FinanceControlApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting Financial Control egui application");

    let config = TrackerConfig::default();
    let app_id = config.window_title.clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([800.0, 600.0])
            .with_title(config.window_title.clone())
            .with_resizable(true),
        ..Default::default()
    };

    // Run the application
    info!("Launching egui window");
    eframe::run_native(
        &app_id,
        options,
        Box::new(move |cc| {
            // Window state persistence, when the platform provides it
            if let Some(_storage) = cc.storage {
                info!("Persistence storage available");
            }

            match FinanceControlApp::new(cc, config) {
                Ok(app) => {
                    info!("Successfully initialized Financial Control app");
                    Ok(Box::new(app))
                }
                Err(e) => {
                    error!("Failed to initialize app: {}", e);
                    // Convert anyhow::Error to eframe::Error
                    Err(format!("Failed to initialize app: {}", e).into())
                }
            }
        }),
    )
}
