#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use kioku::{
    core::tasks::TaskManager,
    gui::{
        settings::data::SETTINGS_FILE,
        KiokuApp,
        SettingsData,
    },
    persistence::load_json_or_default,
};

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = load_json_or_default::<SettingsData>(SETTINGS_FILE).with_env_overrides();
    log::info!("Word list source: {}", settings.source);

    let task_manager = match TaskManager::new() {
        Ok(manager) => manager,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Kioku")
            .with_inner_size([720.0, 640.0])
            .with_min_inner_size([480.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Kioku",
        options,
        Box::new(|cc| Ok(Box::new(KiokuApp::new(cc, settings, task_manager)))),
    )
}
