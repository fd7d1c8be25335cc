use std::{
    fs,
    sync::Arc,
};

use eframe::egui;

const USER_FONT: &str = "user_cjk";

/// Registers the font at `path` ahead of the egui defaults so Japanese text
/// renders. A missing or unreadable file leaves the defaults in place.
pub fn install_font(ctx: &egui::Context, path: &str) {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("Failed to read font {}: {}", path, e);
            return;
        }
    };

    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(USER_FONT.to_owned(), Arc::new(egui::FontData::from_owned(bytes)));

    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, USER_FONT.to_owned());
    fonts.families.entry(egui::FontFamily::Monospace).or_default().push(USER_FONT.to_owned());

    ctx.set_fonts(fonts);
    log::info!("Loaded font {}", path);
}
