use eframe::egui;

use crate::{
    core::http::is_remote,
    gui::settings::SettingsData,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TopBarAction {
    ToggleTheme,
    Zoom(f32),
}

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        settings: &SettingsData,
        card_count: Option<usize>,
    ) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("ファイル", |ui| {
                    if ui.button("終了").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("表示", |ui| {
                    let theme_label =
                        if settings.dark_mode { "ライトモード" } else { "ダークモード" };
                    if ui.button(theme_label).clicked() {
                        action = Some(TopBarAction::ToggleTheme);
                    }
                    if ui.button("拡大").clicked() {
                        action = Some(TopBarAction::Zoom(settings.zoom + 0.1));
                    }
                    if ui.button("縮小").clicked() {
                        action = Some(TopBarAction::Zoom(settings.zoom - 0.1));
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_source_indicator(ui, settings, card_count);
                });
            });
        });

        action
    }

    fn show_source_indicator(
        ui: &mut egui::Ui,
        settings: &SettingsData,
        card_count: Option<usize>,
    ) {
        let (color, text) = match card_count {
            Some(count) => (egui::Color32::from_rgb(0, 200, 0), format!("{} 枚", count)),
            None => (egui::Color32::from_rgb(200, 80, 80), "未読み込み".to_string()),
        };
        let origin =
            if is_remote(&settings.source) { "スプレッドシート" } else { "ローカルファイル" };

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.small(text).on_hover_text(&settings.source);
            ui.small(egui::RichText::new("●").color(color)).on_hover_text(origin);
        });
    }
}
