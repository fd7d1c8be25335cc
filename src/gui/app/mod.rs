mod fonts;

use eframe::egui;

use super::{
    actions::ActionQueue,
    card_panel::{
        card_panel,
        handle_shortcuts,
    },
    error_modal::{
        ErrorAction,
        ErrorModal,
    },
    message_overlay::MessageOverlay,
    settings::{
        data::SETTINGS_FILE,
        SettingsData,
    },
    theme::{
        set_theme,
        Theme,
    },
    top_bar::{
        TopBar,
        TopBarAction,
    },
};
use crate::{
    core::{
        tasks::{
            TaskManager,
            TaskResult,
        },
        CardView,
        StudyFilter,
        StudySession,
    },
    persistence::{
        save_json,
        JsonFileStatusStorage,
    },
};

const MIN_ZOOM: f32 = 0.5;
const MAX_ZOOM: f32 = 3.0;

pub struct KiokuApp {
    // Deck
    pub session: Option<StudySession>,

    // Configuration
    pub settings_data: SettingsData,

    // UI State
    pub theme: Theme,
    pub message_overlay: MessageOverlay,
    pub error_modal: ErrorModal,
    actions: ActionQueue,

    task_manager: TaskManager,
}

impl KiokuApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings_data: SettingsData,
        task_manager: TaskManager,
    ) -> Self {
        let app = Self {
            session: None,
            settings_data,
            theme: Theme::default(),
            message_overlay: MessageOverlay::new(),
            error_modal: ErrorModal::new(),
            actions: ActionQueue::new(),
            task_manager,
        };

        if let Some(path) = &app.settings_data.font_path {
            fonts::install_font(&cc.egui_ctx, path);
        }
        set_theme(&cc.egui_ctx, &app.theme);
        app.apply_view_settings(&cc.egui_ctx);

        app.load_deck();
        app
    }

    fn load_deck(&self) {
        let storage = JsonFileStatusStorage::in_app_data(&self.settings_data.statuses_file);
        log::info!("Statuses are stored in {}", storage.path().display());
        self.task_manager.load_deck(self.settings_data.source.clone(), Box::new(storage));
    }

    fn apply_view_settings(&self, ctx: &egui::Context) {
        ctx.set_theme(if self.settings_data.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });
        ctx.set_zoom_factor(self.settings_data.zoom);
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        log::debug!("Task finished: {}", result.task_type());
        match result {
            TaskResult::LoadingMessage(message) => self.message_overlay.set_message(message),
            TaskResult::DeckLoaded(Ok(session)) => {
                self.message_overlay.clear_message();
                self.session = Some(session);
            }
            TaskResult::DeckLoaded(Err(error)) => {
                self.message_overlay.clear_message();
                self.error_modal.show_error(
                    "単語リストを読み込めませんでした",
                    format!("読み込み元: {}", self.settings_data.source),
                    Some(error),
                    true,
                );
            }
        }
    }

    fn apply_actions(&mut self) {
        let Some(session) = &mut self.session else {
            self.actions.clear();
            return;
        };

        for action in self.actions.drain() {
            if let Err(e) = session.dispatch(action) {
                self.error_modal.show_error(
                    "状態を保存できませんでした",
                    "変更はこのセッション中は有効ですが、次回起動時には失われます。",
                    Some(e.to_string()),
                    false,
                );
            }
        }
    }

    fn handle_top_bar_action(&mut self, action: TopBarAction, ctx: &egui::Context) {
        match action {
            TopBarAction::ToggleTheme => {
                self.settings_data.dark_mode = !self.settings_data.dark_mode;
            }
            TopBarAction::Zoom(zoom) => {
                self.settings_data.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
            }
        }
        self.apply_view_settings(ctx);
        self.save_settings();
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings_data, SETTINGS_FILE) {
            log::error!("Failed to save settings: {}", e);
        }
    }
}

impl eframe::App for KiokuApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        let card_count = self.session.as_ref().map(|s| s.store().len());
        if let Some(action) = TopBar::show(ctx, &self.settings_data, card_count) {
            self.handle_top_bar_action(action, ctx);
        }

        let (view, filter) = match &self.session {
            Some(session) => (session.current_view(), session.active_filter()),
            None => (CardView::empty(), StudyFilter::All),
        };

        if !self.message_overlay.active && !self.error_modal.is_open() {
            handle_shortcuts(ctx, &mut self.actions);
        }
        card_panel(ctx, &view, filter, &self.theme, &mut self.actions);
        self.apply_actions();

        self.message_overlay.show(ctx, &self.theme);

        if let Some(ErrorAction::Retry) = self.error_modal.show(ctx) {
            self.message_overlay.set_message("再試行中...".to_string());
            self.load_deck();
        }

        if self.message_overlay.active {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
