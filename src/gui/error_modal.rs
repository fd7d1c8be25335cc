use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorAction {
    Dismiss,
    Retry,
}

#[derive(Default, Clone)]
struct ErrorData {
    title: String,
    message: String,
    details: Option<String>,
    retryable: bool,
}

/// Non-fatal failures: a failed load (which can be retried) or a failed save.
pub struct ErrorModal {
    open: bool,
    data: ErrorData,
}

impl ErrorModal {
    pub fn new() -> Self {
        Self { open: false, data: ErrorData::default() }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn show_error(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        details: Option<String>,
        retryable: bool,
    ) {
        self.data = ErrorData { title: title.into(), message: message.into(), details, retryable };
        self.open = true;
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<ErrorAction> {
        if !self.open {
            return None;
        }

        let mut action = None;
        let modal = egui::Modal::new(egui::Id::new("error_modal")).show(ctx, |ui| {
            ui.set_width(420.0);

            let warn_color = ui.visuals().warn_fg_color;
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("⚠").size(22.0).color(warn_color));
                ui.label(egui::RichText::new(&self.data.title).size(18.0).strong());
            });

            ui.add_space(8.0);
            ui.label(&self.data.message);

            if let Some(details) = &self.data.details {
                ui.add_space(8.0);
                ui.collapsing("詳細", |ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut details.as_str())
                            .desired_width(f32::INFINITY)
                            .desired_rows(3)
                            .code_editor(),
                    );
                });
            }

            ui.add_space(12.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("OK").clicked() {
                    action = Some(ErrorAction::Dismiss);
                }
                if self.data.retryable && ui.button("再試行").clicked() {
                    action = Some(ErrorAction::Retry);
                }
            });
        });

        if modal.should_close() && action.is_none() {
            action = Some(ErrorAction::Dismiss);
        }
        if action.is_some() {
            self.open = false;
            self.data = ErrorData::default();
        }
        action
    }
}

impl Default for ErrorModal {
    fn default() -> Self {
        Self::new()
    }
}
