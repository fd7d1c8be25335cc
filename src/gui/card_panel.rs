use eframe::egui::{
    self,
    RichText,
};

use crate::{
    core::{
        CardView,
        LearningStatus,
        Side,
        StudyAction,
        StudyFilter,
    },
    gui::{
        actions::ActionQueue,
        theme::Theme,
    },
};

const CARD_HEIGHT: f32 = 220.0;

/// Maps keyboard shortcuts to intents.
pub fn handle_shortcuts(ctx: &egui::Context, actions: &mut ActionQueue) {
    if ctx.wants_keyboard_input() {
        return;
    }

    ctx.input(|input| {
        let bindings = [
            (egui::Key::Space, StudyAction::Flip),
            (egui::Key::ArrowRight, StudyAction::Next),
            (egui::Key::ArrowLeft, StudyAction::Prev),
            (egui::Key::S, StudyAction::Shuffle),
            (egui::Key::Num1, StudyAction::SetStatus(LearningStatus::LearnableProduction)),
            (egui::Key::Num2, StudyAction::SetStatus(LearningStatus::Memorized)),
            (egui::Key::Num3, StudyAction::SetStatus(LearningStatus::Unknown)),
        ];
        for (key, action) in bindings {
            if input.key_pressed(key) {
                actions.push(action);
            }
        }
    });
}

pub fn card_panel(
    ctx: &egui::Context,
    view: &CardView,
    active_filter: StudyFilter,
    theme: &Theme,
    actions: &mut ActionQueue,
) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(12.0);
            filter_bar(ui, active_filter, actions);
            ui.add_space(16.0);

            let number = view.card_id.map(|id| format!("No.{}", id)).unwrap_or_default();
            ui.label(RichText::new(number).color(theme.comment(ctx)));

            card_face(ui, view, theme, actions);

            ui.add_space(8.0);
            ui.label(RichText::new(format!("{} / {}", view.ordinal, view.total)).size(16.0));
            ui.label(
                RichText::new(format!("状態：{}", view.status_label))
                    .color(theme.status_color(ctx, view.status)),
            );

            ui.add_space(12.0);
            navigation_bar(ui, view, actions);
            ui.add_space(8.0);
            status_bar(ui, view, actions);
        });
    });
}

fn card_face(ui: &mut egui::Ui, view: &CardView, theme: &Theme, actions: &mut ActionQueue) {
    let text_color = match view.side {
        Side::Front => ui.visuals().strong_text_color(),
        Side::Back => theme.back_side(ui.ctx()),
    };
    let width = ui.available_width().min(520.0);

    let frame = egui::Frame::group(ui.style())
        .fill(theme.card_fill(ui.ctx()))
        .corner_radius(12.0)
        .inner_margin(egui::Margin::same(16));

    let response = frame
        .show(ui, |ui| {
            ui.set_min_size(egui::vec2(width, CARD_HEIGHT));
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new(&view.text).size(36.0).color(text_color));
            });
        })
        .response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand);

    if response.clicked() && !view.is_empty() {
        actions.push(StudyAction::Flip);
    }
}

fn filter_bar(ui: &mut egui::Ui, active_filter: StudyFilter, actions: &mut ActionQueue) {
    ui.horizontal(|ui| {
        for filter in StudyFilter::ALL {
            if ui.selectable_label(filter == active_filter, filter.label()).clicked()
                && filter != active_filter
            {
                actions.push(StudyAction::ChangeFilter(filter));
            }
        }
    });
}

fn navigation_bar(ui: &mut egui::Ui, view: &CardView, actions: &mut ActionQueue) {
    let enabled = !view.is_empty();
    ui.horizontal(|ui| {
        if ui.add_enabled(enabled, egui::Button::new("◀ 前へ")).clicked() {
            actions.push(StudyAction::Prev);
        }
        if ui.add_enabled(enabled, egui::Button::new("シャッフル")).clicked() {
            actions.push(StudyAction::Shuffle);
        }
        if ui.add_enabled(enabled, egui::Button::new("次へ ▶")).clicked() {
            actions.push(StudyAction::Next);
        }
    });
}

fn status_bar(ui: &mut egui::Ui, view: &CardView, actions: &mut ActionQueue) {
    let enabled = !view.is_empty();
    ui.horizontal(|ui| {
        for status in LearningStatus::ALL {
            let selected = view.status == Some(status.status());
            let button = egui::Button::new(status.label()).selected(selected);
            if ui.add_enabled(enabled, button).clicked() {
                actions.push(StudyAction::SetStatus(status));
            }
        }
    });
}
