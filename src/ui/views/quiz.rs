use crate::QuizApp;
use crate::ui::helpers::{answer_button, big_button};
use crate::ui::layout::centered_panel;
use egui::{Context, ProgressBar, RichText};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let Some(view) = app.question_view() else {
        // Sin pregunta activa no hay nada que pintar en esta pantalla
        app.restart_quiz();
        return;
    };

    centered_panel(ctx, 420.0, 650.0, |ui| {
        let panel_width = ui.available_width();

        ui.add(
            ProgressBar::new(f32::from(view.percent) / 100.0)
                .desired_width(panel_width)
                .text(format!("{}%", view.percent)),
        );
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            ui.label(view.counter_label());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(view.score_label());
            });
        });
        ui.add_space(12.0);

        ui.label(RichText::new(&view.text).heading());
        ui.add_space(12.0);

        let mut chosen = None;
        for choice in &view.choices {
            if answer_button(ui, choice, panel_width, view.answered) {
                chosen = Some(choice.index);
            }
            ui.add_space(4.0);
        }
        if let Some(index) = chosen {
            app.select_answer(index);
        }

        ui.add_space(8.0);
        if let Some(feedback) = &view.feedback {
            ui.label(RichText::new(feedback).strong());
        }

        ui.add_space(8.0);
        let next = big_button(ui, view.next_label(), panel_width / 2.0, 36.0, view.answered);
        if view.answered && app.pending_focus {
            next.request_focus();
            app.pending_focus = false;
        }
        if next.clicked() {
            app.next_question();
        }

        if !app.message.is_empty() {
            ui.add_space(6.0);
            ui.small(&app.message);
        }
    });
}
