use crate::QuizApp;
use crate::ui::helpers::big_button;
use crate::ui::layout::centered_panel;
use egui::{Context, ProgressBar, RichText};

pub fn ui_result(app: &mut QuizApp, ctx: &Context) {
    let result = app.result_view();

    centered_panel(ctx, 220.0, 420.0, |ui| {
        ui.add(ProgressBar::new(1.0).text("100%"));
        ui.add_space(12.0);
        ui.heading("¡Fin del quiz!");
        ui.add_space(8.0);
        ui.label(RichText::new(result.summary()).size(18.0));
        ui.add_space(16.0);

        let btn_w = (ui.available_width() * 0.6).clamp(120.0, 260.0);
        let restart = big_button(ui, "🔄 Volver a empezar", btn_w, 36.0, true);
        if app.pending_focus {
            restart.request_focus();
            app.pending_focus = false;
        }
        if restart.clicked() {
            app.restart_quiz();
        }
    });
}
