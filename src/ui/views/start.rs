use crate::QuizApp;
use crate::model::SourceKind;
use crate::ui::helpers::big_button;
use crate::ui::layout::centered_panel;
use egui::{ComboBox, Context, Key, RichText, Spinner};

pub fn ui_start(app: &mut QuizApp, ctx: &Context) {
    // Enter en la pantalla de inicio empieza el quiz si no hay carga en curso
    if ctx.input(|i| i.key_pressed(Key::Enter)) && !app.is_loading() {
        app.start_quiz();
        return;
    }

    centered_panel(ctx, 260.0, 480.0, |ui| {
        ui.heading("🧠 Quiz de opción múltiple");
        ui.add_space(12.0);
        ui.label("Elige de dónde salen las preguntas:");
        ui.add_space(6.0);

        ui.add_enabled_ui(!app.is_loading(), |ui| {
            ComboBox::from_id_salt("source_select")
                .selected_text(app.source.label())
                .show_ui(ui, |ui| {
                    for kind in [SourceKind::Builtin, SourceKind::Online] {
                        ui.selectable_value(&mut app.source, kind, kind.label());
                    }
                });
        });

        ui.add_space(16.0);
        let btn_w = (ui.available_width() * 0.8).clamp(120.0, 320.0);
        let start = big_button(ui, "▶ Empezar", btn_w, 40.0, !app.is_loading());
        if app.pending_focus {
            start.request_focus();
            app.pending_focus = false;
        }
        if start.clicked() {
            app.start_quiz();
        }

        ui.add_space(10.0);
        if app.is_loading() {
            ui.add(Spinner::new());
        }
        if !app.message.is_empty() {
            ui.label(RichText::new(&app.message).italics());
        }
    });
}
