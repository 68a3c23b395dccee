mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::AppState;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;
use layout::top_panel;
use std::time::Duration;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Resultado de la descarga online, si ya llegó
        self.poll_pending_load();
        if self.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        // BOTÓN SUPERIOR DE REINICIAR (solo durante el quiz y el resultado)
        if matches!(self.state, AppState::Quiz | AppState::Result) {
            top_panel(self, ctx);
        }

        match self.state {
            AppState::Start => views::start::ui_start(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Result => views::result::ui_result(self, ctx),
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, self);
    }
}
