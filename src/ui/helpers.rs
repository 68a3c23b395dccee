// src/ui/helpers.rs
use crate::view_models::{AnswerChoice, AnswerMark};
use egui::{Button, Color32, Response, RichText, Ui, Vec2};

pub fn big_button(ui: &mut Ui, label: &str, width: f32, height: f32, enabled: bool) -> Response {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
}

/// Botón de respuesta. Tras responder queda bloqueado y coloreado:
/// verde la correcta, rojo la elegida si falló.
pub fn answer_button(ui: &mut Ui, choice: &AnswerChoice, width: f32, locked: bool) -> bool {
    let (fill, text) = match choice.mark {
        AnswerMark::Correct => (
            Some(Color32::from_rgb(30, 120, 60)),
            RichText::new(&choice.text).color(Color32::WHITE).strong(),
        ),
        AnswerMark::Wrong => (
            Some(Color32::from_rgb(150, 40, 40)),
            RichText::new(&choice.text).color(Color32::WHITE),
        ),
        AnswerMark::Neutral => (None, RichText::new(&choice.text)),
    };

    let mut button = Button::new(text).min_size(Vec2::new(width, 40.0));
    if let Some(color) = fill {
        button = button.fill(color);
    }

    ui.add_enabled(!locked, button).clicked()
}
