// src/view_models.rs

/// Cómo pintar una opción después de responder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerMark {
    Neutral,
    Correct,
    Wrong,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerChoice {
    pub index: usize,
    pub text: String,
    pub mark: AnswerMark,
}

#[derive(Clone, Debug)]
pub struct QuestionView {
    pub number: usize, // 1-based
    pub total: usize,
    pub score: usize,
    pub percent: u8,
    pub text: String,
    pub choices: Vec<AnswerChoice>,
    pub answered: bool,
    pub feedback: Option<String>,
    pub is_last: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultView {
    pub score: usize,
    pub total: usize,
    pub percent: u8,
}

impl QuestionView {
    pub fn counter_label(&self) -> String {
        format!("Pregunta {} / {}", self.number, self.total)
    }

    pub fn score_label(&self) -> String {
        format!("Puntuación: {}", self.score)
    }

    pub fn next_label(&self) -> &'static str {
        if self.is_last { "Terminar" } else { "Siguiente" }
    }
}

impl ResultView {
    pub fn summary(&self) -> String {
        format!(
            "Has acertado {}/{} ({}%).",
            self.score, self.total, self.percent
        )
    }
}
