//! Máquina de estados de una partida: `NotStarted → InProgress → Finished`.
//!
//! Dentro de `InProgress` cada posición pasa de "sin responder" a "respondida"
//! una sola vez. Las operaciones fuera de secuencia no fallan: se ignoran, para
//! tolerar dobles clics de la interfaz.

use crate::model::{ANSWERS_PER_QUESTION, Question, QuestionSet};
use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("no hay preguntas para empezar el quiz")]
    EmptyQuestionSet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    NotStarted,
    InProgress,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    pub order: Vec<usize>,
    pub current_position: usize,
    pub score: usize,
    pub answered_current: bool,
}

/// Resultado de una respuesta aceptada, para pintar aciertos y fallos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub chosen_index: usize,
    pub correct_index: usize,
    pub is_correct: bool,
    pub correct_answer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Llamada sin haber respondido (o fuera de partida).
    Ignored,
    Next { position: usize },
    Finished { score: usize, total: usize },
}

#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    questions: QuestionSet,
    state: SessionState,
    phase: SessionPhase,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empieza una partida con un orden aleatorio estable hasta el final.
    /// Con un conjunto vacío no cambia nada.
    pub fn start<R: Rng + ?Sized>(
        &mut self,
        questions: QuestionSet,
        rng: &mut R,
    ) -> Result<(), SessionError> {
        if questions.is_empty() {
            return Err(SessionError::EmptyQuestionSet);
        }

        let mut order: Vec<usize> = (0..questions.len()).collect();
        order.shuffle(rng);

        self.questions = questions;
        self.state = SessionState {
            order,
            current_position: 0,
            score: 0,
            answered_current: false,
        };
        self.phase = SessionPhase::InProgress;
        log::debug!("quiz iniciado con {} preguntas", self.total());
        Ok(())
    }

    /// Corrige la respuesta de la posición actual. `None` si ya estaba
    /// respondida, si no hay partida o si el índice no existe.
    pub fn submit_answer(&mut self, chosen_index: usize) -> Option<AnswerOutcome> {
        if self.phase != SessionPhase::InProgress || self.state.answered_current {
            return None;
        }
        if chosen_index >= ANSWERS_PER_QUESTION {
            log::warn!("respuesta {chosen_index} ignorada: fuera de rango");
            return None;
        }

        let question = self.current_question()?;
        let is_correct = question.is_correct(chosen_index);
        let outcome = AnswerOutcome {
            chosen_index,
            correct_index: question.correct_index(),
            is_correct,
            correct_answer: question.correct_answer().to_string(),
        };

        if is_correct {
            self.state.score += 1;
        }
        self.state.answered_current = true;
        Some(outcome)
    }

    pub fn advance(&mut self) -> AdvanceOutcome {
        if self.phase != SessionPhase::InProgress || !self.state.answered_current {
            return AdvanceOutcome::Ignored;
        }

        if self.is_last() {
            self.state.current_position = self.total();
            self.state.answered_current = false;
            self.phase = SessionPhase::Finished;
            log::debug!("quiz terminado: {}/{}", self.state.score, self.total());
            return AdvanceOutcome::Finished {
                score: self.state.score,
                total: self.total(),
            };
        }

        self.state.current_position += 1;
        self.state.answered_current = false;
        AdvanceOutcome::Next {
            position: self.state.current_position,
        }
    }

    /// Vuelve a `NotStarted` desde cualquier estado, sin conservar nada.
    pub fn restart(&mut self) {
        *self = Self::default();
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn score(&self) -> usize {
        self.state.score
    }

    pub fn total(&self) -> usize {
        self.state.order.len()
    }

    pub fn position(&self) -> usize {
        self.state.current_position
    }

    pub fn is_answered(&self) -> bool {
        self.state.answered_current
    }

    /// Preguntas ya contestadas (incluye la actual si está respondida).
    pub fn attempted(&self) -> usize {
        self.state.current_position + usize::from(self.state.answered_current)
    }

    pub fn is_last(&self) -> bool {
        self.phase == SessionPhase::InProgress
            && self.state.current_position + 1 == self.total()
    }

    pub fn current_question(&self) -> Option<&Question> {
        if self.phase != SessionPhase::InProgress {
            return None;
        }
        let idx = *self.state.order.get(self.state.current_position)?;
        self.questions.get(idx)
    }

    /// Número "humano" de la pregunta actual (1-based), acotado al total.
    pub fn question_number(&self) -> usize {
        (self.state.current_position + 1).min(self.total())
    }

    pub fn percent_complete(&self) -> u8 {
        match self.phase {
            SessionPhase::NotStarted => 0,
            SessionPhase::Finished => 100,
            SessionPhase::InProgress => rounded_percent(self.state.current_position, self.total()),
        }
    }

    /// Porcentaje de aciertos para la pantalla de resultado.
    pub fn score_percent(&self) -> u8 {
        rounded_percent(self.state.score, self.total())
    }
}

// round(100 * part / total) en enteros; 0 si total es 0.
fn rounded_percent(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = (200 * part + total) / (2 * total);
    pct.min(100) as u8
}
