use super::*;
use crate::session::{AdvanceOutcome, SessionError};
use crate::source::{Resolution, builtin_resolution};
use rand::Rng;

impl QuizApp {
    /// Disparador de "Empezar". No hace nada si ya hay una carga en curso.
    pub fn start_quiz(&mut self) {
        if self.is_loading() {
            log::debug!("start_quiz ignorado: carga en curso");
            return;
        }

        match self.source {
            SourceKind::Builtin => {
                self.message = "Preparando quiz…".into();
                let resolution = builtin_resolution(&mut rand::rng());
                self.begin_session(resolution, &mut rand::rng());
            }
            SourceKind::Online => {
                self.message = "Cargando preguntas online…".into();
                let url = self.config.bank_url();
                log::info!("pidiendo preguntas a {url}");
                self.spawn_online_fetch(url);
            }
        }
    }

    /// Arranca la sesión con lo resuelto. Con un conjunto vacío se queda en la
    /// pantalla de inicio y lo avisa.
    pub fn begin_session<R: Rng + ?Sized>(&mut self, resolution: Resolution, rng: &mut R) {
        let status = resolution.status_message();
        self.last_answer = None;

        match self.session.start(resolution.questions, rng) {
            Ok(()) => {
                self.message = status;
                self.state = AppState::Quiz;
            }
            Err(SessionError::EmptyQuestionSet) => {
                log::warn!("conjunto de preguntas vacío ({})", resolution.requested);
                self.message = "No hay preguntas disponibles. Prueba con otro origen.".into();
                self.state = AppState::Start;
            }
        }
    }

    pub fn select_answer(&mut self, chosen_index: usize) {
        if let Some(outcome) = self.session.submit_answer(chosen_index) {
            self.last_answer = Some(outcome);
            self.pending_focus = true;
        }
    }

    /// Disparador de "Siguiente" / "Terminar".
    pub fn next_question(&mut self) {
        match self.session.advance() {
            AdvanceOutcome::Ignored => {}
            AdvanceOutcome::Next { .. } => {
                self.last_answer = None;
            }
            AdvanceOutcome::Finished { score, total } => {
                log::info!("quiz terminado: {score}/{total}");
                self.last_answer = None;
                self.state = AppState::Result;
                self.pending_focus = true;
            }
        }
    }

    /// Vuelve a la pantalla de inicio desde cualquier estado.
    pub fn restart_quiz(&mut self) {
        self.session.restart();
        self.last_answer = None;
        self.message.clear();
        self.state = AppState::Start;
        self.pending_focus = true;
    }
}
