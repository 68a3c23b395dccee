use crate::config::QuizConfig;
use crate::model::{AppState, SourceKind};
use crate::session::{AnswerOutcome, QuizSession};
use crate::source::SourceUnavailable;
use serde::{Deserialize, Serialize};
use std::sync::mpsc::Receiver;

// Submódulos
pub mod actions;
pub mod loading;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{AnswerChoice, AnswerMark, QuestionView, ResultView};

/// Payload online pendiente (hilo en nativo, `spawn_local` en WASM).
pub type PendingLoad = Receiver<Result<String, SourceUnavailable>>;

/// Controlador único de la aplicación: dueño de la sesión y del estado de pantalla.
/// Solo se persiste el origen elegido, nunca puntuaciones.
#[derive(Serialize, Deserialize)]
pub struct QuizApp {
    pub source: SourceKind,
    #[serde(skip)]
    pub config: QuizConfig,
    #[serde(skip)]
    pub state: AppState,
    #[serde(skip)]
    pub session: QuizSession,
    #[serde(skip)]
    pub last_answer: Option<AnswerOutcome>,
    #[serde(skip)]
    pub message: String,
    #[serde(skip)]
    pub pending_load: Option<PendingLoad>,
    /// El botón principal de la pantalla debe tomar el foco en el próximo frame.
    #[serde(skip)]
    pub pending_focus: bool,
}

impl Default for QuizApp {
    fn default() -> Self {
        Self::with_config(QuizConfig::default())
    }
}

impl QuizApp {
    pub fn new() -> Self {
        Self::with_config(QuizConfig::load())
    }

    pub fn with_config(config: QuizConfig) -> Self {
        Self {
            source: config.default_source,
            config,
            state: AppState::Start,
            session: QuizSession::new(),
            last_answer: None,
            message: String::new(),
            pending_load: None,
            pending_focus: true,
        }
    }

    /// Recupera el origen guardado por eframe, si lo hay.
    pub fn restore(storage: Option<&dyn eframe::Storage>) -> Self {
        let mut app = Self::new();
        if let Some(saved) =
            storage.and_then(|s| eframe::get_value::<QuizApp>(s, eframe::APP_KEY))
        {
            app.source = saved.source;
        }
        app
    }

    /// Bandera de ocupado: hay una carga en curso y el botón de inicio queda bloqueado.
    pub fn is_loading(&self) -> bool {
        self.pending_load.is_some()
    }
}
