//! Proveedor de preguntas: banco integrado o Open Trivia DB, normalizados a `Question`.

use crate::data::read_builtin_questions;
use crate::model::{QuestionSet, SourceKind};
use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

pub mod online;
pub mod remote;

/// Cualquier fallo de la fuente online. Todas las variantes se tratan igual:
/// se descarta el resultado entero y se usan las preguntas integradas.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceUnavailable {
    #[error("error de red: {0}")]
    Transport(String),
    #[error("la API devolvió HTTP {0}")]
    HttpStatus(u16),
    #[error("la API devolvió response_code {0}")]
    ResponseCode(i64),
    #[error("respuesta con formato inesperado: {0}")]
    Malformed(String),
}

/// Resultado de resolver un origen: el conjunto listo para empezar y, si hubo
/// sustitución, el motivo.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub requested: SourceKind,
    pub questions: QuestionSet,
    pub fallback: Option<SourceUnavailable>,
}

impl Resolution {
    pub fn used_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    pub fn status_message(&self) -> String {
        if self.used_fallback() {
            return "Fuente online no disponible. Usando las preguntas integradas.".to_string();
        }
        match self.requested {
            SourceKind::Online => format!("Cargadas {} preguntas online.", self.questions.len()),
            SourceKind::Builtin => {
                format!("Cargadas {} preguntas integradas.", self.questions.len())
            }
        }
    }
}

/// Copia barajada del banco integrado. El tamaño no depende del número pedido.
pub fn resolve_builtin<R: Rng + ?Sized>(rng: &mut R) -> QuestionSet {
    let mut questions = match read_builtin_questions() {
        Ok(questions) => questions,
        Err(err) => {
            log::error!("banco integrado ilegible: {err}");
            Vec::new()
        }
    };
    questions.shuffle(rng);
    questions
}

/// Termina una resolución online a partir del cuerpo recibido (o del fallo de
/// transporte). Nunca devuelve un conjunto parcial: o todo el payload es válido
/// o se cae al banco integrado.
pub fn resolve_online<R: Rng + ?Sized>(
    fetched: Result<String, SourceUnavailable>,
    rng: &mut R,
) -> Resolution {
    match fetched.and_then(|body| online::decode_payload(&body, &mut *rng)) {
        Ok(questions) => {
            log::info!("{} preguntas online cargadas", questions.len());
            Resolution {
                requested: SourceKind::Online,
                questions,
                fallback: None,
            }
        }
        Err(reason) => {
            log::warn!("fuente online no disponible ({reason}); se usan las integradas");
            Resolution {
                requested: SourceKind::Online,
                questions: resolve_builtin(rng),
                fallback: Some(reason),
            }
        }
    }
}

pub fn builtin_resolution<R: Rng + ?Sized>(rng: &mut R) -> Resolution {
    let questions = resolve_builtin(rng);
    log::info!("{} preguntas integradas cargadas", questions.len());
    Resolution {
        requested: SourceKind::Builtin,
        questions,
        fallback: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn builtin_is_a_permutation_of_the_bank() {
        let mut rng = StdRng::seed_from_u64(7);
        let bank = read_builtin_questions().expect("yaml integrado válido");
        let shuffled = resolve_builtin(&mut rng);
        assert_eq!(shuffled.len(), bank.len());
        for q in &bank {
            assert!(shuffled.contains(q));
        }
    }

    #[test]
    fn transport_error_falls_back_to_builtin() {
        let mut rng = StdRng::seed_from_u64(1);
        let res = resolve_online(Err(SourceUnavailable::Transport("timeout".into())), &mut rng);
        assert!(res.used_fallback());
        assert_eq!(res.questions.len(), 5);
        assert_eq!(
            res.status_message(),
            "Fuente online no disponible. Usando las preguntas integradas."
        );
    }

    #[test]
    fn bad_payload_never_yields_partial_set() {
        let mut rng = StdRng::seed_from_u64(2);
        // El segundo registro solo trae dos distractores.
        let body = r#"{"response_code":0,"results":[
            {"question":"Q1","correct_answer":"A","incorrect_answers":["B","C","D"]},
            {"question":"Q2","correct_answer":"A","incorrect_answers":["B","C"]}
        ]}"#;
        let res = resolve_online(Ok(body.to_string()), &mut rng);
        assert!(matches!(res.fallback, Some(SourceUnavailable::Malformed(_))));
        assert!(res.questions.iter().all(|q| q.text() != "Q1"));
    }

    #[test]
    fn online_success_reports_count() {
        let mut rng = StdRng::seed_from_u64(3);
        let body = r#"{"response_code":0,"results":[
            {"question":"Q1","correct_answer":"A","incorrect_answers":["B","C","D"]}
        ]}"#;
        let res = resolve_online(Ok(body.to_string()), &mut rng);
        assert!(!res.used_fallback());
        assert_eq!(res.status_message(), "Cargadas 1 preguntas online.");
    }
}
