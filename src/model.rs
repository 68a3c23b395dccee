use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Número fijo de opciones por pregunta.
pub const ANSWERS_PER_QUESTION: usize = 4;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidQuestion {
    #[error("correct_index {index} fuera de rango (0..4)")]
    CorrectIndexOutOfRange { index: usize },
    #[error("se esperaban 4 respuestas, hay {found}")]
    WrongAnswerCount { found: usize },
}

/// Pregunta de opción múltiple. Inmutable una vez construida.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "RawQuestion")]
pub struct Question {
    text: String,
    answers: [String; ANSWERS_PER_QUESTION],
    correct_index: usize,
}

impl Question {
    pub fn new(
        text: impl Into<String>,
        answers: [String; ANSWERS_PER_QUESTION],
        correct_index: usize,
    ) -> Result<Self, InvalidQuestion> {
        if correct_index >= ANSWERS_PER_QUESTION {
            return Err(InvalidQuestion::CorrectIndexOutOfRange {
                index: correct_index,
            });
        }
        Ok(Self {
            text: text.into(),
            answers,
            correct_index,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn answers(&self) -> &[String; ANSWERS_PER_QUESTION] {
        &self.answers
    }

    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    pub fn correct_answer(&self) -> &str {
        &self.answers[self.correct_index]
    }

    pub fn is_correct(&self, chosen_index: usize) -> bool {
        chosen_index == self.correct_index
    }
}

// Forma en disco (YAML embebido). Se valida al convertir.
#[derive(Deserialize)]
struct RawQuestion {
    question: String,
    answers: Vec<String>,
    correct_index: usize,
}

impl TryFrom<RawQuestion> for Question {
    type Error = InvalidQuestion;

    fn try_from(raw: RawQuestion) -> Result<Self, Self::Error> {
        let found = raw.answers.len();
        let answers: [String; ANSWERS_PER_QUESTION] = raw
            .answers
            .try_into()
            .map_err(|_| InvalidQuestion::WrongAnswerCount { found })?;
        Question::new(raw.question, answers, raw.correct_index)
    }
}

/// Conjunto ordenado de preguntas; se reemplaza entero en cada inicio.
pub type QuestionSet = Vec<Question>;

/// Origen de las preguntas elegido por el usuario.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    #[default]
    Builtin,
    Online,
}

impl SourceKind {
    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::Builtin => "Preguntas integradas",
            SourceKind::Online => "Online (Open Trivia DB)",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Builtin => f.write_str("builtin"),
            SourceKind::Online => f.write_str("online"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("origen de preguntas desconocido: {0}")]
pub struct UnknownSource(pub String);

impl FromStr for SourceKind {
    type Err = UnknownSource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "builtin" => Ok(SourceKind::Builtin),
            "online" => Ok(SourceKind::Online),
            other => Err(UnknownSource(other.to_string())),
        }
    }
}

/// Pantalla activa. Son mutuamente excluyentes.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Start,
    Quiz,
    Result,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(a: &str, b: &str, c: &str, d: &str) -> [String; 4] {
        [a.into(), b.into(), c.into(), d.into()]
    }

    #[test]
    fn new_rejects_out_of_range_index() {
        let err = Question::new("q", answers("a", "b", "c", "d"), 4).unwrap_err();
        assert_eq!(err, InvalidQuestion::CorrectIndexOutOfRange { index: 4 });
    }

    #[test]
    fn correct_answer_follows_index() {
        let q = Question::new("q", answers("a", "b", "c", "d"), 2).expect("valid question");
        assert_eq!(q.correct_answer(), "c");
        assert!(q.is_correct(2));
        assert!(!q.is_correct(0));
    }

    #[test]
    fn yaml_with_three_answers_is_rejected() {
        let yaml = "question: q\nanswers: [a, b, c]\ncorrect_index: 0\n";
        let err = serde_yaml::from_str::<Question>(yaml).unwrap_err();
        assert!(err.to_string().contains("se esperaban 4"));
    }

    #[test]
    fn source_kind_parses_case_insensitive() {
        assert_eq!("Online".parse::<SourceKind>(), Ok(SourceKind::Online));
        assert_eq!(" builtin ".parse::<SourceKind>(), Ok(SourceKind::Builtin));
        assert!("ai".parse::<SourceKind>().is_err());
    }
}
