// src/data.rs

use crate::model::QuestionSet;

/// Carga el banco de preguntas integrado desde el YAML embebido
pub fn read_builtin_questions() -> Result<QuestionSet, serde_yaml::Error> {
    let file_content = include_str!("data/builtin_questions.yaml");
    serde_yaml::from_str(file_content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ANSWERS_PER_QUESTION;

    #[test]
    fn builtin_bank_parses_and_is_valid() {
        let questions = read_builtin_questions().expect("yaml integrado válido");
        assert_eq!(questions.len(), 5);
        for q in &questions {
            assert_eq!(q.answers().len(), ANSWERS_PER_QUESTION);
            assert!(q.correct_index() < ANSWERS_PER_QUESTION);
            assert!(!q.text().is_empty());
        }
    }

    #[test]
    fn builtin_bank_keeps_markup_literal() {
        let questions = read_builtin_questions().expect("yaml integrado válido");
        let script = questions
            .iter()
            .find(|q| q.text().starts_with("Inside which HTML element"))
            .expect("pregunta de <script>");
        assert_eq!(script.correct_answer(), "<script>");
    }
}
