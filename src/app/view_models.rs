use super::*;

impl QuizApp {
    /// Vista de la pregunta activa; `None` fuera de partida.
    pub fn question_view(&self) -> Option<QuestionView> {
        let question = self.session.current_question()?;
        let answered = self.session.is_answered();
        let outcome = self.last_answer.as_ref().filter(|_| answered);

        let choices = question
            .answers()
            .iter()
            .enumerate()
            .map(|(index, text)| {
                let mark = match outcome {
                    Some(o) if index == o.correct_index => AnswerMark::Correct,
                    Some(o) if index == o.chosen_index => AnswerMark::Wrong,
                    _ => AnswerMark::Neutral,
                };
                AnswerChoice {
                    index,
                    text: text.clone(),
                    mark,
                }
            })
            .collect();

        let feedback = outcome.map(|o| {
            if o.is_correct {
                "✅ ¡Correcto!".to_string()
            } else {
                format!("❌ Incorrecto. Respuesta correcta: {}", o.correct_answer)
            }
        });

        Some(QuestionView {
            number: self.session.question_number(),
            total: self.session.total(),
            score: self.session.score(),
            percent: self.session.percent_complete(),
            text: question.text().to_string(),
            choices,
            answered,
            feedback,
            is_last: self.session.is_last(),
        })
    }

    pub fn result_view(&self) -> ResultView {
        ResultView {
            score: self.session.score(),
            total: self.session.total(),
            percent: self.session.score_percent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started_app() -> QuizApp {
        let mut app = QuizApp::with_config(QuizConfig::default());
        app.start_quiz();
        app
    }

    #[test]
    fn fresh_question_has_neutral_choices() {
        let app = started_app();
        let view = app.question_view().expect("pregunta activa");
        assert_eq!(view.number, 1);
        assert_eq!(view.total, 5);
        assert_eq!(view.percent, 0);
        assert_eq!(view.choices.len(), 4);
        assert!(view.choices.iter().all(|c| c.mark == AnswerMark::Neutral));
        assert!(view.feedback.is_none());
        assert_eq!(view.next_label(), "Siguiente");
        assert_eq!(view.counter_label(), "Pregunta 1 / 5");
    }

    #[test]
    fn wrong_answer_marks_both_choices() {
        let mut app = started_app();
        let correct = app
            .session
            .current_question()
            .expect("pregunta activa")
            .correct_index();
        let wrong = (correct + 2) % 4;
        app.select_answer(wrong);

        let view = app.question_view().expect("pregunta activa");
        assert!(view.answered);
        assert_eq!(view.choices[correct].mark, AnswerMark::Correct);
        assert_eq!(view.choices[wrong].mark, AnswerMark::Wrong);
        let feedback = view.feedback.expect("feedback tras responder");
        assert!(feedback.contains(&view.choices[correct].text));
    }

    #[test]
    fn last_question_offers_finish() {
        let mut app = started_app();
        for _ in 0..4 {
            app.select_answer(0);
            app.next_question();
        }
        let view = app.question_view().expect("pregunta activa");
        assert!(view.is_last);
        assert_eq!(view.next_label(), "Terminar");
        assert_eq!(view.percent, 80);
    }

    #[test]
    fn result_summary_text() {
        let view = ResultView {
            score: 3,
            total: 5,
            percent: 60,
        };
        assert_eq!(view.summary(), "Has acertado 3/5 (60%).");
    }
}
