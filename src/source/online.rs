use super::SourceUnavailable;
use crate::model::{ANSWERS_PER_QUESTION, Question, QuestionSet};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct BankResponse {
    response_code: i64,
    #[serde(default)]
    results: Option<Vec<BankRecord>>,
}

#[derive(Debug, Deserialize)]
struct BankRecord {
    question: String,
    correct_answer: String,
    #[serde(default)]
    incorrect_answers: Vec<String>,
}

fn decode_entities(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}

/// Convierte el JSON de Open Trivia DB en preguntas. Falla entero si cualquier
/// registro no sirve.
pub fn decode_payload<R: Rng + ?Sized>(
    body: &str,
    rng: &mut R,
) -> Result<QuestionSet, SourceUnavailable> {
    let response: BankResponse = serde_json::from_str(body)
        .map_err(|err| SourceUnavailable::Malformed(format!("JSON inválido: {err}")))?;

    if response.response_code != 0 {
        return Err(SourceUnavailable::ResponseCode(response.response_code));
    }

    let records = response
        .results
        .ok_or_else(|| SourceUnavailable::Malformed("falta la lista `results`".into()))?;

    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| build_question(record, &mut *rng).map_err(|e| tag_record(i, e)))
        .collect()
}

fn tag_record(index: usize, err: SourceUnavailable) -> SourceUnavailable {
    match err {
        SourceUnavailable::Malformed(msg) => {
            SourceUnavailable::Malformed(format!("registro {index}: {msg}"))
        }
        other => other,
    }
}

fn build_question<R: Rng + ?Sized>(
    record: BankRecord,
    rng: &mut R,
) -> Result<Question, SourceUnavailable> {
    let distractors_needed = ANSWERS_PER_QUESTION - 1;
    if record.incorrect_answers.len() < distractors_needed {
        return Err(SourceUnavailable::Malformed(format!(
            "{} respuestas incorrectas, se necesitan {distractors_needed}",
            record.incorrect_answers.len()
        )));
    }

    // Si sobran distractores se eligen al azar; la correcta siempre entra.
    let mut incorrect: Vec<String> = record
        .incorrect_answers
        .iter()
        .map(|a| decode_entities(a))
        .collect();
    incorrect.shuffle(rng);
    incorrect.truncate(distractors_needed);

    let mut choices: Vec<(String, bool)> = incorrect.into_iter().map(|a| (a, false)).collect();
    choices.push((decode_entities(&record.correct_answer), true));
    choices.shuffle(rng);

    // Se localiza por marca y no por texto: un distractor podría repetir el texto.
    let correct_index = choices
        .iter()
        .position(|(_, is_correct)| *is_correct)
        .ok_or_else(|| SourceUnavailable::Malformed("sin respuesta correcta".into()))?;

    let found = choices.len();
    let answers: [String; ANSWERS_PER_QUESTION] = choices
        .into_iter()
        .map(|(text, _)| text)
        .collect::<Vec<_>>()
        .try_into()
        .map_err(|_| SourceUnavailable::Malformed(format!("{found} respuestas")))?;

    Question::new(decode_entities(&record.question), answers, correct_index)
        .map_err(|err| SourceUnavailable::Malformed(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn payload(records: &str) -> String {
        format!(r#"{{"response_code":0,"results":[{records}]}}"#)
    }

    #[test]
    fn correct_text_survives_any_shuffle() {
        let body = payload(r#"{"question":"Q","correct_answer":"A","incorrect_answers":["B","C","D"]}"#);
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let set = decode_payload(&body, &mut rng).expect("payload válido");
            let q = &set[0];
            assert_eq!(q.answers()[q.correct_index()], "A");
            let mut sorted = q.answers().to_vec();
            sorted.sort();
            assert_eq!(sorted, vec!["A", "B", "C", "D"]);
        }
    }

    #[test]
    fn entities_are_decoded_before_display() {
        let body = payload(
            r#"{"question":"Who wrote &quot;Hamlet&quot;?","correct_answer":"Shakespeare &amp; Co","incorrect_answers":["Marlowe","Jonson","Kyd &#039;s"]}"#,
        );
        let mut rng = StdRng::seed_from_u64(11);
        let set = decode_payload(&body, &mut rng).expect("payload válido");
        assert_eq!(set[0].text(), "Who wrote \"Hamlet\"?");
        assert_eq!(set[0].correct_answer(), "Shakespeare & Co");
        assert!(set[0].answers().iter().any(|a| a == "Kyd 's"));
    }

    #[test]
    fn extra_distractors_are_truncated_keeping_correct() {
        let body = payload(
            r#"{"question":"Q","correct_answer":"A","incorrect_answers":["B","C","D","E","F"]}"#,
        );
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let set = decode_payload(&body, &mut rng).expect("payload válido");
            assert_eq!(set[0].answers().len(), 4);
            assert_eq!(set[0].correct_answer(), "A");
        }
    }

    #[test]
    fn duplicate_text_still_points_at_correct_slot() {
        let body = payload(r#"{"question":"Q","correct_answer":"X","incorrect_answers":["X","Y","Z"]}"#);
        let mut rng = StdRng::seed_from_u64(5);
        let set = decode_payload(&body, &mut rng).expect("payload válido");
        assert_eq!(set[0].correct_answer(), "X");
    }

    #[test]
    fn non_zero_response_code_is_unavailable() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = decode_payload(r#"{"response_code":1,"results":[]}"#, &mut rng).unwrap_err();
        assert_eq!(err, SourceUnavailable::ResponseCode(1));
    }

    #[test]
    fn missing_results_is_malformed() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = decode_payload(r#"{"response_code":0}"#, &mut rng).unwrap_err();
        assert!(matches!(err, SourceUnavailable::Malformed(_)));
    }

    #[test]
    fn garbage_body_is_malformed() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = decode_payload("<html>502</html>", &mut rng).unwrap_err();
        assert!(matches!(err, SourceUnavailable::Malformed(_)));
    }

    #[test]
    fn empty_results_decode_to_empty_set() {
        let mut rng = StdRng::seed_from_u64(0);
        let set = decode_payload(r#"{"response_code":0,"results":[]}"#, &mut rng)
            .expect("payload válido");
        assert!(set.is_empty());
    }
}
