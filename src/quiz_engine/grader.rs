use log::debug;

use crate::quiz_engine::{
    error::AnswerError,
    models::{Question, Verdict},
};

/// Parse a typed answer.
///
/// Surrounding whitespace is ignored; anything else that is not a plain
/// (optionally signed) integer is rejected.
pub fn parse_answer(text: &str) -> Result<i64, AnswerError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AnswerError::Empty);
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| AnswerError::NotANumber(trimmed.to_string()))
}

/// True when `text` would be accepted by [`grade`].
pub fn is_submittable(text: &str) -> bool {
    parse_answer(text).is_ok()
}

/// Compare a typed answer against the question's answer.
///
/// Pure: the same `(question, text)` always yields the same result.
pub fn grade(question: &Question, text: &str) -> Result<Verdict, AnswerError> {
    let given = parse_answer(text)?;
    let verdict = if given == question.correct_answer() {
        Verdict::Correct
    } else {
        Verdict::Incorrect
    };
    debug!("graded {question} with {given}: {verdict:?}");
    Ok(verdict)
}
