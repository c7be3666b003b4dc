use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use tranquil_core::models::answer::AnswerValue;
use tranquil_core::models::question::Question;

/// An answer that does not fit the question it was recorded against.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct AnswerError {
    pub question_id: String,
    pub value: AnswerValue,
    pub message: String,
}

impl AnswerError {
    pub(crate) fn unknown_question(questionnaire: &str, question_id: &str, value: &AnswerValue) -> Self {
        Self {
            question_id: question_id.to_string(),
            value: value.clone(),
            message: format!("{questionnaire}: no question with id '{question_id}'"),
        }
    }

    pub(crate) fn rejected(questionnaire: &str, question: &Question, value: &AnswerValue) -> Self {
        let expected = match question.range {
            Some(range) => format!("a value in [{}, {}]", range.min, range.max),
            None => format!("one of: {}", question.options.join(", ")),
        };
        Self {
            question_id: question.id.clone(),
            value: value.clone(),
            message: format!(
                "{questionnaire}: answer '{value}' to '{}' is not {expected}",
                question.id
            ),
        }
    }
}
