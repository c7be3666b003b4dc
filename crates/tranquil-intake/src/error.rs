use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("unknown questionnaire: {0}")]
    UnknownQuestionnaire(String),

    #[error("unknown question '{question_id}' in questionnaire '{questionnaire_id}'")]
    UnknownQuestion {
        questionnaire_id: String,
        question_id: String,
    },
}
