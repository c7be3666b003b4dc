use serde::{Deserialize, Serialize};

use tranquil_core::models::answer::AnswerMap;
use tranquil_core::models::category::TherapyCategory;
use tranquil_intake::{scoring, Questionnaire};

/// Everything the results screen shows. Every field is addressable by name
/// in a template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsReport {
    pub questionnaire_id: String,
    pub questionnaire_name: String,
    pub recommendations: Vec<TherapyCategory>,
    /// Markdown list of the answers, grouped by section.
    pub answers_summary: String,
    pub answered: usize,
    pub total: usize,
}

/// Score `answers` and collect the report for `questionnaire`.
pub fn build_report(questionnaire: &dyn Questionnaire, answers: &AnswerMap) -> ResultsReport {
    let questions = questionnaire.questions();
    let answered = questions
        .iter()
        .filter(|q| answers.is_answered(&q.id))
        .count();

    ResultsReport {
        questionnaire_id: questionnaire.id().to_string(),
        questionnaire_name: questionnaire.name().to_string(),
        recommendations: scoring::recommend(answers),
        answers_summary: questionnaire.to_structured_input(answers),
        answered,
        total: questions.len(),
    }
}
