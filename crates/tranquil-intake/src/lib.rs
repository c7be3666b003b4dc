//! tranquil-intake
//!
//! The intake questionnaire and the therapy recommendation scorer. Pure data
//! and pure functions. The wizard that walks a user through the sections
//! lives in `tranquil-forms`.

pub mod categories;
pub mod error;
pub mod questionnaires;
pub mod scoring;
pub mod validation;

use tranquil_core::models::answer::AnswerMap;
use tranquil_core::models::question::{Question, QuestionKind, Section};
use validation::AnswerError;

/// Trait implemented by each intake questionnaire.
pub trait Questionnaire: Send + Sync {
    /// Unique identifier (e.g., "mental_health_intake").
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Sections in the order the wizard presents them.
    fn sections(&self) -> &[Section];

    /// Every question, in section order.
    fn questions(&self) -> Vec<&Question> {
        self.sections().iter().flat_map(|s| &s.questions).collect()
    }

    fn question(&self, id: &str) -> Option<&Question> {
        self.sections()
            .iter()
            .flat_map(|s| &s.questions)
            .find(|q| q.id == id)
    }

    /// Check a set of answers against this questionnaire's questions.
    ///
    /// Problems are reported, not fixed: the scorer still accepts any map.
    fn validate_answers(&self, answers: &AnswerMap) -> Vec<AnswerError> {
        let mut errors = Vec::new();
        for (question_id, value) in answers.iter() {
            let Some(question) = self.question(question_id) else {
                errors.push(AnswerError::unknown_question(self.name(), question_id, value));
                continue;
            };

            let accepted = match question.kind {
                QuestionKind::Radio | QuestionKind::Select => value
                    .as_text()
                    .is_some_and(|text| question.options.iter().any(|o| o == text)),
                QuestionKind::Slider => match (value.as_number(), question.range) {
                    (Some(n), Some(range)) => range.contains(n),
                    (Some(_), None) => true,
                    (None, _) => false,
                },
            };

            if !accepted {
                errors.push(AnswerError::rejected(self.name(), question, value));
            }
        }
        errors
    }

    /// Format answered questions as markdown, grouped by section.
    fn to_structured_input(&self, answers: &AnswerMap) -> String {
        let mut output = format!("## {}\n\n", self.name());
        for section in self.sections() {
            output.push_str(&format!("### {}\n", section.title));
            for question in &section.questions {
                if let Some(value) = answers.get(&question.id) {
                    output.push_str(&format!("- {}: {}\n", question.text, value));
                }
            }
            output.push('\n');
        }
        output
    }
}

/// Return all registered questionnaires.
pub fn all_questionnaires() -> Vec<Box<dyn Questionnaire>> {
    vec![Box::new(questionnaires::mental_health::MentalHealthIntake)]
}

/// Look up a questionnaire by ID.
pub fn get_questionnaire(id: &str) -> Option<Box<dyn Questionnaire>> {
    all_questionnaires().into_iter().find(|q| q.id() == id)
}
