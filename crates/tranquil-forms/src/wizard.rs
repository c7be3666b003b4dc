//! Section-by-section navigation through an intake questionnaire.

use tranquil_core::models::answer::{AnswerMap, AnswerValue};
use tranquil_core::models::category::TherapyCategory;
use tranquil_core::models::question::Section;
use tranquil_intake::error::IntakeError;
use tranquil_intake::{get_questionnaire, scoring, Questionnaire};

use crate::error::FormError;

/// Result of asking the wizard to move forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Moved to the section at this index.
    Advanced { section: usize },
    /// The current section still has unanswered questions; nothing changed.
    Blocked { unanswered: Vec<String> },
    /// The last section was completed and the answers were scored.
    Completed { recommendations: Vec<TherapyCategory> },
    /// The wizard was already showing results.
    Finished,
}

/// Where the user is in the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub section: usize,
    pub section_count: usize,
    pub answered: usize,
    pub total: usize,
    pub percent: u8,
}

pub struct IntakeWizard {
    questionnaire: Box<dyn Questionnaire>,
    answers: AnswerMap,
    current: usize,
    results: Option<Vec<TherapyCategory>>,
}

impl IntakeWizard {
    pub fn new(questionnaire: Box<dyn Questionnaire>) -> Result<Self, FormError> {
        if questionnaire.sections().is_empty() {
            return Err(FormError::EmptyQuestionnaire(questionnaire.id().to_string()));
        }
        Ok(Self {
            questionnaire,
            answers: AnswerMap::new(),
            current: 0,
            results: None,
        })
    }

    /// Start a wizard for a registered questionnaire.
    pub fn for_questionnaire(id: &str) -> Result<Self, FormError> {
        let questionnaire =
            get_questionnaire(id).ok_or_else(|| IntakeError::UnknownQuestionnaire(id.to_string()))?;
        Self::new(questionnaire)
    }

    pub fn questionnaire(&self) -> &dyn Questionnaire {
        self.questionnaire.as_ref()
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    pub fn section_index(&self) -> usize {
        self.current
    }

    pub fn current_section(&self) -> &Section {
        &self.questionnaire.sections()[self.current]
    }

    fn is_last_section(&self) -> bool {
        self.current + 1 == self.questionnaire.sections().len()
    }

    /// Scored recommendations, once the wizard has finished.
    pub fn results(&self) -> Option<&[TherapyCategory]> {
        self.results.as_deref()
    }

    pub fn is_finished(&self) -> bool {
        self.results.is_some()
    }

    /// Record an answer. Ignored once results are showing.
    pub fn answer(&mut self, question_id: &str, value: impl Into<AnswerValue>) -> Result<(), FormError> {
        if self.questionnaire.question(question_id).is_none() {
            return Err(IntakeError::UnknownQuestion {
                questionnaire_id: self.questionnaire.id().to_string(),
                question_id: question_id.to_string(),
            }
            .into());
        }
        if self.is_finished() {
            tracing::debug!(question_id, "ignoring answer after results");
            return Ok(());
        }
        self.answers.insert(question_id, value);
        Ok(())
    }

    /// Ids of questions in the current section with no answer yet.
    pub fn unanswered(&self) -> Vec<String> {
        self.current_section()
            .question_ids()
            .filter(|id| !self.answers.is_answered(id))
            .map(str::to_string)
            .collect()
    }

    pub fn is_section_complete(&self) -> bool {
        self.current_section()
            .question_ids()
            .all(|id| self.answers.is_answered(id))
    }

    /// Whether [`next`](Self::next) would move forward.
    pub fn can_advance(&self) -> bool {
        !self.is_finished() && self.is_section_complete()
    }

    pub fn next(&mut self) -> Step {
        if self.is_finished() {
            return Step::Finished;
        }

        let unanswered = self.unanswered();
        if !unanswered.is_empty() {
            tracing::debug!(section = self.current, ?unanswered, "section incomplete");
            return Step::Blocked { unanswered };
        }

        if self.is_last_section() {
            let recommendations = scoring::recommend(&self.answers);
            self.results = Some(recommendations.clone());
            tracing::debug!(questionnaire = self.questionnaire.id(), "intake completed");
            return Step::Completed { recommendations };
        }

        self.current += 1;
        tracing::debug!(section = self.current, "advanced to section");
        Step::Advanced { section: self.current }
    }

    /// Go back one section. Returns false on the first section or after results.
    pub fn prev(&mut self) -> bool {
        if self.is_finished() || self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    pub fn progress(&self) -> Progress {
        let questions = self.questionnaire.questions();
        let total = questions.len();
        let answered = questions
            .iter()
            .filter(|q| self.answers.is_answered(&q.id))
            .count();
        let percent = if self.is_finished() || total == 0 {
            100
        } else {
            (answered * 100 / total) as u8
        };
        Progress {
            section: self.current,
            section_count: self.questionnaire.sections().len(),
            answered,
            total,
            percent,
        }
    }

    /// Clear all answers and return to the first section.
    pub fn reset(&mut self) {
        self.answers.clear();
        self.current = 0;
        self.results = None;
    }
}
