use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How a question is presented and what kind of answer it takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum QuestionKind {
    /// One option from a short list, shown as radio buttons.
    Radio,
    /// One option from a longer list, shown as a dropdown.
    Select,
    /// An integer on a bounded scale.
    Slider,
}

/// Bounds for a slider question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleRange {
    pub min: i64,
    pub max: i64,
    pub step: i64,
}

impl ScaleRange {
    pub fn contains(&self, value: i64) -> bool {
        if value < self.min || value > self.max {
            return false;
        }
        self.step <= 1 || (value - self.min) % self.step == 0
    }
}

/// A single question in an intake questionnaire.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    /// Option labels, in display order. Empty for sliders.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<ScaleRange>,
    /// Id of the section this question belongs to.
    pub section: String,
}

impl Question {
    /// A radio-button question.
    pub fn radio(section: &str, id: &str, text: &str, options: &[&str]) -> Self {
        Self::choice(QuestionKind::Radio, section, id, text, options)
    }

    /// A dropdown question.
    pub fn select(section: &str, id: &str, text: &str, options: &[&str]) -> Self {
        Self::choice(QuestionKind::Select, section, id, text, options)
    }

    /// A slider question over `range`.
    pub fn slider(section: &str, id: &str, text: &str, range: ScaleRange) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            kind: QuestionKind::Slider,
            options: Vec::new(),
            range: Some(range),
            section: section.to_string(),
        }
    }

    fn choice(kind: QuestionKind, section: &str, id: &str, text: &str, options: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            kind,
            options: options.iter().map(|o| o.to_string()).collect(),
            range: None,
            section: section.to_string(),
        }
    }
}

/// A group of related questions shown together on one wizard page.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
}

impl Section {
    pub fn question_ids(&self) -> impl Iterator<Item = &str> {
        self.questions.iter().map(|q| q.id.as_str())
    }
}
