//! Rule-based therapy recommendation.
//!
//! Scoring runs in two passes over the full answer map. The keyword pass
//! credits a category once per keyword found in an answer (or in the id of
//! a question answered affirmatively). The bonus pass then adds fixed deltas
//! for specific question/answer pairs from [`BONUS_RULES`]. The two passes
//! can credit the same evidence twice; that overlap is intentional.

use tranquil_core::models::answer::{AnswerMap, AnswerValue};
use tranquil_core::models::category::TherapyCategory;

use crate::categories::{self, ADDICTION, ANXIETY, DEPRESSION, GRIEF, RELATIONSHIPS, SELF_ESTEEM, STRESS, TRAUMA};
use crate::questionnaires::mental_health::id;

/// How many categories the results screen recommends.
pub const RECOMMENDATION_COUNT: usize = 3;

/// Answers that count as "yes" when a keyword matches the question id.
pub const AFFIRMATIVE_ANSWERS: &[&str] = &["Yes", "Often", "Nearly every day"];

/// The exact answer a bonus rule fires on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BonusAnswer {
    Text(&'static str),
    Number(i64),
}

impl BonusAnswer {
    pub fn matches(&self, value: &AnswerValue) -> bool {
        match (self, value) {
            (BonusAnswer::Text(expected), AnswerValue::Text(actual)) => expected == actual,
            (BonusAnswer::Number(expected), AnswerValue::Number(actual)) => expected == actual,
            _ => false,
        }
    }
}

/// One row of the bonus table: `question_id = answer` adds `delta` to `category_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BonusRule {
    pub question_id: &'static str,
    pub answer: BonusAnswer,
    pub category_id: &'static str,
    pub delta: u32,
}

const fn text_rule(question_id: &'static str, answer: &'static str, category_id: &'static str, delta: u32) -> BonusRule {
    BonusRule {
        question_id,
        answer: BonusAnswer::Text(answer),
        category_id,
        delta,
    }
}

const fn number_rule(question_id: &'static str, answer: i64, category_id: &'static str, delta: u32) -> BonusRule {
    BonusRule {
        question_id,
        answer: BonusAnswer::Number(answer),
        category_id,
        delta,
    }
}

pub const BONUS_RULES: &[BonusRule] = &[
    text_rule(id::TRAUMA_EXPERIENCE, "Yes", TRAUMA, 3),
    number_rule(id::WELLBEING_SCALE, 1, DEPRESSION, 3),
    number_rule(id::WELLBEING_SCALE, 2, DEPRESSION, 2),
    number_rule(id::WELLBEING_SCALE, 3, ANXIETY, 2),
    text_rule(id::MOOD_LOW, "Nearly every day", DEPRESSION, 3),
    text_rule(id::MOOD_LOW, "More than half the days", DEPRESSION, 2),
    text_rule(id::ANXIETY_FREQUENCY, "Often", ANXIETY, 3),
    text_rule(id::PANIC_ATTACKS, "Yes", ANXIETY, 2),
    text_rule(id::GRIEF_LOSS, "Yes", GRIEF, 3),
    text_rule(id::RELATIONSHIP_STRAIN, "Often", RELATIONSHIPS, 2),
    text_rule(id::SESSION_FORMAT, "Couples", RELATIONSHIPS, 2),
    text_rule(id::STRESS_LEVEL, "Often", STRESS, 3),
    text_rule(id::SLEEP_QUALITY, "Very poor", STRESS, 1),
    text_rule(id::SUBSTANCE_USE, "Often", ADDICTION, 3),
    text_rule(id::CONFIDENCE_DOUBTS, "Often", SELF_ESTEEM, 2),
];

/// A category catalog paired with a bonus table.
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'a> {
    categories: &'a [TherapyCategory],
    rules: &'a [BonusRule],
}

impl Default for Scorer<'static> {
    fn default() -> Self {
        Self {
            categories: categories::catalog(),
            rules: BONUS_RULES,
        }
    }
}

impl<'a> Scorer<'a> {
    pub fn new(categories: &'a [TherapyCategory], rules: &'a [BonusRule]) -> Self {
        Self { categories, rules }
    }

    /// Score every category, returned in catalog order.
    pub fn score(&self, answers: &AnswerMap) -> Vec<TherapyCategory> {
        let mut scored: Vec<TherapyCategory> = self
            .categories
            .iter()
            .cloned()
            .map(|mut c| {
                c.score = 0;
                c
            })
            .collect();

        for (question_id, value) in answers.iter() {
            let raw = value.to_string();
            let lowered = raw.to_lowercase();
            let affirmative = AFFIRMATIVE_ANSWERS.contains(&raw.as_str());

            for category in &mut scored {
                for keyword in &category.keywords {
                    if lowered.contains(keyword.as_str())
                        || (affirmative && question_id.contains(keyword.as_str()))
                    {
                        category.score += 1;
                    }
                }
            }
        }

        for rule in self.rules {
            let fired = answers
                .get(rule.question_id)
                .is_some_and(|value| rule.answer.matches(value));
            if !fired {
                continue;
            }
            if let Some(category) = scored.iter_mut().find(|c| c.id == rule.category_id) {
                category.score += rule.delta;
            }
        }

        scored
    }

    /// All categories, highest score first. Ties keep catalog order.
    pub fn rank(&self, answers: &AnswerMap) -> Vec<TherapyCategory> {
        let mut ranked = self.score(answers);
        // Stable: equal scores keep catalog order.
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }

    /// The top [`RECOMMENDATION_COUNT`] categories.
    pub fn recommend(&self, answers: &AnswerMap) -> Vec<TherapyCategory> {
        let mut ranked = self.rank(answers);
        ranked.truncate(RECOMMENDATION_COUNT);
        tracing::debug!(
            answered = answers.len(),
            recommended = ?ranked.iter().map(|c| (c.id.as_str(), c.score)).collect::<Vec<_>>(),
            "scored intake answers"
        );
        ranked
    }
}

/// Rank all categories against `answers` using the built-in catalog and rules.
pub fn rank_categories(answers: &AnswerMap) -> Vec<TherapyCategory> {
    Scorer::default().rank(answers)
}

/// Recommend the top three categories using the built-in catalog and rules.
pub fn recommend(answers: &AnswerMap) -> Vec<TherapyCategory> {
    Scorer::default().recommend(answers)
}
