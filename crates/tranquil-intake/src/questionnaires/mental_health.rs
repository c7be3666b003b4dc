use tranquil_core::models::question::{Question, ScaleRange, Section};

use crate::Questionnaire;

/// Question ids referenced by the bonus scoring rules.
pub mod id {
    pub const AGE_RANGE: &str = "age-range";
    pub const PREVIOUS_THERAPY: &str = "previous-therapy";
    pub const THERAPY_GOAL: &str = "therapy-goal";
    pub const MOOD_LOW: &str = "mood-low";
    pub const ANXIETY_FREQUENCY: &str = "anxiety-frequency";
    pub const PANIC_ATTACKS: &str = "panic-attacks";
    pub const WELLBEING_SCALE: &str = "wellbeing-scale";
    pub const TRAUMA_EXPERIENCE: &str = "trauma-experience";
    pub const GRIEF_LOSS: &str = "grief-loss";
    pub const RELATIONSHIP_STRAIN: &str = "relationship-strain";
    pub const SLEEP_QUALITY: &str = "sleep-quality";
    pub const STRESS_LEVEL: &str = "stress-level";
    pub const SUBSTANCE_USE: &str = "substance-use";
    pub const CONFIDENCE_DOUBTS: &str = "confidence-doubts";
    pub const SESSION_FORMAT: &str = "session-format";
    pub const SESSION_MEDIUM: &str = "session-medium";
}

const FREQUENCY: &[&str] = &["Never", "Rarely", "Sometimes", "Often"];
const YES_NO: &[&str] = &["Yes", "No"];

/// The general mental-health intake shown before booking a first session.
/// Five sections, sixteen questions. Every question is required.
pub struct MentalHealthIntake;

impl Questionnaire for MentalHealthIntake {
    fn id(&self) -> &str {
        "mental_health_intake"
    }

    fn name(&self) -> &str {
        "Mental Health Intake"
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            vec![
                section(
                    "about-you",
                    "About You",
                    "A little background so we can match you well.",
                    |s| {
                        vec![
                            Question::select(
                                s,
                                id::AGE_RANGE,
                                "What is your age range?",
                                &["Under 18", "18-24", "25-34", "35-44", "45-54", "55-64", "65 or older"],
                            ),
                            Question::radio(
                                s,
                                id::PREVIOUS_THERAPY,
                                "Have you been in therapy before?",
                                YES_NO,
                            ),
                            Question::select(
                                s,
                                id::THERAPY_GOAL,
                                "What would you most like help with?",
                                &[
                                    "Manage anxiety",
                                    "Cope with depression",
                                    "Improve my relationships",
                                    "Heal from trauma",
                                    "Reduce stress",
                                    "Work through grief",
                                    "Overcome addiction",
                                    "Build confidence",
                                    "Not sure yet",
                                ],
                            ),
                        ]
                    },
                ),
                section(
                    "mood",
                    "Mood & Emotions",
                    "How you have been feeling over the last two weeks.",
                    |s| {
                        vec![
                            Question::radio(
                                s,
                                id::MOOD_LOW,
                                "How often have you felt down, depressed, or hopeless?",
                                &["Not at all", "Several days", "More than half the days", "Nearly every day"],
                            ),
                            Question::radio(
                                s,
                                id::ANXIETY_FREQUENCY,
                                "How often do you feel nervous, anxious, or on edge?",
                                FREQUENCY,
                            ),
                            Question::radio(
                                s,
                                id::PANIC_ATTACKS,
                                "Have you experienced sudden episodes of intense fear or panic?",
                                YES_NO,
                            ),
                            Question::slider(
                                s,
                                id::WELLBEING_SCALE,
                                "On a scale of 1 to 10, how would you rate your overall wellbeing?",
                                ScaleRange { min: 1, max: 10, step: 1 },
                            ),
                        ]
                    },
                ),
                section(
                    "experiences",
                    "Life Experiences",
                    "Events that may still be affecting you.",
                    |s| {
                        vec![
                            Question::radio(
                                s,
                                id::TRAUMA_EXPERIENCE,
                                "Have you experienced a traumatic event that still affects you?",
                                &["Yes", "No", "Prefer not to say"],
                            ),
                            Question::radio(
                                s,
                                id::GRIEF_LOSS,
                                "Have you lost someone close to you in the past year?",
                                YES_NO,
                            ),
                            Question::radio(
                                s,
                                id::RELATIONSHIP_STRAIN,
                                "How often do conflicts with a partner or family member upset you?",
                                FREQUENCY,
                            ),
                        ]
                    },
                ),
                section(
                    "daily-life",
                    "Daily Life",
                    "Sleep, stress, and habits.",
                    |s| {
                        vec![
                            Question::select(
                                s,
                                id::SLEEP_QUALITY,
                                "How would you describe your sleep?",
                                &["Very good", "Good", "Fair", "Poor", "Very poor"],
                            ),
                            Question::radio(
                                s,
                                id::STRESS_LEVEL,
                                "How often do you feel overwhelmed by work or responsibilities?",
                                FREQUENCY,
                            ),
                            Question::radio(
                                s,
                                id::SUBSTANCE_USE,
                                "How often do you use alcohol or other substances to cope?",
                                FREQUENCY,
                            ),
                            Question::radio(
                                s,
                                id::CONFIDENCE_DOUBTS,
                                "How often do you doubt your own worth or abilities?",
                                FREQUENCY,
                            ),
                        ]
                    },
                ),
                section(
                    "preferences",
                    "Therapy Preferences",
                    "How you would like to meet with a therapist.",
                    |s| {
                        vec![
                            Question::select(
                                s,
                                id::SESSION_FORMAT,
                                "Which session format do you prefer?",
                                &["Individual", "Couples", "Family", "Group"],
                            ),
                            Question::radio(
                                s,
                                id::SESSION_MEDIUM,
                                "How would you like to attend sessions?",
                                &["Video", "Phone", "Chat", "In person"],
                            ),
                        ]
                    },
                ),
            ]
        });
        &SECTIONS
    }
}

fn section(id: &str, title: &str, description: &str, questions: impl FnOnce(&str) -> Vec<Question>) -> Section {
    Section {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        questions: questions(id),
    }
}
