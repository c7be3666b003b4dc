//! Therapy categories the scorer can recommend.
//!
//! Declaration order matters: it is the tie-break when scores are equal.

use tranquil_core::models::category::TherapyCategory;

pub const ANXIETY: &str = "anxiety";
pub const DEPRESSION: &str = "depression";
pub const TRAUMA: &str = "trauma";
pub const RELATIONSHIPS: &str = "relationships";
pub const STRESS: &str = "stress";
pub const GRIEF: &str = "grief";
pub const ADDICTION: &str = "addiction";
pub const SELF_ESTEEM: &str = "self-esteem";

/// All categories with zeroed scores, in declaration order.
pub fn catalog() -> &'static [TherapyCategory] {
    static CATALOG: std::sync::LazyLock<Vec<TherapyCategory>> = std::sync::LazyLock::new(|| {
        vec![
            TherapyCategory::new(
                ANXIETY,
                "Anxiety & Panic",
                "Cognitive behavioural techniques for worry, panic, and persistent nervousness.",
                &["anxiety", "panic", "worry"],
            ),
            TherapyCategory::new(
                DEPRESSION,
                "Depression & Mood",
                "Support for low mood, loss of interest, and hopelessness.",
                &["depression", "mood", "sad"],
            ),
            TherapyCategory::new(
                TRAUMA,
                "Trauma & PTSD",
                "Trauma-informed therapy, including EMDR and somatic approaches.",
                &["trauma", "ptsd", "abuse"],
            ),
            TherapyCategory::new(
                RELATIONSHIPS,
                "Relationships & Family",
                "Couples and family work on communication and conflict.",
                &["relationship", "couples", "family"],
            ),
            TherapyCategory::new(
                STRESS,
                "Stress & Burnout",
                "Practical tools for workload, boundaries, and recovery from burnout.",
                &["stress", "burnout"],
            ),
            TherapyCategory::new(
                GRIEF,
                "Grief & Loss",
                "Space to process bereavement and other significant losses.",
                &["grief", "loss"],
            ),
            TherapyCategory::new(
                ADDICTION,
                "Addiction & Recovery",
                "Support for reducing or stopping alcohol and substance use.",
                &["substance", "addiction", "alcohol"],
            ),
            TherapyCategory::new(
                SELF_ESTEEM,
                "Self-Esteem & Identity",
                "Building confidence, self-worth, and a stable sense of identity.",
                &["self-esteem", "confidence", "identity"],
            ),
        ]
    });
    &CATALOG
}
