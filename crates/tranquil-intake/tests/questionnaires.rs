use std::collections::HashSet;

use tranquil_core::models::answer::{AnswerMap, AnswerValue};
use tranquil_core::models::question::QuestionKind;
use tranquil_intake::questionnaires::mental_health::id;
use tranquil_intake::scoring::BONUS_RULES;
use tranquil_intake::{all_questionnaires, get_questionnaire};

#[test]
fn registry_finds_intake() {
    assert_eq!(all_questionnaires().len(), 1);
    let q = get_questionnaire("mental_health_intake").expect("registered");
    assert_eq!(q.name(), "Mental Health Intake");
    assert!(get_questionnaire("phq9").is_none());
}

#[test]
fn question_ids_are_unique_and_tagged_with_their_section() {
    let q = get_questionnaire("mental_health_intake").unwrap();
    let mut seen = HashSet::new();
    for section in q.sections() {
        assert!(!section.questions.is_empty(), "{} is empty", section.id);
        for question in &section.questions {
            assert!(seen.insert(question.id.clone()), "duplicate {}", question.id);
            assert_eq!(question.section, section.id);
            match question.kind {
                QuestionKind::Slider => assert!(question.range.is_some()),
                _ => assert!(!question.options.is_empty()),
            }
        }
    }
    assert_eq!(seen.len(), q.questions().len());
}

#[test]
fn bonus_rules_reference_real_options() {
    let q = get_questionnaire("mental_health_intake").unwrap();
    for rule in BONUS_RULES {
        let question = q
            .question(rule.question_id)
            .unwrap_or_else(|| panic!("no question {}", rule.question_id));
        if let tranquil_intake::scoring::BonusAnswer::Text(text) = rule.answer {
            assert!(question.options.iter().any(|o| o == text), "{text}");
        }
    }
}

#[test]
fn validate_answers_flags_bad_values() {
    let q = get_questionnaire("mental_health_intake").unwrap();
    let mut answers = AnswerMap::new();
    answers.insert(id::TRAUMA_EXPERIENCE, "Yes");
    answers.insert(id::WELLBEING_SCALE, AnswerValue::Number(7));
    assert!(q.validate_answers(&answers).is_empty());

    answers.insert(id::MOOD_LOW, "Always");
    answers.insert(id::WELLBEING_SCALE, AnswerValue::Number(11));
    answers.insert("favourite-colour", "Blue");
    let errors = q.validate_answers(&answers);
    let ids: HashSet<_> = errors.iter().map(|e| e.question_id.as_str()).collect();
    assert_eq!(errors.len(), 3);
    assert!(ids.contains(id::MOOD_LOW));
    assert!(ids.contains(id::WELLBEING_SCALE));
    assert!(ids.contains("favourite-colour"));
}

#[test]
fn structured_input_lists_answers_by_section() {
    let q = get_questionnaire("mental_health_intake").unwrap();
    let mut answers = AnswerMap::new();
    answers.insert(id::GRIEF_LOSS, "No");
    answers.insert(id::WELLBEING_SCALE, AnswerValue::Number(6));

    let text = q.to_structured_input(&answers);
    assert!(text.starts_with("## Mental Health Intake"));
    assert!(text.contains("### Life Experiences"));
    assert!(text.contains("- Have you lost someone close to you in the past year?: No"));
    assert!(text.contains("overall wellbeing?: 6"));
}
