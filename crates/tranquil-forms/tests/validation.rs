use regex::Regex;

use tranquil_core::models::field::{name, FieldValue, FieldValues};
use tranquil_forms::validation::{
    predefined_rule, predefined_rules, validate_field, validate_field_on, validate_fields,
    ValidationRule, FUTURE_DATE_MESSAGE, INVALID_DATE_MESSAGE, REQUIRED_MESSAGE,
};

fn today() -> jiff::civil::Date {
    jiff::civil::date(2026, 3, 15)
}

fn text(s: &str) -> FieldValue {
    FieldValue::Text(s.to_string())
}

#[test]
fn email_rule_rejects_malformed_address() {
    let rule = predefined_rule(name::EMAIL).unwrap();
    assert!(validate_field(name::EMAIL, &text("not-an-email"), Some(&rule)).is_some());
    assert_eq!(validate_field(name::EMAIL, &text("a@b.com"), Some(&rule)), None);
}

#[test]
fn required_checkbox() {
    let rule = ValidationRule::new().required();
    assert_eq!(
        validate_field(name::AGREE_TO_TERMS, &FieldValue::Flag(false), Some(&rule)).as_deref(),
        Some(REQUIRED_MESSAGE)
    );
    assert_eq!(validate_field(name::AGREE_TO_TERMS, &FieldValue::Flag(true), Some(&rule)), None);
}

#[test]
fn checkbox_ignores_text_constraints() {
    let rule = ValidationRule::new().min_length(50);
    assert_eq!(validate_field("newsletter", &FieldValue::Flag(false), Some(&rule)), None);
}

#[test]
fn falls_back_to_predefined_rule() {
    assert_eq!(
        validate_field(name::FULL_NAME, &text("   "), None).as_deref(),
        Some(REQUIRED_MESSAGE)
    );
    assert_eq!(validate_field(name::FULL_NAME, &text("Ada Lovelace"), None), None);
}

#[test]
fn unknown_field_without_rule_passes() {
    assert_eq!(validate_field("favouriteColour", &text(""), None), None);
}

#[test]
fn checks_run_in_order() {
    let rule = ValidationRule::new()
        .required()
        .min_length(3)
        .max_length(5)
        .pattern(Regex::new("^[a-z]+$").unwrap(), "lowercase only")
        .custom(|v| (v == "nope").then(|| "not that one".to_string()));

    let check = |v: &str| validate_field("code", &text(v), Some(&rule));
    assert_eq!(check("").as_deref(), Some(REQUIRED_MESSAGE));
    assert_eq!(check("A").as_deref(), Some("Must be at least 3 characters"));
    assert_eq!(check("ABCDEFG").as_deref(), Some("Must be no more than 5 characters"));
    assert_eq!(check("ABCD").as_deref(), Some("lowercase only"));
    assert_eq!(check("nope").as_deref(), Some("not that one"));
    assert_eq!(check("fine"), None);
}

#[test]
fn optional_empty_text_skips_other_checks() {
    assert_eq!(validate_field(name::PHONE, &text(""), None), None);
    assert!(validate_field(name::PHONE, &text("call me"), None).is_some());
    assert_eq!(validate_field(name::PHONE, &text("+44 20 7946 0958"), None), None);
}

#[test]
fn date_fields_reject_future_and_garbage() {
    let rule = ValidationRule::new().required();
    let check = |field: &str, v: &str| validate_field_on(field, &text(v), Some(&rule), today());

    assert_eq!(check("dateOfBirth", "1990-04-01"), None);
    assert_eq!(check("dateOfBirth", "2026-03-15"), None);
    assert_eq!(check("dateOfBirth", "2026-03-16").as_deref(), Some(FUTURE_DATE_MESSAGE));
    assert_eq!(check("StartDate", "soon").as_deref(), Some(INVALID_DATE_MESSAGE));
    // no "date" in the name, so no date check
    assert_eq!(check("nickname", "2999-01-01"), None);
}

#[test]
fn birth_date_custom_check_runs_before_date_check() {
    let message = validate_field_on(name::DATE_OF_BIRTH, &text("1850-01-01"), None, today());
    assert_eq!(message.as_deref(), Some("Please enter a realistic date of birth"));
}

#[test]
fn contact_time_must_be_an_offered_option() {
    assert_eq!(validate_field(name::PREFERRED_CONTACT_TIME, &text("Evening"), None), None);
    assert!(validate_field(name::PREFERRED_CONTACT_TIME, &text("Midnight"), None).is_some());
}

#[test]
fn predefined_table_covers_common_fields() {
    assert_eq!(predefined_rules().len(), 12);
    assert!(predefined_rules().contains_key(name::EMERGENCY_CONTACT_PHONE));
}

#[test]
fn validate_fields_collects_every_failure() {
    let mut values = FieldValues::new();
    values.insert(name::EMAIL.to_string(), text("a@b.com"));
    values.insert(name::MESSAGE.to_string(), text("short"));

    let errors = validate_fields(
        &[name::EMAIL, name::MESSAGE, name::AGREE_TO_TERMS],
        &values,
        |_| None,
        today(),
    );
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[name::MESSAGE], "Must be at least 10 characters");
    assert_eq!(errors[name::AGREE_TO_TERMS], REQUIRED_MESSAGE);
}
