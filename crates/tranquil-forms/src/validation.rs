//! Field validation shared by every form.
//!
//! Checks run in a fixed order and the first failure wins:
//! required, min length, max length, pattern, custom, then the date check
//! for any field whose name contains "date".

use std::collections::{BTreeMap, HashMap};

use regex::Regex;

use tranquil_core::models::field::{name, FieldValue, FieldValues};

/// A field-specific check run after the declarative ones. Returns a message on failure.
pub type CustomCheck = fn(&str) -> Option<String>;

/// Field name → error message for every field currently failing.
pub type FieldErrors = BTreeMap<String, String>;

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const INVALID_DATE_MESSAGE: &str = "Please enter a valid date (YYYY-MM-DD)";
pub const FUTURE_DATE_MESSAGE: &str = "Date cannot be in the future";

/// Options offered by the "best time to contact you" dropdown.
pub const CONTACT_TIMES: &[&str] = &["Morning", "Afternoon", "Evening", "Any time"];

/// Declarative constraints for one field.
#[derive(Debug, Clone, Default)]
pub struct ValidationRule {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<Regex>,
    /// Shown when `pattern` does not match. Defaults to "Invalid format".
    pub pattern_message: Option<String>,
    pub custom: Option<CustomCheck>,
}

impl ValidationRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, n: usize) -> Self {
        self.min_length = Some(n);
        self
    }

    pub fn max_length(mut self, n: usize) -> Self {
        self.max_length = Some(n);
        self
    }

    pub fn pattern(mut self, pattern: Regex, message: &str) -> Self {
        self.pattern = Some(pattern);
        self.pattern_message = Some(message.to_string());
        self
    }

    pub fn custom(mut self, check: CustomCheck) -> Self {
        self.custom = Some(check);
        self
    }
}

static NAME_PATTERN: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"^[\p{L} .'-]+$").expect("valid name regex"));

static EMAIL_PATTERN: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static PHONE_PATTERN: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"^\+?[0-9 ().-]{7,20}$").expect("valid phone regex"));

const NAME_MESSAGE: &str = "Name can only contain letters, spaces, apostrophes and hyphens";
const EMAIL_MESSAGE: &str = "Please enter a valid email address";
const PHONE_MESSAGE: &str = "Please enter a valid phone number";

fn name_rule(max: usize) -> ValidationRule {
    ValidationRule::new()
        .required()
        .min_length(2)
        .max_length(max)
        .pattern(NAME_PATTERN.clone(), NAME_MESSAGE)
}

fn phone_rule() -> ValidationRule {
    ValidationRule::new().pattern(PHONE_PATTERN.clone(), PHONE_MESSAGE)
}

fn plausible_birth_year(value: &str) -> Option<String> {
    let date = value.parse::<jiff::civil::Date>().ok()?;
    (date.year() < 1900).then(|| "Please enter a realistic date of birth".to_string())
}

fn known_contact_time(value: &str) -> Option<String> {
    (!CONTACT_TIMES.contains(&value)).then(|| format!("Choose one of: {}", CONTACT_TIMES.join(", ")))
}

/// Rules applied when a caller validates a field without supplying its own.
pub fn predefined_rules() -> &'static HashMap<&'static str, ValidationRule> {
    static RULES: std::sync::LazyLock<HashMap<&'static str, ValidationRule>> = std::sync::LazyLock::new(|| {
        HashMap::from([
            (name::FULL_NAME, name_rule(100)),
            (name::FIRST_NAME, name_rule(50)),
            (name::LAST_NAME, name_rule(50)),
            (
                name::EMAIL,
                ValidationRule::new()
                    .required()
                    .max_length(254)
                    .pattern(EMAIL_PATTERN.clone(), EMAIL_MESSAGE),
            ),
            (name::PHONE, phone_rule()),
            (
                name::DATE_OF_BIRTH,
                ValidationRule::new().required().custom(plausible_birth_year),
            ),
            (
                name::MESSAGE,
                ValidationRule::new().required().min_length(10).max_length(1000),
            ),
            (
                name::PRIMARY_CONCERN,
                ValidationRule::new().required().min_length(3).max_length(500),
            ),
            (name::EMERGENCY_CONTACT_NAME, name_rule(100)),
            (name::EMERGENCY_CONTACT_PHONE, phone_rule().required()),
            (
                name::PREFERRED_CONTACT_TIME,
                ValidationRule::new().required().custom(known_contact_time),
            ),
            (name::AGREE_TO_TERMS, ValidationRule::new().required()),
        ])
    });
    &RULES
}

/// A copy of the predefined rule for `field`, for forms that tighten it.
pub fn predefined_rule(field: &str) -> Option<ValidationRule> {
    predefined_rules().get(field).cloned()
}

/// Validate one field against `rule`, or the predefined rule for its name.
///
/// Returns the first failing message. A field with no rule at all is
/// accepted with a warning.
pub fn validate_field(field: &str, value: &FieldValue, rule: Option<&ValidationRule>) -> Option<String> {
    validate_field_on(field, value, rule, jiff::Zoned::now().date())
}

/// [`validate_field`] with an explicit "today" for the future-date check.
pub fn validate_field_on(
    field: &str,
    value: &FieldValue,
    rule: Option<&ValidationRule>,
    today: jiff::civil::Date,
) -> Option<String> {
    let rule = match rule.or_else(|| predefined_rules().get(field)) {
        Some(rule) => rule,
        None => {
            tracing::warn!(field, "no validation rule for field, accepting value");
            return None;
        }
    };

    let text = match value {
        FieldValue::Flag(checked) => {
            return (rule.required && !checked).then(|| REQUIRED_MESSAGE.to_string());
        }
        FieldValue::Text(text) => text.trim(),
    };

    if text.is_empty() {
        return rule.required.then(|| REQUIRED_MESSAGE.to_string());
    }

    let length = text.chars().count();
    if let Some(min) = rule.min_length
        && length < min
    {
        return Some(format!("Must be at least {min} characters"));
    }
    if let Some(max) = rule.max_length
        && length > max
    {
        return Some(format!("Must be no more than {max} characters"));
    }

    if let Some(pattern) = &rule.pattern
        && !pattern.is_match(text)
    {
        return Some(
            rule.pattern_message
                .clone()
                .unwrap_or_else(|| "Invalid format".to_string()),
        );
    }

    if let Some(check) = rule.custom
        && let Some(message) = check(text)
    {
        return Some(message);
    }

    if field.to_lowercase().contains("date") {
        match text.parse::<jiff::civil::Date>() {
            Err(_) => return Some(INVALID_DATE_MESSAGE.to_string()),
            Ok(date) if date > today => return Some(FUTURE_DATE_MESSAGE.to_string()),
            Ok(_) => {}
        }
    }

    None
}

/// Validate `fields` of a form. Missing values are validated as empty text.
pub fn validate_fields<'a, F>(
    fields: &[&str],
    values: &FieldValues,
    rule_for: F,
    today: jiff::civil::Date,
) -> FieldErrors
where
    F: Fn(&str) -> Option<&'a ValidationRule>,
{
    let empty = FieldValue::Text(String::new());
    fields
        .iter()
        .filter_map(|&field| {
            let value = values.get(field).unwrap_or(&empty);
            validate_field_on(field, value, rule_for(field), today)
                .map(|message| (field.to_string(), message))
        })
        .collect()
}
