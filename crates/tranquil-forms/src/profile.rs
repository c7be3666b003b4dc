//! The three-step "complete your profile" modal.

use std::collections::HashMap;

use tranquil_core::models::field::{name, FieldValue, FieldValues};
use tranquil_core::models::profile::ProfileDetails;

use crate::error::FormError;
use crate::validation::{predefined_rule, validate_field_on, validate_fields, FieldErrors, ValidationRule};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileStep {
    PersonalDetails,
    EmergencyContact,
    CarePreferences,
}

impl ProfileStep {
    pub const ALL: [ProfileStep; 3] = [
        ProfileStep::PersonalDetails,
        ProfileStep::EmergencyContact,
        ProfileStep::CarePreferences,
    ];

    pub fn index(self) -> usize {
        match self {
            ProfileStep::PersonalDetails => 0,
            ProfileStep::EmergencyContact => 1,
            ProfileStep::CarePreferences => 2,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ProfileStep::PersonalDetails => "Personal details",
            ProfileStep::EmergencyContact => "Emergency contact",
            ProfileStep::CarePreferences => "Care preferences",
        }
    }

    /// Fields validated when leaving this step. All of them are required.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            ProfileStep::PersonalDetails => &[name::FULL_NAME, name::DATE_OF_BIRTH, name::PHONE],
            ProfileStep::EmergencyContact => {
                &[name::EMERGENCY_CONTACT_NAME, name::EMERGENCY_CONTACT_PHONE]
            }
            ProfileStep::CarePreferences => &[name::PRIMARY_CONCERN, name::AGREE_TO_TERMS],
        }
    }

    fn next(self) -> Option<ProfileStep> {
        Self::ALL.get(self.index() + 1).copied()
    }

    fn prev(self) -> Option<ProfileStep> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    fn of_field(field: &str) -> Option<ProfileStep> {
        Self::ALL.into_iter().find(|s| s.fields().contains(&field))
    }
}

/// Profile rules: the predefined rule for each field, made required.
fn profile_rules() -> &'static HashMap<&'static str, ValidationRule> {
    static RULES: std::sync::LazyLock<HashMap<&'static str, ValidationRule>> = std::sync::LazyLock::new(|| {
        ProfileStep::ALL
            .iter()
            .flat_map(|s| s.fields())
            .map(|f| (*f, predefined_rule(f).unwrap_or_default().required()))
            .collect()
    });
    &RULES
}

/// Result of pressing "Next" / "Finish".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Advanced(ProfileStep),
    /// The current step has errors; they are also stored on the form.
    Blocked(FieldErrors),
    Completed,
}

#[derive(Debug, Clone)]
pub struct ProfileForm {
    step: ProfileStep,
    values: FieldValues,
    errors: FieldErrors,
    today: jiff::civil::Date,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileForm {
    pub fn new() -> Self {
        Self {
            step: ProfileStep::PersonalDetails,
            values: FieldValues::new(),
            errors: FieldErrors::new(),
            today: jiff::Zoned::now().date(),
        }
    }

    /// Pin "today" for date-of-birth checks.
    pub fn with_today(mut self, today: jiff::civil::Date) -> Self {
        self.today = today;
        self
    }

    pub fn step(&self) -> ProfileStep {
        self.step
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Store a value and re-validate that field.
    pub fn set_field(&mut self, field: &str, value: impl Into<FieldValue>) {
        let value = value.into();
        let message = match ProfileStep::of_field(field) {
            Some(_) => validate_field_on(field, &value, profile_rules().get(field), self.today),
            None => validate_field_on(field, &value, None, self.today),
        };
        match message {
            Some(message) => {
                self.errors.insert(field.to_string(), message);
            }
            None => {
                self.errors.remove(field);
            }
        }
        self.values.insert(field.to_string(), value);
    }

    /// Validate the current step; advance, or finish and hand over the profile.
    pub fn next<F>(&mut self, on_complete: F) -> Result<StepOutcome, FormError>
    where
        F: FnOnce(ProfileDetails),
    {
        let fields = self.step.fields();
        let errors = validate_fields(fields, &self.values, |f| profile_rules().get(f), self.today);

        for field in fields {
            self.errors.remove(*field);
        }
        if !errors.is_empty() {
            tracing::debug!(step = self.step.title(), failing = errors.len(), "profile step blocked");
            self.errors.extend(errors.clone());
            return Ok(StepOutcome::Blocked(errors));
        }

        match self.step.next() {
            Some(step) => {
                self.step = step;
                Ok(StepOutcome::Advanced(step))
            }
            None => {
                let details = ProfileDetails::from_fields(&self.values)?;
                tracing::info!("profile completed");
                on_complete(details);
                Ok(StepOutcome::Completed)
            }
        }
    }

    /// Go back one step without validating. Returns false on the first step.
    pub fn back(&mut self) -> bool {
        match self.step.prev() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    pub fn reset(&mut self) {
        self.step = ProfileStep::PersonalDetails;
        self.values.clear();
        self.errors.clear();
    }
}
