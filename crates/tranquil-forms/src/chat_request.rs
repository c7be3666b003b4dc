//! The "request a chat with a therapist" modal.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tranquil_core::models::chat_request::{ChatRequest, ChatRequestReceipt};
use tranquil_core::models::field::{name, FieldValue, FieldValues};

use crate::config::FormsConfig;
use crate::error::FormError;
use crate::submission;
use crate::validation::{validate_field_on, validate_fields, FieldErrors};

pub const FIELDS: &[&str] = &[
    name::FULL_NAME,
    name::EMAIL,
    name::PHONE,
    name::PREFERRED_CONTACT_TIME,
    name::MESSAGE,
    name::AGREE_TO_TERMS,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormStatus {
    Editing,
    Submitting,
    Submitted,
    Closed,
}

#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    /// Validation failed; the errors are also stored on the form.
    Rejected(FieldErrors),
    Accepted(ChatRequestReceipt),
}

#[derive(Debug, Clone)]
pub struct ChatRequestForm {
    status: FormStatus,
    values: FieldValues,
    errors: FieldErrors,
    today: jiff::civil::Date,
}

impl Default for ChatRequestForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatRequestForm {
    pub fn new() -> Self {
        Self {
            status: FormStatus::Editing,
            values: FieldValues::new(),
            errors: FieldErrors::new(),
            today: jiff::Zoned::now().date(),
        }
    }

    /// Pin "today" for date checks.
    pub fn with_today(mut self, today: jiff::civil::Date) -> Self {
        self.today = today;
        self
    }

    pub fn status(&self) -> FormStatus {
        self.status
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

    fn require_status(&self, expected: FormStatus, action: &'static str) -> Result<(), FormError> {
        if self.status != expected {
            return Err(FormError::InvalidState {
                action,
                status: self.status,
            });
        }
        Ok(())
    }

    /// Store a value and re-validate that field.
    pub fn set_field(&mut self, field: &str, value: impl Into<FieldValue>) -> Result<(), FormError> {
        self.require_status(FormStatus::Editing, "edit")?;
        let value = value.into();
        match validate_field_on(field, &value, None, self.today) {
            Some(message) => {
                self.errors.insert(field.to_string(), message);
            }
            None => {
                self.errors.remove(field);
            }
        }
        self.values.insert(field.to_string(), value);
        Ok(())
    }

    /// Validate everything and, if clean, deliver the request after the
    /// configured delay.
    pub async fn submit(&mut self, config: &FormsConfig) -> Result<SubmitOutcome, FormError> {
        self.require_status(FormStatus::Editing, "submit")?;

        let errors = validate_fields(FIELDS, &self.values, |_| None, self.today);
        self.errors = errors.clone();
        if !errors.is_empty() {
            tracing::debug!(failing = errors.len(), "chat request rejected");
            return Ok(SubmitOutcome::Rejected(errors));
        }

        let request = ChatRequest::from_fields(&self.values)?;
        let submitting = SubmittingGuard::enter(&mut self.status);
        let submitted_at =
            submission::simulate_delivery("chat_request", &request, config.submission_delay()).await;
        submitting.finish();

        Ok(SubmitOutcome::Accepted(ChatRequestReceipt {
            id: Uuid::new_v4(),
            request,
            submitted_at,
        }))
    }

    /// Keep the success state up for the configured time, then close and clear.
    pub async fn auto_close(&mut self, config: &FormsConfig) -> Result<(), FormError> {
        self.require_status(FormStatus::Submitted, "close")?;
        tokio::time::sleep(config.auto_close()).await;
        self.values.clear();
        self.errors.clear();
        self.status = FormStatus::Closed;
        Ok(())
    }

    /// Clear all values and errors and return to editing.
    pub fn reset(&mut self) {
        self.values.clear();
        self.errors.clear();
        self.status = FormStatus::Editing;
    }

    /// Open the modal again after it closed.
    pub fn reopen(&mut self) {
        if self.status == FormStatus::Closed {
            self.status = FormStatus::Editing;
        }
    }
}

/// Holds the form in `Submitting` while delivery is in flight.
///
/// If the submit future is dropped before delivery finishes, the form goes
/// back to `Editing` with its values intact.
struct SubmittingGuard<'a> {
    status: &'a mut FormStatus,
    done: bool,
}

impl<'a> SubmittingGuard<'a> {
    fn enter(status: &'a mut FormStatus) -> Self {
        *status = FormStatus::Submitting;
        Self { status, done: false }
    }

    fn finish(mut self) {
        *self.status = FormStatus::Submitted;
        self.done = true;
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        if !self.done {
            tracing::debug!("chat request submission cancelled");
            *self.status = FormStatus::Editing;
        }
    }
}
