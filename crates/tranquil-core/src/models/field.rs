use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The raw value of a form input: typed text or a checkbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Flag(b)
    }
}

/// Current contents of a form, keyed by field name.
pub type FieldValues = BTreeMap<String, FieldValue>;

/// Required trimmed text for `field`.
pub fn text_field(values: &FieldValues, field: &str) -> Result<String, CoreError> {
    match values.get(field) {
        Some(FieldValue::Text(s)) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        Some(FieldValue::Text(_)) | None => Err(CoreError::MissingField(field.to_string())),
        Some(FieldValue::Flag(_)) => Err(CoreError::WrongFieldType {
            field: field.to_string(),
            expected: "text",
        }),
    }
}

/// Optional trimmed text for `field`; blank counts as absent.
pub fn optional_text_field(values: &FieldValues, field: &str) -> Result<Option<String>, CoreError> {
    match text_field(values, field) {
        Ok(s) => Ok(Some(s)),
        Err(CoreError::MissingField(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Checkbox state for `field`; an absent checkbox is unchecked.
pub fn flag_field(values: &FieldValues, field: &str) -> Result<bool, CoreError> {
    match values.get(field) {
        Some(FieldValue::Flag(b)) => Ok(*b),
        None => Ok(false),
        Some(FieldValue::Text(_)) => Err(CoreError::WrongFieldType {
            field: field.to_string(),
            expected: "checkbox",
        }),
    }
}

/// Field names shared by the modal forms and the predefined validation rules.
pub mod name {
    pub const FULL_NAME: &str = "fullName";
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const DATE_OF_BIRTH: &str = "dateOfBirth";
    pub const MESSAGE: &str = "message";
    pub const PRIMARY_CONCERN: &str = "primaryConcern";
    pub const EMERGENCY_CONTACT_NAME: &str = "emergencyContactName";
    pub const EMERGENCY_CONTACT_PHONE: &str = "emergencyContactPhone";
    pub const PREFERRED_CONTACT_TIME: &str = "preferredContactTime";
    pub const AGREE_TO_TERMS: &str = "agreeToTerms";
}
