use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::field::{flag_field, name, optional_text_field, text_field, FieldValues};
use crate::error::CoreError;

/// A request to be contacted by a therapist over chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChatRequest {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub preferred_contact_time: String,
    pub message: String,
    pub agreed_to_terms: bool,
}

impl ChatRequest {
    pub fn from_fields(values: &FieldValues) -> Result<Self, CoreError> {
        Ok(Self {
            full_name: text_field(values, name::FULL_NAME)?,
            email: text_field(values, name::EMAIL)?,
            phone: optional_text_field(values, name::PHONE)?,
            preferred_contact_time: text_field(values, name::PREFERRED_CONTACT_TIME)?,
            message: text_field(values, name::MESSAGE)?,
            agreed_to_terms: flag_field(values, name::AGREE_TO_TERMS)?,
        })
    }
}

/// Acknowledgement shown after a chat request is accepted.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChatRequestReceipt {
    pub id: Uuid,
    pub request: ChatRequest,
    pub submitted_at: jiff::Timestamp,
}
