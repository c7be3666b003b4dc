use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::field::{flag_field, name, text_field, FieldValues};
use crate::error::CoreError;

/// The completed profile, built once every step of the profile form passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProfileDetails {
    pub full_name: String,
    pub date_of_birth: jiff::civil::Date,
    pub phone: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub primary_concern: String,
    pub agreed_to_terms: bool,
}

impl ProfileDetails {
    pub fn from_fields(values: &FieldValues) -> Result<Self, CoreError> {
        let dob = text_field(values, name::DATE_OF_BIRTH)?;
        let date_of_birth = dob
            .parse::<jiff::civil::Date>()
            .map_err(|source| CoreError::InvalidDate {
                field: name::DATE_OF_BIRTH.to_string(),
                source,
            })?;

        Ok(Self {
            full_name: text_field(values, name::FULL_NAME)?,
            date_of_birth,
            phone: text_field(values, name::PHONE)?,
            emergency_contact_name: text_field(values, name::EMERGENCY_CONTACT_NAME)?,
            emergency_contact_phone: text_field(values, name::EMERGENCY_CONTACT_PHONE)?,
            primary_concern: text_field(values, name::PRIMARY_CONCERN)?,
            agreed_to_terms: flag_field(values, name::AGREE_TO_TERMS)?,
        })
    }
}
