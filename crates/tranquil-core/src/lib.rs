//! tranquil-core
//!
//! Pure domain types for the Tranquil intake flow: questions, answers,
//! therapy categories, and the payloads produced by the modal forms.
//! No scoring or validation logic lives here; this is the shared vocabulary.

pub mod error;
pub mod models;
