//! tranquil-forms
//!
//! Form state for the intake flow: the section-by-section questionnaire
//! wizard, the three-step profile form, and the chat-request modal, plus the
//! field validator they all share.
//!
//! Every form is an owned, single-writer state struct. Nothing here renders
//! anything; callers drive the state machines from UI events.

pub mod chat_request;
pub mod config;
pub mod error;
pub mod profile;
pub mod submission;
pub mod validation;
pub mod wizard;
