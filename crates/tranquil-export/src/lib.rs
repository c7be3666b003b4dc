//! tranquil-export
//!
//! Plain-text results summaries rendered from Tera templates.

pub mod error;
pub mod render;
pub mod report;
