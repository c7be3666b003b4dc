use thiserror::Error;

use crate::chat_request::FormStatus;

#[derive(Debug, Error)]
pub enum FormError {
    #[error(transparent)]
    Intake(#[from] tranquil_intake::error::IntakeError),

    #[error(transparent)]
    Core(#[from] tranquil_core::error::CoreError),

    #[error("questionnaire '{0}' has no sections")]
    EmptyQuestionnaire(String),

    #[error("form cannot {action} while {status:?}")]
    InvalidState {
        action: &'static str,
        status: FormStatus,
    },

    #[error("no config directory found")]
    NoConfigDir,

    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config is not a JSON object")]
    MalformedConfig,

    #[error("config_version {found} is newer than this build supports ({supported})")]
    UnsupportedConfigVersion { found: u32, supported: u32 },
}
