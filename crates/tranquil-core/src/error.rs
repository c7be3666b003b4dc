use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("field '{field}' expected {expected}")]
    WrongFieldType {
        field: String,
        expected: &'static str,
    },

    #[error("invalid date in '{field}': {source}")]
    InvalidDate {
        field: String,
        #[source]
        source: jiff::Error,
    },
}
