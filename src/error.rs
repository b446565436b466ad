//! Error types for the activity classifier

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid event: {field}: {reason}")]
    InvalidEvent { field: String, reason: String },

    #[error("Classification failed: {0}")]
    Classification(String),
}

impl Error {
    pub fn invalid_event(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidEvent {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn classification(msg: impl Into<String>) -> Self {
        Error::Classification(msg.into())
    }
}
