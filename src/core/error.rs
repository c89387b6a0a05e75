//! Error types for the board client.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Bootstrap data unavailable: {message}")]
    Bootstrap { message: String },

    #[error("Malformed message: {0}")]
    Protocol(#[from] serde_json::Error),

    #[error("Socket error: {message}")]
    Socket { message: String },

    #[error("Form error: {message}")]
    Form { message: String },
}

impl BoardError {
    pub fn bootstrap(message: impl Into<String>) -> Self {
        Self::Bootstrap { message: message.into() }
    }

    pub fn socket(message: impl Into<String>) -> Self {
        Self::Socket { message: message.into() }
    }

    pub fn form(message: impl Into<String>) -> Self {
        Self::Form { message: message.into() }
    }
}

pub type BoardResult<T> = Result<T, BoardError>;
