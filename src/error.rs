use thiserror::Error;

/// Classifies domain list initialization errors for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitErrorKind {
    /// The list file does not exist
    NotFound,
    /// File open/read failure
    FileError,
    /// Data is not a JSON array of strings
    InvalidData,
    /// The list is null, empty, or contains only blank entries
    Empty,
}

/// Free email domain error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Email or domain cannot be null or empty")]
    InvalidArgument,

    #[error("Invalid email format: {input}")]
    InvalidFormat { input: String },

    #[error("Domain list initialization failed: {message}")]
    Initialization {
        kind: InitErrorKind,
        message: String,
    },
}

impl DomainError {
    pub(crate) fn init(kind: InitErrorKind, message: impl Into<String>) -> Self {
        DomainError::Initialization {
            kind,
            message: message.into(),
        }
    }

    /// True for errors caused by the caller's input rather than the domain list.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidArgument | DomainError::InvalidFormat { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, DomainError>;
