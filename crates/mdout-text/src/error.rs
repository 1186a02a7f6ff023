//! Error types for mdout-text

/// Result type for mdout-text operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in mdout-text operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Invalid {kind} option: {value}")]
    InvalidOption { kind: &'static str, value: String },
}

impl Error {
    pub fn invalid_option(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidOption {
            kind,
            value: value.into(),
        }
    }
}
