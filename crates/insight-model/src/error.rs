use thiserror::Error;

/// Rejected threshold configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be {expected}, got {actual}")]
    OutOfRange {
        field: &'static str,
        expected: &'static str,
        actual: String,
    },
    #[error("{field} must not exceed {other}")]
    Ordering {
        field: &'static str,
        other: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
