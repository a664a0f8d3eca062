use thiserror::Error;

/// Top-level error type for Sloth Park.
///
/// Subsystem crates define their own error types and implement
/// `From<SubsystemError> for SlothParkError` so that `?` works across
/// crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SlothParkError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Chat error: {0}")]
    Chat(String),
}

impl From<toml::de::Error> for SlothParkError {
    fn from(err: toml::de::Error) -> Self {
        SlothParkError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for SlothParkError {
    fn from(err: toml::ser::Error) -> Self {
        SlothParkError::Config(err.to_string())
    }
}

/// A specialized `Result` type for Sloth Park operations.
pub type Result<T> = std::result::Result<T, SlothParkError>;
