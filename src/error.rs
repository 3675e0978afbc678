//! Error types for bigolab.
//!
//! All fallible operations return `Result<T, LabError>` instead of panicking.

use thiserror::Error;

/// Result type alias for bigolab operations.
pub type LabResult<T> = Result<T, LabError>;

/// Unified error type for all bigolab operations.
#[derive(Debug, Error)]
pub enum LabError {
    /// Invalid configuration parameter.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// An animation run was requested while one is already in flight.
    #[error("animation '{demo}' is already running")]
    AlreadyRunning {
        /// Name of the demo that rejected the run.
        demo: &'static str,
    },

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LabError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this error is a rejected re-entrant run.
    ///
    /// Frontends treat this case as a no-op rather than a failure.
    #[must_use]
    pub const fn is_already_running(&self) -> bool {
        matches!(self, Self::AlreadyRunning { .. })
    }
}
