//! Error types for loading and describing data models

use thiserror::Error;

/// Main error type for `mdmodels` core operations
#[derive(Error, Debug)]
pub enum ModelError {
    /// Model parsing errors (malformed JSON/YAML input)
    #[error("Failed to parse data model: {message}")]
    ParseError {
        /// Error message
        message: String,
        /// Location in the input if available
        location: Option<String>,
    },

    /// The model breaks a structural rule renderers rely on
    #[error("Schema contract violated at '{element}': {message}")]
    ContractViolation {
        /// Error message
        message: String,
        /// Offending element, e.g. `Person.name`
        element: String,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// IO errors
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Input format that no loader understands
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Result type alias for `mdmodels` core operations
pub type Result<T> = std::result::Result<T, ModelError>;

impl ModelError {
    /// Create a new parse error with location
    #[must_use]
    pub fn parse_at(message: impl Into<String>, location: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
            location: Some(location.into()),
        }
    }

    /// Create a new contract violation for a model element
    #[must_use]
    pub fn contract(element: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ContractViolation {
            message: message.into(),
            element: element.into(),
        }
    }

    /// Create a new configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }

    /// Create an unsupported format error
    #[must_use]
    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat(format.into())
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError {
            message: err.to_string(),
            location: Some(format!("line {}, column {}", err.line(), err.column())),
        }
    }
}

impl From<serde_yaml::Error> for ModelError {
    fn from(err: serde_yaml::Error) -> Self {
        let location = err
            .location()
            .map(|loc| format!("line {}, column {}", loc.line(), loc.column()));
        Self::ParseError {
            message: err.to_string(),
            location,
        }
    }
}

impl From<toml::de::Error> for ModelError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigError(err.to_string())
    }
}
