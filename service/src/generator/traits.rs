//! Core generator traits and types
//!
//! This module defines the trait every renderer implements and the error type
//! they share.

use mdmodels_core::prelude::*;
use thiserror::Error;

/// Result type for generator operations
pub type GeneratorResult<T> = std::result::Result<T, GeneratorError>;

/// Errors that can occur during rendering
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The model breaks a rule the renderer relies on
    #[error("Schema contract violated at '{element}': {message}")]
    SchemaContract {
        /// Offending element, e.g. `Person.name`
        element: String,
        /// What is wrong with it
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Core model error
    #[error("Model error: {0}")]
    Model(#[from] ModelError),
}

impl GeneratorError {
    /// Create a schema contract violation for a model element
    #[must_use]
    pub fn contract(element: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SchemaContract {
            element: element.into(),
            message: message.into(),
        }
    }

    /// Convert `fmt::Error` from `write!` into a generator error
    #[must_use]
    pub fn from_fmt(err: std::fmt::Error) -> Self {
        Self::Io(std::io::Error::other(format!("Formatting error: {err}")))
    }
}

impl From<GeneratorError> for ModelError {
    fn from(err: GeneratorError) -> Self {
        match err {
            GeneratorError::SchemaContract { element, message } => {
                ModelError::contract(element, message)
            }
            GeneratorError::Io(err) => ModelError::IoError(err),
            GeneratorError::Model(err) => err,
        }
    }
}

/// Indentation style for generated code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndentStyle {
    /// Use spaces for indentation
    Spaces(usize),
    /// Use tabs for indentation
    Tabs,
}

impl Default for IndentStyle {
    fn default() -> Self {
        Self::Spaces(4)
    }
}

impl IndentStyle {
    /// Get single indentation string
    #[must_use]
    pub fn single(&self) -> String {
        self.to_string(1)
    }

    /// Get indentation string for given level
    #[must_use]
    pub fn to_string(&self, level: usize) -> String {
        match self {
            Self::Spaces(n) => " ".repeat(n * level),
            Self::Tabs => "\t".repeat(level),
        }
    }
}

/// Core trait for synchronous renderers
pub trait Generator: Send + Sync {
    /// Get generator name
    fn name(&self) -> &str;

    /// Get generator description
    fn description(&self) -> &str;

    /// Render a data model
    ///
    /// # Errors
    /// Returns an error if the model breaks the renderer's contract
    fn generate(&self, model: &DataModel) -> GeneratorResult<String>;

    /// Get the file extension for generated files
    fn get_file_extension(&self) -> &str;

    /// Get the default filename for generated files
    fn get_default_filename(&self) -> &str;

    /// Check the model before any output is produced
    ///
    /// # Errors
    /// Returns the first contract violation found
    fn validate_schema(&self, model: &DataModel) -> GeneratorResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_error_converts_to_model_error() {
        let err = GeneratorError::contract("Person.name", "attribute declares no data types");
        assert!(err.to_string().contains("Person.name"));

        let model_err: ModelError = err.into();
        assert!(matches!(model_err, ModelError::ContractViolation { .. }));
    }

    #[test]
    fn test_indent_style() {
        assert_eq!(IndentStyle::Spaces(2).to_string(2), "    ");
        assert_eq!(IndentStyle::Tabs.single(), "\t");
        assert_eq!(IndentStyle::default().single(), "    ");
    }
}
