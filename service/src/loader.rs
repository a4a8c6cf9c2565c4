//! Loading serialized data models
//!
//! Models are read from JSON or YAML; the format follows the file extension.

use mdmodels_core::{DataModel, ModelError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Serialization format of a model file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    /// `JSON`
    Json,
    /// `YAML`
    Yaml,
}

impl ModelFormat {
    /// Detect the format from a file extension
    ///
    /// # Errors
    ///
    /// Returns `ModelError::UnsupportedFormat` for anything other than
    /// `.json`, `.yaml` or `.yml`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(ModelError::unsupported_format(format!(
                "'{other}' for {}",
                path.display()
            ))),
        }
    }
}

/// Parse a data model from text
///
/// # Errors
///
/// Returns `ModelError::ParseError` with the failing location when the text
/// is not a valid model.
pub fn parse_model(contents: &str, format: ModelFormat) -> Result<DataModel> {
    let model: DataModel = match format {
        ModelFormat::Json => serde_json::from_str(contents)?,
        ModelFormat::Yaml => serde_yaml::from_str(contents)?,
    };
    debug!(
        "Parsed model with {} objects and {} enums",
        model.objects.len(),
        model.enums.len()
    );
    Ok(model)
}

/// Load a data model from a JSON or YAML file
///
/// # Errors
///
/// Returns `ModelError::IoError` if the file cannot be read,
/// `ModelError::UnsupportedFormat` for unknown extensions and
/// `ModelError::ParseError` for malformed content, located by file path and
/// position.
pub fn load_model(path: &Path) -> Result<DataModel> {
    let format = ModelFormat::from_path(path)?;
    info!("Loading model from {}", path.display());
    let contents = std::fs::read_to_string(path)?;
    parse_model(&contents, format).map_err(|err| match err {
        ModelError::ParseError { message, location } => {
            let location = match location {
                Some(position) => format!("{}, {position}", path.display()),
                None => path.display().to_string(),
            };
            ModelError::parse_at(message, location)
        }
        other => other,
    })
}
