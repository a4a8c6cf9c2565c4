//! Render configuration
//!
//! Every field has a default, so an empty file (or no file at all) gives the
//! stock output. Configuration files may be YAML or TOML.

use crate::error::{ModelError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Complete render configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Markdown document settings
    pub document: DocumentConfig,

    /// Python class settings
    pub classes: ClassConfig,
}

/// Markdown document settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Title override; falls back to the model name
    pub title: Option<String>,

    /// Marker appended to required attribute names
    pub required_marker: String,

    /// Line written after each object's attribute list
    pub separator: String,

    /// Mermaid flowchart direction (`TB`, `TD`, `BT`, `LR`, `RL`)
    pub graph_direction: String,

    /// Sections to render, in any order
    pub sections: Vec<String>,
}

impl DocumentConfig {
    /// Section names accepted in `sections`
    pub const SECTION_NAMES: [&'static str; 4] = ["graph", "ontologies", "types", "enums"];

    const DIRECTIONS: [&'static str; 5] = ["TB", "TD", "BT", "LR", "RL"];
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            title: None,
            required_marker: "*".to_string(),
            separator: "------".to_string(),
            graph_direction: "TB".to_string(),
            sections: Self::SECTION_NAMES.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Python class settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassConfig {
    /// Base class every generated class derives from
    pub base_class: String,

    /// Factory used for collection defaults
    pub collection_factory: String,

    /// Spaces per indentation level
    pub indent: usize,

    /// Emit `add_to_<attr>` convenience methods
    pub helper_methods: bool,

    /// Emit the generated-file header comment
    pub include_header: bool,
}

impl Default for ClassConfig {
    fn default() -> Self {
        Self {
            base_class: "BaseXmlModel".to_string(),
            collection_factory: "list".to_string(),
            indent: 4,
            helper_methods: true,
            include_header: true,
        }
    }
}

impl RenderConfig {
    /// Load configuration from a YAML or TOML file
    ///
    /// # Errors
    ///
    /// Returns `ModelError::IoError` if the file cannot be read,
    /// `ModelError::ConfigError` if it cannot be parsed or fails validation,
    /// and `ModelError::UnsupportedFormat` for unknown extensions.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        debug!("Loading render configuration from {}", path.display());

        let config: Self = match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&contents)?,
            "toml" => toml::from_str(&contents)?,
            other => return Err(ModelError::unsupported_format(other)),
        };

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from YAML text
    ///
    /// # Errors
    ///
    /// Returns `ModelError::ConfigError` if the YAML cannot be parsed.
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty map
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents)
            .map_err(|e| ModelError::config(format!("Failed to parse YAML config: {e}")))
    }

    /// Check values a renderer cannot work with
    ///
    /// # Errors
    ///
    /// Returns `ModelError::ConfigError` naming the first invalid value.
    pub fn validate(&self) -> Result<()> {
        let document = &self.document;
        if !DocumentConfig::DIRECTIONS.contains(&document.graph_direction.as_str()) {
            return Err(ModelError::config(format!(
                "Unknown graph direction '{}', expected one of {}",
                document.graph_direction,
                DocumentConfig::DIRECTIONS.join(", ")
            )));
        }
        if let Some(section) = document
            .sections
            .iter()
            .find(|section| !DocumentConfig::SECTION_NAMES.contains(&section.as_str()))
        {
            return Err(ModelError::config(format!(
                "Unknown document section '{section}'"
            )));
        }
        if self.classes.indent == 0 {
            return Err(ModelError::config("Class indent must be at least 1"));
        }
        if self.classes.base_class.trim().is_empty() {
            return Err(ModelError::config("Base class must not be empty"));
        }
        Ok(())
    }
}
