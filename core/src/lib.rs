//! # mdmodels Core
//!
//! Core types for rendering `mdmodels` data models into documentation and
//! source code.
//!
//! This crate holds the intermediate representation a renderer consumes: the
//! [`DataModel`] with its objects, attributes, enumerations and ontology
//! prefixes, together with the shared error type and render configuration.
//! It performs no rendering itself; see `mdmodels-service` for that.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Error types shared by loaders and renderers
pub mod error;

/// Data model types (objects, attributes, enumerations, prefixes)
pub mod types;

/// XML serialization descriptor for attributes
pub mod xmltype;

/// Primitive type table and language mappings
pub mod primitives;

/// Render configuration
pub mod config;

pub use config::{ClassConfig, DocumentConfig, RenderConfig};
pub use error::{ModelError, Result};
pub use primitives::PrimitiveTypes;
pub use types::{AttrOption, Attribute, DataModel, Enumeration, FrontMatter, Object, Prefix};
pub use xmltype::XMLType;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::RenderConfig;
    pub use crate::error::{ModelError, Result};
    pub use crate::primitives::PrimitiveTypes;
    pub use crate::types::*;
    pub use crate::xmltype::XMLType;
}
