//! # mdmodels Service
//!
//! Renders `mdmodels` data models into a Markdown reference document and a
//! module of Python classes.
//!
//! ## Overview
//!
//! Rendering is a pure projection of an immutable [`DataModel`] to text:
//!
//! - **Type renderer**: type expressions for attributes, in display form
//!   (`list[Person]`) or declaration form (`Optional[str]`)
//! - **Linker**: links type names that refer to model objects or enums
//! - **Markdown generator**: mermaid graph, ontology prefixes, types, enums
//! - **Python generator**: `pydantic_xml` classes plus `signature`/`params`
//!   helpers for `add_to_<attribute>` methods
//!
//! ## Quick Start
//!
//! ```rust
//! use mdmodels_service::generator::{Generator, MarkdownGenerator};
//! use mdmodels_core::{Attribute, DataModel, Object};
//!
//! let model = DataModel {
//!     objects: vec![
//!         Object::new("Person", None)
//!             .with_attribute(Attribute::new("name", true).with_dtype("string")),
//!     ],
//!     ..Default::default()
//! };
//!
//! let document = MarkdownGenerator::new().generate(&model)?;
//! assert!(document.contains("- __name__*: string"));
//! # Ok::<(), mdmodels_service::generator::GeneratorError>(())
//! ```
//!
//! [`DataModel`]: mdmodels_core::DataModel

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)] // mdmodels, mermaid, pydantic_xml are proper nouns

/// Command-line interface
pub mod cli;

/// Renderers and the generator registry
pub mod generator;

/// Loading serialized models
pub mod loader;

pub use generator::{
    Generator, GeneratorError, GeneratorRegistry, GeneratorResult, MarkdownGenerator,
    PythonGenerator,
};
pub use loader::{ModelFormat, load_model, parse_model};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::generator::{
        DocumentSections, Generator, GeneratorError, GeneratorRegistry, GeneratorResult,
        MarkdownGenerator, Parameter, PythonGenerator, TypeForm, TypeIndex, render_type,
    };
    pub use crate::loader::load_model;
    pub use mdmodels_core::prelude::*;
}
