//! Renderers for `mdmodels` data models
//!
//! Two artifacts are produced from the same model: a Markdown reference
//! document and a Python module of typed classes. Both build on the shared
//! type renderer, and the document also links types through the linker.

pub mod base;
pub mod linker;
pub mod markdown;
pub mod python;
pub mod registry;
pub mod traits;
pub mod type_render;

pub use linker::TypeIndex;
pub use markdown::{DocumentSections, MarkdownGenerator};
pub use python::{Parameter, PythonGenerator};
pub use registry::GeneratorRegistry;
pub use traits::{Generator, GeneratorError, GeneratorResult, IndentStyle};
pub use type_render::{TypeForm, render_type, render_with_members};
