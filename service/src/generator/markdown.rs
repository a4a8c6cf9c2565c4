//! Markdown reference document generator for `mdmodels` data models
//!
//! The document carries a mermaid dependency graph, the ontology prefixes,
//! one section per object with its attributes, and the enumerations. Types
//! that refer to other model types link to their headings.

use super::linker::TypeIndex;
use super::traits::{Generator, GeneratorError, GeneratorResult};
use super::type_render::{TypeForm, render_type, render_with_members};
use bitflags::bitflags;
use mdmodels_core::prelude::*;
use mdmodels_core::DocumentConfig;
use std::fmt::Write;
use tracing::{debug, warn};

bitflags! {
    /// Sections of the rendered document
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DocumentSections: u8 {
        /// Mermaid dependency graph
        const GRAPH = 1 << 0;
        /// Ontology prefix list
        const ONTOLOGIES = 1 << 1;
        /// Object and attribute listings
        const TYPES = 1 << 2;
        /// Enumeration listings
        const ENUMS = 1 << 3;

        /// Every section
        const ALL = Self::GRAPH.bits() | Self::ONTOLOGIES.bits()
                  | Self::TYPES.bits() | Self::ENUMS.bits();
    }
}

impl DocumentSections {
    /// Section flag for a configuration name such as `graph`
    #[must_use]
    pub fn from_config_name(name: &str) -> Option<Self> {
        match name {
            "graph" => Some(Self::GRAPH),
            "ontologies" => Some(Self::ONTOLOGIES),
            "types" => Some(Self::TYPES),
            "enums" => Some(Self::ENUMS),
            _ => None,
        }
    }
}

impl Default for DocumentSections {
    fn default() -> Self {
        Self::ALL
    }
}

/// Markdown document generator
pub struct MarkdownGenerator {
    config: DocumentConfig,
    sections: DocumentSections,
}

impl Default for MarkdownGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownGenerator {
    /// Convert `fmt::Error` to `GeneratorError`
    fn fmt_error_to_generator_error(e: std::fmt::Error) -> GeneratorError {
        GeneratorError::from_fmt(e)
    }

    /// Create a new Markdown generator with every section enabled
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: DocumentConfig::default(),
            sections: DocumentSections::ALL,
        }
    }

    /// Create generator from document configuration
    #[must_use]
    pub fn with_config(config: DocumentConfig) -> Self {
        let mut sections = DocumentSections::empty();
        for name in &config.sections {
            match DocumentSections::from_config_name(name) {
                Some(section) => sections |= section,
                None => warn!("Ignoring unknown document section '{}'", name),
            }
        }
        Self { config, sections }
    }

    /// Restrict output to the given sections
    #[must_use]
    pub fn with_sections(mut self, sections: DocumentSections) -> Self {
        self.sections = sections;
        self
    }

    /// Sections this generator renders
    #[must_use]
    pub fn sections(&self) -> DocumentSections {
        self.sections
    }

    /// Render the whole document
    fn render_document(&self, model: &DataModel) -> GeneratorResult<String> {
        let index = TypeIndex::new(model);
        let mut output = String::new();

        if let Some(title) = self.config.title.as_ref().or(model.name.as_ref()) {
            writeln!(&mut output, "# {title}\n").map_err(Self::fmt_error_to_generator_error)?;
        }

        if self.sections.contains(DocumentSections::GRAPH) {
            output.push_str(&self.render_graph(model, &index)?);
        }
        if self.sections.contains(DocumentSections::ONTOLOGIES) {
            output.push_str(&Self::render_ontologies(model)?);
        }
        if self.sections.contains(DocumentSections::TYPES) {
            output.push_str(&self.render_types(model, &index)?);
        }
        if self.sections.contains(DocumentSections::ENUMS) {
            output.push_str(&self.render_enums(model)?);
        }

        let mut document = output.trim_end().to_string();
        document.push('\n');
        Ok(document)
    }

    /// Mermaid flowchart with one edge per cross-referenced dtype
    fn render_graph(&self, model: &DataModel, index: &TypeIndex<'_>) -> GeneratorResult<String> {
        let mut output = String::new();

        writeln!(&mut output, "```mermaid").map_err(Self::fmt_error_to_generator_error)?;
        writeln!(&mut output, "flowchart {}", self.config.graph_direction)
            .map_err(Self::fmt_error_to_generator_error)?;

        // Repeated edges are kept; each stands for one attribute reference
        for object in &model.objects {
            for attribute in &object.attributes {
                for dtype in index.references(attribute) {
                    writeln!(
                        &mut output,
                        "    {}({}) --> {}({})",
                        TypeIndex::anchor(&object.name),
                        object.name,
                        TypeIndex::anchor(dtype),
                        dtype
                    )
                    .map_err(Self::fmt_error_to_generator_error)?;
                }
            }
        }

        writeln!(&mut output, "```\n").map_err(Self::fmt_error_to_generator_error)?;
        Ok(output)
    }

    /// Ontology prefixes, omitted entirely when none are declared
    fn render_ontologies(model: &DataModel) -> GeneratorResult<String> {
        let prefixes = model.prefixes();
        let mut output = String::new();
        if prefixes.is_empty() {
            return Ok(output);
        }

        writeln!(&mut output, "## Ontologies\n").map_err(Self::fmt_error_to_generator_error)?;
        for prefix in &prefixes {
            writeln!(&mut output, "- [{}]({})", prefix.prefix, prefix.uri)
                .map_err(Self::fmt_error_to_generator_error)?;
        }
        writeln!(&mut output).map_err(Self::fmt_error_to_generator_error)?;
        Ok(output)
    }

    fn render_types(&self, model: &DataModel, index: &TypeIndex<'_>) -> GeneratorResult<String> {
        let mut output = String::new();
        if model.objects.is_empty() {
            return Ok(output);
        }

        writeln!(&mut output, "## Types\n").map_err(Self::fmt_error_to_generator_error)?;

        for object in &model.objects {
            writeln!(&mut output, "### {}\n", object.name)
                .map_err(Self::fmt_error_to_generator_error)?;
            if let Some(docstring) = object.docstring() {
                writeln!(&mut output, "{docstring}\n")
                    .map_err(Self::fmt_error_to_generator_error)?;
            }
            if let Some(term) = &object.term {
                writeln!(&mut output, "Term: {term}\n")
                    .map_err(Self::fmt_error_to_generator_error)?;
            }

            for attribute in &object.attributes {
                self.render_attribute(&mut output, attribute, index)?;
            }
            if object.has_attributes() {
                writeln!(&mut output).map_err(Self::fmt_error_to_generator_error)?;
            }

            writeln!(&mut output, "{}\n", self.config.separator)
                .map_err(Self::fmt_error_to_generator_error)?;
        }

        Ok(output)
    }

    fn render_attribute(
        &self,
        output: &mut String,
        attribute: &Attribute,
        index: &TypeIndex<'_>,
    ) -> GeneratorResult<()> {
        let type_expr = render_with_members(attribute, TypeForm::Display, |dtype, rendered| {
            index.linkify(dtype, rendered)
        })?;
        let marker = if attribute.required {
            self.config.required_marker.as_str()
        } else {
            ""
        };

        writeln!(output, "- __{}__{marker}: {type_expr}", attribute.name)
            .map_err(Self::fmt_error_to_generator_error)?;

        if let Some(docstring) = attribute.docstring() {
            writeln!(output, "    - {}", nested_bullet(docstring))
                .map_err(Self::fmt_error_to_generator_error)?;
        }
        if let Some(term) = &attribute.term {
            writeln!(output, "    - Term: {term}").map_err(Self::fmt_error_to_generator_error)?;
        }

        // `description` is already shown as the docstring bullet
        for option in attribute
            .options
            .iter()
            .filter(|option| !option.key.eq_ignore_ascii_case("description"))
        {
            writeln!(
                output,
                "    - {}: {}",
                capitalize(&option.key),
                nested_bullet(&option.value)
            )
            .map_err(Self::fmt_error_to_generator_error)?;
        }

        Ok(())
    }

    fn render_enums(&self, model: &DataModel) -> GeneratorResult<String> {
        let mut output = String::new();
        if model.enums.is_empty() {
            return Ok(output);
        }

        writeln!(&mut output, "## Enumerations\n").map_err(Self::fmt_error_to_generator_error)?;

        for enumeration in &model.enums {
            writeln!(&mut output, "### {}\n", enumeration.name)
                .map_err(Self::fmt_error_to_generator_error)?;
            if let Some(docstring) = enumeration.docstring() {
                writeln!(&mut output, "{docstring}\n")
                    .map_err(Self::fmt_error_to_generator_error)?;
            }

            if enumeration.has_values() {
                writeln!(&mut output, "```").map_err(Self::fmt_error_to_generator_error)?;
                for (key, value) in &enumeration.mappings {
                    writeln!(&mut output, "{key} = \"{value}\"")
                        .map_err(Self::fmt_error_to_generator_error)?;
                }
                writeln!(&mut output, "```\n").map_err(Self::fmt_error_to_generator_error)?;
            }

            writeln!(&mut output, "{}\n", self.config.separator)
                .map_err(Self::fmt_error_to_generator_error)?;
        }

        Ok(output)
    }
}

/// Indent continuation lines so multi-line text stays inside a nested bullet
fn nested_bullet(text: &str) -> String {
    let mut lines = text.lines();
    let mut bullet = lines.next().unwrap_or_default().to_string();
    for line in lines {
        bullet.push('\n');
        if !line.trim().is_empty() {
            bullet.push_str("      ");
            bullet.push_str(line.trim_start());
        }
    }
    bullet
}

/// First character upper case, the rest lower case
fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}

impl Generator for MarkdownGenerator {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn description(&self) -> &'static str {
        "Generate a Markdown reference document with a mermaid dependency graph"
    }

    fn validate_schema(&self, model: &DataModel) -> GeneratorResult<()> {
        for object in &model.objects {
            for attribute in &object.attributes {
                render_type(attribute, TypeForm::Display).map_err(|_| {
                    GeneratorError::contract(
                        format!("{}.{}", object.name, attribute.name),
                        "attribute declares no data types",
                    )
                })?;
            }
        }
        Ok(())
    }

    fn generate(&self, model: &DataModel) -> GeneratorResult<String> {
        self.validate_schema(model)?;
        debug!(
            "Rendering Markdown document for {} objects and {} enums",
            model.objects.len(),
            model.enums.len()
        );
        self.render_document(model)
    }

    fn get_file_extension(&self) -> &'static str {
        "md"
    }

    fn get_default_filename(&self) -> &'static str {
        "model"
    }
}
