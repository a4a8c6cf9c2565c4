//! Python class generator for `mdmodels` data models
//!
//! Every object becomes a `pydantic_xml` model class whose fields carry their
//! XML binding and ontology metadata. Collection attributes that hold other
//! objects get an `add_to_<attribute>` method that builds and appends a new
//! item from keyword arguments.

use super::base::{BaseCodeFormatter, ImportManager};
use super::traits::{Generator, GeneratorError, GeneratorResult, IndentStyle};
use super::type_render::{
    TypeForm, is_optional_scalar, is_primitive, render_type, typing_names,
};
use convert_case::{Case, Casing};
use mdmodels_core::prelude::*;
use mdmodels_core::ClassConfig;
use std::fmt::{self, Write};
use tracing::debug;

/// Names bound by every generated `add_to_*` method besides the attributes
const HELPER_BINDINGS: [&str; 3] = ["self", "kwargs", "params"];

/// A formal parameter of a generated method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name
    pub name: String,
    /// Type annotation in declaration form
    pub annotation: String,
    /// Default value literal, if any
    pub default: Option<String>,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.annotation)?;
        if let Some(default) = &self.default {
            write!(f, " = {default}")?;
        }
        Ok(())
    }
}

/// Python class generator
pub struct PythonGenerator {
    config: ClassConfig,
    indent: IndentStyle,
}

impl Default for PythonGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PythonGenerator {
    /// Convert `fmt::Error` to `GeneratorError`
    fn fmt_error_to_generator_error(err: fmt::Error) -> GeneratorError {
        GeneratorError::from_fmt(err)
    }

    /// Create a new Python generator with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ClassConfig::default())
    }

    /// Create generator from class configuration
    #[must_use]
    pub fn with_config(config: ClassConfig) -> Self {
        let indent = IndentStyle::Spaces(config.indent);
        Self { config, indent }
    }

    /// Render one field declaration, indented for a class body
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::SchemaContract` if the attribute declares no
    /// data types.
    pub fn render_field(&self, attribute: &Attribute) -> GeneratorResult<String> {
        let declaration = render_type(attribute, TypeForm::Declaration)?;
        let binding = if attribute.is_xml_attr() {
            "attr"
        } else {
            "element"
        };
        let outer = self.indent.to_string(1);
        let inner = self.indent.to_string(2);

        let mut output = String::new();
        writeln!(
            &mut output,
            "{outer}{}: {declaration} = {binding}(",
            attribute.name
        )
        .map_err(Self::fmt_error_to_generator_error)?;

        if attribute.multiple {
            writeln!(
                &mut output,
                "{inner}default_factory={},",
                self.config.collection_factory
            )
            .map_err(Self::fmt_error_to_generator_error)?;
        } else if !attribute.required {
            writeln!(&mut output, "{inner}default=None,")
                .map_err(Self::fmt_error_to_generator_error)?;
        }

        writeln!(
            &mut output,
            "{inner}tag=\"{}\",",
            BaseCodeFormatter::escape_python_string(attribute.xml_name())
        )
        .map_err(Self::fmt_error_to_generator_error)?;

        if let Some(payload) = Self::options_payload(attribute) {
            writeln!(&mut output, "{inner}json_schema_extra={payload},")
                .map_err(Self::fmt_error_to_generator_error)?;
        }

        write!(&mut output, "{outer})").map_err(Self::fmt_error_to_generator_error)?;
        Ok(output)
    }

    /// Mapping literal of the term and options, `None` when both are absent
    #[must_use]
    pub fn options_payload(attribute: &Attribute) -> Option<String> {
        let term = attribute
            .term
            .as_deref()
            .map(|term| ("term", term));
        let options = attribute
            .options
            .iter()
            .map(|option| (option.key.as_str(), option.value.as_str()));

        let entries: Vec<String> = term
            .into_iter()
            .chain(options)
            .map(|(key, value)| {
                format!(
                    "\"{}\": \"{}\"",
                    BaseCodeFormatter::escape_python_string(key),
                    BaseCodeFormatter::escape_python_string(value)
                )
            })
            .collect();

        if entries.is_empty() {
            None
        } else {
            Some(format!("{{{}}}", entries.join(", ")))
        }
    }

    /// Formal parameters for building an instance of `object_name`
    ///
    /// Optional scalars default to `None` and non-required collections to
    /// `[]`. Returns `Ok(None)` when the model has no such object.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::SchemaContract` if an attribute of the object
    /// declares no data types.
    pub fn signature(
        model: &DataModel,
        object_name: &str,
    ) -> GeneratorResult<Option<Vec<Parameter>>> {
        let Some(object) = model.object(object_name) else {
            return Ok(None);
        };

        object
            .attributes
            .iter()
            .map(|attribute| {
                let default = if is_optional_scalar(attribute) {
                    Some("None".to_string())
                } else if attribute.multiple && !attribute.required {
                    Some("[]".to_string())
                } else {
                    None
                };
                Ok(Parameter {
                    name: attribute.name.clone(),
                    annotation: Self::declaration(object, attribute)?,
                    default,
                })
            })
            .collect::<GeneratorResult<Vec<_>>>()
            .map(Some)
    }

    /// Mapping literal forwarding every attribute of `object_name` by name
    ///
    /// Returns `None` when the model has no such object.
    #[must_use]
    pub fn params(model: &DataModel, object_name: &str) -> Option<String> {
        let object = model.object(object_name)?;
        let pairs: Vec<String> = object
            .attributes
            .iter()
            .map(|attribute| format!("\"{0}\": {0}", attribute.name))
            .collect();
        Some(format!("{{{}}}", pairs.join(", ")))
    }

    /// Declaration type with contract errors naming `Object.attribute`
    fn declaration(object: &Object, attribute: &Attribute) -> GeneratorResult<String> {
        render_type(attribute, TypeForm::Declaration).map_err(|err| match err {
            GeneratorError::SchemaContract { message, .. } => GeneratorError::contract(
                format!("{}.{}", object.name, attribute.name),
                message,
            ),
            other => other,
        })
    }

    /// Python member name of an enumeration key
    fn enum_member_name(key: &str) -> String {
        key.to_case(Case::UpperSnake)
    }

    fn collect_imports(&self, model: &DataModel) -> ImportManager {
        let mut imports = ImportManager::new();
        imports.add_import("__future__", "annotations");

        if !model.enums.is_empty() {
            imports.add_import("enum", "Enum");
        }
        if !model.objects.is_empty() && self.config.base_class == "BaseXmlModel" {
            imports.add_import("pydantic_xml", "BaseXmlModel");
        }
        if model.objects.iter().any(|object| object.term.is_some()) {
            imports.add_import("pydantic", "ConfigDict");
        }

        for attribute in model.objects.iter().flat_map(|object| &object.attributes) {
            for name in typing_names(attribute) {
                imports.add_import("typing", name);
            }
            for dtype in &attribute.dtypes {
                if matches!(dtype.as_str(), "date" | "datetime") {
                    imports.add_import("datetime", dtype.as_str());
                }
            }
            let binding = if attribute.is_xml_attr() {
                "attr"
            } else {
                "element"
            };
            imports.add_import("pydantic_xml", binding);
        }

        imports
    }

    fn generate_enum(&self, enumeration: &Enumeration) -> GeneratorResult<String> {
        let indent = self.indent.single();
        let mut output = String::new();

        writeln!(&mut output, "class {}(Enum):", enumeration.name)
            .map_err(Self::fmt_error_to_generator_error)?;
        if let Some(docstring) = enumeration.docstring() {
            writeln!(
                &mut output,
                "{indent}\"\"\"{}\"\"\"\n",
                BaseCodeFormatter::escape_python_docstring(docstring)
            )
            .map_err(Self::fmt_error_to_generator_error)?;
        }

        if enumeration.has_values() {
            for (key, value) in &enumeration.mappings {
                writeln!(
                    &mut output,
                    "{indent}{} = \"{}\"",
                    Self::enum_member_name(key),
                    BaseCodeFormatter::escape_python_string(value)
                )
                .map_err(Self::fmt_error_to_generator_error)?;
            }
        } else {
            writeln!(&mut output, "{indent}pass").map_err(Self::fmt_error_to_generator_error)?;
        }

        Ok(output.trim_end().to_string())
    }

    fn generate_class(&self, object: &Object, model: &DataModel) -> GeneratorResult<String> {
        let indent = self.indent.single();
        let mut header = format!(
            "class {}({}, tag=\"{}\"",
            object.name, self.config.base_class, object.name
        );
        if let Some(nsmap) = model.nsmap().filter(|nsmap| !nsmap.is_empty()) {
            let entries: Vec<String> = nsmap
                .iter()
                .map(|(prefix, uri)| {
                    format!(
                        "\"{}\": \"{}\"",
                        BaseCodeFormatter::escape_python_string(prefix),
                        BaseCodeFormatter::escape_python_string(uri)
                    )
                })
                .collect();
            write!(&mut header, ", nsmap={{{}}}", entries.join(", "))
                .map_err(Self::fmt_error_to_generator_error)?;
        }
        header.push_str("):");

        let mut body = Vec::new();
        if let Some(docstring) = object.docstring() {
            body.push(format!(
                "{indent}\"\"\"{}\"\"\"",
                BaseCodeFormatter::escape_python_docstring(docstring)
            ));
        }
        if let Some(term) = &object.term {
            body.push(format!(
                "{indent}model_config = ConfigDict(json_schema_extra={{\"term\": \"{}\"}})",
                BaseCodeFormatter::escape_python_string(term)
            ));
        }

        for attribute in &object.attributes {
            body.push(self.render_field(attribute).map_err(|err| match err {
                GeneratorError::SchemaContract { message, .. } => GeneratorError::contract(
                    format!("{}.{}", object.name, attribute.name),
                    message,
                ),
                other => other,
            })?);
        }

        if self.config.helper_methods {
            for attribute in object.attributes.iter().filter(|attr| attr.multiple) {
                body.extend(self.generate_add_methods(attribute, model)?);
            }
        }

        if body.is_empty() {
            body.push(format!("{indent}pass"));
        }

        Ok(format!("{header}\n{}", body.join("\n\n")))
    }

    /// `add_to_<attribute>` methods for a collection of objects
    fn generate_add_methods(
        &self,
        attribute: &Attribute,
        model: &DataModel,
    ) -> GeneratorResult<Vec<String>> {
        let mut targets: Vec<&str> = Vec::new();
        for dtype in attribute.dtypes.iter().map(String::as_str) {
            if model.object(dtype).is_some() && !targets.contains(&dtype) {
                targets.push(dtype);
            }
        }

        let mut methods = Vec::with_capacity(targets.len());
        for target in targets.iter().copied() {
            let method_name = if targets.len() == 1 {
                format!("add_to_{}", attribute.name)
            } else {
                format!("add_{}_to_{}", target.to_case(Case::Snake), attribute.name)
            };

            let (Some(signature), Some(params)) = (
                Self::signature(model, target)?,
                Self::params(model, target),
            ) else {
                continue;
            };

            methods.push(self.render_add_method(
                &method_name,
                &attribute.name,
                target,
                &signature,
                &params,
            )?);
        }

        Ok(methods)
    }

    fn render_add_method(
        &self,
        method_name: &str,
        collection: &str,
        target: &str,
        signature: &[Parameter],
        params: &str,
    ) -> GeneratorResult<String> {
        let outer = self.indent.to_string(1);
        let inner = self.indent.to_string(2);
        let mut output = String::new();

        if signature.is_empty() {
            writeln!(&mut output, "{outer}def {method_name}(self, **kwargs):")
                .map_err(Self::fmt_error_to_generator_error)?;
            writeln!(&mut output, "{inner}self.{collection}.append({target}(**kwargs))")
                .map_err(Self::fmt_error_to_generator_error)?;
        } else {
            writeln!(&mut output, "{outer}def {method_name}(")
                .map_err(Self::fmt_error_to_generator_error)?;
            writeln!(&mut output, "{inner}self,").map_err(Self::fmt_error_to_generator_error)?;
            writeln!(&mut output, "{inner}*,").map_err(Self::fmt_error_to_generator_error)?;
            for parameter in signature {
                writeln!(&mut output, "{inner}{parameter},")
                    .map_err(Self::fmt_error_to_generator_error)?;
            }
            writeln!(&mut output, "{inner}**kwargs,")
                .map_err(Self::fmt_error_to_generator_error)?;
            writeln!(&mut output, "{outer}):").map_err(Self::fmt_error_to_generator_error)?;
            writeln!(&mut output, "{inner}params = {params}")
                .map_err(Self::fmt_error_to_generator_error)?;
            writeln!(
                &mut output,
                "{inner}self.{collection}.append({target}(**params, **kwargs))"
            )
            .map_err(Self::fmt_error_to_generator_error)?;
        }
        write!(&mut output, "{inner}return self.{collection}[-1]")
            .map_err(Self::fmt_error_to_generator_error)?;

        Ok(output)
    }

    /// Objects that some collection attribute builds through `add_to_*`
    fn helper_targets(model: &DataModel) -> Vec<&str> {
        let mut targets: Vec<&str> = Vec::new();
        for attribute in model
            .objects
            .iter()
            .flat_map(|object| &object.attributes)
            .filter(|attribute| attribute.multiple)
        {
            for dtype in attribute.dtypes.iter().map(String::as_str) {
                if model.object(dtype).is_some() && !targets.contains(&dtype) {
                    targets.push(dtype);
                }
            }
        }
        targets
    }

    fn check_type_name(name: &str) -> GeneratorResult<()> {
        Self::check_identifier(name, name)?;
        if is_primitive(name) {
            return Err(GeneratorError::contract(
                name,
                format!("'{name}' shadows the primitive type of the same name"),
            ));
        }
        Ok(())
    }

    fn check_identifier(element: &str, name: &str) -> GeneratorResult<()> {
        if BaseCodeFormatter::is_valid_python_identifier(name) {
            Ok(())
        } else {
            Err(GeneratorError::contract(
                element,
                format!("'{name}' is not a valid Python identifier"),
            ))
        }
    }
}

impl Generator for PythonGenerator {
    fn name(&self) -> &'static str {
        "python"
    }

    fn description(&self) -> &'static str {
        "Generate pydantic-xml model classes from mdmodels data models"
    }

    fn validate_schema(&self, model: &DataModel) -> GeneratorResult<()> {
        let helper_targets = if self.config.helper_methods {
            Self::helper_targets(model)
        } else {
            Vec::new()
        };

        for enumeration in &model.enums {
            Self::check_type_name(&enumeration.name)?;
            for key in enumeration.mappings.keys() {
                Self::check_identifier(
                    &format!("{}.{key}", enumeration.name),
                    &Self::enum_member_name(key),
                )?;
            }
        }

        for object in &model.objects {
            Self::check_type_name(&object.name)?;
            let is_helper_target = helper_targets.contains(&object.name.as_str());
            for attribute in &object.attributes {
                let element = format!("{}.{}", object.name, attribute.name);
                Self::check_identifier(&element, &attribute.name)?;
                if is_helper_target && HELPER_BINDINGS.contains(&attribute.name.as_str()) {
                    return Err(GeneratorError::contract(
                        element,
                        format!(
                            "'{}' clashes with a parameter of the generated add_to_* methods",
                            attribute.name
                        ),
                    ));
                }
                Self::declaration(object, attribute)?;
            }
        }

        Ok(())
    }

    fn generate(&self, model: &DataModel) -> GeneratorResult<String> {
        self.validate_schema(model)?;
        debug!(
            "Rendering Python module for {} objects and {} enums",
            model.objects.len(),
            model.enums.len()
        );

        let mut blocks = Vec::with_capacity(model.enums.len() + model.objects.len());
        for enumeration in &model.enums {
            blocks.push(self.generate_enum(enumeration)?);
        }
        for object in &model.objects {
            blocks.push(self.generate_class(object, model)?);
        }

        let mut output = String::new();
        if self.config.include_header {
            writeln!(&mut output, "# Generated by mdmodels Python class generator")
                .map_err(Self::fmt_error_to_generator_error)?;
            if let Some(name) = &model.name {
                writeln!(&mut output, "# Model: {name}")
                    .map_err(Self::fmt_error_to_generator_error)?;
            }
            writeln!(&mut output).map_err(Self::fmt_error_to_generator_error)?;
        }

        writeln!(&mut output, "{}", self.collect_imports(model).python_imports())
            .map_err(Self::fmt_error_to_generator_error)?;

        for block in &blocks {
            write!(&mut output, "\n\n{block}\n").map_err(Self::fmt_error_to_generator_error)?;
        }

        Ok(output)
    }

    fn get_file_extension(&self) -> &'static str {
        "py"
    }

    fn get_default_filename(&self) -> &'static str {
        "model"
    }
}
