//! Core type definitions for `mdmodels` data models
//!
//! A [`DataModel`] is the fully resolved intermediate representation handed to
//! renderers. It is built once by a loader and never mutated while rendering.

use crate::xmltype::XMLType;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Data model - the root of a rendered schema
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DataModel {
    /// Title of the model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Object definitions in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub objects: Vec<Object>,

    /// Enumeration definitions in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enums: Vec<Enumeration>,

    /// Front matter (prefixes, namespaces, repository settings)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<FrontMatter>,
}

impl DataModel {
    /// Create an empty model
    #[must_use]
    pub fn new(name: Option<String>, config: Option<FrontMatter>) -> Self {
        Self {
            name,
            objects: Vec::new(),
            enums: Vec::new(),
            config,
        }
    }

    /// Look up an object by name
    #[must_use]
    pub fn object(&self, name: &str) -> Option<&Object> {
        self.objects.iter().find(|object| object.name == name)
    }

    /// Names of all objects, in declaration order
    #[must_use]
    pub fn object_names(&self) -> Vec<&str> {
        self.objects.iter().map(|object| object.name.as_str()).collect()
    }

    /// Names of all enumerations, in declaration order
    #[must_use]
    pub fn enum_names(&self) -> Vec<&str> {
        self.enums
            .iter()
            .map(|enumeration| enumeration.name.as_str())
            .collect()
    }

    /// Ontology prefixes in declaration order
    #[must_use]
    pub fn prefixes(&self) -> Vec<Prefix> {
        self.config
            .as_ref()
            .map(FrontMatter::prefixes)
            .unwrap_or_default()
    }

    /// XML namespace map, if declared
    #[must_use]
    pub fn nsmap(&self) -> Option<&IndexMap<String, String>> {
        self.config.as_ref().and_then(|config| config.nsmap.as_ref())
    }
}

/// A named composite type with ordered attributes
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Object {
    /// Name of the object, unique within the model
    pub name: String,

    /// Free-text documentation, empty when absent
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub docstring: String,

    /// Attributes in declaration order
    #[serde(default)]
    pub attributes: Vec<Attribute>,

    /// Ontology term for the object itself
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
}

impl Object {
    /// Create an object without attributes
    #[must_use]
    pub fn new(name: impl Into<String>, term: Option<String>) -> Self {
        Self {
            name: name.into(),
            term,
            ..Default::default()
        }
    }

    /// Set the docstring
    #[must_use]
    pub fn with_docstring(mut self, docstring: impl Into<String>) -> Self {
        self.docstring = docstring.into();
        self
    }

    /// Append an attribute
    #[must_use]
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Whether the object declares any attributes
    #[must_use]
    pub fn has_attributes(&self) -> bool {
        !self.attributes.is_empty()
    }

    /// Docstring, `None` when empty
    #[must_use]
    pub fn docstring(&self) -> Option<&str> {
        non_empty(&self.docstring)
    }
}

/// A named, typed field of an [`Object`]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Attribute {
    /// Attribute name
    pub name: String,

    /// Free-text documentation, empty when absent
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub docstring: String,

    /// Whether a value must be present
    #[serde(default)]
    pub required: bool,

    /// Collection (`true`) or scalar (`false`)
    #[serde(default, alias = "is_array")]
    pub multiple: bool,

    /// Candidate type names; more than one means a union
    #[serde(default)]
    pub dtypes: Vec<String>,

    /// Free-form key/value metadata in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<AttrOption>,

    /// XML binding, defaults to an element named after the attribute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xml: Option<XMLType>,

    /// Ontology term reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
}

impl Attribute {
    /// Create an attribute without types or metadata
    #[must_use]
    pub fn new(name: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            required,
            ..Default::default()
        }
    }

    /// Append a candidate data type
    #[must_use]
    pub fn with_dtype(mut self, dtype: impl Into<String>) -> Self {
        self.dtypes.push(dtype.into());
        self
    }

    /// Mark the attribute as a collection
    #[must_use]
    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Set the docstring
    #[must_use]
    pub fn with_docstring(mut self, docstring: impl Into<String>) -> Self {
        self.docstring = docstring.into();
        self
    }

    /// Append an option
    #[must_use]
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.push(AttrOption::new(key, value));
        self
    }

    /// Set the XML binding
    #[must_use]
    pub fn with_xml(mut self, xml: XMLType) -> Self {
        self.xml = Some(xml);
        self
    }

    /// Set the ontology term
    #[must_use]
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    /// Docstring, `None` when empty
    #[must_use]
    pub fn docstring(&self) -> Option<&str> {
        non_empty(&self.docstring)
    }

    /// Whether more than one candidate type is declared
    #[must_use]
    pub fn is_union(&self) -> bool {
        self.dtypes.len() > 1
    }

    /// XML tag, falling back to the attribute name when unset or empty
    #[must_use]
    pub fn xml_name(&self) -> &str {
        self.xml
            .as_ref()
            .map(XMLType::name)
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.name)
    }

    /// Whether the attribute is bound as an XML attribute
    #[must_use]
    pub fn is_xml_attr(&self) -> bool {
        self.xml.as_ref().is_some_and(XMLType::is_attr)
    }
}

/// A key/value metadata entry on an attribute
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttrOption {
    /// Option key, e.g. `description` or `minimum`
    pub key: String,
    /// Option value as written in the model
    pub value: String,
}

impl AttrOption {
    /// Create an option
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A named enumeration with ordered key/value mappings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Enumeration {
    /// Enumeration name, unique within the model
    pub name: String,

    /// Free-text documentation, empty when absent
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub docstring: String,

    /// Member key to value
    #[serde(default)]
    pub mappings: IndexMap<String, String>,
}

impl Enumeration {
    /// Create an enumeration without members
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the docstring
    #[must_use]
    pub fn with_docstring(mut self, docstring: impl Into<String>) -> Self {
        self.docstring = docstring.into();
        self
    }

    /// Append a member
    #[must_use]
    pub fn with_mapping(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.mappings.insert(key.into(), value.into());
        self
    }

    /// Whether any members are declared
    #[must_use]
    pub fn has_values(&self) -> bool {
        !self.mappings.is_empty()
    }

    /// Docstring, `None` when empty
    #[must_use]
    pub fn docstring(&self) -> Option<&str> {
        non_empty(&self.docstring)
    }
}

/// An ontology namespace: short prefix mapped to a URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix {
    /// Short name, e.g. `schema`
    pub prefix: String,
    /// Resolvable URI, e.g. `http://schema.org/`
    pub uri: String,
}

/// Front matter of a model file
///
/// Only the keys the renderers read are kept; any other front-matter key in a
/// model file is ignored when loading.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FrontMatter {
    /// Ontology prefixes in declaration order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefixes: Option<IndexMap<String, String>>,

    /// XML namespace map
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nsmap: Option<IndexMap<String, String>>,
}

impl FrontMatter {
    /// Prefixes as ordered `Prefix` values
    #[must_use]
    pub fn prefixes(&self) -> Vec<Prefix> {
        self.prefixes
            .as_ref()
            .map(|prefixes| {
                prefixes
                    .iter()
                    .map(|(prefix, uri)| Prefix {
                        prefix: prefix.clone(),
                        uri: uri.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn non_empty(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
