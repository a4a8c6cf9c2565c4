//! XML serialization descriptor for attributes
//!
//! An attribute is written either as an XML attribute on its parent element or
//! as a child element. The short form used in model files is the bare name for
//! an element and `@name` for an attribute.

use serde::{Deserialize, Serialize};

/// How an attribute is bound when serialized to XML
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XMLType {
    /// Serialized as an XML attribute
    Attribute {
        /// Always `true`, mirrored for the wire form
        is_attr: bool,
        /// Attribute name
        name: String,
    },
    /// Serialized as a child element
    Element {
        /// Always `false`, mirrored for the wire form
        is_attr: bool,
        /// Element tag
        name: String,
    },
}

impl XMLType {
    /// Build an attribute binding
    #[must_use]
    pub fn attribute(name: impl Into<String>) -> Self {
        Self::Attribute {
            is_attr: true,
            name: name.into(),
        }
    }

    /// Build an element binding
    #[must_use]
    pub fn element(name: impl Into<String>) -> Self {
        Self::Element {
            is_attr: false,
            name: name.into(),
        }
    }

    /// Tag or attribute name
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Attribute { name, .. } | Self::Element { name, .. } => name,
        }
    }

    /// Whether this is an XML attribute binding
    #[must_use]
    pub fn is_attr(&self) -> bool {
        matches!(self, Self::Attribute { .. })
    }
}

impl From<&str> for XMLType {
    /// `@id` is an attribute named `id`, anything else an element.
    fn from(s: &str) -> Self {
        match s.strip_prefix('@') {
            Some(name) => Self::attribute(name),
            None => Self::element(s),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct XMLTypeRepr {
    #[serde(default)]
    is_attr: bool,
    name: String,
}

/// Accepted input forms: the `@name` shorthand or the full mapping
#[derive(Deserialize)]
#[serde(untagged)]
enum XMLTypeInput {
    Short(String),
    Full(XMLTypeRepr),
}

impl<'de> Deserialize<'de> for XMLType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match XMLTypeInput::deserialize(deserializer)? {
            XMLTypeInput::Short(short) => Self::from(short.as_str()),
            XMLTypeInput::Full(repr) if repr.is_attr => Self::attribute(repr.name),
            XMLTypeInput::Full(repr) => Self::element(repr.name),
        })
    }
}

impl Serialize for XMLType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        XMLTypeRepr {
            is_attr: self.is_attr(),
            name: self.name().to_string(),
        }
        .serialize(serializer)
    }
}
