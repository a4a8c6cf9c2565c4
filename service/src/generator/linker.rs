//! Cross-references between model types
//!
//! A dtype that names an object or enumeration of the same model is rendered
//! as a link to that type's heading; anything else is a primitive or an
//! external type and stays plain text.

use mdmodels_core::{Attribute, DataModel};
use std::collections::HashSet;

/// Names of all objects and enumerations of one model
#[derive(Debug, Clone, Default)]
pub struct TypeIndex<'a> {
    names: HashSet<&'a str>,
}

impl<'a> TypeIndex<'a> {
    /// Build the index for a render pass
    #[must_use]
    pub fn new(model: &'a DataModel) -> Self {
        let names = model
            .object_names()
            .into_iter()
            .chain(model.enum_names())
            .collect();
        Self { names }
    }

    /// Whether `dtype` names a model object or enumeration
    #[must_use]
    pub fn contains(&self, dtype: &str) -> bool {
        self.names.contains(dtype)
    }

    /// Anchor a heading for `name` gets in the rendered document
    #[must_use]
    pub fn anchor(name: &str) -> String {
        name.to_lowercase()
    }

    /// Link `rendered` to the heading of `dtype` if it is a model type
    #[must_use]
    pub fn linkify(&self, dtype: &str, rendered: String) -> String {
        if self.contains(dtype) {
            format!("[{rendered}](#{})", Self::anchor(dtype))
        } else {
            rendered
        }
    }

    /// Dtypes of `attribute` that refer to model types, in declared order
    pub fn references<'b>(&'b self, attribute: &'b Attribute) -> impl Iterator<Item = &'b str> {
        attribute
            .dtypes
            .iter()
            .map(String::as_str)
            .filter(|dtype| self.contains(dtype))
    }
}
