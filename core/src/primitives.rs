//! Primitive type table
//!
//! Data types that are not declared in a model are either one of these
//! primitives or an external type the renderer passes through untouched.

use std::collections::HashMap;

/// Known primitive types and their Python mappings
#[derive(Debug, Clone)]
pub struct PrimitiveTypes {
    python_mappings: HashMap<&'static str, &'static str>,
}

impl Default for PrimitiveTypes {
    fn default() -> Self {
        Self::new()
    }
}

impl PrimitiveTypes {
    /// Primitive table with Python mappings
    #[must_use]
    pub fn new() -> Self {
        let python_mappings = [
            ("string", "str"),
            ("float", "float"),
            ("integer", "int"),
            ("boolean", "bool"),
            ("bool", "bool"),
            ("null", "None"),
            ("date", "date"),
            ("datetime", "datetime"),
            ("bytes", "bytes"),
        ]
        .into_iter()
        .collect();

        Self { python_mappings }
    }

    /// Whether the given data type is a primitive
    #[must_use]
    pub fn is_primitive(&self, dtype: &str) -> bool {
        self.python_mappings.contains_key(dtype)
    }

    /// Python type name for a data type
    ///
    /// Primitives map to their Python builtin; any other name is returned as
    /// is since it refers to a generated or external class.
    #[must_use]
    pub fn dtype_to_python<'a>(&self, dtype: &'a str) -> &'a str {
        self.python_mappings.get(dtype).copied().unwrap_or(dtype)
    }
}
