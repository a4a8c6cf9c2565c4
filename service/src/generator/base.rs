//! Base functionality shared by the source generators

use std::collections::{BTreeMap, BTreeSet};

/// Import manager for tracking and organizing Python imports
#[derive(Debug, Default)]
pub struct ImportManager {
    /// Module -> Set of imports from that module
    imports: BTreeMap<String, BTreeSet<String>>,
}

impl ImportManager {
    /// Standard library modules, emitted first and in this order
    const STDLIB: [&'static str; 4] = ["__future__", "typing", "datetime", "enum"];

    /// Create a new import manager
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import from a module
    pub fn add_import(&mut self, module: impl Into<String>, item: impl Into<String>) {
        self.imports
            .entry(module.into())
            .or_default()
            .insert(item.into());
    }

    /// Generate Python import statements
    #[must_use]
    pub fn python_imports(&self) -> String {
        let format_line = |module: &str, items: &BTreeSet<String>| {
            let items: Vec<&str> = items.iter().map(String::as_str).collect();
            format!("from {module} import {}", items.join(", "))
        };

        let stdlib = Self::STDLIB
            .iter()
            .filter_map(|module| self.imports.get(*module).map(|items| format_line(module, items)));
        let third_party = self
            .imports
            .iter()
            .filter(|(module, _)| !Self::STDLIB.contains(&module.as_str()))
            .map(|(module, items)| format_line(module, items));

        stdlib.chain(third_party).collect::<Vec<_>>().join("\n")
    }
}

/// Base code formatter with common functionality
pub struct BaseCodeFormatter;

impl BaseCodeFormatter {
    /// Escape a string for a double-quoted Python literal
    #[must_use]
    pub fn escape_python_string(s: &str) -> String {
        s.replace('\\', "\\\\")
            .replace('"', "\\\"")
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    /// Escape text for a triple-quoted Python docstring
    #[must_use]
    pub fn escape_python_docstring(s: &str) -> String {
        s.replace('\\', "\\\\").replace("\"\"\"", "\\\"\\\"\\\"")
    }

    /// Check if a string is a valid Python identifier that is not a keyword
    #[must_use]
    pub fn is_valid_python_identifier(name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
            _ => return false,
        }
        if !chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_') {
            return false;
        }

        !matches!(
            name,
            "False"
                | "None"
                | "True"
                | "and"
                | "as"
                | "assert"
                | "async"
                | "await"
                | "break"
                | "class"
                | "continue"
                | "def"
                | "del"
                | "elif"
                | "else"
                | "except"
                | "finally"
                | "for"
                | "from"
                | "global"
                | "if"
                | "import"
                | "in"
                | "is"
                | "lambda"
                | "nonlocal"
                | "not"
                | "or"
                | "pass"
                | "raise"
                | "return"
                | "try"
                | "while"
                | "with"
                | "yield"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_imports_are_ordered() {
        let mut imports = ImportManager::new();
        imports.add_import("pydantic_xml", "element");
        imports.add_import("typing", "Optional");
        imports.add_import("pydantic_xml", "BaseXmlModel");
        imports.add_import("__future__", "annotations");
        imports.add_import("typing", "List");
        imports.add_import("enum", "Enum");

        assert_eq!(
            imports.python_imports(),
            "from __future__ import annotations\n\
             from typing import List, Optional\n\
             from enum import Enum\n\
             from pydantic_xml import BaseXmlModel, element"
        );
    }

    #[test]
    fn test_python_identifiers() {
        assert!(BaseCodeFormatter::is_valid_python_identifier("name"));
        assert!(BaseCodeFormatter::is_valid_python_identifier("_private1"));
        assert!(!BaseCodeFormatter::is_valid_python_identifier("class"));
        assert!(!BaseCodeFormatter::is_valid_python_identifier("None"));
        assert!(!BaseCodeFormatter::is_valid_python_identifier("1st"));
        assert!(!BaseCodeFormatter::is_valid_python_identifier("my-name"));
        assert!(!BaseCodeFormatter::is_valid_python_identifier(""));
    }

    #[test]
    fn test_escaping() {
        assert_eq!(
            BaseCodeFormatter::escape_python_string("say \"hi\"\n"),
            "say \\\"hi\\\"\\n"
        );
        assert_eq!(
            BaseCodeFormatter::escape_python_docstring("a \"\"\" b"),
            "a \\\"\\\"\\\" b"
        );
    }
}
