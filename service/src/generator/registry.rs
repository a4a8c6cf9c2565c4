//! Named lookup of the available generators

use super::markdown::MarkdownGenerator;
use super::python::PythonGenerator;
use super::traits::{Generator, GeneratorResult};
use indexmap::IndexMap;
use mdmodels_core::{DataModel, RenderConfig};
use std::sync::Arc;
use tracing::{debug, info};

/// Registry of generators keyed by name
#[derive(Default)]
pub struct GeneratorRegistry {
    generators: IndexMap<String, Arc<dyn Generator>>,
}

impl GeneratorRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the Markdown and Python generators
    #[must_use]
    pub fn with_defaults(config: &RenderConfig) -> Self {
        let mut registry = Self::new();
        registry.register(MarkdownGenerator::with_config(config.document.clone()));
        registry.register(PythonGenerator::with_config(config.classes.clone()));
        registry
    }

    /// Register a generator, replacing one with the same name
    pub fn register<G: Generator + 'static>(&mut self, generator: G) {
        let name = generator.name().to_string();
        debug!("Registering generator '{}'", name);
        self.generators.insert(name, Arc::new(generator));
    }

    /// Get a generator by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<dyn Generator>> {
        self.generators.get(name).map(Arc::clone)
    }

    /// Names of all registered generators, in registration order
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.generators.keys().map(String::as_str).collect()
    }

    /// Iterate over registered generators
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Generator>> {
        self.generators.values()
    }

    /// Render `model` with the named generator
    ///
    /// Returns `Ok(None)` when no generator has that name.
    ///
    /// # Errors
    ///
    /// Returns the generator's error if the model breaks its contract.
    pub fn render(&self, name: &str, model: &DataModel) -> GeneratorResult<Option<String>> {
        let Some(generator) = self.generators.get(name) else {
            return Ok(None);
        };
        info!("Rendering with '{}' generator", name);
        generator.generate(model).map(Some)
    }
}
