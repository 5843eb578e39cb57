use super::{Passthrough, Preprocessor, StyleBlockStripper};
use std::collections::HashMap;

/// Extension-keyed dispatch table for content preprocessors
pub struct PreprocessorRegistry {
    /// Used for extensions without a registered preprocessor
    fallback: Box<dyn Preprocessor>,
    /// Extension -> Preprocessor mapping
    map: HashMap<String, Box<dyn Preprocessor>>,
}

impl PreprocessorRegistry {
    /// Create a registry that strips style blocks from `.vue` files and
    /// passes everything else through
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register("vue", StyleBlockStripper);
        registry
    }

    /// Create a registry with only the passthrough fallback
    pub fn empty() -> Self {
        Self {
            fallback: Box::new(Passthrough),
            map: HashMap::new(),
        }
    }

    /// Register a preprocessor for a lowercase extension without the dot
    pub fn register(
        &mut self,
        extension: impl Into<String>,
        preprocessor: impl Preprocessor + 'static,
    ) {
        self.map.insert(extension.into(), Box::new(preprocessor));
    }

    /// Select the preprocessor for an extension, falling back to passthrough
    pub fn select(&self, extension: &str) -> &dyn Preprocessor {
        self.map
            .get(extension)
            .map(|p| &**p)
            .unwrap_or(&*self.fallback)
    }

    /// List all registered extensions
    pub fn registered_extensions(&self) -> Vec<&str> {
        self.map.keys().map(|s| s.as_str()).collect()
    }
}

impl Default for PreprocessorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
