//! In-memory template source backed by DashMap.

use async_trait::async_trait;
use dashmap::DashMap;

use super::source::{SourceError, TemplateSource};

/// Template source that serves text from an in-memory map.
///
/// Useful for embedders that inline their fragments, and as the backing
/// store for the built-in portfolio templates. This is storage, not a
/// cache: the store's no-caching note still holds, a fetch simply reads
/// whatever was registered under the name.
pub struct MemoryTemplateSource {
    templates: DashMap<String, String>,
}

impl Default for MemoryTemplateSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTemplateSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self {
            templates: DashMap::new(),
        }
    }

    /// Create a source preloaded from `(name, text)` pairs.
    pub fn with_templates<N, T>(templates: impl IntoIterator<Item = (N, T)>) -> Self
    where
        N: Into<String>,
        T: Into<String>,
    {
        let source = Self::new();
        for (name, text) in templates {
            source.insert(name, text);
        }
        source
    }

    /// Register (or replace) a template under a name.
    pub fn insert(&self, name: impl Into<String>, text: impl Into<String>) {
        self.templates.insert(name.into(), text.into());
    }

    /// Number of registered templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the source holds no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[async_trait]
impl TemplateSource for MemoryTemplateSource {
    async fn fetch(&self, name: &str) -> Result<String, SourceError> {
        self.templates
            .get(name)
            .map(|text| text.clone())
            .ok_or_else(|| SourceError::NotFound(name.to_string()))
    }
}
