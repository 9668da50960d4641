//! Filesystem template source: one file per template under a root
//! directory.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::source::{SourceError, TemplateSource};

/// Template source that reads `<root>/<name>.<extension>`.
///
/// The filesystem analogue of the original hosted layout, where each
/// template lived at `<name>.html` relative to a base URL. Files are read
/// on every fetch; there is no caching and no retry.
pub struct DirectoryTemplateSource {
    root: PathBuf,
    extension: String,
}

impl DirectoryTemplateSource {
    /// Create a source rooted at `root`, serving files with the given
    /// extension (without the leading dot).
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
        }
    }

    /// The directory this source reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn template_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.{}", name, self.extension))
    }
}

#[async_trait]
impl TemplateSource for DirectoryTemplateSource {
    async fn fetch(&self, name: &str) -> Result<String, SourceError> {
        let path = self.template_path(name);
        match tokio::fs::read_to_string(&path).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(SourceError::NotFound(name.to_string()))
            }
            Err(e) => Err(SourceError::Io(e)),
        }
    }
}
