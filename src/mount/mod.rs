//! Mount layer: where rendered fragments land.
//!
//! The pipeline appends each completed fragment to a single page
//! container, identified by a fixed conventional id. This module models
//! the hosting page as a [`Document`], a registry of containers, and
//! exposes the [`MountSink`] seam so embedders can route fragments to a
//! real page bridge or a test recorder instead.

use std::sync::Arc;

use dashmap::DashMap;
use thiserror::Error;

/// The conventional container id all portfolio fragments are appended to.
pub const DEFAULT_CONTAINER_ID: &str = "persona";

/// Errors that can occur while mounting a fragment.
#[derive(Debug, Error)]
pub enum MountError {
    /// The target container does not exist in the document
    #[error("Container not found: {0}")]
    ContainerNotFound(String),
}

/// Sink for completed HTML fragments.
///
/// Appending is the only operation: mounted content only grows, and the
/// core offers no removal or replacement primitive. Implementations must
/// be `Send + Sync`; the pipeline holds its sink behind an `Arc`.
pub trait MountSink: Send + Sync {
    /// Append a fragment to the mount point.
    fn append(&self, fragment: &str) -> Result<(), MountError>;
}

/// In-process model of the hosting page: containers addressable by id.
///
/// Containers accumulate HTML text. Existence is checked on every append,
/// so a document without the expected container degrades exactly like a
/// page missing its mount div: the append is skipped and logged by the
/// caller, and nothing is created implicitly.
pub struct Document {
    containers: DashMap<String, String>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document with no containers.
    pub fn new() -> Self {
        Self {
            containers: DashMap::new(),
        }
    }

    /// Create a document with a single container registered.
    pub fn with_container(id: impl Into<String>) -> Self {
        let document = Self::new();
        document.add_container(id);
        document
    }

    /// Register an empty container. Re-registering an existing id keeps
    /// its accumulated content.
    pub fn add_container(&self, id: impl Into<String>) {
        self.containers.entry(id.into()).or_default();
    }

    /// Whether a container exists.
    pub fn has_container(&self, id: &str) -> bool {
        self.containers.contains_key(id)
    }

    /// A container's accumulated HTML, if the container exists.
    pub fn container_html(&self, id: &str) -> Option<String> {
        self.containers.get(id).map(|html| html.clone())
    }

    /// Append a fragment to a container.
    pub fn append_to(&self, id: &str, fragment: &str) -> Result<(), MountError> {
        match self.containers.get_mut(id) {
            Some(mut html) => {
                html.push_str(fragment);
                Ok(())
            }
            None => Err(MountError::ContainerNotFound(id.to_string())),
        }
    }
}

/// Mount sink bound to one container of a [`Document`].
pub struct DocumentMount {
    document: Arc<Document>,
    container_id: String,
}

impl DocumentMount {
    /// Bind a sink to `container_id` within `document`.
    pub fn new(document: Arc<Document>, container_id: impl Into<String>) -> Self {
        Self {
            document,
            container_id: container_id.into(),
        }
    }

    /// The id this sink appends to.
    pub fn container_id(&self) -> &str {
        &self.container_id
    }
}

impl MountSink for DocumentMount {
    fn append(&self, fragment: &str) -> Result<(), MountError> {
        self.document.append_to(&self.container_id, fragment)
    }
}
