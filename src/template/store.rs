//! Template store: the fetch layer the pipeline talks to.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::source::TemplateSource;

/// Resolves template names to text through an injected source, applying
/// the pipeline's failure policy: a source failure resolves to the empty
/// string, logged and counted but never propagated and never retried. A
/// task with a missing template still proceeds and mounts whatever
/// marker-laden or empty output results.
///
/// The store adds no caching; fetching the same name from separate tasks
/// hits the source each time. Correctness does not depend on caching,
/// only performance does.
pub struct TemplateStore {
    source: Arc<dyn TemplateSource>,
    fetch_failures: AtomicU64,
}

impl TemplateStore {
    /// Create a store over the given source.
    pub fn new(source: Arc<dyn TemplateSource>) -> Self {
        Self {
            source,
            fetch_failures: AtomicU64::new(0),
        }
    }

    /// Fetch a template's text, degrading to the empty string on failure.
    pub async fn fetch(&self, name: &str) -> String {
        match self.source.fetch(name).await {
            Ok(text) => {
                tracing::debug!(template = %name, bytes = text.len(), "Fetched template");
                text
            }
            Err(e) => {
                self.fetch_failures.fetch_add(1, Ordering::Relaxed);
                tracing::warn!(
                    template = %name,
                    error = %e,
                    "Template fetch failed; substituting empty template"
                );
                String::new()
            }
        }
    }

    /// Number of fetches that degraded to the empty string.
    pub fn fetch_failures(&self) -> u64 {
        self.fetch_failures.load(Ordering::Relaxed)
    }
}
