//! Source trait for template text retrieval.
//!
//! This module defines the abstraction layer for template transports,
//! allowing different storage implementations (in-memory, filesystem, a
//! caller's own HTTP fetcher) to be used interchangeably. The pipeline
//! never talks to a transport directly; it goes through the
//! [`TemplateStore`](super::TemplateStore), which layers the
//! degrade-to-empty failure policy on top of this trait.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while fetching template text.
#[derive(Debug, Error)]
pub enum SourceError {
    /// No template exists under the requested name
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Reading the template failed
    #[error("I/O error reading template: {0}")]
    Io(#[from] std::io::Error),

    /// The source is temporarily unable to serve fetches
    #[error("Source unavailable: {0}")]
    Unavailable(String),
}

/// A named-template transport: resolves a template name to its raw text.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; a source is shared behind an
/// `Arc` and may be queried from multiple pipelines.
///
/// # Contract
///
/// `fetch` suspends the caller until the transport completes and performs
/// a single attempt, with no retries and no caching. Callers needing
/// bounded latency wrap a source with their own timeout; the pipeline
/// imposes none.
#[async_trait]
pub trait TemplateSource: Send + Sync {
    /// Resolve a template name to its text.
    async fn fetch(&self, name: &str) -> Result<String, SourceError>;
}
