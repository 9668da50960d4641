//! The ordered asynchronous rendering pipeline.
//!
//! A [`RenderPipeline`] accepts section-render requests in call order
//! (`add_single`, `add_list`, and the named wrappers), then drains them
//! with a single `render` call: each task fetches its templates, runs
//! substitution or list composition, and appends the resulting fragment
//! to the mount sink, strictly one task at a time in enqueue order.
//!
//! The pipeline object is owned by the caller: `new`, then `add_*`, then
//! `render`. `add_*` never suspends; `render` is the only suspension
//! point and the only operation with observable effects. Nothing here
//! returns an error: missing templates degrade to empty fragments and a
//! missing mount container skips the append, both logged (see the store
//! and mount modules for the policy seams).
//!
//! # Example
//!
//! ```ignore
//! let document = Arc::new(Document::with_container("persona"));
//! let mut pipeline = RenderPipeline::with_document(
//!     Arc::new(builtin_source()),
//!     document.clone(),
//!     "persona",
//! );
//!
//! pipeline.add_navbar("Ada Lovelace");
//! pipeline.add_skills(vec!["Analysis".into(), "Engines".into()]);
//!
//! let report = pipeline.render().await;
//! assert_eq!(report.mounted, 2);
//! ```

mod queue;
mod sections;
mod task;

pub use queue::RenderQueue;
pub use task::{RenderTask, TaskKind};

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::mount::{Document, DocumentMount, MountSink};
use crate::template::{compose_list, substitute, TemplateSource, TemplateStore};

/// Aggregate outcome of one `render` drain.
///
/// Informational only: the drain never aborts and never returns an
/// error, so this report is how its best-effort degradation stays
/// auditable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderReport {
    /// Fragments appended to the mount point
    pub mounted: usize,
    /// Appends skipped because the mount container was missing
    pub skipped: usize,
}

/// Counters accumulated over the pipeline's lifetime.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PipelineStats {
    /// Tasks accepted by `add_*` calls
    pub tasks_enqueued: u64,
    /// Fragments appended across all drains
    pub fragments_mounted: u64,
    /// Appends skipped across all drains
    pub appends_skipped: u64,
    /// Template fetches that degraded to the empty string
    pub fetch_failures: u64,
}

/// Section-by-section page renderer.
///
/// Holds the template store, the mount sink, and the render queue. All
/// mutating operations take `&mut self`: the queue needs no locking, and
/// a re-entrant `render` is rejected at compile time by the exclusive
/// borrow. Independent pipelines share nothing and may run concurrently.
pub struct RenderPipeline {
    store: TemplateStore,
    mount: Arc<dyn MountSink>,
    queue: RenderQueue,
    tasks_enqueued: u64,
    fragments_mounted: u64,
    appends_skipped: u64,
}

impl RenderPipeline {
    /// Create a pipeline over a template source and a mount sink.
    pub fn new(source: Arc<dyn TemplateSource>, mount: Arc<dyn MountSink>) -> Self {
        Self {
            store: TemplateStore::new(source),
            mount,
            queue: RenderQueue::new(),
            tasks_enqueued: 0,
            fragments_mounted: 0,
            appends_skipped: 0,
        }
    }

    /// Create a pipeline mounting into one container of a [`Document`].
    pub fn with_document(
        source: Arc<dyn TemplateSource>,
        document: Arc<Document>,
        container_id: impl Into<String>,
    ) -> Self {
        Self::new(source, Arc::new(DocumentMount::new(document, container_id)))
    }

    /// Enqueue one substitution task. Returns immediately; nothing is
    /// fetched or mounted until `render`.
    pub fn add_single(&mut self, template: impl Into<String>, data: Value) {
        self.enqueue(RenderTask::single(template, data));
    }

    /// Enqueue one list-composition task. A zero-element list is a valid
    /// task and still fetches both templates when drained.
    pub fn add_list(
        &mut self,
        parent_template: impl Into<String>,
        item_template: impl Into<String>,
        items: Vec<Value>,
        item_key: impl Into<String>,
    ) {
        self.enqueue(RenderTask::list(parent_template, item_template, items, item_key));
    }

    fn enqueue(&mut self, task: RenderTask) {
        tracing::debug!(
            task_id = %task.id,
            template = task.template_name(),
            position = self.queue.len(),
            enqueued_at = %task.enqueued_at,
            "Task enqueued"
        );
        self.queue.enqueue(task);
        self.tasks_enqueued += 1;
    }

    /// Number of tasks waiting to be drained.
    pub fn queue_size(&self) -> usize {
        self.queue.len()
    }

    /// Snapshot of the pipeline's counters.
    pub fn stats(&self) -> PipelineStats {
        PipelineStats {
            tasks_enqueued: self.tasks_enqueued,
            fragments_mounted: self.fragments_mounted,
            appends_skipped: self.appends_skipped,
            fetch_failures: self.store.fetch_failures(),
        }
    }

    /// Drain the queue, mounting one fragment per task in enqueue order.
    ///
    /// Task *N+1* does not begin fetching until task *N* has mounted.
    /// A drained queue is simply empty; calling `render` again is a
    /// no-op that mounts nothing.
    pub async fn render(&mut self) -> RenderReport {
        let mut report = RenderReport::default();

        while let Some(task) = self.queue.dequeue() {
            self.execute(task, &mut report).await;
        }

        if report.mounted + report.skipped > 0 {
            tracing::info!(
                mounted = report.mounted,
                skipped = report.skipped,
                "Render drain complete"
            );
        }
        report
    }

    /// Run one task through fetch → substitute → mount.
    async fn execute(&mut self, task: RenderTask, report: &mut RenderReport) {
        tracing::debug!(
            task_id = %task.id,
            template = task.template_name(),
            "Task fetching"
        );

        let fragment = match &task.kind {
            TaskKind::Single { template, data } => {
                let text = self.store.fetch(template).await;
                tracing::debug!(task_id = %task.id, "Task substituting");
                substitute(&text, data)
            }
            TaskKind::List {
                parent_template,
                item_template,
                items,
                item_key,
            } => {
                // Both templates resolve before substitution begins;
                // an empty item list does not short-circuit the fetches.
                let parent = self.store.fetch(parent_template).await;
                let item = self.store.fetch(item_template).await;
                tracing::debug!(task_id = %task.id, items = items.len(), "Task substituting");
                compose_list(&item, &parent, items, item_key)
            }
        };

        match self.mount.append(&fragment) {
            Ok(()) => {
                self.fragments_mounted += 1;
                report.mounted += 1;
                tracing::debug!(
                    task_id = %task.id,
                    bytes = fragment.len(),
                    "Task mounted"
                );
            }
            Err(e) => {
                self.appends_skipped += 1;
                report.skipped += 1;
                tracing::warn!(
                    task_id = %task.id,
                    error = %e,
                    "Mount point missing; fragment dropped"
                );
            }
        }
    }
}
