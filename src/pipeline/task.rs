//! Deferred section-render tasks.

use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

/// What a task renders.
#[derive(Debug, Clone)]
pub enum TaskKind {
    /// Fetch one template and substitute the section data into it
    Single {
        /// Template name to fetch
        template: String,
        /// Section data, owned by the task from enqueue time
        data: Value,
    },
    /// Fetch a parent and an item template and compose a list section
    List {
        /// Parent template name
        parent_template: String,
        /// Per-element template name
        item_template: String,
        /// Elements in render order
        items: Vec<Value>,
        /// Key each element is bound to inside the item template; the
        /// parent's slot is `<item_key>Items`
        item_key: String,
    },
}

/// One deferred unit of work in the render queue.
///
/// Created by an `add_*` call, which captures everything the task needs;
/// consumed exactly once when the queue drains. A task owns no resources
/// and is inert until then, so an un-drained queue is safe to drop.
#[derive(Debug, Clone)]
pub struct RenderTask {
    /// Task id, for log correlation
    pub id: Uuid,
    /// What to render
    pub kind: TaskKind,
    /// When the task was enqueued
    pub enqueued_at: DateTime<Utc>,
}

impl RenderTask {
    fn new(kind: TaskKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            enqueued_at: Utc::now(),
        }
    }

    /// A task that substitutes `data` into one template.
    pub fn single(template: impl Into<String>, data: Value) -> Self {
        Self::new(TaskKind::Single {
            template: template.into(),
            data,
        })
    }

    /// A task that composes a list section.
    pub fn list(
        parent_template: impl Into<String>,
        item_template: impl Into<String>,
        items: Vec<Value>,
        item_key: impl Into<String>,
    ) -> Self {
        Self::new(TaskKind::List {
            parent_template: parent_template.into(),
            item_template: item_template.into(),
            items,
            item_key: item_key.into(),
        })
    }

    /// The template name identifying the task's section in logs; list
    /// tasks report their parent template.
    pub fn template_name(&self) -> &str {
        match &self.kind {
            TaskKind::Single { template, .. } => template,
            TaskKind::List {
                parent_template, ..
            } => parent_template,
        }
    }
}
