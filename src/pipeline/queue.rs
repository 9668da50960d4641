//! Insertion-ordered queue of deferred render tasks.

use std::collections::VecDeque;

use super::task::RenderTask;

/// FIFO of render tasks. Insertion order is the sole ordering authority;
/// nothing is prioritized, reordered, or deduplicated. The pipeline owns
/// its queue exclusively, so the type carries no locking.
#[derive(Debug, Default)]
pub struct RenderQueue {
    tasks: VecDeque<RenderTask>,
}

impl RenderQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            tasks: VecDeque::new(),
        }
    }

    /// Append a task at the back.
    pub fn enqueue(&mut self, task: RenderTask) {
        self.tasks.push_back(task);
    }

    /// Remove and return the oldest task.
    pub fn dequeue(&mut self) -> Option<RenderTask> {
        self.tasks.pop_front()
    }

    /// Number of pending tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the queue holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
