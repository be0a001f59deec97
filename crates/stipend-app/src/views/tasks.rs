//! # Task Catalog View State

use std::collections::HashMap;

use stipend_core::{Task, TaskId};

/// The task catalog, keyed by task identifier.
#[derive(Debug, Clone, Default)]
pub struct TasksState {
    tasks: HashMap<TaskId, Task>,
}

impl TasksState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole catalog with the latest snapshot.
    pub fn replace_all(&mut self, tasks: HashMap<TaskId, Task>) {
        self.tasks = tasks;
    }

    /// Get a task by identifier.
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.get(id)
    }

    /// Number of tasks in the catalog.
    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// All tasks in a stable display order (title, then identifier).
    pub fn sorted(&self) -> Vec<(&TaskId, &Task)> {
        let mut entries: Vec<_> = self.tasks.iter().collect();
        entries.sort_by(|(a_id, a), (b_id, b)| {
            a.title
                .to_lowercase()
                .cmp(&b.title.to_lowercase())
                .then_with(|| a_id.cmp(b_id))
        });
        entries
    }
}
