//! View-layer projections over the store's output
//!
//! Filtering, search, and sort are derived here, never inside the store.

use crate::models::{Task, TaskStatus};

/// Filter and search criteria for listing tasks
#[derive(Debug, Default, Clone)]
pub struct TaskQuery {
    pub status: Option<TaskStatus>,
    pub search: Option<String>,
}

impl TaskQuery {
    /// Check if a task matches the criteria
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(status) = self.status
            && task.status != status
        {
            return false;
        }

        if let Some(query) = &self.search {
            let query = query.trim().to_lowercase();
            if !query.is_empty() && !task.name.to_lowercase().contains(&query) {
                return false;
            }
        }

        true
    }

    /// Project the collection: filter, then sort newest first
    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        let mut result: Vec<Task> = tasks.iter().filter(|t| self.matches(t)).cloned().collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        result
    }
}
