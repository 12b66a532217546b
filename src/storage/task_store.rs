//! In-memory task collection mirrored to durable storage

use crate::models::{Task, TaskDraft, TaskPatch, TaskStatus, normalize_due_date};
use crate::storage::backend::StorageBackend;
use crate::storage::id_generator::IdGenerator;
use chrono::Utc;

/// Listener invoked with the full collection after each successful mutation
pub type StoreListener = Box<dyn Fn(&[Task])>;

/// Single source of truth for the task collection
///
/// Every mutation applies to the in-memory list first, then serializes the
/// whole list to the backend. Write failures are logged and otherwise
/// ignored; the in-memory state stays authoritative for the session.
pub struct TaskStore {
    tasks: Vec<Task>,
    backend: Box<dyn StorageBackend>,
    listeners: Vec<StoreListener>,
    loaded: bool,
}

impl TaskStore {
    /// Load the persisted collection; absent or unreadable data means empty
    pub fn load(backend: impl StorageBackend + 'static) -> Self {
        let tasks = backend.load();
        log::debug!("Loaded {} tasks", tasks.len());

        TaskStore {
            tasks,
            backend: Box::new(backend),
            listeners: Vec::new(),
            loaded: true,
        }
    }

    /// Whether the initial load has completed
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// The current collection, in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Find a task by ID
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Register a listener called after each successful mutation
    pub fn subscribe(&mut self, listener: impl Fn(&[Task]) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Create a task from form input and return it
    pub fn create(&mut self, draft: TaskDraft) -> Task {
        let task = Task {
            id: IdGenerator::generate(&self.tasks),
            name: draft.name.trim().to_string(),
            due_date: draft.due_date.as_deref().and_then(normalize_due_date),
            status: draft.status.unwrap_or_default(),
            created_at: Utc::now(),
        };

        self.tasks.push(task.clone());
        self.persist();
        self.notify();
        task
    }

    /// Apply a partial update; returns the updated task, or None if no match
    ///
    /// `id` and `createdAt` are never touched.
    pub fn update(&mut self, id: &str, patch: TaskPatch) -> Option<Task> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;

        if let Some(name) = patch.name {
            task.name = name.trim().to_string();
        }
        if let Some(due) = patch.due_date {
            task.due_date = due.as_deref().and_then(normalize_due_date);
        }
        if let Some(status) = patch.status {
            task.status = status;
        }

        let updated = task.clone();
        self.persist();
        self.notify();
        Some(updated)
    }

    /// Update only the status field
    pub fn update_status(&mut self, id: &str, status: TaskStatus) -> Option<Task> {
        self.update(
            id,
            TaskPatch {
                status: Some(status),
                ..Default::default()
            },
        )
    }

    /// Remove a task by ID; returns whether a removal occurred
    pub fn delete(&mut self, id: &str) -> bool {
        let Some(pos) = self.tasks.iter().position(|t| t.id == id) else {
            return false;
        };

        self.tasks.remove(pos);
        self.persist();
        self.notify();
        true
    }

    /// Empty the collection
    pub fn clear_all(&mut self) {
        self.tasks.clear();
        self.persist();
        self.notify();
    }

    /// Derive counts from the current collection; no side effects
    pub fn stats(&self) -> TaskStats {
        let now = Utc::now();
        let mut stats = TaskStats {
            total: self.tasks.len(),
            ..Default::default()
        };

        for task in &self.tasks {
            match task.status {
                TaskStatus::Pending => stats.pending += 1,
                TaskStatus::InProgress => stats.in_progress += 1,
                TaskStatus::Completed => stats.completed += 1,
            }

            if task.is_overdue(now) {
                stats.overdue += 1;
            }
        }

        stats
    }

    fn persist(&self) {
        if let Err(e) = self.backend.save(&self.tasks) {
            log::error!("Failed to persist tasks: {}", e);
        }
    }

    fn notify(&self) {
        for listener in &self.listeners {
            listener(&self.tasks);
        }
    }
}

/// Task statistics
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub overdue: usize,
}
