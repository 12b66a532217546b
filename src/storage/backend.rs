//! Persistence backends for the task collection

use crate::models::Task;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use thiserror::Error;

/// Errors related to persisting the task collection
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Storage unavailable")]
    Unavailable,
}

/// Durable storage for the serialized task array
///
/// `load` never fails: an absent or unreadable payload is logged and treated
/// as an empty collection. `save` reports failures so the store can log them,
/// but the in-memory state stays authoritative either way.
pub trait StorageBackend {
    fn load(&self) -> Vec<Task>;
    fn save(&self, tasks: &[Task]) -> Result<(), StorageError>;
}

/// Stores the collection as a single JSON file
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileBackend { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl StorageBackend for JsonFileBackend {
    fn load(&self) -> Vec<Task> {
        if !self.path.exists() {
            return Vec::new();
        }

        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("Failed to read task file {:?}: {}", self.path, e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Task>>(&content) {
            Ok(tasks) => tasks,
            Err(e) => {
                log::warn!("Failed to parse task file {:?}: {}", self.path, e);
                Vec::new()
            }
        }
    }

    fn save(&self, tasks: &[Task]) -> Result<(), StorageError> {
        let content = serde_json::to_string(tasks)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

#[derive(Default)]
struct MemoryInner {
    data: Option<String>,
    fail_writes: bool,
}

/// In-memory backend, shared between clones
///
/// Used by tests to simulate storage without touching the filesystem and to
/// inject write failures.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    inner: Rc<RefCell<MemoryInner>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent saves fail, simulating disabled or full storage
    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.borrow_mut().fail_writes = fail;
    }

    /// The raw serialized payload, if anything has been saved
    pub fn raw(&self) -> Option<String> {
        self.inner.borrow().data.clone()
    }

    /// Replace the raw payload, bypassing serialization
    pub fn set_raw(&self, data: impl Into<String>) {
        self.inner.borrow_mut().data = Some(data.into());
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self) -> Vec<Task> {
        let inner = self.inner.borrow();
        let content = match &inner.data {
            Some(content) => content,
            None => return Vec::new(),
        };

        match serde_json::from_str::<Vec<Task>>(content) {
            Ok(tasks) => tasks,
            Err(e) => {
                log::warn!("Failed to parse stored tasks: {}", e);
                Vec::new()
            }
        }
    }

    fn save(&self, tasks: &[Task]) -> Result<(), StorageError> {
        let mut inner = self.inner.borrow_mut();
        if inner.fail_writes {
            return Err(StorageError::Unavailable);
        }
        inner.data = Some(serde_json::to_string(tasks)?);
        Ok(())
    }
}
