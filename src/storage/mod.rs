//! Storage layer: the task store and its persistence backends

pub mod backend;
pub mod id_generator;
pub mod location;
pub mod task_store;

pub use backend::{JsonFileBackend, MemoryBackend, StorageBackend, StorageError};
pub use id_generator::IdGenerator;
pub use location::{LocationError, StorageLocation};
pub use task_store::{StoreListener, TaskStats, TaskStore};
