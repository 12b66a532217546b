//! copper-tasks - Single-user task tracking with a local JSON store
//!
//! This library provides a task collection held in memory and mirrored to a
//! single JSON file on every mutation, plus the query and display plumbing
//! for the CLI front end.

pub mod cli;
pub mod models;
pub mod storage;

pub use models::{Task, TaskDraft, TaskPatch, TaskStatus};
pub use storage::{JsonFileBackend, MemoryBackend, StorageBackend, StorageLocation, TaskStats, TaskStore};
