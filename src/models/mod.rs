//! Data models for copper-tasks

pub mod task;

pub use task::{Task, TaskDraft, TaskPatch, TaskStatus, normalize_due_date};
