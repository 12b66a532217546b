//! Task record and related types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskStatus::Pending => write!(f, "pending"),
            TaskStatus::InProgress => write!(f, "in-progress"),
            TaskStatus::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(TaskStatus::Pending),
            "in-progress" | "inprogress" | "in_progress" => Ok(TaskStatus::InProgress),
            "completed" | "done" => Ok(TaskStatus::Completed),
            _ => Err(format!("Unknown status: {}", s)),
        }
    }
}

/// A single task record, persisted with camelCase field names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub name: String,
    pub due_date: Option<DateTime<Utc>>,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Check if the task is overdue: due date in the past and not completed
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        match self.due_date {
            Some(due) => self.status != TaskStatus::Completed && due < now,
            None => false,
        }
    }
}

/// Form input for creating a task
#[derive(Debug, Default, Clone)]
pub struct TaskDraft {
    pub name: String,
    /// Raw due date input; unparseable values become no due date
    pub due_date: Option<String>,
    /// Defaults to pending when unset
    pub status: Option<TaskStatus>,
}

/// Partial update for an existing task
///
/// The outer `Option` on `due_date` distinguishes "leave unchanged" (`None`)
/// from "replace" (`Some(new_value)`), where the new value may itself clear
/// the due date.
#[derive(Debug, Default, Clone)]
pub struct TaskPatch {
    pub name: Option<String>,
    pub due_date: Option<Option<String>>,
    pub status: Option<TaskStatus>,
}

/// Normalize a raw due date string to an instant
///
/// Accepts RFC 3339 date-times or plain `YYYY-MM-DD` dates (interpreted as
/// midnight UTC). Anything else is coerced to `None`.
pub fn normalize_due_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_status_display() {
        assert_eq!(TaskStatus::Pending.to_string(), "pending");
        assert_eq!(TaskStatus::InProgress.to_string(), "in-progress");
        assert_eq!(TaskStatus::Completed.to_string(), "completed");
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(
            "pending".parse::<TaskStatus>().unwrap(),
            TaskStatus::Pending
        );
        assert_eq!(
            "in-progress".parse::<TaskStatus>().unwrap(),
            TaskStatus::InProgress
        );
        assert_eq!(
            "inprogress".parse::<TaskStatus>().unwrap(),
            TaskStatus::InProgress
        );
        assert_eq!("done".parse::<TaskStatus>().unwrap(), TaskStatus::Completed);
        assert!("archived".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn test_serialized_field_names() {
        let task = Task {
            id: "task_1_abc".to_string(),
            name: "Write spec".to_string(),
            due_date: None,
            status: TaskStatus::Pending,
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
        };

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["name"], "Write spec");
        assert_eq!(json["dueDate"], serde_json::Value::Null);
        assert_eq!(json["status"], "pending");
        assert!(json["createdAt"].is_string());
    }

    #[test]
    fn test_deserialize_rejects_unknown_status() {
        let json = r#"{"id":"t1","name":"x","dueDate":null,"status":"archived","createdAt":"2024-01-15T12:00:00Z"}"#;
        assert!(serde_json::from_str::<Task>(json).is_err());
    }

    #[test]
    fn test_normalize_due_date_rfc3339() {
        let parsed = normalize_due_date("2024-06-01T10:30:00Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 6, 1, 10, 30, 0).unwrap());
    }

    #[test]
    fn test_normalize_due_date_plain_date() {
        let parsed = normalize_due_date("2024-06-01").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_normalize_due_date_invalid() {
        assert_eq!(normalize_due_date("not-a-date"), None);
        assert_eq!(normalize_due_date(""), None);
        assert_eq!(normalize_due_date("2024-13-99"), None);
    }

    #[test]
    fn test_is_overdue() {
        let now = Utc::now();
        let mut task = Task {
            id: "t1".to_string(),
            name: "x".to_string(),
            due_date: Some(now - Duration::days(1)),
            status: TaskStatus::Pending,
            created_at: now,
        };
        assert!(task.is_overdue(now));

        task.status = TaskStatus::Completed;
        assert!(!task.is_overdue(now));

        task.status = TaskStatus::Pending;
        task.due_date = Some(now + Duration::days(1));
        assert!(!task.is_overdue(now));

        task.due_date = None;
        assert!(!task.is_overdue(now));
    }
}
