//! Opaque ID generation for tasks

use crate::models::Task;
use chrono::Utc;
use rand::Rng;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of the random suffix
const SUFFIX_LEN: usize = 9;

/// Generates opaque string IDs of the form `task_{millis}_{random}`
pub struct IdGenerator;

impl IdGenerator {
    /// Generate an ID that is unique within the given collection
    pub fn generate(existing: &[Task]) -> String {
        loop {
            let id = Self::candidate();
            if !existing.iter().any(|t| t.id == id) {
                return id;
            }
        }
    }

    fn candidate() -> String {
        let mut rng = rand::thread_rng();
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
            .collect();
        format!("task_{}_{}", Utc::now().timestamp_millis(), suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskStatus;

    #[test]
    fn test_id_format() {
        let id = IdGenerator::generate(&[]);
        let parts: Vec<&str> = id.splitn(3, '_').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "task");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), SUFFIX_LEN);
        assert!(parts[2].chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_unique_against_existing() {
        let existing: Vec<Task> = (0..50)
            .map(|_| Task {
                id: IdGenerator::generate(&[]),
                name: "x".to_string(),
                due_date: None,
                status: TaskStatus::Pending,
                created_at: Utc::now(),
            })
            .collect();

        let id = IdGenerator::generate(&existing);
        assert!(!existing.iter().any(|t| t.id == id));
    }
}
