//! Task file location resolution

use std::path::PathBuf;
use thiserror::Error;

/// Application directory under the platform data dir
const APP_DIR: &str = "copper-tasks";

/// Task file name
const TASKS_FILE: &str = "tasks.json";

/// Errors related to the storage location
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Failed to determine data directory")]
    NoDataDirectory,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Where the task file lives
#[derive(Debug, Clone)]
pub struct StorageLocation {
    pub path: PathBuf,
}

impl StorageLocation {
    /// Resolve the task file path, preferring an explicit override
    pub fn resolve(override_path: Option<PathBuf>) -> Result<Self, LocationError> {
        if let Some(path) = override_path {
            return Ok(StorageLocation { path });
        }

        let base = dirs::data_dir().ok_or(LocationError::NoDataDirectory)?;
        Ok(StorageLocation {
            path: base.join(APP_DIR).join(TASKS_FILE),
        })
    }

    /// Create the parent directory if it doesn't exist
    pub fn ensure_parent(&self) -> Result<(), LocationError> {
        if let Some(parent) = self.path.parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_with_override() {
        let loc = StorageLocation::resolve(Some(PathBuf::from("/tmp/my-tasks.json"))).unwrap();
        assert_eq!(loc.path, PathBuf::from("/tmp/my-tasks.json"));
    }

    #[test]
    fn test_resolve_default() {
        let loc = StorageLocation::resolve(None).unwrap();
        assert!(loc.path.ends_with("copper-tasks/tasks.json"));
    }

    #[test]
    fn test_ensure_parent() {
        let temp = TempDir::new().unwrap();
        let loc = StorageLocation {
            path: temp.path().join("nested").join("tasks.json"),
        };

        assert!(!loc.path.parent().unwrap().exists());
        loc.ensure_parent().unwrap();
        assert!(loc.path.parent().unwrap().exists());
    }
}
