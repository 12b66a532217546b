//! CLI command definitions using clap

use crate::models::{TaskStatus, normalize_due_date};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Single-user task tracking with a local JSON store
#[derive(Parser, Debug)]
#[command(name = "copper")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the task file (defaults to the platform data directory)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new task
    Add {
        /// Task name (2-100 characters)
        #[arg(value_parser = parse_name)]
        name: String,

        /// Due date (YYYY-MM-DD or RFC 3339)
        #[arg(long, value_parser = parse_due)]
        due: Option<String>,

        /// Initial status (pending, in-progress, completed)
        #[arg(short, long, value_parser = parse_status)]
        status: Option<TaskStatus>,
    },

    /// List tasks, newest first
    List {
        /// Filter by status
        #[arg(short, long, value_parser = parse_status)]
        status: Option<TaskStatus>,

        /// Filter by a case-insensitive name search
        #[arg(short = 'q', long)]
        search: Option<String>,
    },

    /// Show task details
    Show {
        /// Task ID
        id: String,
    },

    /// Update task properties
    Update {
        /// Task ID
        id: String,

        /// New name (2-100 characters)
        #[arg(long, value_parser = parse_name)]
        name: Option<String>,

        /// New due date (YYYY-MM-DD or RFC 3339)
        #[arg(long, value_parser = parse_due, conflicts_with = "clear_due")]
        due: Option<String>,

        /// Remove the due date
        #[arg(long)]
        clear_due: bool,

        /// New status
        #[arg(short, long, value_parser = parse_status)]
        status: Option<TaskStatus>,
    },

    /// Change task status
    Status {
        /// Task ID
        id: String,

        /// New status (pending, in-progress, completed)
        #[arg(value_parser = parse_status)]
        status: TaskStatus,
    },

    /// Mark task(s) as completed
    Complete {
        /// Task ID(s)
        ids: Vec<String>,
    },

    /// Delete a task
    Delete {
        /// Task ID
        id: String,

        /// Skip confirmation
        #[arg(short = 'F', long)]
        force: bool,
    },

    /// Delete all tasks
    Clear {
        /// Skip confirmation
        #[arg(short = 'F', long)]
        force: bool,
    },

    /// Show task statistics
    Stats,
}

/// Name bounds enforced at the view layer, not by the store
const NAME_MIN: usize = 2;
const NAME_MAX: usize = 100;

fn parse_name(s: &str) -> Result<String, String> {
    let trimmed = s.trim();
    let len = trimmed.chars().count();
    if len < NAME_MIN {
        return Err(format!("Name must be at least {} characters", NAME_MIN));
    }
    if len > NAME_MAX {
        return Err(format!("Name must be at most {} characters", NAME_MAX));
    }
    Ok(trimmed.to_string())
}

fn parse_status(s: &str) -> Result<TaskStatus, String> {
    s.parse()
}

fn parse_due(s: &str) -> Result<String, String> {
    if normalize_due_date(s).is_none() {
        return Err(format!("Invalid date: {}", s));
    }
    Ok(s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name_bounds() {
        assert!(parse_name("x").is_err());
        assert_eq!(parse_name("  ok  ").unwrap(), "ok");
        assert!(parse_name(&"x".repeat(100)).is_ok());
        assert!(parse_name(&"x".repeat(101)).is_err());
    }

    #[test]
    fn test_parse_due() {
        assert!(parse_due("2030-06-01").is_ok());
        assert!(parse_due("2030-06-01T10:00:00Z").is_ok());
        assert!(parse_due("tomorrow").is_err());
    }
}
