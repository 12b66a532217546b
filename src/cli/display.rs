//! Display formatting for CLI output

use crate::models::Task;
use crate::storage::TaskStats;
use chrono::Utc;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Columns},
};

/// Task row for table display
#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Due")]
    due: String,
    #[tabled(rename = "Created")]
    created: String,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        let now = Utc::now();
        let due = match task.due_date {
            Some(due) if task.is_overdue(now) => format!("{} (overdue)", due.format("%Y-%m-%d")),
            Some(due) => due.format("%Y-%m-%d").to_string(),
            None => String::new(),
        };

        TaskRow {
            id: task.id.clone(),
            name: truncate(&task.name, 40),
            status: task.status.to_string(),
            due,
            created: task.created_at.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Display a list of tasks as a table
pub fn display_task_list(tasks: &[Task]) {
    if tasks.is_empty() {
        log::info!("No tasks found.");
        return;
    }

    let rows: Vec<TaskRow> = tasks.iter().map(TaskRow::from).collect();
    let table = Table::new(rows).with(Style::rounded()).to_string();

    println!("{}", table);
}

/// Display detailed task information
pub fn display_task_detail(task: &Task) {
    println!("ID:      {}", task.id);
    println!("Name:    {}", task.name);
    println!("Status:  {}", task.status);

    if let Some(due) = task.due_date {
        println!("Due:     {}", due.format("%Y-%m-%d %H:%M:%S"));
    }

    println!("Created: {}", task.created_at.format("%Y-%m-%d %H:%M:%S"));
}

/// Stats row for table display
#[derive(Tabled)]
struct StatsRow {
    #[tabled(rename = "Metric")]
    metric: String,
    #[tabled(rename = "Count")]
    count: String,
}

/// Display task statistics
pub fn display_stats(stats: &TaskStats) {
    let rows = vec![
        StatsRow {
            metric: "Total".to_string(),
            count: stats.total.to_string(),
        },
        StatsRow {
            metric: "Pending".to_string(),
            count: stats.pending.to_string(),
        },
        StatsRow {
            metric: "In Progress".to_string(),
            count: stats.in_progress.to_string(),
        },
        StatsRow {
            metric: "Completed".to_string(),
            count: stats.completed.to_string(),
        },
        StatsRow {
            metric: "Overdue".to_string(),
            count: stats.overdue.to_string(),
        },
    ];

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::single(1)).with(Alignment::right()))
        .to_string();

    println!("{}", table);
}

/// Truncate a string to a maximum length
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max - 3).collect();
        format!("{}...", cut)
    }
}

/// Format for success messages
pub fn success(msg: &str) {
    println!("{}", msg);
}

/// Format for error messages
pub fn error(msg: &str) {
    eprintln!("Error: {}", msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long task name", 10), "a very ...");
    }
}
