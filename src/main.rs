//! copper CLI - Single-user task tracking with a local JSON store

use anyhow::{Result, bail};
use clap::Parser;
use copper_tasks::cli::display::{
    display_stats, display_task_detail, display_task_list, error, success,
};
use copper_tasks::cli::{Cli, Commands, TaskQuery};
use copper_tasks::models::{TaskDraft, TaskPatch, TaskStatus};
use copper_tasks::storage::{JsonFileBackend, StorageLocation, TaskStore};
use std::io::{self, Write};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();

    let cli = Cli::parse();

    let result = run(cli);

    if let Err(e) = &result {
        error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let location = StorageLocation::resolve(cli.file)?;
    location.ensure_parent()?;

    let backend = JsonFileBackend::new(location.path.clone());
    let mut store = TaskStore::load(backend);

    match cli.command {
        Commands::Add { name, due, status } => {
            let task = store.create(TaskDraft {
                name,
                due_date: due,
                status,
            });
            success(&format!("Created {}: {}", task.id, task.name));
        }

        Commands::List { status, search } => {
            let query = TaskQuery { status, search };
            let tasks = query.apply(store.tasks());
            display_task_list(&tasks);
        }

        Commands::Show { id } => match store.get(&id) {
            Some(task) => display_task_detail(task),
            None => bail!("Task not found: {}", id),
        },

        Commands::Update {
            id,
            name,
            due,
            clear_due,
            status,
        } => {
            let due_date = if clear_due { Some(None) } else { due.map(Some) };
            let patch = TaskPatch {
                name,
                due_date,
                status,
            };

            match store.update(&id, patch) {
                Some(task) => success(&format!("Updated {}: {}", task.id, task.name)),
                None => bail!("Task not found: {}", id),
            }
        }

        Commands::Status { id, status } => match store.update_status(&id, status) {
            Some(task) => success(&format!("Set {} status to {}", task.id, task.status)),
            None => bail!("Task not found: {}", id),
        },

        Commands::Complete { ids } => {
            for id in ids {
                match store.update_status(&id, TaskStatus::Completed) {
                    Some(task) => success(&format!("Completed {}: {}", task.id, task.name)),
                    None => bail!("Task not found: {}", id),
                }
            }
        }

        Commands::Delete { id, force } => {
            if !force {
                let Some(task) = store.get(&id) else {
                    bail!("Task not found: {}", id);
                };
                print!("Delete '{}'? [y/N] ", task.name);
                io::stdout().flush()?;

                let mut input = String::new();
                io::stdin().read_line(&mut input)?;

                if !input.trim().eq_ignore_ascii_case("y") {
                    log::info!("Cancelled.");
                    return Ok(());
                }
            }

            if store.delete(&id) {
                success(&format!("Deleted {}", id));
            } else {
                bail!("Task not found: {}", id);
            }
        }

        Commands::Clear { force } => {
            if !force {
                print!("Delete all {} task(s)? [y/N] ", store.tasks().len());
                io::stdout().flush()?;

                let mut input = String::new();
                io::stdin().read_line(&mut input)?;

                if !input.trim().eq_ignore_ascii_case("y") {
                    log::info!("Cancelled.");
                    return Ok(());
                }
            }

            store.clear_all();
            success("Cleared all tasks");
        }

        Commands::Stats => {
            display_stats(&store.stats());
        }
    }

    Ok(())
}
