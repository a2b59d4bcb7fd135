use std::collections::HashMap;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Parser;
use taskpad_core::{
    expand_key, parse_args, parse_due_date, FileTaskRepository, Priority, Task, TaskService,
};

#[derive(Parser)]
#[command(name = "taskpad")]
#[command(about = "A single-user task tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Add a task (usage: add "Buy milk" due:2024-01-15 priority:Low)
    Add {
        /// Task text plus optional key:value metadata
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// List all tasks in insertion order
    List,
    /// Flip the done flag of the task at INDEX
    Toggle { index: usize },
    /// Remove all completed tasks
    Clear,
    /// List tasks whose text contains QUERY (case-insensitive)
    Search { query: String },
    /// List incomplete tasks due today or earlier
    Due,
    /// Show completion stats and the per-priority breakdown
    Stats,
    /// Suggest a random pending task
    Suggest,
}

fn parse_priority(pri_str: &str) -> Priority {
    match pri_str.to_lowercase().as_str() {
        "h" | "high" => Priority::High,
        "m" | "medium" | "med" => Priority::Medium,
        "l" | "low" => Priority::Low,
        _ => Priority::Medium,
    }
}

fn print_task_row(index: usize, task: &Task, today: NaiveDate) {
    let marker = if task.done { "[x]" } else { "[ ]" };
    let soon = if task.is_due_soon(today) { "due soon!" } else { "" };
    println!(
        "{:<4} {} {:<8} {:<12} {:<10} {}",
        index,
        marker,
        format!("{:?}", task.priority),
        task.due_date.format("%Y-%m-%d"),
        soon,
        task.text
    );
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let repo = FileTaskRepository::new(None)?;
    let mut service = TaskService::load(repo)?;
    let today = Local::now().date_naive();

    match cli.command {
        Commands::Add { args } => {
            let parsed = parse_args(&args);

            let known_keys = vec!["due", "priority"];
            let mut normalized_metadata = HashMap::new();
            for (key, value) in parsed.metadata {
                match expand_key(&key, &known_keys) {
                    Ok(full_key) => {
                        normalized_metadata.insert(full_key, value);
                    }
                    Err(e) => {
                        println!("Warning: {}", e);
                    }
                }
            }

            let due_date = match normalized_metadata.get("due") {
                Some(d) => parse_due_date(d)?,
                None => today,
            };
            let priority = normalized_metadata
                .get("priority")
                .map(|p| parse_priority(p))
                .unwrap_or_default();

            match service.add(parsed.text.clone(), due_date, priority) {
                Ok(()) => {
                    println!("Task added: {}", parsed.text);
                    println!("  Due: {}", due_date.format("%Y-%m-%d"));
                    println!("  Priority: {:?}", priority);
                }
                Err(taskpad_core::TaskError::EmptyText) => {
                    println!("Warning: task text cannot be empty.");
                }
                Err(e) => return Err(e.into()),
            }
        }
        Commands::List => {
            if service.tasks().is_empty() {
                println!("No tasks yet.");
            } else {
                for (i, task) in service.tasks().iter().enumerate() {
                    print_task_row(i, task, today);
                }
            }
        }
        Commands::Toggle { index } => {
            let current = service
                .tasks()
                .get(index)
                .map(|t| t.done)
                .unwrap_or(false);
            service.toggle_done(index, !current)?;
            let task = &service.tasks()[index];
            let state = if task.done { "done" } else { "pending" };
            println!("Task {} is now {}: {}", index, state, task.text);
        }
        Commands::Clear => {
            let removed = service.clear_completed()?;
            println!("Cleared {} completed task(s).", removed);
        }
        Commands::Search { query } => {
            let hits: Vec<&Task> = service.search(&query).collect();
            if hits.is_empty() {
                println!("No tasks matching '{}'.", query);
            } else {
                for task in hits {
                    let marker = if task.done { "[x]" } else { "[ ]" };
                    println!(
                        "{} {} (Due: {}, {:?})",
                        marker,
                        task.text,
                        task.due_date.format("%Y-%m-%d"),
                        task.priority
                    );
                }
            }
        }
        Commands::Due => {
            let due: Vec<&Task> = service.due_or_overdue(today).collect();
            if due.is_empty() {
                println!("No due or overdue tasks!");
            } else {
                for task in due {
                    println!(
                        "{} (Due: {}) - Priority: {:?}",
                        task.text,
                        task.due_date.format("%Y-%m-%d"),
                        task.priority
                    );
                }
            }
        }
        Commands::Stats => {
            let stats = service.stats();
            println!(
                "{}/{} tasks completed ({}%)",
                stats.completed, stats.total, stats.percent
            );
            let counts = service.priority_counts();
            for priority in [Priority::Low, Priority::Medium, Priority::High] {
                if let Some(count) = counts.get(&priority) {
                    println!("  {:?}: {}", priority, count);
                }
            }
        }
        Commands::Suggest => {
            let mut rng = rand::thread_rng();
            match service.suggest_random(&mut rng) {
                Some(task) => println!("Try working on: {}", task.text),
                None => println!("All tasks done!"),
            }
        }
    }
    Ok(())
}
