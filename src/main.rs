//! # tododo - CLI To-Do List App
//!
//! A minimal personal task tracker: add, edit, finish, remove, and list
//! short text tasks with optional due date and priority, persisted in a
//! single pretty-printed JSON file.
//!
//! ```bash
//! # Add a task
//! tododo add "Buy groceries" --due 2026-09-01 --priority high
//!
//! # List pending tasks
//! tododo list
//!
//! # List finished tasks with details
//! tododo list --done --verbose
//!
//! # Mark done, rewrite, remove
//! tododo finish 1
//! tododo edit 2 "Buy groceries and cook"
//! tododo remove 2
//! ```
//!
//! Tasks live in `./tasks.json` by default; pass `--db <path>` to use a
//! different file. One invocation loads the list, applies one operation,
//! saves, and exits. There is no locking: concurrent invocations against
//! the same file are last-writer-wins.

use std::path::PathBuf;

use clap::{CommandFactory, Parser};

pub mod cli;
pub mod cmd;
pub mod error;
pub mod store;
pub mod task;

use cli::Cli;
use cmd::*;
use store::Store;

fn main() {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        let _ = Cli::command().print_help();
        return;
    };

    let store = Store::new(cli.db.unwrap_or_else(|| PathBuf::from("tasks.json")));

    let mut tasks = match store.load() {
        Ok(tasks) => tasks,
        Err(e) => {
            eprintln!("Failed to load tasks: {e}");
            std::process::exit(1);
        }
    };

    let result = match command {
        Commands::Add {
            text,
            due,
            priority,
        } => cmd_add(&mut tasks, &store, text, due, priority),

        Commands::Edit { task_id, new_text } => cmd_edit(&mut tasks, &store, task_id, new_text),

        Commands::Finish { task_id } => cmd_finish(&mut tasks, &store, task_id),

        Commands::Remove { task_id } => cmd_remove(&mut tasks, &store, task_id),

        Commands::List {
            grep,
            sort_by,
            verbose,
            quiet,
            done,
        } => {
            cmd_list(&tasks, grep, sort_by, verbose, quiet, done);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
