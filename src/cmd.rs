//! Command implementations for the CLI interface.
//!
//! The `Commands` enum is the single declarative argument schema: clap
//! derives both parsing and help rendering from it. Each subcommand maps to
//! one `cmd_*` handler that takes the in-memory task list plus its
//! arguments, prints a one-line status message, and persists through the
//! store when it mutated anything.

use clap::Subcommand;

use crate::error::Result;
use crate::store::Store;
use crate::task::{SortKey, Task};

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task.
    Add {
        /// Task text.
        text: String,
        /// Due date (YYYY-MM-DD).
        #[arg(long)]
        due: Option<String>,
        /// Priority level.
        #[arg(long)]
        priority: Option<String>,
    },

    /// Edit an existing task.
    Edit {
        /// Task ID.
        task_id: u64,
        /// New task text.
        new_text: String,
    },

    /// Mark a task as finished.
    Finish {
        /// Task ID.
        task_id: u64,
    },

    /// Remove a task.
    Remove {
        /// Task ID.
        task_id: u64,
    },

    /// List tasks.
    List {
        /// Filter tasks containing the specified word.
        #[arg(long)]
        grep: Option<String>,
        /// Sort tasks by due date or priority.
        #[arg(long, value_enum)]
        sort_by: Option<SortKey>,
        /// Print more detailed output.
        #[arg(long)]
        verbose: bool,
        /// Accepted for compatibility; has no effect.
        #[arg(long)]
        quiet: bool,
        /// List finished tasks instead of unfinished ones.
        #[arg(long)]
        done: bool,
    },
}

/// Next task ID: one past the highest ID currently in the list.
/// Monotonic per stored list, so removing a middle task never makes a
/// later add collide with a surviving ID.
pub fn next_id(tasks: &[Task]) -> u64 {
    tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1
}

/// Add a new task and persist the list.
pub fn cmd_add(
    tasks: &mut Vec<Task>,
    store: &Store,
    text: String,
    due: Option<String>,
    priority: Option<String>,
) -> Result<()> {
    let id = next_id(tasks);
    tasks.push(Task::new(id, text.clone(), due, priority));
    store.save(tasks)?;
    println!("Task added: {text}");
    Ok(())
}

/// Replace the text of an existing task.
pub fn cmd_edit(tasks: &mut [Task], store: &Store, task_id: u64, new_text: String) -> Result<()> {
    let Some(task) = tasks.iter_mut().find(|t| t.id == task_id) else {
        println!("Error: Task with ID {task_id} not found");
        return Ok(());
    };
    task.text = new_text;
    let text = task.text.clone();
    store.save(tasks)?;
    println!("Task edited: {text}");
    Ok(())
}

/// Mark a task done. One-way: there is no unfinish.
pub fn cmd_finish(tasks: &mut [Task], store: &Store, task_id: u64) -> Result<()> {
    let Some(task) = tasks.iter_mut().find(|t| t.id == task_id) else {
        println!("Error: Task with ID {task_id} not found");
        return Ok(());
    };
    task.done = true;
    let text = task.text.clone();
    store.save(tasks)?;
    println!("Task finished: {text}");
    Ok(())
}

/// Remove a task. When the list empties, the task file is deleted too.
pub fn cmd_remove(tasks: &mut Vec<Task>, store: &Store, task_id: u64) -> Result<()> {
    let Some(pos) = tasks.iter().position(|t| t.id == task_id) else {
        println!("Error: Task with ID {task_id} not found");
        return Ok(());
    };
    let task = tasks.remove(pos);
    store.save(tasks)?;
    if tasks.is_empty() {
        store.delete()?;
    }
    println!("Task removed: {}", task.text);
    Ok(())
}

/// Filter and order tasks for listing.
///
/// Keeps tasks whose `done` flag matches, then applies the substring filter,
/// then stable-sorts ascending on the selected key with absent values
/// treated as empty strings (so unset sorts first).
pub fn filter_and_sort<'a>(
    tasks: &'a [Task],
    grep: Option<&str>,
    sort_by: Option<SortKey>,
    done: bool,
) -> Vec<&'a Task> {
    let mut filtered: Vec<&Task> = tasks
        .iter()
        .filter(|t| t.done == done)
        .filter(|t| grep.map_or(true, |g| t.text.contains(g)))
        .collect();
    if let Some(key) = sort_by {
        filtered.sort_by(|a, b| key.field(a).cmp(key.field(b)));
    }
    filtered
}

/// Print tasks, one `<id>: <text>` line each, with detail lines if verbose.
pub fn cmd_list(
    tasks: &[Task],
    grep: Option<String>,
    sort_by: Option<SortKey>,
    verbose: bool,
    quiet: bool,
    done: bool,
) {
    // --quiet is accepted but adds nothing over the default output.
    let _ = quiet;
    for task in filter_and_sort(tasks, grep.as_deref(), sort_by, done) {
        println!("{}: {}", task.id, task.text);
        if verbose {
            println!("  Due Date: {}", task.due_date.as_deref().unwrap_or("-"));
            println!("  Priority: {}", task.priority.as_deref().unwrap_or("-"));
            println!("  Status: {}", if task.done { "Done" } else { "Pending" });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn store_in(dir: &tempfile::TempDir) -> Store {
        Store::new(dir.path().join("tasks.json"))
    }

    #[test]
    fn sequential_adds_assign_ids_one_to_n() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let mut tasks = Vec::new();
        for text in ["a", "b", "c"] {
            cmd_add(&mut tasks, &store, text.into(), None, None).unwrap();
        }
        let ids: Vec<u64> = tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(store.load().unwrap(), tasks);
    }

    #[test]
    fn add_after_remove_does_not_reuse_live_id() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let mut tasks = Vec::new();
        cmd_add(&mut tasks, &store, "a".into(), None, None).unwrap();
        cmd_add(&mut tasks, &store, "b".into(), None, None).unwrap();
        cmd_add(&mut tasks, &store, "c".into(), None, None).unwrap();
        cmd_remove(&mut tasks, &store, 2).unwrap();
        cmd_add(&mut tasks, &store, "d".into(), None, None).unwrap();
        // max+1, not len+1: "d" gets 4, not a second 3.
        let ids: Vec<u64> = tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn edit_replaces_text_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let mut tasks = Vec::new();
        cmd_add(&mut tasks, &store, "old".into(), None, None).unwrap();
        cmd_edit(&mut tasks, &store, 1, "new".into()).unwrap();
        assert_eq!(tasks[0].text, "new");
        assert_eq!(store.load().unwrap()[0].text, "new");
    }

    #[test]
    fn edit_of_unknown_id_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let mut tasks = Vec::new();
        cmd_add(&mut tasks, &store, "a".into(), None, None).unwrap();
        let before = fs::read(store.path()).unwrap();
        cmd_edit(&mut tasks, &store, 99, "new".into()).unwrap();
        let after = fs::read(store.path()).unwrap();
        assert_eq!(before, after);
        assert_eq!(tasks[0].text, "a");
    }

    #[test]
    fn finish_moves_task_from_pending_to_done_listing() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let mut tasks = Vec::new();
        cmd_add(&mut tasks, &store, "a".into(), None, None).unwrap();
        cmd_add(&mut tasks, &store, "b".into(), None, None).unwrap();
        cmd_finish(&mut tasks, &store, 1).unwrap();

        let pending = filter_and_sort(&tasks, None, None, false);
        assert_eq!(pending.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2]);
        let done = filter_and_sort(&tasks, None, None, true);
        assert_eq!(done.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn removing_the_last_task_deletes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let mut tasks = Vec::new();
        cmd_add(&mut tasks, &store, "only".into(), None, None).unwrap();
        cmd_remove(&mut tasks, &store, 1).unwrap();
        assert!(tasks.is_empty());
        assert!(!store.path().exists());
        assert_eq!(store.load().unwrap(), Vec::new());
    }

    #[test]
    fn remove_of_unknown_id_is_a_soft_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let mut tasks = Vec::new();
        cmd_add(&mut tasks, &store, "a".into(), None, None).unwrap();
        cmd_remove(&mut tasks, &store, 7).unwrap();
        assert_eq!(tasks.len(), 1);
        assert!(store.path().exists());
    }

    #[test]
    fn grep_keeps_substring_matches_in_order() {
        let tasks = vec![
            Task::new(1, "buy food".into(), None, None),
            Task::new(2, "call mum".into(), None, None),
            Task::new(3, "food prep".into(), None, None),
        ];
        let hits = filter_and_sort(&tasks, Some("foo"), None, false);
        assert_eq!(hits.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn sort_by_priority_treats_unset_as_empty_string() {
        let tasks = vec![
            Task::new(1, "a".into(), None, Some("low".into())),
            Task::new(2, "b".into(), None, None),
            Task::new(3, "c".into(), None, Some("high".into())),
        ];
        let sorted = filter_and_sort(&tasks, None, Some(SortKey::Priority), false);
        let keys: Vec<&str> = sorted
            .iter()
            .map(|t| t.priority.as_deref().unwrap_or(""))
            .collect();
        assert_eq!(keys, vec!["", "high", "low"]);
    }

    #[test]
    fn sort_by_due_is_stable_for_equal_keys() {
        let tasks = vec![
            Task::new(1, "a".into(), Some("2026-09-02".into()), None),
            Task::new(2, "b".into(), None, None),
            Task::new(3, "c".into(), None, None),
            Task::new(4, "d".into(), Some("2026-09-01".into()), None),
        ];
        let sorted = filter_and_sort(&tasks, None, Some(SortKey::Due), false);
        assert_eq!(
            sorted.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![2, 3, 4, 1]
        );
    }
}
