//! Task data structure and sort keys.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A single to-do item.
///
/// Serialized field names and order match the on-disk format: an array of
/// objects with `task_id`, `text`, `due_date`, `priority`, `done`. Absent
/// due date or priority is written as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "task_id")]
    pub id: u64,
    pub text: String,
    pub due_date: Option<String>,
    pub priority: Option<String>,
    pub done: bool,
}

impl Task {
    /// Create a new, unfinished task.
    pub fn new(id: u64, text: String, due_date: Option<String>, priority: Option<String>) -> Self {
        Task {
            id,
            text,
            due_date,
            priority,
            done: false,
        }
    }
}

/// Available sorting options for task lists.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortKey {
    Due,
    Priority,
}

impl SortKey {
    /// The field this key sorts on. Absent values sort as the empty string.
    pub fn field<'a>(self, task: &'a Task) -> &'a str {
        match self {
            SortKey::Due => task.due_date.as_deref().unwrap_or(""),
            SortKey::Priority => task.priority.as_deref().unwrap_or(""),
        }
    }
}
