//! On-disk persistence for the task list.
//!
//! The whole list lives in one pretty-printed JSON file. Every mutation
//! rewrites the file in full; the expected task count is small enough that
//! nothing smarter is warranted.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::task::Task;

/// File-backed store for the task list.
///
/// The file path is fixed at construction; there is no process-global
/// location.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Store { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the task list, treating a missing file as an empty list.
    /// A file that exists but does not parse is a hard error.
    pub fn load(&self) -> Result<Vec<Task>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let buf = fs::read_to_string(&self.path)?;
        serde_json::from_str(&buf).map_err(|source| Error::MalformedStore {
            path: self.path.clone(),
            source,
        })
    }

    /// Save the full task list, overwriting any previous content.
    /// Writes via temp file + rename so a failed write cannot truncate the
    /// existing file.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let tmp = self.path.with_extension("json.tmp");
        let data = serde_json::to_string_pretty(tasks)?;
        let mut f = File::create(&tmp)?;
        f.write_all(data.as_bytes())?;
        f.flush()?;
        fs::rename(tmp, &self.path)?;
        Ok(())
    }

    /// Remove the task file entirely. Used when the last task is removed.
    pub fn delete(&self) -> Result<()> {
        fs::remove_file(&self.path)?;
        Ok(())
    }
}
