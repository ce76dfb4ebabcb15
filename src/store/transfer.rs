//! Task list import/export as JSON files

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::task::Task;

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("not a valid task list: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid task record: {0}")]
    Invalid(String),
}

/// Suggested name for a new export file.
pub fn suggested_export_filename() -> String {
    format!("MyTodos_{}.json", super::now_ms())
}

/// Writes the full ordered task list as a JSON array. The caller's store is
/// never touched; a failed write surfaces as an error to report.
pub fn export_tasks(tasks: &[Task], path: &Path) -> Result<(), TransferError> {
    let content = serde_json::to_string_pretty(tasks)?;
    fs::write(path, content).map_err(|source| TransferError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads and validates a JSON task array. Any malformed record fails the
/// whole import as one unit; the caller only calls `replace_all` on success.
pub fn import_tasks(path: &Path) -> Result<Vec<Task>, TransferError> {
    let content = fs::read_to_string(path).map_err(|source| TransferError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let tasks: Vec<Task> = serde_json::from_str(&content)?;
    validate(&tasks)?;
    Ok(tasks)
}

fn validate(tasks: &[Task]) -> Result<(), TransferError> {
    let mut seen = HashSet::new();
    for task in tasks {
        if task.text.trim().is_empty() {
            return Err(TransferError::Invalid(format!(
                "task {} has empty text",
                task.id
            )));
        }
        if !seen.insert(task.id) {
            return Err(TransferError::Invalid(format!("duplicate id {}", task.id)));
        }
    }
    Ok(())
}
