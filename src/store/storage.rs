//! Task persistence - JSON file under the `TodoAppTasks` namespace

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use super::get_app_dir;
use super::list::TaskStore;
use super::task::Task;

const TASKS_FILE: &str = "TodoAppTasks.json";

/// On-disk layout of the task namespace: the ordered list plus the id
/// counter, under the original preference key names.
#[derive(Serialize, Deserialize)]
struct TasksFile {
    #[serde(rename = "taskListJson")]
    task_list: Vec<Task>,
    #[serde(rename = "nextId")]
    next_id: i64,
}

pub struct Storage {
    dir: PathBuf,
    tasks_path: PathBuf,
}

impl Storage {
    /// Opens storage in the default app data directory, or `data_dir` when
    /// given (CLI `--data-dir`, tests).
    pub fn open(data_dir: Option<PathBuf>) -> Result<Self> {
        let dir = match data_dir {
            Some(dir) => {
                fs::create_dir_all(&dir)?;
                dir
            }
            None => get_app_dir()?,
        };
        Ok(Self::in_dir(dir))
    }

    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let tasks_path = dir.join(TASKS_FILE);
        Self { dir, tasks_path }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Loads the persisted store. A missing or empty file yields an empty
    /// store with the counter at 1.
    pub fn restore(&self) -> Result<TaskStore> {
        if !self.tasks_path.exists() {
            return Ok(TaskStore::new());
        }

        let content = fs::read_to_string(&self.tasks_path)?;
        if content.trim().is_empty() {
            return Ok(TaskStore::new());
        }

        let file: TasksFile = serde_json::from_str(&content)?;
        Ok(TaskStore::from_parts(file.task_list, file.next_id))
    }

    /// Writes the full ordered list plus the counter, keeping a `.bak` of
    /// the previous contents.
    pub fn persist(&self, store: &TaskStore) -> Result<()> {
        if self.tasks_path.exists() {
            let backup_path = self.tasks_path.with_extension("json.bak");
            if let Err(e) = fs::copy(&self.tasks_path, &backup_path) {
                warn!("Failed to create backup: {}", e);
            }
        }

        let file = TasksFile {
            task_list: store.tasks().to_vec(),
            next_id: store.next_id(),
        };
        let content = serde_json::to_string_pretty(&file)?;
        fs::write(&self.tasks_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::task::Priority;
    use tempfile::tempdir;

    #[test]
    fn test_restore_missing_file_yields_empty_store() -> Result<()> {
        let temp = tempdir()?;
        let storage = Storage::in_dir(temp.path());

        let store = storage.restore()?;
        assert!(store.is_empty());
        assert_eq!(store.next_id(), 1);
        Ok(())
    }

    #[test]
    fn test_restore_empty_file_yields_empty_store() -> Result<()> {
        let temp = tempdir()?;
        let storage = Storage::in_dir(temp.path());

        fs::write(temp.path().join(TASKS_FILE), "   \n\t")?;
        let store = storage.restore()?;
        assert!(store.is_empty());
        assert_eq!(store.next_id(), 1);
        Ok(())
    }

    #[test]
    fn test_persist_restore_roundtrip() -> Result<()> {
        let temp = tempdir()?;
        let storage = Storage::in_dir(temp.path());

        let mut store = TaskStore::new();
        store.add("first", Some(1000), None, Priority::High);
        store.add("second", None, Some(2000), Priority::Low);
        store.toggle_complete(1, true);

        storage.persist(&store)?;
        let loaded = storage.restore()?;

        assert_eq!(loaded.tasks(), store.tasks());
        assert_eq!(loaded.next_id(), store.next_id());
        Ok(())
    }

    #[test]
    fn test_persist_uses_namespace_key_names() -> Result<()> {
        let temp = tempdir()?;
        let storage = Storage::in_dir(temp.path());

        let mut store = TaskStore::new();
        store.add("task", None, None, Priority::Medium);
        storage.persist(&store)?;

        let content = fs::read_to_string(temp.path().join(TASKS_FILE))?;
        let json: serde_json::Value = serde_json::from_str(&content)?;
        assert!(json["taskListJson"].is_array());
        assert_eq!(json["nextId"], 2);
        Ok(())
    }

    #[test]
    fn test_persist_creates_backup() -> Result<()> {
        let temp = tempdir()?;
        let storage = Storage::in_dir(temp.path());

        let mut store = TaskStore::new();
        store.add("first", None, None, Priority::Medium);
        storage.persist(&store)?;

        store.add("second", None, None, Priority::Medium);
        storage.persist(&store)?;

        let backup = fs::read_to_string(temp.path().join("TodoAppTasks.json.bak"))?;
        assert!(backup.contains("first"));
        assert!(!backup.contains("second"));
        Ok(())
    }

    #[test]
    fn test_restore_invalid_json_is_error() -> Result<()> {
        let temp = tempdir()?;
        let storage = Storage::in_dir(temp.path());

        fs::write(temp.path().join(TASKS_FILE), "{ not json }")?;
        assert!(storage.restore().is_err());
        Ok(())
    }

    #[test]
    fn test_open_with_explicit_dir_creates_it() -> Result<()> {
        let temp = tempdir()?;
        let nested = temp.path().join("nested/data");

        let storage = Storage::open(Some(nested.clone()))?;
        assert_eq!(storage.dir(), nested.as_path());
        assert!(nested.is_dir());
        Ok(())
    }
}
