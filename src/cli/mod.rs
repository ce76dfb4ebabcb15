//! CLI command implementations

pub mod add;
pub mod definition;
pub mod list;
pub mod task;
pub mod transfer;

pub use definition::{Cli, Commands};

use anyhow::Result;
use std::path::PathBuf;

use crate::store::{Storage, TaskStore};

/// Opens storage and loads the persisted store in one step; every command
/// starts this way.
pub fn open_store(data_dir: Option<PathBuf>) -> Result<(Storage, TaskStore)> {
    let storage = Storage::open(data_dir)?;
    let store = storage.restore()?;
    Ok((storage, store))
}

pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max <= 3 {
        s.chars().take(max).collect()
    } else {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_truncate_shorter_than_max() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_longer_than_max() {
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_tiny_max() {
        assert_eq!(truncate("hello", 2), "he");
    }

    #[test]
    fn test_open_store_fresh_dir() -> Result<()> {
        let temp = tempdir()?;
        let (_, store) = open_store(Some(temp.path().to_path_buf()))?;
        assert!(store.is_empty());
        assert_eq!(store.next_id(), 1);
        Ok(())
    }
}
