//! `taskpad done`, `undone` and `rm` command implementations

use anyhow::{bail, Result};
use std::path::PathBuf;

pub fn run_done(data_dir: Option<PathBuf>, id: i64, completed: bool) -> Result<()> {
    let (storage, mut store) = super::open_store(data_dir)?;

    if store.toggle_complete(id, completed).is_none() {
        bail!("Task not found: {}", id);
    }
    storage.persist(&store)?;

    let state = if completed { "done" } else { "not done" };
    if let Some(task) = store.get(id) {
        println!("Marked task {} as {}: {}", id, state, task.text);
    }
    Ok(())
}

pub fn run_remove(data_dir: Option<PathBuf>, id: i64) -> Result<()> {
    let (storage, mut store) = super::open_store(data_dir)?;

    if store.remove(id).is_none() {
        bail!("Task not found: {}", id);
    }
    storage.persist(&store)?;

    println!("Deleted task {}", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::add::{AddArgs, PriorityArg};
    use tempfile::tempdir;

    fn seed(dir: Option<PathBuf>, text: &str) {
        crate::cli::add::run(
            dir,
            AddArgs {
                text: text.to_string(),
                start: None,
                end: None,
                priority: PriorityArg::Medium,
            },
        )
        .unwrap();
    }

    #[test]
    fn test_done_and_undone() -> Result<()> {
        let temp = tempdir()?;
        let dir = Some(temp.path().to_path_buf());
        seed(dir.clone(), "task");

        run_done(dir.clone(), 1, true)?;
        let (_, store) = super::super::open_store(dir.clone())?;
        assert!(store.tasks()[0].is_completed);

        run_done(dir.clone(), 1, false)?;
        let (_, store) = super::super::open_store(dir)?;
        assert!(!store.tasks()[0].is_completed);
        Ok(())
    }

    #[test]
    fn test_done_unknown_id_fails() {
        let temp = tempdir().unwrap();
        let dir = Some(temp.path().to_path_buf());
        assert!(run_done(dir, 42, true).is_err());
    }

    #[test]
    fn test_remove() -> Result<()> {
        let temp = tempdir()?;
        let dir = Some(temp.path().to_path_buf());
        seed(dir.clone(), "task");

        run_remove(dir.clone(), 1)?;
        let (_, store) = super::super::open_store(dir)?;
        assert!(store.is_empty());
        Ok(())
    }

    #[test]
    fn test_remove_unknown_id_fails() {
        let temp = tempdir().unwrap();
        assert!(run_remove(Some(temp.path().to_path_buf()), 7).is_err());
    }
}
