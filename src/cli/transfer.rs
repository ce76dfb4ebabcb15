//! `taskpad export` and `import` command implementations

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::store::transfer;

#[derive(Args)]
pub struct ExportArgs {
    /// Destination file; defaults to `MyTodos_<timestamp>.json` in the
    /// current directory
    pub file: Option<PathBuf>,
}

#[derive(Args)]
pub struct ImportArgs {
    /// JSON file to import; replaces the whole task list
    pub file: PathBuf,
}

pub fn run_export(data_dir: Option<PathBuf>, args: ExportArgs) -> Result<()> {
    let (_, store) = super::open_store(data_dir)?;

    let path = args
        .file
        .unwrap_or_else(|| PathBuf::from(transfer::suggested_export_filename()));
    transfer::export_tasks(store.tasks(), &path).context("export failed")?;

    println!("Exported {} tasks to {}", store.len(), path.display());
    Ok(())
}

pub fn run_import(data_dir: Option<PathBuf>, args: ImportArgs) -> Result<()> {
    let (storage, mut store) = super::open_store(data_dir)?;

    let tasks = transfer::import_tasks(&args.file).context("import failed")?;
    let count = tasks.len();
    store.replace_all(tasks);
    storage.persist(&store)?;

    println!("Imported {} tasks from {}", count, args.file.display());
    Ok(())
}
