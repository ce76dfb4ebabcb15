//! Task store - data model, in-memory list, persistence, import/export

pub mod list;
pub mod settings;
pub mod storage;
pub mod task;
pub mod time;
pub mod transfer;

pub use list::{Change, TaskStore};
pub use settings::{Background, Settings};
pub use storage::Storage;
pub use task::{Priority, Task};

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Current wall-clock time in epoch milliseconds.
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// App data directory, created on first use.
pub fn get_app_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().context("could not determine the user data directory")?;
    let dir = base.join("taskpad");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}
