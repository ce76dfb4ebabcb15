//! `taskpad add` command implementation

use anyhow::{bail, Result};
use clap::{Args, ValueEnum};
use std::path::PathBuf;

use crate::store::{time, Priority};

#[derive(Args)]
pub struct AddArgs {
    /// Task text
    pub text: String,

    /// Start time, `YYYY-MM-DD HH:MM` in local time
    #[arg(long, value_name = "DATETIME")]
    pub start: Option<String>,

    /// End time, `YYYY-MM-DD HH:MM` in local time
    #[arg(long, value_name = "DATETIME")]
    pub end: Option<String>,

    /// Task priority
    #[arg(short, long, value_enum, default_value_t = PriorityArg::Medium)]
    pub priority: PriorityArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PriorityArg {
    High,
    Medium,
    Low,
}

impl From<PriorityArg> for Priority {
    fn from(arg: PriorityArg) -> Self {
        match arg {
            PriorityArg::High => Priority::High,
            PriorityArg::Medium => Priority::Medium,
            PriorityArg::Low => Priority::Low,
        }
    }
}

fn parse_flag(name: &str, value: Option<&str>) -> Result<Option<i64>> {
    match value {
        None => Ok(None),
        Some(v) => match time::parse_local_datetime(v) {
            Some(millis) => Ok(Some(millis)),
            None => bail!("Invalid --{} value '{}', expected {}", name, v, time::INPUT_FORMAT),
        },
    }
}

pub fn run(data_dir: Option<PathBuf>, args: AddArgs) -> Result<()> {
    let start = parse_flag("start", args.start.as_deref())?;
    let end = parse_flag("end", args.end.as_deref())?;

    let (storage, mut store) = super::open_store(data_dir)?;
    if store.add(&args.text, start, end, args.priority.into()).is_none() {
        bail!("Task text must not be blank");
    }
    storage.persist(&store)?;

    let task = &store.tasks()[0];
    println!("Added task {}: {}", task.id, task.text);
    Ok(())
}
