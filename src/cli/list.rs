//! `taskpad list` command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::store::Task;
use crate::tui::rows::format_date_range;

const TABLE_COL_ID: usize = 4;
const TABLE_COL_PRIORITY: usize = 6;
const TABLE_COL_DONE: usize = 4;
const TABLE_COL_SCHEDULE: usize = 26;

#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON (same schema as export files)
    #[arg(long)]
    pub json: bool,
}

fn print_table_header() {
    println!(
        "{:<w_id$} {:<w_prio$} {:<w_done$} {:<w_sched$} TEXT",
        "ID",
        "PRIO",
        "DONE",
        "SCHEDULE",
        w_id = TABLE_COL_ID,
        w_prio = TABLE_COL_PRIORITY,
        w_done = TABLE_COL_DONE,
        w_sched = TABLE_COL_SCHEDULE
    );
    println!(
        "{}",
        "-".repeat(TABLE_COL_ID + TABLE_COL_PRIORITY + TABLE_COL_DONE + TABLE_COL_SCHEDULE + 24)
    );
}

fn print_table_row(task: &Task) {
    println!(
        "{:<w_id$} {:<w_prio$} {:<w_done$} {:<w_sched$} {}",
        task.id,
        task.priority.name(),
        if task.is_completed { "[x]" } else { "[ ]" },
        format_date_range(task.start_time, task.end_time),
        super::truncate(&task.text, 60),
        w_id = TABLE_COL_ID,
        w_prio = TABLE_COL_PRIORITY,
        w_done = TABLE_COL_DONE,
        w_sched = TABLE_COL_SCHEDULE
    );
}

pub fn run(data_dir: Option<PathBuf>, args: ListArgs) -> Result<()> {
    let (_, store) = super::open_store(data_dir)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(store.tasks())?);
        return Ok(());
    }

    if store.is_empty() {
        println!("No tasks. Add one with 'taskpad add <text>'.");
        return Ok(());
    }

    print_table_header();
    for task in store.tasks() {
        print_table_row(task);
    }
    Ok(())
}
