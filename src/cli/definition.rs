//! Command-line interface definition

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::add::AddArgs;
use super::list::ListArgs;
use super::transfer::{ExportArgs, ImportArgs};

#[derive(Parser)]
#[command(
    name = "taskpad",
    version,
    about = "Single-screen terminal to-do list",
    long_about = "Taskpad keeps an ordered to-do list with schedules and priorities.\n\
                  Run without a subcommand to open the interactive screen."
)]
pub struct Cli {
    /// Store data in this directory instead of the default
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    Add(AddArgs),

    /// List all tasks
    List(ListArgs),

    /// Mark a task as completed
    Done {
        /// Task id
        id: i64,
    },

    /// Mark a task as not completed
    Undone {
        /// Task id
        id: i64,
    },

    /// Delete a task
    Rm {
        /// Task id
        id: i64,
    },

    /// Export all tasks to a JSON file
    Export(ExportArgs),

    /// Replace all tasks with the contents of a JSON file
    Import(ImportArgs),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
