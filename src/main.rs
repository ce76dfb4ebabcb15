//! Taskpad - single-screen terminal to-do list

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use taskpad::cli::{self, Cli, Commands};
use taskpad::tui;

fn main() -> Result<()> {
    if std::env::var("TASKPAD_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("taskpad=debug")
            .init();
    }

    let cli = Cli::parse();
    let data_dir = cli.data_dir.clone();

    match cli.command {
        Some(Commands::Completion { shell }) => {
            generate(shell, &mut Cli::command(), "taskpad", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Add(args)) => cli::add::run(data_dir, args),
        Some(Commands::List(args)) => cli::list::run(data_dir, args),
        Some(Commands::Done { id }) => cli::task::run_done(data_dir, id, true),
        Some(Commands::Undone { id }) => cli::task::run_done(data_dir, id, false),
        Some(Commands::Rm { id }) => cli::task::run_remove(data_dir, id),
        Some(Commands::Export(args)) => cli::transfer::run_export(data_dir, args),
        Some(Commands::Import(args)) => cli::transfer::run_import(data_dir, args),
        None => tui::run(data_dir),
    }
}
