//! Taskpad - single-screen terminal to-do list
//!
//! Tasks carry a title, optional start/end timestamps and a priority; the
//! whole list round-trips through JSON files for export and import.

pub mod cli;
pub mod store;
pub mod tui;
