//! In-memory task list with monotonic id assignment

use super::task::{Priority, Task};

/// What a mutation did, so the view layer can redraw minimally.
/// `Replaced` (import/restore) is the only change that warrants a full
/// clear-and-redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Inserted(usize),
    Updated(usize),
    Removed(usize),
    Replaced,
}

/// The authoritative ordered task collection. Most-recent-first: new tasks
/// are inserted at the front. Ids are unique and strictly increasing,
/// driven by the persisted `next_id` counter.
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: i64,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuilds a store from persisted state, trusting the stored counter.
    pub fn from_parts(tasks: Vec<Task>, next_id: i64) -> Self {
        Self { tasks, next_id }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn next_id(&self) -> i64 {
        self.next_id
    }

    pub fn get(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Adds a task at the front of the list. Blank or whitespace-only text
    /// is silently ignored and the store is left unchanged.
    pub fn add(
        &mut self,
        text: &str,
        start_time: Option<i64>,
        end_time: Option<i64>,
        priority: Priority,
    ) -> Option<Change> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let task = Task::new(self.next_id, text, start_time, end_time, priority);
        self.next_id += 1;
        self.tasks.insert(0, task);
        Some(Change::Inserted(0))
    }

    /// Sets the completion flag of the matching task. No-op on unknown id.
    pub fn toggle_complete(&mut self, id: i64, completed: bool) -> Option<Change> {
        let idx = self.tasks.iter().position(|t| t.id == id)?;
        self.tasks[idx].is_completed = completed;
        Some(Change::Updated(idx))
    }

    /// Deletes the matching task. No-op on unknown id.
    pub fn remove(&mut self, id: i64) -> Option<Change> {
        let idx = self.tasks.iter().position(|t| t.id == id)?;
        self.tasks.remove(idx);
        Some(Change::Removed(idx))
    }

    /// Discards current contents in favor of `tasks` (used by import).
    /// `next_id` is recomputed as `max(id) + 1`, or 1 for an empty list.
    pub fn replace_all(&mut self, tasks: Vec<Task>) -> Change {
        self.next_id = tasks.iter().map(|t| t.id).max().map_or(1, |max| max + 1);
        self.tasks = tasks;
        Change::Replaced
    }

    pub fn into_parts(self) -> (Vec<Task>, i64) {
        (self.tasks, self.next_id)
    }
}
