//! Task data model

use serde::{Deserialize, Serialize};

/// A single to-do item with schedule and priority metadata.
///
/// Field names on the wire match the export file format: `startTime`,
/// `endTime` and `isCompleted` in camelCase, priority as its uppercase name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub text: String,
    #[serde(default)]
    pub start_time: Option<i64>,
    #[serde(default)]
    pub end_time: Option<i64>,
    pub priority: Priority,
    #[serde(default)]
    pub is_completed: bool,
}

impl Task {
    pub fn new(
        id: i64,
        text: impl Into<String>,
        start_time: Option<i64>,
        end_time: Option<i64>,
        priority: Priority,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            start_time,
            end_time,
            priority,
            is_completed: false,
        }
    }
}

/// Ordinal urgency classification. Display colors are resolved by the
/// rendering layer (`tui::styles::Theme`), not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn name(&self) -> &'static str {
        match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}
