//! Task row presentation - pure projection of a task into a styled list row

use ratatui::prelude::*;
use ratatui::widgets::ListItem;

use super::styles::Theme;
use crate::store::{time, Task};

/// Visual state of a row. Completed wins over overdue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAppearance {
    Completed,
    Overdue,
    Active,
}

pub fn classify(task: &Task, now_ms: i64) -> RowAppearance {
    if task.is_completed {
        RowAppearance::Completed
    } else if task.end_time.is_some_and(|end| end < now_ms) {
        RowAppearance::Overdue
    } else {
        RowAppearance::Active
    }
}

/// Formats the schedule column: `"not set"` when neither end is set,
/// otherwise `MM-DD HH:MM` per side with `"..."` for a missing side.
pub fn format_date_range(start_time: Option<i64>, end_time: Option<i64>) -> String {
    if start_time.is_none() && end_time.is_none() {
        return "not set".to_string();
    }

    let side = |millis: Option<i64>| {
        millis
            .and_then(time::format_short)
            .unwrap_or_else(|| "...".to_string())
    };
    format!("{} -> {}", side(start_time), side(end_time))
}

/// Builds the visual row for one task: priority swatch, checkbox, title and
/// schedule, colored and struck through per the appearance rules.
pub fn task_row<'a>(task: &Task, now_ms: i64, is_selected: bool, theme: &Theme) -> ListItem<'a> {
    let appearance = classify(task, now_ms);

    let (text_color, range_color, strikethrough) = match appearance {
        RowAppearance::Completed => (theme.completed, theme.completed, true),
        RowAppearance::Overdue => (theme.overdue, theme.overdue, false),
        RowAppearance::Active => (theme.text, theme.dimmed, false),
    };

    let mut title_style = Style::default().fg(text_color);
    let mut range_style = Style::default().fg(range_color);
    if strikethrough {
        title_style = title_style.add_modifier(Modifier::CROSSED_OUT);
        range_style = range_style.add_modifier(Modifier::CROSSED_OUT);
    }
    if is_selected {
        title_style = title_style.bold();
    }

    let checkbox = if task.is_completed { "[x] " } else { "[ ] " };

    let line = Line::from(vec![
        Span::styled("▍ ", Style::default().fg(theme.priority_color(task.priority))),
        Span::styled(checkbox.to_string(), Style::default().fg(theme.dimmed)),
        Span::styled(task.text.clone(), title_style),
        Span::raw("  "),
        Span::styled(
            format_date_range(task.start_time, task.end_time),
            range_style,
        ),
    ]);

    if is_selected {
        ListItem::new(line).style(Style::default().bg(theme.selection))
    } else {
        ListItem::new(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{time, Priority};

    fn task(start: Option<i64>, end: Option<i64>, completed: bool) -> Task {
        Task {
            id: 1,
            text: "task".to_string(),
            start_time: start,
            end_time: end,
            priority: Priority::Medium,
            is_completed: completed,
        }
    }

    const NOW: i64 = 1_700_000_000_000;
    const DAY: i64 = 24 * 60 * 60 * 1000;

    #[test]
    fn test_completed_appearance() {
        assert_eq!(
            classify(&task(None, Some(NOW - DAY), true), NOW),
            RowAppearance::Completed
        );
    }

    #[test]
    fn test_overdue_when_end_time_passed() {
        // end time yesterday, not completed
        assert_eq!(
            classify(&task(None, Some(NOW - DAY), false), NOW),
            RowAppearance::Overdue
        );
    }

    #[test]
    fn test_active_when_end_time_in_future() {
        assert_eq!(
            classify(&task(None, Some(NOW + DAY), false), NOW),
            RowAppearance::Active
        );
    }

    #[test]
    fn test_active_without_end_time() {
        assert_eq!(
            classify(&task(Some(NOW - DAY), None, false), NOW),
            RowAppearance::Active
        );
    }

    #[test]
    fn test_range_both_unset() {
        assert_eq!(format_date_range(None, None), "not set");
    }

    #[test]
    fn test_range_start_only() {
        let start = time::parse_local_datetime("2026-03-01 08:00").unwrap();
        assert_eq!(format_date_range(Some(start), None), "03-01 08:00 -> ...");
    }

    #[test]
    fn test_range_end_only() {
        let end = time::parse_local_datetime("2026-03-02 17:30").unwrap();
        assert_eq!(format_date_range(None, Some(end)), "... -> 03-02 17:30");
    }

    #[test]
    fn test_range_both_set() {
        let start = time::parse_local_datetime("2026-03-01 08:00").unwrap();
        let end = time::parse_local_datetime("2026-03-02 17:30").unwrap();
        assert_eq!(
            format_date_range(Some(start), Some(end)),
            "03-01 08:00 -> 03-02 17:30"
        );
    }
}
