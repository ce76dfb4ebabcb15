//! TUI dialog components

mod background;
mod confirm;
mod new_task;
mod path_prompt;

pub use background::{BackgroundChoice, BackgroundDialog};
pub use confirm::ConfirmDialog;
pub use new_task::{NewTaskData, NewTaskDialog};
pub use path_prompt::PathPromptDialog;

use ratatui::prelude::Rect;

pub enum DialogResult<T> {
    Continue,
    Cancel,
    Submit(T),
}

/// Centers a `width` x `height` box inside `area`, clamped to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_centered() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(area, 50, 10);
        assert_eq!(rect, Rect::new(25, 15, 50, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 5);
        let rect = centered_rect(area, 50, 10);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 5);
    }
}
