//! Help overlay component

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::tui::dialogs::centered_rect;
use crate::tui::styles::Theme;

const DIALOG_WIDTH: u16 = 44;
const DIALOG_HEIGHT: u16 = 23;

fn shortcuts() -> Vec<(&'static str, Vec<(&'static str, &'static str)>)> {
    vec![
        (
            "Navigation",
            vec![
                ("j/↓", "Move down"),
                ("k/↑", "Move up"),
                ("g", "Go to top"),
                ("G", "Go to bottom"),
            ],
        ),
        (
            "Tasks",
            vec![
                ("n", "New task"),
                ("Space", "Toggle complete"),
                ("d", "Delete task"),
            ],
        ),
        (
            "Files",
            vec![("e", "Export to JSON"), ("i", "Import from JSON")],
        ),
        (
            "Other",
            vec![
                ("b", "Change background"),
                ("?", "Toggle help"),
                ("q", "Quit"),
            ],
        ),
    ]
}

pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = centered_rect(area, DIALOG_WIDTH, DIALOG_HEIGHT);

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" Help ")
            .title_style(Style::default().fg(theme.title).bold());

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let mut lines = Vec::new();
        for (section, keys) in shortcuts() {
            lines.push(Line::from(Span::styled(
                section,
                Style::default().fg(theme.title).bold(),
            )));
            for (key, description) in keys {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {:<8}", key), Style::default().fg(theme.accent)),
                    Span::styled(description, Style::default().fg(theme.text)),
                ]));
            }
            lines.push(Line::from(""));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcut_lines_fit_dialog() {
        let mut count = 0;
        for (_, keys) in shortcuts() {
            count += 1 + keys.len() + 1;
        }
        // inner height = dialog height minus the border rows
        assert!(count <= (DIALOG_HEIGHT - 2) as usize);
    }
}
