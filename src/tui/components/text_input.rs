//! Labeled text input field with an inverse-video cursor

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use tui_input::Input;

use crate::tui::styles::Theme;

pub fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    input: &Input,
    is_focused: bool,
    theme: &Theme,
) {
    let label_style = if is_focused {
        Style::default().fg(theme.accent).underlined()
    } else {
        Style::default().fg(theme.text)
    };
    let value_style = if is_focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text)
    };

    let value = input.value();
    let mut spans = vec![Span::styled(label.to_string(), label_style), Span::raw(" ")];

    if is_focused {
        // Split around the cursor so it renders as an inverted cell
        let cursor_pos = input.visual_cursor();
        let cursor_style = Style::default().fg(theme.background).bg(theme.accent);

        let before: String = value.chars().take(cursor_pos).collect();
        let at_cursor = value
            .chars()
            .nth(cursor_pos)
            .map(|c| c.to_string())
            .unwrap_or_else(|| " ".to_string());
        let after: String = value.chars().skip(cursor_pos + 1).collect();

        if !before.is_empty() {
            spans.push(Span::styled(before, value_style));
        }
        spans.push(Span::styled(at_cursor, cursor_style));
        if !after.is_empty() {
            spans.push(Span::styled(after, value_style));
        }
    } else {
        spans.push(Span::styled(value.to_string(), value_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
