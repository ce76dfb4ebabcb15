//! File path prompt dialog, used for export, import and background images

use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use super::{centered_rect, DialogResult};
use crate::tui::components::render_text_field;
use crate::tui::styles::Theme;

pub struct PathPromptDialog {
    title: String,
    input: Input,
}

impl PathPromptDialog {
    pub fn new(title: &str, initial: &str) -> Self {
        Self {
            title: title.to_string(),
            input: Input::new(initial.to_string()),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogResult<String> {
        match key.code {
            KeyCode::Esc => DialogResult::Cancel,
            KeyCode::Enter => {
                let value = self.input.value().trim().to_string();
                if value.is_empty() {
                    DialogResult::Continue
                } else {
                    DialogResult::Submit(value)
                }
            }
            _ => {
                self.input.handle_event(&Event::Key(key));
                DialogResult::Continue
            }
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = centered_rect(area, 60, 6);

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(format!(" {} ", self.title))
            .title_style(Style::default().fg(theme.title).bold());

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        render_text_field(frame, chunks[0], "Path:", &self.input, true, theme);

        let hint = Paragraph::new("Enter confirm · Esc cancel").style(Style::default().fg(theme.hint));
        frame.render_widget(hint, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_initial_value_is_editable() {
        let mut dialog = PathPromptDialog::new("Export", "MyTodos_1.json");
        dialog.handle_key(key(KeyCode::Backspace));
        assert_eq!(dialog.input.value(), "MyTodos_1.jso");
    }

    #[test]
    fn test_enter_submits_trimmed_value() {
        let mut dialog = PathPromptDialog::new("Import", "  /tmp/tasks.json ");
        match dialog.handle_key(key(KeyCode::Enter)) {
            DialogResult::Submit(path) => assert_eq!(path, "/tmp/tasks.json"),
            _ => panic!("expected submit"),
        }
    }

    #[test]
    fn test_enter_on_empty_input_continues() {
        let mut dialog = PathPromptDialog::new("Import", "");
        assert!(matches!(
            dialog.handle_key(key(KeyCode::Enter)),
            DialogResult::Continue
        ));
    }

    #[test]
    fn test_esc_cancels() {
        let mut dialog = PathPromptDialog::new("Import", "x");
        assert!(matches!(dialog.handle_key(key(KeyCode::Esc)), DialogResult::Cancel));
    }
}
