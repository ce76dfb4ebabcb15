//! Background picker dialog

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::{centered_rect, DialogResult};
use crate::tui::styles::{self, Theme};

/// What the user picked. `ImageFile` asks the caller to prompt for a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundChoice {
    Default,
    Color(u32),
    ImageFile,
}

const OPTIONS: [(&str, BackgroundChoice); 5] = [
    ("Default", BackgroundChoice::Default),
    ("Mint", BackgroundChoice::Color(styles::BG_MINT)),
    ("Lavender", BackgroundChoice::Color(styles::BG_LAVENDER)),
    ("Peach", BackgroundChoice::Color(styles::BG_PEACH)),
    ("Image file...", BackgroundChoice::ImageFile),
];

pub struct BackgroundDialog {
    cursor: usize,
}

impl BackgroundDialog {
    pub fn new() -> Self {
        Self { cursor: 0 }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogResult<BackgroundChoice> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => DialogResult::Cancel,
            KeyCode::Enter => DialogResult::Submit(OPTIONS[self.cursor].1),
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = (self.cursor + OPTIONS.len() - 1) % OPTIONS.len();
                DialogResult::Continue
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor = (self.cursor + 1) % OPTIONS.len();
                DialogResult::Continue
            }
            _ => DialogResult::Continue,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = centered_rect(area, 36, OPTIONS.len() as u16 + 4);

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" Background ")
            .title_style(Style::default().fg(theme.title).bold());

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let items: Vec<ListItem> = OPTIONS
            .iter()
            .enumerate()
            .map(|(i, (name, choice))| {
                let swatch = match choice {
                    BackgroundChoice::Color(c) => {
                        Span::styled("██ ", Style::default().fg(styles::rgb(*c)))
                    }
                    _ => Span::raw("   "),
                };
                let style = if i == self.cursor {
                    Style::default().fg(theme.accent).bold()
                } else {
                    Style::default().fg(theme.text)
                };
                let line = Line::from(vec![Span::raw(" "), swatch, Span::styled(*name, style)]);
                if i == self.cursor {
                    ListItem::new(line).style(Style::default().bg(theme.selection))
                } else {
                    ListItem::new(line)
                }
            })
            .collect();

        let list_area = Rect {
            height: OPTIONS.len() as u16,
            ..inner
        };
        frame.render_widget(List::new(items), list_area);

        let hint_area = Rect {
            y: inner.y + inner.height.saturating_sub(1),
            height: 1,
            ..inner
        };
        let hint =
            Paragraph::new("j/k select · Enter apply · Esc cancel").style(Style::default().fg(theme.hint));
        frame.render_widget(hint, hint_area);
    }
}

impl Default for BackgroundDialog {
    fn default() -> Self {
        Self::new()
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
    fn test_enter_submits_default_first() {
        let mut dialog = BackgroundDialog::new();
        assert!(matches!(
            dialog.handle_key(key(KeyCode::Enter)),
            DialogResult::Submit(BackgroundChoice::Default)
        ));
    }

    #[test]
    fn test_navigation_wraps() {
        let mut dialog = BackgroundDialog::new();
        dialog.handle_key(key(KeyCode::Up));
        assert_eq!(dialog.cursor, OPTIONS.len() - 1);
        dialog.handle_key(key(KeyCode::Down));
        assert_eq!(dialog.cursor, 0);
    }

    #[test]
    fn test_select_mint() {
        let mut dialog = BackgroundDialog::new();
        dialog.handle_key(key(KeyCode::Char('j')));
        match dialog.handle_key(key(KeyCode::Enter)) {
            DialogResult::Submit(BackgroundChoice::Color(c)) => {
                assert_eq!(c, styles::BG_MINT)
            }
            _ => panic!("expected mint"),
        }
    }

    #[test]
    fn test_last_option_is_image_file() {
        let mut dialog = BackgroundDialog::new();
        dialog.handle_key(key(KeyCode::Up));
        assert!(matches!(
            dialog.handle_key(key(KeyCode::Enter)),
            DialogResult::Submit(BackgroundChoice::ImageFile)
        ));
    }
}
