//! New task dialog

use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use super::{centered_rect, DialogResult};
use crate::store::{time, Priority};
use crate::tui::components::render_text_field;
use crate::tui::styles::Theme;

const FIELD_TITLE: usize = 0;
const FIELD_START: usize = 1;
const FIELD_END: usize = 2;
const FIELD_PRIORITY: usize = 3;
const FIELD_COUNT: usize = 4;

const PRIORITIES: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

#[derive(Debug, Clone, PartialEq)]
pub struct NewTaskData {
    pub text: String,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub priority: Priority,
}

pub struct NewTaskDialog {
    title: Input,
    start: Input,
    end: Input,
    priority_index: usize,
    focused_field: usize,
    error_message: Option<String>,
}

impl NewTaskDialog {
    pub fn new() -> Self {
        Self {
            title: Input::default(),
            start: Input::default(),
            end: Input::default(),
            // Medium is the default chip in the entry form
            priority_index: 1,
            focused_field: FIELD_TITLE,
            error_message: None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogResult<NewTaskData> {
        match key.code {
            KeyCode::Esc => {
                self.error_message = None;
                return DialogResult::Cancel;
            }
            KeyCode::Enter => return self.submit(),
            KeyCode::Tab | KeyCode::Down => {
                self.focused_field = (self.focused_field + 1) % FIELD_COUNT;
                return DialogResult::Continue;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focused_field = (self.focused_field + FIELD_COUNT - 1) % FIELD_COUNT;
                return DialogResult::Continue;
            }
            _ => {}
        }

        if self.focused_field == FIELD_PRIORITY {
            match key.code {
                KeyCode::Left | KeyCode::Char('h') => {
                    self.priority_index = (self.priority_index + PRIORITIES.len() - 1) % PRIORITIES.len();
                }
                KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
                    self.priority_index = (self.priority_index + 1) % PRIORITIES.len();
                }
                _ => {}
            }
            return DialogResult::Continue;
        }

        let input = match self.focused_field {
            FIELD_TITLE => &mut self.title,
            FIELD_START => &mut self.start,
            _ => &mut self.end,
        };
        input.handle_event(&Event::Key(key));
        DialogResult::Continue
    }

    fn submit(&mut self) -> DialogResult<NewTaskData> {
        // Blank title is silently ignored; the dialog stays open
        if self.title.value().trim().is_empty() {
            return DialogResult::Continue;
        }

        let start_time = match Self::parse_optional(self.start.value()) {
            Ok(v) => v,
            Err(msg) => {
                self.error_message = Some(format!("Start: {msg}"));
                return DialogResult::Continue;
            }
        };
        let end_time = match Self::parse_optional(self.end.value()) {
            Ok(v) => v,
            Err(msg) => {
                self.error_message = Some(format!("End: {msg}"));
                return DialogResult::Continue;
            }
        };

        self.error_message = None;
        DialogResult::Submit(NewTaskData {
            text: self.title.value().trim().to_string(),
            start_time,
            end_time,
            priority: PRIORITIES[self.priority_index],
        })
    }

    fn parse_optional(value: &str) -> Result<Option<i64>, String> {
        if value.trim().is_empty() {
            return Ok(None);
        }
        time::parse_local_datetime(value)
            .map(Some)
            .ok_or_else(|| format!("expected {}", time::INPUT_FORMAT))
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = centered_rect(area, 56, 12);

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" New Task ")
            .title_style(Style::default().fg(theme.title).bold());

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1), // title
                Constraint::Length(1), // start
                Constraint::Length(1), // end
                Constraint::Length(1), // priority
                Constraint::Length(1), // spacer / error
                Constraint::Length(1), // hint
            ])
            .split(inner);

        render_text_field(
            frame,
            chunks[0],
            "Title:",
            &self.title,
            self.focused_field == FIELD_TITLE,
            theme,
        );
        render_text_field(
            frame,
            chunks[1],
            "Start:",
            &self.start,
            self.focused_field == FIELD_START,
            theme,
        );
        render_text_field(
            frame,
            chunks[2],
            "End:  ",
            &self.end,
            self.focused_field == FIELD_END,
            theme,
        );

        self.render_priority_row(frame, chunks[3], theme);

        if let Some(error) = &self.error_message {
            frame.render_widget(
                Paragraph::new(error.as_str()).style(Style::default().fg(theme.error)),
                chunks[4],
            );
        }

        let hint = Paragraph::new("Tab next field · Enter add · Esc cancel")
            .style(Style::default().fg(theme.hint));
        frame.render_widget(hint, chunks[5]);
    }

    fn render_priority_row(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let focused = self.focused_field == FIELD_PRIORITY;
        let label_style = if focused {
            Style::default().fg(theme.accent).underlined()
        } else {
            Style::default().fg(theme.text)
        };

        let mut spans = vec![Span::styled("Prio: ", label_style), Span::raw(" ")];
        for (i, priority) in PRIORITIES.iter().enumerate() {
            let selected = i == self.priority_index;
            let style = if selected {
                Style::default()
                    .fg(theme.priority_color(*priority))
                    .bold()
                    .underlined()
            } else {
                Style::default().fg(theme.dimmed)
            };
            spans.push(Span::styled(priority.name(), style));
            spans.push(Span::raw("  "));
        }
        if focused {
            spans.push(Span::styled("←/→", Style::default().fg(theme.hint)));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

impl Default for NewTaskDialog {
    fn default() -> Self {
        Self::new()
    }
}
