//! Home view - the single task list screen

use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::app::Action;
use super::components::HelpOverlay;
use super::dialogs::{
    BackgroundChoice, BackgroundDialog, ConfirmDialog, DialogResult, NewTaskData, NewTaskDialog,
    PathPromptDialog,
};
use super::rows;
use super::styles::{self, Theme};
use crate::store::{now_ms, transfer, Background, Change, Settings, Storage, TaskStore};

const NOTICE_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NoticeLevel {
    Info,
    Error,
}

struct Notice {
    text: String,
    level: NoticeLevel,
    shown_at: Instant,
}

/// Which operation a path prompt was opened for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PromptKind {
    Export,
    Import,
    BackgroundImage,
}

pub struct HomeView {
    storage: Storage,
    store: TaskStore,
    settings: Settings,

    // UI state
    cursor: usize,
    notice: Option<Notice>,
    needs_full_redraw: bool,

    // Dialogs
    show_help: bool,
    new_dialog: Option<NewTaskDialog>,
    confirm_dialog: Option<ConfirmDialog>,
    background_dialog: Option<BackgroundDialog>,
    prompt: Option<(PromptKind, PathPromptDialog)>,
    pending_delete: Option<i64>,
}

impl HomeView {
    pub fn new(storage: Storage) -> anyhow::Result<Self> {
        let store = storage.restore()?;
        let settings = Settings::load_from(storage.dir())?;

        Ok(Self {
            storage,
            store,
            settings,
            cursor: 0,
            notice: None,
            needs_full_redraw: false,
            show_help: false,
            new_dialog: None,
            confirm_dialog: None,
            background_dialog: None,
            prompt: None,
            pending_delete: None,
        })
    }

    pub fn has_dialog(&self) -> bool {
        self.show_help
            || self.new_dialog.is_some()
            || self.confirm_dialog.is_some()
            || self.background_dialog.is_some()
            || self.prompt.is_some()
    }

    /// Consumed by the app loop; true forces a terminal clear before the
    /// next draw (import/restore replaced the whole list).
    pub fn take_full_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_full_redraw)
    }

    /// Clears an aged-out notice. Returns true when the screen changed.
    pub fn expire_notice(&mut self) -> bool {
        if let Some(notice) = &self.notice {
            if notice.shown_at.elapsed() >= NOTICE_TTL {
                self.notice = None;
                return true;
            }
        }
        false
    }

    pub fn persist_now(&mut self) {
        if let Err(e) = self.storage.persist(&self.store) {
            tracing::error!("Failed to persist tasks: {}", e);
            self.show_error(format!("Save failed: {e}"));
        }
    }

    fn show_info(&mut self, text: String) {
        self.notice = Some(Notice {
            text,
            level: NoticeLevel::Info,
            shown_at: Instant::now(),
        });
    }

    fn show_error(&mut self, text: String) {
        self.notice = Some(Notice {
            text,
            level: NoticeLevel::Error,
            shown_at: Instant::now(),
        });
    }

    fn selected_id(&self) -> Option<i64> {
        self.store.tasks().get(self.cursor).map(|t| t.id)
    }

    fn apply_change(&mut self, change: Change) {
        if change == Change::Replaced {
            self.cursor = 0;
            self.needs_full_redraw = true;
        } else if self.cursor >= self.store.len() && !self.store.is_empty() {
            self.cursor = self.store.len() - 1;
        } else if self.store.is_empty() {
            self.cursor = 0;
        }
        self.persist_now();
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        if self.show_help {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                self.show_help = false;
            }
            return None;
        }

        if let Some(dialog) = &mut self.new_dialog {
            match dialog.handle_key(key) {
                DialogResult::Continue => {}
                DialogResult::Cancel => {
                    self.new_dialog = None;
                }
                DialogResult::Submit(data) => {
                    self.new_dialog = None;
                    self.add_task(data);
                }
            }
            return None;
        }

        if let Some(dialog) = &mut self.confirm_dialog {
            match dialog.handle_key(key) {
                DialogResult::Continue => {}
                DialogResult::Cancel => {
                    self.confirm_dialog = None;
                    self.pending_delete = None;
                }
                DialogResult::Submit(()) => {
                    self.confirm_dialog = None;
                    if let Some(id) = self.pending_delete.take() {
                        if let Some(change) = self.store.remove(id) {
                            self.apply_change(change);
                        }
                    }
                }
            }
            return None;
        }

        if let Some(dialog) = &mut self.background_dialog {
            match dialog.handle_key(key) {
                DialogResult::Continue => {}
                DialogResult::Cancel => {
                    self.background_dialog = None;
                }
                DialogResult::Submit(choice) => {
                    self.background_dialog = None;
                    self.apply_background(choice);
                }
            }
            return None;
        }

        if let Some((kind, dialog)) = &mut self.prompt {
            let kind = *kind;
            match dialog.handle_key(key) {
                DialogResult::Continue => {}
                DialogResult::Cancel => {
                    self.prompt = None;
                }
                DialogResult::Submit(path) => {
                    self.prompt = None;
                    match kind {
                        PromptKind::Export => self.export_to(Path::new(&path)),
                        PromptKind::Import => self.import_from(Path::new(&path)),
                        PromptKind::BackgroundImage => self.set_background_image(path),
                    }
                }
            }
            return None;
        }

        match key.code {
            KeyCode::Char('q') => return Some(Action::Quit),
            KeyCode::Char('?') => {
                self.show_help = true;
            }
            KeyCode::Char('n') => {
                self.new_dialog = Some(NewTaskDialog::new());
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                if let Some(id) = self.selected_id() {
                    let completed = self.store.get(id).is_some_and(|t| t.is_completed);
                    if let Some(change) = self.store.toggle_complete(id, !completed) {
                        self.apply_change(change);
                    }
                }
            }
            KeyCode::Char('d') => {
                if let Some(id) = self.selected_id() {
                    let text = self
                        .store
                        .get(id)
                        .map(|t| t.text.clone())
                        .unwrap_or_default();
                    self.pending_delete = Some(id);
                    self.confirm_dialog = Some(ConfirmDialog::new(
                        "Delete Task",
                        &format!("Delete '{}'?", text),
                    ));
                }
            }
            KeyCode::Char('e') => {
                self.prompt = Some((
                    PromptKind::Export,
                    PathPromptDialog::new("Export Tasks", &transfer::suggested_export_filename()),
                ));
            }
            KeyCode::Char('i') => {
                self.prompt = Some((
                    PromptKind::Import,
                    PathPromptDialog::new("Import Tasks", ""),
                ));
            }
            KeyCode::Char('b') => {
                self.background_dialog = Some(BackgroundDialog::new());
            }
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::PageUp => self.move_cursor(-10),
            KeyCode::PageDown => self.move_cursor(10),
            KeyCode::Home | KeyCode::Char('g') => {
                self.cursor = 0;
            }
            KeyCode::End | KeyCode::Char('G') => {
                if !self.store.is_empty() {
                    self.cursor = self.store.len() - 1;
                }
            }
            _ => {}
        }

        None
    }

    fn move_cursor(&mut self, delta: i32) {
        let len = self.store.len();
        if len == 0 {
            return;
        }
        self.cursor = if delta < 0 {
            self.cursor.saturating_sub((-delta) as usize)
        } else {
            (self.cursor + delta as usize).min(len - 1)
        };
    }

    fn add_task(&mut self, data: NewTaskData) {
        if let Some(change) =
            self.store
                .add(&data.text, data.start_time, data.end_time, data.priority)
        {
            self.cursor = 0;
            self.apply_change(change);
        }
    }

    fn export_to(&mut self, path: &Path) {
        match transfer::export_tasks(self.store.tasks(), path) {
            Ok(()) => {
                self.show_info(format!(
                    "Exported {} tasks to {}",
                    self.store.len(),
                    path.display()
                ));
            }
            Err(e) => {
                tracing::warn!("Export failed: {}", e);
                self.show_error(format!("Export failed: {e}"));
            }
        }
    }

    fn import_from(&mut self, path: &Path) {
        match transfer::import_tasks(path) {
            Ok(tasks) => {
                let count = tasks.len();
                let change = self.store.replace_all(tasks);
                self.apply_change(change);
                self.show_info(format!("Imported {} tasks", count));
            }
            Err(e) => {
                tracing::warn!("Import failed: {}", e);
                self.show_error(format!("Import failed: {e}"));
            }
        }
    }

    fn apply_background(&mut self, choice: BackgroundChoice) {
        match choice {
            BackgroundChoice::Default => {
                self.settings.clear_background();
                self.save_settings();
            }
            BackgroundChoice::Color(color) => {
                self.settings.set_color(color);
                self.save_settings();
            }
            BackgroundChoice::ImageFile => {
                let initial = match self.settings.background() {
                    Background::Image(path) => path,
                    _ => String::new(),
                };
                self.prompt = Some((
                    PromptKind::BackgroundImage,
                    PathPromptDialog::new("Background Image", &initial),
                ));
            }
        }
    }

    fn set_background_image(&mut self, path: String) {
        self.settings.set_image(path);
        self.save_settings();
    }

    fn save_settings(&mut self) {
        self.needs_full_redraw = true;
        if let Err(e) = self.settings.save_to(self.storage.dir()) {
            tracing::error!("Failed to save settings: {}", e);
            self.show_error(format!("Settings save failed: {e}"));
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let background = match self.settings.background() {
            Background::Color(color) => styles::rgb(color),
            // An image cannot be blitted to a terminal cell grid; fall back
            // to the default background while keeping the setting stored
            Background::Image(_) | Background::Default => theme.background,
        };
        frame.render_widget(
            Block::default().style(Style::default().bg(background)),
            area,
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(1), // notice
                Constraint::Length(1), // status bar
            ])
            .split(area);

        self.render_list(frame, chunks[0], theme);
        self.render_notice(frame, chunks[1], theme);
        self.render_status_bar(frame, chunks[2], theme);

        if self.show_help {
            HelpOverlay::render(frame, area, theme);
        }
        if let Some(dialog) = &self.new_dialog {
            dialog.render(frame, area, theme);
        }
        if let Some(dialog) = &self.confirm_dialog {
            dialog.render(frame, area, theme);
        }
        if let Some(dialog) = &self.background_dialog {
            dialog.render(frame, area, theme);
        }
        if let Some((_, dialog)) = &self.prompt {
            dialog.render(frame, area, theme);
        }
    }

    fn render_list(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let done = self
            .store
            .tasks()
            .iter()
            .filter(|t| t.is_completed)
            .count();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(format!(" Taskpad ({}/{} done) ", done, self.store.len()))
            .title_style(Style::default().fg(theme.title).bold());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.store.is_empty() {
            let empty_text = vec![
                Line::from(""),
                Line::from("No tasks yet").style(Style::default().fg(theme.dimmed)),
                Line::from(""),
                Line::from("Press 'n' to create one").style(Style::default().fg(theme.hint)),
            ];
            let para = Paragraph::new(empty_text).alignment(Alignment::Center);
            frame.render_widget(para, inner);
            return;
        }

        let now = now_ms();
        let items: Vec<ListItem> = self
            .store
            .tasks()
            .iter()
            .enumerate()
            .map(|(idx, task)| rows::task_row(task, now, idx == self.cursor, theme))
            .collect();

        frame.render_widget(List::new(items), inner);
    }

    fn render_notice(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if let Some(notice) = &self.notice {
            let color = match notice.level {
                NoticeLevel::Info => theme.notice,
                NoticeLevel::Error => theme.error,
            };
            let para =
                Paragraph::new(format!(" {}", notice.text)).style(Style::default().fg(color));
            frame.render_widget(para, area);
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let key_style = Style::default().fg(theme.accent).bold();
        let desc_style = Style::default().fg(theme.dimmed);
        let sep_style = Style::default().fg(theme.border);

        let spans = vec![
            Span::styled(" j/k", key_style),
            Span::styled(" Navigate ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" Space", key_style),
            Span::styled(" Done ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" n", key_style),
            Span::styled(" New ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" d", key_style),
            Span::styled(" Delete ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" e/i", key_style),
            Span::styled(" Export/Import ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" b", key_style),
            Span::styled(" Background ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ?", key_style),
            Span::styled(" Help ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" q", key_style),
            Span::styled(" Quit", desc_style),
        ];

        let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.selection));
        frame.render_widget(status, area);
    }
}
