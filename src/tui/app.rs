//! Main TUI application

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use super::home::HomeView;
use super::styles::Theme;
use crate::store::Storage;

/// Draw-after-input keeps the UI responsive; the tick redraw keeps relative
/// state (overdue rows, notice expiry) current between inputs.
const POLL_INTERVAL: Duration = Duration::from_millis(50);
const TICK_INTERVAL: Duration = Duration::from_secs(1);

pub struct App {
    home: HomeView,
    theme: Theme,
    should_quit: bool,
}

impl App {
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self> {
        let storage = Storage::open(data_dir)?;
        let home = HomeView::new(storage)?;
        let theme = Theme::default();

        Ok(Self {
            home,
            theme,
            should_quit: false,
        })
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        terminal.clear()?;
        terminal.draw(|f| self.render(f))?;

        let mut last_tick = Instant::now();

        loop {
            // Import and background changes invalidate the whole screen
            if self.home.take_full_redraw() {
                terminal.clear()?;
                terminal.draw(|f| self.render(f))?;
            }

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                    terminal.draw(|f| self.render(f))?;

                    if self.should_quit {
                        break;
                    }
                    continue;
                }
            }

            if last_tick.elapsed() >= TICK_INTERVAL {
                self.home.expire_notice();
                terminal.draw(|f| self.render(f))?;
                last_tick = Instant::now();
            }
        }

        // The terminal analog of persist-on-backgrounding
        self.home.persist_now();
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.home.render(frame, area, &self.theme);
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            (KeyCode::Char('q'), _) if !self.home.has_dialog() => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        if let Some(action) = self.home.handle_key(key) {
            match action {
                Action::Quit => self.should_quit = true,
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
}
