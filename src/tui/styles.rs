//! TUI theme and styling

use ratatui::style::Color;

use crate::store::Priority;

/// Background color presets offered by the picker, as `0xRRGGBB` ints the
/// way the settings file stores them.
pub const BG_MINT: u32 = 0xAAF0D1;
pub const BG_LAVENDER: u32 = 0xE6E6FA;
pub const BG_PEACH: u32 = 0xFFDAB9;

#[derive(Debug, Clone)]
pub struct Theme {
    // Background and borders
    pub background: Color,
    pub border: Color,
    pub selection: Color,

    // Text colors
    pub title: Color,
    pub text: Color,
    pub dimmed: Color,
    pub hint: Color,

    // Task states
    pub completed: Color,
    pub overdue: Color,

    // Priority swatches
    pub priority_high: Color,
    pub priority_medium: Color,
    pub priority_low: Color,

    // UI elements
    pub accent: Color,
    pub error: Color,
    pub notice: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::paper()
    }
}

impl Theme {
    pub fn paper() -> Self {
        Self {
            background: Color::Rgb(24, 24, 28),
            border: Color::Rgb(70, 70, 85),
            selection: Color::Rgb(50, 50, 62),

            title: Color::Rgb(240, 240, 200),
            text: Color::Rgb(220, 220, 220),
            dimmed: Color::Rgb(120, 120, 130),
            hint: Color::Rgb(140, 160, 150),

            completed: Color::Rgb(110, 110, 110),
            overdue: Color::Rgb(255, 95, 85),

            priority_high: Color::Rgb(235, 80, 70),
            priority_medium: Color::Rgb(235, 185, 60),
            priority_low: Color::Rgb(95, 200, 120),

            accent: Color::Rgb(120, 190, 255),
            error: Color::Rgb(255, 95, 85),
            notice: Color::Rgb(150, 220, 150),
        }
    }

    /// Priority display colors live here, not on the enum, so the palette
    /// can change without touching the data model.
    pub fn priority_color(&self, priority: Priority) -> Color {
        match priority {
            Priority::High => self.priority_high,
            Priority::Medium => self.priority_medium,
            Priority::Low => self.priority_low,
        }
    }
}

/// Converts a stored `0xRRGGBB` background int to a terminal color.
pub fn rgb(color: u32) -> Color {
    Color::Rgb(
        ((color >> 16) & 0xFF) as u8,
        ((color >> 8) & 0xFF) as u8,
        (color & 0xFF) as u8,
    )
}
