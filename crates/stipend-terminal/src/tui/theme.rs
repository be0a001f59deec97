//! Centralized color and style constants.

use ratatui::style::{Color, Modifier, Style};
use stipend_core::WithdrawalStatus;

/// Accent color for titles and the active tab.
pub const ACCENT: Color = Color::Blue;

/// Style for pane titles.
pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Style for the selected row or field.
pub fn selected() -> Style {
    Style::default()
        .bg(Color::Blue)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Style for dim helper text.
pub fn hint() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Style for positive amounts.
pub fn money() -> Style {
    Style::default().fg(Color::Green)
}

/// Style for a withdrawal status badge.
pub fn status(status: WithdrawalStatus) -> Style {
    let color = match status {
        WithdrawalStatus::Pending => Color::Yellow,
        WithdrawalStatus::Approved => Color::Green,
        WithdrawalStatus::Rejected => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}
