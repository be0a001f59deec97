//! # Toast Notifications
//!
//! Ephemeral banners that auto-dismiss after a fixed duration. Used for
//! the transient success message after a save; failures use the blocking
//! alert instead.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    /// Neutral information.
    Info,
    /// A completed operation.
    Success,
    /// Something the operator should know but that blocked nothing.
    Warning,
}

impl ToastLevel {
    fn color(self) -> Color {
        match self {
            ToastLevel::Info => Color::Blue,
            ToastLevel::Success => Color::Green,
            ToastLevel::Warning => Color::Yellow,
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastLevel::Info => "i",
            ToastLevel::Success => "*",
            ToastLevel::Warning => "!",
        }
    }
}

/// An ephemeral notification.
#[derive(Debug, Clone)]
pub struct Toast {
    /// Message content.
    pub message: String,
    /// Severity level.
    pub level: ToastLevel,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    /// Create a toast with the default three-second duration.
    pub fn new(message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            message: message.into(),
            level,
            created_at: Instant::now(),
            duration: Duration::from_secs(3),
        }
    }

    /// Create a success toast.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Success)
    }

    /// Create a warning toast.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Warning)
    }

    /// Override the display duration.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Whether the toast should disappear.
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

/// Stack of active toasts, newest last.
#[derive(Debug, Default)]
pub struct ToastStack {
    toasts: VecDeque<Toast>,
}

impl ToastStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a toast.
    pub fn push(&mut self, toast: Toast) {
        self.toasts.push_back(toast);
    }

    /// Drop expired toasts. Called once per render pass.
    pub fn prune(&mut self) {
        self.toasts.retain(|t| !t.is_expired());
    }

    /// Number of active toasts.
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Whether there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Iterate active toasts, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    /// Render the stack in the top-right corner of `area`.
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let width = 40.min(area.width.saturating_sub(2));
        for (i, toast) in self.toasts.iter().enumerate() {
            let y = area.y + 1 + (i as u16) * 3;
            if y + 3 > area.y + area.height {
                break;
            }
            let rect = Rect {
                x: area.x + area.width.saturating_sub(width + 1),
                y,
                width,
                height: 3,
            };
            let style = Style::default().fg(toast.level.color());
            let body = Paragraph::new(Line::from(format!(
                "{} {}",
                toast.level.icon(),
                toast.message
            )))
            .style(style)
            .block(Block::default().borders(Borders::ALL).border_style(style));
            f.render_widget(Clear, rect);
            f.render_widget(body, rect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expired_toasts_are_pruned() {
        let mut stack = ToastStack::new();
        stack.push(Toast::success("saved").with_duration(Duration::from_secs(0)));
        stack.push(Toast::warning("draft discarded"));
        assert_eq!(stack.len(), 2);

        stack.prune();
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.iter().next().unwrap().level, ToastLevel::Warning);
    }

    #[test]
    fn fresh_toast_is_not_expired() {
        assert!(!Toast::success("ok").is_expired());
    }
}
