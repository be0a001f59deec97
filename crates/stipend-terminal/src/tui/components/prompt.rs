//! Balance adjustment prompt.

use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use stipend_core::UserId;

use super::modal::centered_rect;

/// Single-line prompt for a replacement balance, pre-filled with the
/// user's current value.
#[derive(Clone, Debug)]
pub struct BalancePrompt {
    /// Target user.
    pub user_id: UserId,
    /// Display name shown in the prompt title.
    pub user_name: String,
    /// Balance at the time the prompt opened.
    pub current_balance: f64,
    /// Edit buffer, pre-filled with the current balance.
    pub buffer: String,
}

impl BalancePrompt {
    /// Open a prompt for `user_id`, pre-filling the current balance.
    pub fn new(user_id: UserId, user_name: impl Into<String>, current_balance: f64) -> Self {
        Self {
            user_id,
            user_name: user_name.into(),
            current_balance,
            buffer: format!("{current_balance}"),
        }
    }

    /// Type into the buffer.
    pub fn input_char(&mut self, c: char) {
        self.buffer.push(c);
    }

    /// Delete from the buffer.
    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Render the prompt centered over the frame.
    pub fn render(&self, f: &mut Frame<'_>) {
        let area = centered_rect(50, 25, f.size());
        let body = Paragraph::new(vec![
            Line::from(format!(
                "Current Balance: {}. Enter NEW balance:",
                self.current_balance
            )),
            Line::from(""),
            Line::from(format!("> {}_", self.buffer)),
            Line::from(""),
            Line::from("Enter: apply   Esc: cancel"),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue))
                .title(format!("Adjust Balance: {}", self.user_name)),
        );
        f.render_widget(Clear, area);
        f.render_widget(body, area);
    }
}
