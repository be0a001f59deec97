//! Modal layout helpers and the blocking alert.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

/// Helper function to create a centered rect.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Render the blocking alert. Dismissed with Enter or Esc; every failure
/// surfaces here as a flat message string.
pub fn render_alert(f: &mut Frame<'_>, message: &str) {
    let area = centered_rect(50, 25, f.size());
    let style = Style::default().fg(Color::Red);
    let body = Paragraph::new(vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from("Press Enter to dismiss"),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(style)
            .title("Error"),
    );
    f.render_widget(Clear, area);
    f.render_widget(body, area);
}
