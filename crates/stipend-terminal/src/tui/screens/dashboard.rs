//! Dashboard screen: read-only aggregates over the four collections.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use stipend_app::{AppState, DashboardStats};

use crate::tui::theme;

/// Render the dashboard into `area`.
pub fn render(f: &mut Frame<'_>, area: Rect, state: &AppState) {
    let stats = DashboardStats::compute(&state.tasks, &state.users, &state.withdrawals);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)].as_ref())
        .split(area);

    render_stat_cards(f, rows[0], &stats);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)].as_ref())
        .split(rows[1]);

    render_activity(f, panels[0], &stats);
    render_config_snapshot(f, panels[1], state);
}

fn render_stat_cards(f: &mut Frame<'_>, area: Rect, stats: &DashboardStats) {
    let cards = [
        ("Total Users", format!("{}", stats.user_count)),
        ("Pending Requests", format!("{}", stats.pending_count)),
        ("Total Paid Out", format!("{:.2}", stats.approved_total)),
        ("Wallet Liability", format!("{:.2}", stats.total_balance)),
    ];
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4].as_ref())
        .split(area);

    for ((label, value), column) in cards.into_iter().zip(columns.iter()) {
        let card = Paragraph::new(Line::from(vec![
            Span::styled(value, theme::title()),
            Span::raw("  "),
            Span::styled(label, theme::hint()),
        ]))
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(card, *column);
    }
}

fn render_activity(f: &mut Frame<'_>, area: Rect, stats: &DashboardStats) {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("Lifetime earned: {:.2}", stats.total_earned),
            theme::money(),
        )),
        Line::from(""),
    ];
    for (label, count) in stats.activity() {
        let bar = "█".repeat(count.min(40));
        lines.push(Line::from(format!("{label:<14} {count:>5}  {bar}")));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled("Platform Activity", theme::title())),
    );
    f.render_widget(panel, area);
}

fn render_config_snapshot(f: &mut Frame<'_>, area: Rect, state: &AppState) {
    let lines = vec![
        Line::from(format!("Ad Reward          {:.2}", state.config.ad_reward())),
        Line::from(format!(
            "Refer Bonus        {:.2}",
            state.config.referral_bonus()
        )),
        Line::from(format!(
            "Min Referral W.D   {}",
            state.config.min_referrals()
        )),
        Line::from(format!(
            "Ref Commission     {}%",
            state.config.commission_percentage()
        )),
    ];
    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled("Config Snapshot", theme::title())),
    );
    f.render_widget(panel, area);
}
