//! User screen: searchable directory with the balance-adjust prompt.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use stipend_app::AppState;
use stipend_core::{User, UserId};

use crate::tui::components::BalancePrompt;
use crate::tui::theme;

/// Screen-local state for the user directory.
#[derive(Debug, Default)]
pub struct UsersScreen {
    /// Live search text; the table always reflects it on the next render.
    pub search: String,
    /// Whether keystrokes go to the search box.
    pub search_focused: bool,
    /// Index of the selected row in the filtered list.
    pub selected: usize,
    /// The balance prompt, when open.
    pub prompt: Option<BalancePrompt>,
}

impl UsersScreen {
    /// The selected user in the current filtered view.
    pub fn selected_user<'a>(&self, state: &'a AppState) -> Option<(&'a UserId, &'a User)> {
        let entries = state.users.filter_by(&self.search);
        entries
            .get(self.selected.min(entries.len().saturating_sub(1)))
            .copied()
    }

    /// Move the selection down, clamped to the filtered list.
    pub fn select_next(&mut self, state: &AppState) {
        let len = state.users.filter_by(&self.search).len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    /// Move the selection up.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Open the balance prompt for the selected user.
    pub fn open_prompt(&mut self, state: &AppState) {
        if let Some((id, user)) = self.selected_user(state) {
            self.prompt = Some(BalancePrompt::new(
                id.clone(),
                user.full_name.clone(),
                user.balance,
            ));
        }
    }
}

/// Render the search bar and directory table.
pub fn render(f: &mut Frame<'_>, area: Rect, state: &AppState, screen: &UsersScreen) {
    let rows_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)].as_ref())
        .split(area);

    let search_title = if screen.search_focused {
        "Search (typing)"
    } else {
        "Search (/ to focus)"
    };
    let search = Paragraph::new(format!(
        "{}{}",
        screen.search,
        if screen.search_focused { "_" } else { "" }
    ))
    .block(Block::default().borders(Borders::ALL).title(search_title));
    f.render_widget(search, rows_layout[0]);

    let entries = state.users.filter_by(&screen.search);
    let rows: Vec<Row> = entries
        .iter()
        .map(|(id, user)| {
            Row::new(vec![
                Cell::from(format!("{} {}", user.initial(), user.full_name)),
                Cell::from(id.as_str().to_string()),
                Cell::from(format!("{:.2}", user.balance)),
                Cell::from(format!("{:.2}", user.total_earned)),
                Cell::from(format!("{}", user.total_referrals)),
                Cell::from(format!(
                    "{} / {}",
                    user.ads_watched_monetag, user.ads_watched_adexora
                )),
                Cell::from(
                    user.created_at
                        .map(|t| t.format("%Y-%m-%d").to_string())
                        .unwrap_or_else(|| "N/A".to_string()),
                ),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(20),
            Constraint::Length(14),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(7),
            Constraint::Length(10),
            Constraint::Length(12),
        ],
    )
    .header(
        Row::new(vec![
            "User", "ID", "Balance", "Earned", "Refers", "Ads (M/A)", "Joined",
        ])
        .style(theme::hint()),
    )
    .block(
        Block::default().borders(Borders::ALL).title(Span::styled(
            format!("User Directory ({})", entries.len()),
            theme::title(),
        )),
    )
    .highlight_style(theme::selected());

    let mut table_state = TableState::default();
    if !entries.is_empty() {
        table_state.select(Some(screen.selected.min(entries.len() - 1)));
    }
    f.render_stateful_widget(table, rows_layout[1], &mut table_state);

    if let Some(prompt) = &screen.prompt {
        prompt.render(f);
    }
}
