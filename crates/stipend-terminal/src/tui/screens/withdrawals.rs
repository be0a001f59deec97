//! Withdrawal screen: filterable triage table.
//!
//! Sorted most recent first, recomputed from the live snapshot on every
//! render. The status filter defaults to `pending`.

use ratatui::layout::{Constraint, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};
use ratatui::Frame;

use stipend_app::{AppState, StatusFilter};
use stipend_core::WithdrawalId;

use crate::tui::theme;

/// Screen-local state for the withdrawal queue.
#[derive(Debug, Default)]
pub struct WithdrawalsScreen {
    /// Active status filter.
    pub filter: StatusFilter,
    /// Index of the selected row in the filtered list.
    pub selected: usize,
}

impl WithdrawalsScreen {
    /// Identifier of the selected request in the current filtered view.
    pub fn selected_id(&self, state: &AppState) -> Option<WithdrawalId> {
        let entries = state.withdrawals.filtered(self.filter);
        entries
            .get(self.selected.min(entries.len().saturating_sub(1)))
            .map(|(id, _)| (*id).clone())
    }

    /// Cycle to the next status filter and reset the selection.
    pub fn cycle_filter(&mut self) {
        self.filter = self.filter.next();
        self.selected = 0;
    }

    /// Move the selection down, clamped to the filtered list.
    pub fn select_next(&mut self, state: &AppState) {
        let len = state.withdrawals.filtered(self.filter).len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    /// Move the selection up.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

/// Render the filter tabs and request table.
pub fn render(f: &mut Frame<'_>, area: Rect, state: &AppState, screen: &WithdrawalsScreen) {
    let entries = state.withdrawals.filtered(screen.filter);

    let mut tabs: Vec<Span> = Vec::new();
    for filter in StatusFilter::all() {
        if *filter == screen.filter {
            tabs.push(Span::styled(format!(" {} ", filter.label()), theme::selected()));
        } else {
            tabs.push(Span::styled(format!(" {} ", filter.label()), theme::hint()));
        }
    }

    let rows: Vec<Row> = entries
        .iter()
        .map(|(id, request)| {
            Row::new(vec![
                Cell::from(request.user_name.clone()),
                Cell::from(id.as_str().to_string()),
                Cell::from(request.method.clone()),
                Cell::from(request.account.clone()),
                Cell::from(format!("{:.2}", request.amount)),
                Cell::from(Span::styled(
                    request.status.as_str(),
                    theme::status(request.status),
                )),
                Cell::from(request.timestamp.format("%Y-%m-%d").to_string()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(16),
            Constraint::Length(14),
            Constraint::Length(10),
            Constraint::Length(16),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(12),
        ],
    )
    .header(
        Row::new(vec![
            "User", "ID", "Method", "Account", "Amount", "Status", "Date",
        ])
        .style(theme::hint()),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(Line::from(tabs)),
    )
    .highlight_style(theme::selected());

    let mut table_state = TableState::default();
    if !entries.is_empty() {
        table_state.select(Some(screen.selected.min(entries.len() - 1)));
    }
    f.render_stateful_widget(table, area, &mut table_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use stipend_store::Collection;

    fn queue() -> AppState {
        let mut state = AppState::new();
        state.apply_snapshot(
            Collection::WithdrawalRequests,
            &json!({
                "w-1": {"userId": "u-1", "userName": "Rahim", "amount": 50.0,
                         "status": "pending", "timestamp": "2025-12-01T08:00:00Z"},
                "w-2": {"userId": "u-2", "userName": "Fatima", "amount": 75.0,
                         "status": "approved", "timestamp": "2025-12-01T12:00:00Z"},
            }),
        );
        state
    }

    #[test]
    fn default_filter_shows_only_pending() {
        let state = queue();
        let screen = WithdrawalsScreen::default();
        assert_eq!(screen.filter, StatusFilter::Pending);
        assert_eq!(screen.selected_id(&state).unwrap().as_str(), "w-1");
    }

    #[test]
    fn cycling_to_all_shows_newest_first() {
        let state = queue();
        let mut screen = WithdrawalsScreen::default();
        screen.filter = StatusFilter::All;
        assert_eq!(screen.selected_id(&state).unwrap().as_str(), "w-2");
        screen.select_next(&state);
        assert_eq!(screen.selected_id(&state).unwrap().as_str(), "w-1");
    }

    #[test]
    fn cycling_filters_resets_the_selection() {
        let state = queue();
        let mut screen = WithdrawalsScreen::default();
        screen.filter = StatusFilter::All;
        screen.select_next(&state);
        assert_eq!(screen.selected, 1);
        screen.cycle_filter();
        assert_eq!(screen.selected, 0);
    }

    #[test]
    fn empty_filter_view_has_no_selection() {
        let state = queue();
        let mut screen = WithdrawalsScreen::default();
        screen.filter = StatusFilter::Rejected;
        assert!(screen.selected_id(&state).is_none());
    }
}
