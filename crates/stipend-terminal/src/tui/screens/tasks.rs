//! Task screen: catalog list plus the shared create/edit modal.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use stipend_app::forms::{TaskField, TaskForm};
use stipend_app::AppState;
use stipend_core::TaskId;

use crate::tui::components::centered_rect;
use crate::tui::theme;

/// Screen-local state for the task catalog.
#[derive(Debug, Default)]
pub struct TasksScreen {
    /// Index of the selected row in the sorted list.
    pub selected: usize,
    /// The create/edit modal, when open.
    pub form: Option<TaskForm>,
}

impl TasksScreen {
    /// Identifier of the selected task, if the list is non-empty.
    pub fn selected_id(&self, state: &AppState) -> Option<TaskId> {
        let entries = state.tasks.sorted();
        entries
            .get(self.selected.min(entries.len().saturating_sub(1)))
            .map(|(id, _)| (*id).clone())
    }

    /// Move the selection down, clamped to the list.
    pub fn select_next(&mut self, state: &AppState) {
        let len = state.tasks.count();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    /// Move the selection up.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

/// Render the task list and, when open, the modal.
pub fn render(f: &mut Frame<'_>, area: Rect, state: &AppState, screen: &TasksScreen) {
    let entries = state.tasks.sorted();
    let items: Vec<ListItem> = entries
        .iter()
        .map(|(_, task)| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{} ", task.category.icon())),
                Span::styled(format!("{:<30}", task.title), theme::title()),
                Span::styled(format!("{:>8.2}  ", task.reward), theme::money()),
                Span::styled(task.category.label(), theme::hint()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default().borders(Borders::ALL).title(Span::styled(
                format!("Available Tasks ({})", entries.len()),
                theme::title(),
            )),
        )
        .highlight_style(theme::selected());

    let mut list_state = ListState::default();
    if !entries.is_empty() {
        list_state.select(Some(screen.selected.min(entries.len() - 1)));
    }
    f.render_stateful_widget(list, area, &mut list_state);

    if let Some(form) = &screen.form {
        render_modal(f, form);
    }
}

fn render_modal(f: &mut Frame<'_>, form: &TaskForm) {
    let area = centered_rect(60, 60, f.size());
    let title = if form.is_edit() {
        "Edit Task"
    } else {
        "Create New Task"
    };

    let mut lines = Vec::new();
    for field in TaskField::all() {
        let value = match field {
            TaskField::Title => form.title.clone(),
            TaskField::Description => form.description.clone(),
            TaskField::Url => form.url.clone(),
            TaskField::Reward => form.reward_input.clone(),
            TaskField::Category => format!("{} {}", form.category.icon(), form.category.label()),
        };
        let label = format!("{:<12}", field.label());
        if *field == form.selected {
            lines.push(Line::from(vec![
                Span::styled(label, theme::selected()),
                Span::raw(format!(" {value}_")),
            ]));
        } else {
            lines.push(Line::from(vec![
                Span::styled(label, theme::hint()),
                Span::raw(format!(" {value}")),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        if form.is_submitting() {
            "Saving..."
        } else {
            "Tab: next field   Space: cycle category   Enter: save   Esc: cancel"
        },
        theme::hint(),
    )));

    let body = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(title, theme::title())),
    );
    f.render_widget(Clear, area);
    f.render_widget(body, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use stipend_core::Task;
    use stipend_store::Collection;

    fn state_with_tasks(titles: &[&str]) -> AppState {
        let mut state = AppState::new();
        let tasks: HashMap<String, Task> = titles
            .iter()
            .map(|t| {
                (
                    format!("t-{t}"),
                    Task {
                        title: (*t).to_string(),
                        ..Task::default()
                    },
                )
            })
            .collect();
        state.apply_snapshot(
            Collection::Tasks,
            &serde_json::to_value(&tasks).unwrap(),
        );
        state
    }

    #[test]
    fn selection_clamps_to_the_list() {
        let state = state_with_tasks(&["a", "b"]);
        let mut screen = TasksScreen::default();
        screen.select_next(&state);
        screen.select_next(&state);
        screen.select_next(&state);
        assert_eq!(screen.selected, 1);
        screen.select_prev();
        screen.select_prev();
        assert_eq!(screen.selected, 0);
    }

    #[test]
    fn selected_id_follows_sorted_order() {
        let state = state_with_tasks(&["beta", "alpha"]);
        let mut screen = TasksScreen::default();
        assert_eq!(screen.selected_id(&state).unwrap().as_str(), "t-alpha");
        screen.select_next(&state);
        assert_eq!(screen.selected_id(&state).unwrap().as_str(), "t-beta");
    }

    #[test]
    fn empty_list_has_no_selection() {
        let state = AppState::new();
        let screen = TasksScreen::default();
        assert!(screen.selected_id(&state).is_none());
    }
}
