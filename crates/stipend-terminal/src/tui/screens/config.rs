//! Config screen: the global settings form.
//!
//! The form is a local editable copy of the singleton document. Arrow keys
//! move between fields, Enter opens a field for editing, Enter again
//! commits the buffer into the draft, and `s` submits the whole draft as a
//! partial merge. An external config update resyncs the form and discards
//! any unsaved edit.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use stipend_app::forms::{ConfigField, ConfigForm};

use crate::tui::theme;

/// Screen-local state for the config editor.
#[derive(Debug, Default)]
pub struct ConfigScreen {
    /// The editable draft.
    pub form: ConfigForm,
    /// Index of the selected field.
    pub selected: usize,
    /// Edit buffer while a field is open, `None` otherwise.
    pub editing: Option<String>,
}

impl ConfigScreen {
    /// The field the cursor is on.
    pub fn selected_field(&self) -> ConfigField {
        ConfigField::all()[self.selected.min(ConfigField::all().len() - 1)]
    }

    /// Move the cursor down one field.
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % ConfigField::all().len();
    }

    /// Move the cursor up one field.
    pub fn select_prev(&mut self) {
        let len = ConfigField::all().len();
        self.selected = (self.selected + len - 1) % len;
    }

    /// Open the selected field for editing, pre-filled with its value.
    pub fn start_editing(&mut self) {
        self.editing = Some(self.form.value_of(self.selected_field()));
    }

    /// Commit the edit buffer into the draft.
    pub fn commit_editing(&mut self) {
        if let Some(buffer) = self.editing.take() {
            self.form.set_field(self.selected_field(), &buffer);
        }
    }

    /// Abandon the edit buffer, leaving the draft untouched.
    pub fn cancel_editing(&mut self) {
        self.editing = None;
    }
}

/// Render the config form into `area`.
pub fn render(f: &mut Frame<'_>, area: Rect, screen: &ConfigScreen) {
    if !screen.form.is_loaded() {
        let placeholder = Paragraph::new("Waiting for the config document...")
            .style(theme::hint())
            .block(Block::default().borders(Borders::ALL).title("Config"));
        f.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = ConfigField::all()
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let value = if i == screen.selected {
                match &screen.editing {
                    Some(buffer) => format!("{buffer}_"),
                    None => screen.form.value_of(*field),
                }
            } else {
                screen.form.value_of(*field)
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<30}", field.label())),
                Span::styled(value, theme::money()),
            ]))
        })
        .collect();

    let title = if screen.form.is_submitting() {
        "Config (saving...)"
    } else if screen.form.is_dirty() {
        "Config (unsaved changes)"
    } else {
        "Config"
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title, theme::title())),
        )
        .highlight_style(theme::selected());

    let mut list_state = ListState::default();
    list_state.select(Some(screen.selected));
    f.render_stateful_widget(list, area, &mut list_state);
}
