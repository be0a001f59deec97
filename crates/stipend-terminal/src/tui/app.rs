//! # Console Shell
//!
//! Owns the application state, the active screen, and every open modal.
//! One loop multiplexes keyboard input and the four collection
//! subscriptions; snapshots replace collections wholesale and mutations
//! are awaited only to toggle an in-flight flag or raise an alert.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use tracing::debug;

use stipend_app::forms::TaskField;
use stipend_app::{workflows, AppState};
use stipend_core::WithdrawalStatus;
use stipend_store::{AdminService, Collection, Snapshot, Subscription};

use super::components::{centered_rect, render_alert, ConfirmAction, ConfirmDialog, Toast, ToastStack};
use super::router::Screen;
use super::screens::{self, ConfigScreen, TasksScreen, UsersScreen, WithdrawalsScreen};
use super::theme;

/// The operator console.
pub struct ConsoleApp {
    service: AdminService,
    /// Shared collection mirrors and readiness gate.
    pub state: AppState,
    /// Active screen tag.
    pub screen: Screen,
    /// Config editor state.
    pub config_screen: ConfigScreen,
    /// Task catalog state.
    pub tasks_screen: TasksScreen,
    /// User directory state.
    pub users_screen: UsersScreen,
    /// Withdrawal queue state.
    pub withdrawals_screen: WithdrawalsScreen,
    /// Active toasts.
    pub toasts: ToastStack,
    /// Pending confirmation, if any.
    pub confirm: Option<ConfirmDialog>,
    /// Blocking alert message, if any.
    pub alert: Option<String>,
    /// Whether the help overlay is visible.
    pub show_help: bool,
    /// Set when the operator quits.
    pub should_quit: bool,
}

impl ConsoleApp {
    /// Create the console over an admin service.
    pub fn new(service: AdminService) -> Self {
        Self {
            service,
            state: AppState::new(),
            screen: Screen::default(),
            config_screen: ConfigScreen::default(),
            tasks_screen: TasksScreen::default(),
            users_screen: UsersScreen::default(),
            withdrawals_screen: WithdrawalsScreen::default(),
            toasts: ToastStack::new(),
            confirm: None,
            alert: None,
            show_help: false,
            should_quit: false,
        }
    }

    /// Run the console until the operator quits.
    pub async fn run(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = self.run_app(&mut terminal).await;

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        res
    }

    async fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let mut subscriptions = vec![
            self.service.watch_config(),
            self.service.watch_tasks(),
            self.service.watch_users(),
            self.service.watch_withdrawals(),
        ];

        loop {
            self.drain_snapshots(&mut subscriptions);
            self.toasts.prune();
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code).await;
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    /// Pull every pending snapshot into the application state.
    fn drain_snapshots(&mut self, subscriptions: &mut [Subscription]) {
        for subscription in subscriptions.iter_mut() {
            while let Some(snapshot) = subscription.try_recv() {
                self.apply_snapshot(subscription.collection(), &snapshot);
            }
        }
    }

    /// Apply one inbound snapshot.
    ///
    /// A config snapshot resyncs the form draft; if that discards an
    /// unsaved edit the operator is told via a toast. Last external write
    /// wins by design.
    pub fn apply_snapshot(&mut self, collection: Collection, snapshot: &Snapshot) {
        self.state.apply_snapshot(collection, snapshot);
        if collection == Collection::Config {
            let discarded = self.config_screen.form.resync(self.state.config.get());
            if discarded {
                self.toasts.push(Toast::warning(
                    "External config update replaced your unsaved edits",
                ));
            }
        }
        debug!(collection = %collection, "snapshot applied");
    }

    // ─── Input ───────────────────────────────────────────────

    /// Handle one key press. Modal layers take precedence over screens.
    pub async fn handle_key(&mut self, code: KeyCode) {
        if self.alert.is_some() {
            if matches!(code, KeyCode::Enter | KeyCode::Esc) {
                self.alert = None;
            }
            return;
        }

        if self.confirm.is_some() {
            match code {
                KeyCode::Enter => {
                    if let Some(dialog) = self.confirm.take() {
                        self.execute_confirm(dialog.action).await;
                    }
                }
                KeyCode::Esc => self.confirm = None,
                _ => {}
            }
            return;
        }

        if self.show_help {
            if matches!(code, KeyCode::Char('h') | KeyCode::Esc | KeyCode::Char('q')) {
                self.show_help = false;
            }
            return;
        }

        if self.tasks_screen.form.is_some() {
            self.handle_task_modal_key(code).await;
            return;
        }

        if self.users_screen.prompt.is_some() {
            self.handle_prompt_key(code).await;
            return;
        }

        if self.config_screen.editing.is_some() {
            self.handle_config_edit_key(code);
            return;
        }

        if self.users_screen.search_focused {
            self.handle_search_key(code);
            return;
        }

        self.handle_screen_key(code).await;
    }

    async fn handle_task_modal_key(&mut self, code: KeyCode) {
        if self
            .tasks_screen
            .form
            .as_ref()
            .map_or(true, |form| form.is_submitting())
        {
            return;
        }
        match code {
            KeyCode::Esc => {
                self.tasks_screen.form = None;
                return;
            }
            KeyCode::Enter => {
                self.submit_task_form().await;
                return;
            }
            _ => {}
        }
        let Some(form) = self.tasks_screen.form.as_mut() else {
            return;
        };
        match code {
            KeyCode::Tab | KeyCode::Down => form.select_next(),
            KeyCode::BackTab | KeyCode::Up => form.select_prev(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Right => form.cycle_category(),
            KeyCode::Char(' ') if form.selected == TaskField::Category => form.cycle_category(),
            KeyCode::Char(c) => form.input_char(c),
            _ => {}
        }
    }

    async fn handle_prompt_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.users_screen.prompt = None,
            KeyCode::Enter => self.submit_balance_prompt().await,
            KeyCode::Backspace => {
                if let Some(prompt) = self.users_screen.prompt.as_mut() {
                    prompt.backspace();
                }
            }
            KeyCode::Char(c) => {
                if let Some(prompt) = self.users_screen.prompt.as_mut() {
                    prompt.input_char(c);
                }
            }
            _ => {}
        }
    }

    fn handle_config_edit_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.config_screen.cancel_editing(),
            KeyCode::Enter => self.config_screen.commit_editing(),
            KeyCode::Backspace => {
                if let Some(buffer) = self.config_screen.editing.as_mut() {
                    buffer.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(buffer) = self.config_screen.editing.as_mut() {
                    buffer.push(c);
                }
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Enter => self.users_screen.search_focused = false,
            KeyCode::Backspace => {
                self.users_screen.search.pop();
                self.users_screen.selected = 0;
            }
            KeyCode::Down => self.users_screen.select_next(&self.state),
            KeyCode::Up => self.users_screen.select_prev(),
            KeyCode::Char(c) => {
                self.users_screen.search.push(c);
                self.users_screen.selected = 0;
            }
            _ => {}
        }
    }

    async fn handle_screen_key(&mut self, code: KeyCode) {
        // Global navigation first.
        match code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('h') => {
                self.show_help = true;
                return;
            }
            KeyCode::Tab => {
                self.screen = self.screen.next();
                return;
            }
            KeyCode::BackTab => {
                self.screen = self.screen.prev();
                return;
            }
            KeyCode::Char(c @ '1'..='5') => {
                if let Some(screen) = c.to_digit(10).and_then(|d| Screen::from_key(d as u8)) {
                    self.screen = screen;
                }
                return;
            }
            _ => {}
        }

        match self.screen {
            Screen::Dashboard => {}
            Screen::Config => match code {
                KeyCode::Down => self.config_screen.select_next(),
                KeyCode::Up => self.config_screen.select_prev(),
                KeyCode::Enter => {
                    if self.config_screen.form.is_loaded() {
                        self.config_screen.start_editing();
                    }
                }
                KeyCode::Char('s') => self.save_config().await,
                _ => {}
            },
            Screen::Tasks => match code {
                KeyCode::Down => self.tasks_screen.select_next(&self.state),
                KeyCode::Up => self.tasks_screen.select_prev(),
                KeyCode::Char('n') => {
                    self.tasks_screen.form = Some(stipend_app::forms::TaskForm::create());
                }
                KeyCode::Char('e') | KeyCode::Enter => {
                    if let Some(id) = self.tasks_screen.selected_id(&self.state) {
                        if let Some(task) = self.state.tasks.task(&id) {
                            self.tasks_screen.form =
                                Some(stipend_app::forms::TaskForm::edit(id.clone(), task));
                        }
                    }
                }
                KeyCode::Char('d') => {
                    if let Some(id) = self.tasks_screen.selected_id(&self.state) {
                        self.confirm = Some(ConfirmDialog::delete_task(id));
                    }
                }
                _ => {}
            },
            Screen::Users => match code {
                KeyCode::Char('/') => self.users_screen.search_focused = true,
                KeyCode::Down => self.users_screen.select_next(&self.state),
                KeyCode::Up => self.users_screen.select_prev(),
                KeyCode::Char('b') | KeyCode::Enter => {
                    self.users_screen.open_prompt(&self.state);
                }
                _ => {}
            },
            Screen::Withdrawals => match code {
                KeyCode::Char('f') => self.withdrawals_screen.cycle_filter(),
                KeyCode::Down => self.withdrawals_screen.select_next(&self.state),
                KeyCode::Up => self.withdrawals_screen.select_prev(),
                KeyCode::Char('a') => self.confirm_withdrawal_status(WithdrawalStatus::Approved),
                KeyCode::Char('r') => self.confirm_withdrawal_status(WithdrawalStatus::Rejected),
                KeyCode::Char('d') => {
                    if let Some(id) = self.withdrawals_screen.selected_id(&self.state) {
                        self.confirm = Some(ConfirmDialog::delete_withdrawal(id));
                    }
                }
                _ => {}
            },
        }
    }

    /// Queue an approve/reject confirmation for the selected request.
    /// Requests already moved off `pending` are terminal; the keys do
    /// nothing for them.
    fn confirm_withdrawal_status(&mut self, status: WithdrawalStatus) {
        let Some(id) = self.withdrawals_screen.selected_id(&self.state) else {
            return;
        };
        let Some(request) = self.state.withdrawals.request(&id) else {
            return;
        };
        if !request.status.is_pending() {
            return;
        }
        self.confirm = Some(ConfirmDialog::set_withdrawal_status(id, status));
    }

    // ─── Mutations ───────────────────────────────────────────

    async fn execute_confirm(&mut self, action: ConfirmAction) {
        let result = match &action {
            ConfirmAction::DeleteTask(id) => workflows::delete_task(&self.service, id)
                .await
                .map(|()| "Task deleted".to_string()),
            ConfirmAction::SetWithdrawalStatus(id, status) => {
                workflows::set_withdrawal_status(&self.service, id, *status)
                    .await
                    .map(|()| format!("Request marked {}", status.as_str()))
            }
            ConfirmAction::DeleteWithdrawal(id) => {
                workflows::delete_withdrawal(&self.service, id)
                    .await
                    .map(|()| "Request deleted".to_string())
            }
        };
        match result {
            Ok(message) => self.toasts.push(Toast::success(message)),
            Err(err) => self.alert = Some(err.to_string()),
        }
    }

    async fn submit_task_form(&mut self) {
        let Some(form) = self.tasks_screen.form.as_mut() else {
            return;
        };
        form.begin_submit();
        let snapshot = form.clone();
        match workflows::submit_task(&self.service, &snapshot).await {
            Ok(_) => {
                self.tasks_screen.form = None;
                self.toasts.push(Toast::success("Task saved"));
            }
            Err(err) => {
                if let Some(form) = self.tasks_screen.form.as_mut() {
                    form.finish_submit();
                }
                self.alert = Some(err.to_string());
            }
        }
    }

    async fn submit_balance_prompt(&mut self) {
        let Some(prompt) = self.users_screen.prompt.take() else {
            return;
        };
        match workflows::adjust_balance(&self.service, &prompt.user_id, &prompt.buffer).await {
            Ok(amount) => self.toasts.push(Toast::success(format!(
                "Balance for {} set to {amount}",
                prompt.user_name
            ))),
            // Unparsable input lands here too: no write was attempted.
            Err(err) => self.alert = Some(err.to_string()),
        }
    }

    async fn save_config(&mut self) {
        if !self.config_screen.form.is_loaded() || self.config_screen.form.is_submitting() {
            return;
        }
        self.config_screen.form.begin_submit();
        let config = self.config_screen.form.config().clone();
        match workflows::save_config(&self.service, &config).await {
            Ok(()) => {
                self.config_screen.form.finish_submit();
                self.toasts
                    .push(Toast::success("Configurations updated successfully!"));
            }
            Err(err) => {
                let message = err.to_string();
                self.config_screen.form.fail_submit(message.clone());
                self.alert = Some(format!("Error updating config: {message}"));
            }
        }
    }

    // ─── Rendering ───────────────────────────────────────────

    fn render(&self, f: &mut Frame<'_>) {
        if !self.state.is_ready() {
            self.render_loading(f);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                [
                    Constraint::Length(3),
                    Constraint::Min(1),
                    Constraint::Length(3),
                ]
                .as_ref(),
            )
            .split(f.size());

        self.render_nav(f, chunks[0]);
        self.render_body(f, chunks[1]);
        self.render_footer(f, chunks[2]);

        self.toasts.render(f, f.size());
        if let Some(dialog) = &self.confirm {
            dialog.render(f);
        }
        if self.show_help {
            self.render_help(f);
        }
        if let Some(message) = &self.alert {
            render_alert(f, message);
        }
    }

    fn render_loading(&self, f: &mut Frame<'_>) {
        let area = centered_rect(50, 30, f.size());
        let body = Paragraph::new(vec![
            Line::from("Connecting to the platform store..."),
            Line::from(""),
            Line::from(Span::styled(
                "Waiting for the first snapshot of each collection",
                theme::hint(),
            )),
        ])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Stipend Admin"),
        );
        f.render_widget(body, area);
    }

    fn render_nav(&self, f: &mut Frame<'_>, area: Rect) {
        let mut spans = Vec::new();
        for screen in Screen::all() {
            let label = format!(" {} {} ", screen.key_number(), screen.name());
            if *screen == self.screen {
                spans.push(Span::styled(label, theme::selected()));
            } else {
                spans.push(Span::raw(label));
            }
            spans.push(Span::raw(" "));
        }
        let nav = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled("Stipend Admin", theme::title())),
        );
        f.render_widget(nav, area);
    }

    fn render_body(&self, f: &mut Frame<'_>, area: Rect) {
        match self.screen {
            Screen::Dashboard => screens::dashboard::render(f, area, &self.state),
            Screen::Config => screens::config::render(f, area, &self.config_screen),
            Screen::Tasks => screens::tasks::render(f, area, &self.state, &self.tasks_screen),
            Screen::Users => screens::users::render(f, area, &self.state, &self.users_screen),
            Screen::Withdrawals => {
                screens::withdrawals::render(f, area, &self.state, &self.withdrawals_screen);
            }
        }
    }

    fn render_footer(&self, f: &mut Frame<'_>, area: Rect) {
        let hints = match self.screen {
            Screen::Dashboard => "1-5: screens | Tab: next | h: help | q: quit",
            Screen::Config => "Up/Down: field | Enter: edit | s: save | h: help | q: quit",
            Screen::Tasks => "n: new | e: edit | d: delete | Up/Down: select | q: quit",
            Screen::Users => "/: search | b: adjust balance | Up/Down: select | q: quit",
            Screen::Withdrawals => "f: filter | a: approve | r: reject | d: delete | q: quit",
        };
        let footer = Paragraph::new(hints)
            .style(theme::hint())
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(footer, area);
    }

    fn render_help(&self, f: &mut Frame<'_>) {
        let area = centered_rect(60, 70, f.size());
        let help_text = vec![
            Line::from("Stipend Admin Controls"),
            Line::from(""),
            Line::from("Navigation:"),
            Line::from("  1-5       Jump to screen"),
            Line::from("  Tab       Next screen"),
            Line::from("  Shift-Tab Previous screen"),
            Line::from(""),
            Line::from("Config:"),
            Line::from("  Up/Down   Move between fields"),
            Line::from("  Enter     Edit field / commit edit"),
            Line::from("  s         Save all settings"),
            Line::from(""),
            Line::from("Tasks:"),
            Line::from("  n         New task"),
            Line::from("  e/Enter   Edit selected task"),
            Line::from("  d         Delete selected task"),
            Line::from(""),
            Line::from("Users:"),
            Line::from("  /         Focus search"),
            Line::from("  b/Enter   Adjust balance"),
            Line::from(""),
            Line::from("Withdrawals:"),
            Line::from("  f         Cycle status filter"),
            Line::from("  a / r     Approve / reject selected"),
            Line::from("  d         Delete selected"),
            Line::from(""),
            Line::from("Press 'h' to close help"),
        ];

        f.render_widget(Clear, area);
        let help = Paragraph::new(help_text)
            .block(Block::default().borders(Borders::ALL).title("Help"))
            .wrap(Wrap { trim: true });
        f.render_widget(help, area);
    }
}
