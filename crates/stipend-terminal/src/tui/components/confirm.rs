//! Confirmation dialog for destructive or status-changing actions.

use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use stipend_core::{TaskId, WithdrawalId, WithdrawalStatus};

use super::modal::centered_rect;

/// Action to perform when the operator confirms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Delete a catalog task.
    DeleteTask(TaskId),
    /// Set a withdrawal request's status.
    SetWithdrawalStatus(WithdrawalId, WithdrawalStatus),
    /// Delete a withdrawal request entry.
    DeleteWithdrawal(WithdrawalId),
}

/// A pending confirmation. Enter confirms, Esc declines; declining issues
/// no write.
#[derive(Clone, Debug)]
pub struct ConfirmDialog {
    /// Dialog title.
    pub title: String,
    /// Dialog body, naming exactly what will happen.
    pub message: String,
    /// The action taken on confirm.
    pub action: ConfirmAction,
}

impl ConfirmDialog {
    /// Confirm deleting a task.
    pub fn delete_task(id: TaskId) -> Self {
        Self {
            title: "Delete Task".to_string(),
            message: "Are you sure you want to delete this task?".to_string(),
            action: ConfirmAction::DeleteTask(id),
        }
    }

    /// Confirm moving a withdrawal to `status`, naming the target status.
    pub fn set_withdrawal_status(id: WithdrawalId, status: WithdrawalStatus) -> Self {
        Self {
            title: "Update Request".to_string(),
            message: format!("Are you sure you want to mark this as {}?", status.as_str()),
            action: ConfirmAction::SetWithdrawalStatus(id, status),
        }
    }

    /// Confirm deleting a withdrawal entry. The copy states that balance
    /// is not refunded; that is platform policy.
    pub fn delete_withdrawal(id: WithdrawalId) -> Self {
        Self {
            title: "Delete Request".to_string(),
            message: "Delete this request entry? (Balance will not be refunded automatically)"
                .to_string(),
            action: ConfirmAction::DeleteWithdrawal(id),
        }
    }

    /// Render the dialog centered over the frame.
    pub fn render(&self, f: &mut Frame<'_>) {
        let area = centered_rect(50, 25, f.size());
        let body = Paragraph::new(vec![
            Line::from(self.message.clone()),
            Line::from(""),
            Line::from("Enter: confirm   Esc: cancel"),
        ])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(self.title.clone()),
        );
        f.render_widget(Clear, area);
        f.render_widget(body, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_confirmation_names_the_target_status() {
        let dialog = ConfirmDialog::set_withdrawal_status(
            WithdrawalId::new("w-1"),
            WithdrawalStatus::Approved,
        );
        assert!(dialog.message.contains("approved"));

        let dialog = ConfirmDialog::set_withdrawal_status(
            WithdrawalId::new("w-1"),
            WithdrawalStatus::Rejected,
        );
        assert!(dialog.message.contains("rejected"));
    }

    #[test]
    fn delete_copy_mentions_no_refund() {
        let dialog = ConfirmDialog::delete_withdrawal(WithdrawalId::new("w-1"));
        assert!(dialog.message.contains("not be refunded"));
    }
}
