//! # Operator Workflows
//!
//! Each workflow is a single fire-and-forget store write. Callers await
//! only to toggle an in-flight flag or surface the failure message; there
//! is no retry, no rollback, and no cancellation once issued.

use tracing::info;

use stipend_core::{SiteConfig, TaskId, UserId, WithdrawalId, WithdrawalStatus};
use stipend_store::AdminService;

use crate::error::AppError;
use crate::forms::TaskForm;

/// Outcome of submitting the task form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskSubmit {
    /// A new task was appended under the returned key.
    Created(TaskId),
    /// An existing task was updated in place.
    Updated(TaskId),
}

/// Merge the whole edited config into the singleton document.
pub async fn save_config(service: &AdminService, config: &SiteConfig) -> Result<(), AppError> {
    service.update_config(config).await?;
    info!("config saved");
    Ok(())
}

/// Submit the task form: keyed merge when editing, append when creating.
pub async fn submit_task(service: &AdminService, form: &TaskForm) -> Result<TaskSubmit, AppError> {
    let task = form.task();
    match form.id() {
        Some(id) => {
            service.update_task(id, &task).await?;
            info!(task = %id, "task updated");
            Ok(TaskSubmit::Updated(id.clone()))
        }
        None => {
            let id = service.add_task(&task).await?;
            info!(task = %id, "task created");
            Ok(TaskSubmit::Created(id))
        }
    }
}

/// Delete a task outright. The shell confirms before calling.
pub async fn delete_task(service: &AdminService, id: &TaskId) -> Result<(), AppError> {
    service.delete_task(id).await?;
    info!(task = %id, "task deleted");
    Ok(())
}

/// Parse an operator-entered replacement balance.
///
/// Rejected input produces no write anywhere: the error surfaces as a
/// blocking alert and the prompt stays open.
pub fn parse_balance_input(input: &str) -> Result<f64, AppError> {
    let amount: f64 = input
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidAmount(input.to_string()))?;
    if !amount.is_finite() {
        return Err(AppError::InvalidAmount(input.to_string()));
    }
    Ok(amount)
}

/// Overwrite a user's balance with operator input.
///
/// Touches `balance` only; lifetime totals and referral counters are left
/// to the platform's earning flows.
pub async fn adjust_balance(
    service: &AdminService,
    id: &UserId,
    input: &str,
) -> Result<f64, AppError> {
    let amount = parse_balance_input(input)?;
    service.update_user_balance(id, amount).await?;
    info!(user = %id, amount, "balance overwritten");
    Ok(amount)
}

/// Move a withdrawal request to `status`. The shell confirms first, naming
/// the target status; declining never reaches this function.
pub async fn set_withdrawal_status(
    service: &AdminService,
    id: &WithdrawalId,
    status: WithdrawalStatus,
) -> Result<(), AppError> {
    service.update_withdrawal_status(id, status).await?;
    info!(request = %id, status = status.as_str(), "withdrawal status set");
    Ok(())
}

/// Delete a withdrawal request entry. Balance is not refunded; payout
/// reconciliation is the operator's responsibility.
pub async fn delete_withdrawal(service: &AdminService, id: &WithdrawalId) -> Result<(), AppError> {
    service.delete_withdrawal(id).await?;
    info!(request = %id, "withdrawal deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_parse_accepts_plain_numbers() {
        assert_eq!(parse_balance_input("150").unwrap(), 150.0);
        assert_eq!(parse_balance_input(" 12.5 ").unwrap(), 12.5);
        assert_eq!(parse_balance_input("0").unwrap(), 0.0);
    }

    #[test]
    fn balance_parse_rejects_garbage() {
        assert!(matches!(
            parse_balance_input("abc"),
            Err(AppError::InvalidAmount(_))
        ));
        assert!(matches!(
            parse_balance_input(""),
            Err(AppError::InvalidAmount(_))
        ));
        assert!(matches!(
            parse_balance_input("NaN"),
            Err(AppError::InvalidAmount(_))
        ));
        assert!(matches!(
            parse_balance_input("inf"),
            Err(AppError::InvalidAmount(_))
        ));
    }
}
