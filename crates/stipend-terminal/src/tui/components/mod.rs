//! Reusable UI widgets: toasts, confirmation dialog, alert, prompt.

mod confirm;
mod modal;
mod prompt;
mod toast;

pub use confirm::{ConfirmAction, ConfirmDialog};
pub use modal::{centered_rect, render_alert};
pub use prompt::BalancePrompt;
pub use toast::{Toast, ToastLevel, ToastStack};
