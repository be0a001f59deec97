//! Full-screen views, one module per screen.
//!
//! Each module owns its screen-local UI state (selection, search text,
//! open modal) and a render function over the shared [`AppState`]
//! (`stipend_app::AppState`). Nothing here mutates the platform; operator
//! actions are handled by the shell.

pub mod config;
pub mod dashboard;
pub mod tasks;
pub mod users;
pub mod withdrawals;

pub use config::ConfigScreen;
pub use tasks::TasksScreen;
pub use users::UsersScreen;
pub use withdrawals::WithdrawalsScreen;
