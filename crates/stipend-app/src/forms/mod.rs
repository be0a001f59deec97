//! # Form Drafts
//!
//! Draft lifecycle for the two editable screens. A draft tracks whether
//! the operator has touched it, whether a save is in flight, and the last
//! failure message. There is no field validation: the platform coerces
//! types and nothing more.

mod config_form;
mod draft;
mod task_form;

pub use config_form::{ConfigField, ConfigForm};
pub use draft::{Draft, DraftPhase};
pub use task_form::{TaskField, TaskForm};
