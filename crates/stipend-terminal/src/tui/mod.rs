//! # Stipend TUI
//!
//! Built with ratatui/crossterm. The shell owns the application state and
//! all screen-local UI state (selections, search text, open modals); the
//! data itself lives in `stipend-app` and is replaced by store snapshots.

pub mod app;
pub mod components;
pub mod router;
pub mod screens;
pub mod theme;

pub use app::ConsoleApp;
pub use router::Screen;
