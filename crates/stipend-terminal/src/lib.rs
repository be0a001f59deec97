//! # Stipend Terminal - Operator Console
//!
//! Terminal front-end for the Stipend rewards platform: five screens over
//! the four live collections, driven by a single event loop that
//! multiplexes keyboard input and store snapshots.
//!
//! ## Module Organization
//!
//! - **tui::router**: screen tags and navigation order
//! - **tui::app**: the console shell and event loop
//! - **tui::components**: toasts, confirmation dialog, alert, prompt
//! - **tui::screens**: one render module per screen
//! - **tui::theme**: color and style constants

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Terminal user interface.
pub mod tui;

pub use tui::app::ConsoleApp;
pub use tui::router::Screen;
