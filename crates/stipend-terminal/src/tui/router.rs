//! # Screen Router
//!
//! Screen tags and tab order for the console.

/// Screen identifiers for navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Aggregate metrics (home).
    #[default]
    Dashboard,
    /// Global configuration editor.
    Config,
    /// Task catalog management.
    Tasks,
    /// User directory.
    Users,
    /// Withdrawal request triage.
    Withdrawals,
}

impl Screen {
    /// Get the numeric key (1-5) for this screen.
    pub fn key_number(&self) -> u8 {
        match self {
            Screen::Dashboard => 1,
            Screen::Config => 2,
            Screen::Tasks => 3,
            Screen::Users => 4,
            Screen::Withdrawals => 5,
        }
    }

    /// Get screen from numeric key (1-5). Unrecognized keys resolve to
    /// nothing; the shell keeps the dashboard as its default.
    pub fn from_key(key: u8) -> Option<Self> {
        match key {
            1 => Some(Screen::Dashboard),
            2 => Some(Screen::Config),
            3 => Some(Screen::Tasks),
            4 => Some(Screen::Users),
            5 => Some(Screen::Withdrawals),
            _ => None,
        }
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Config => "Config",
            Screen::Tasks => "Tasks",
            Screen::Users => "Users",
            Screen::Withdrawals => "Withdrawals",
        }
    }

    /// All screens in tab order.
    pub fn all() -> &'static [Screen] {
        &[
            Screen::Dashboard,
            Screen::Config,
            Screen::Tasks,
            Screen::Users,
            Screen::Withdrawals,
        ]
    }

    /// Next screen in tab order.
    pub fn next(&self) -> Screen {
        match self {
            Screen::Dashboard => Screen::Config,
            Screen::Config => Screen::Tasks,
            Screen::Tasks => Screen::Users,
            Screen::Users => Screen::Withdrawals,
            Screen::Withdrawals => Screen::Dashboard,
        }
    }

    /// Previous screen in tab order.
    pub fn prev(&self) -> Screen {
        match self {
            Screen::Dashboard => Screen::Withdrawals,
            Screen::Config => Screen::Dashboard,
            Screen::Tasks => Screen::Config,
            Screen::Users => Screen::Tasks,
            Screen::Withdrawals => Screen::Users,
        }
    }
}
