//! # User Directory View State

use std::collections::HashMap;

use stipend_core::{User, UserId};

/// The user directory, keyed by user identifier.
///
/// Read-mostly: the only operator mutation (balance overwrite) goes through
/// the store and comes back as a snapshot.
#[derive(Debug, Clone, Default)]
pub struct UsersState {
    users: HashMap<UserId, User>,
}

impl UsersState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole directory with the latest snapshot.
    pub fn replace_all(&mut self, users: HashMap<UserId, User>) {
        self.users = users;
    }

    /// Get a user by identifier.
    pub fn user(&self, id: &UserId) -> Option<&User> {
        self.users.get(id)
    }

    /// Number of users.
    pub fn count(&self) -> usize {
        self.users.len()
    }

    /// Sum of current balances across the directory.
    pub fn total_balance(&self) -> f64 {
        self.users.values().map(|u| u.balance).sum()
    }

    /// Sum of lifetime earned totals across the directory.
    pub fn total_earned(&self) -> f64 {
        self.users.values().map(|u| u.total_earned).sum()
    }

    /// Filter users by a search term.
    ///
    /// Case-insensitive substring match against display name or identifier;
    /// an empty term returns everyone. Results are in a stable display
    /// order (name, then identifier).
    pub fn filter_by(&self, search: &str) -> Vec<(&UserId, &User)> {
        let needle = search.to_lowercase();
        let mut entries: Vec<_> = self
            .users
            .iter()
            .filter(|(id, user)| {
                needle.is_empty()
                    || user.name_matches(&needle)
                    || id.as_str().to_lowercase().contains(&needle)
            })
            .collect();
        entries.sort_by(|(a_id, a), (b_id, b)| {
            a.full_name
                .to_lowercase()
                .cmp(&b.full_name.to_lowercase())
                .then_with(|| a_id.cmp(b_id))
        });
        entries
    }
}
