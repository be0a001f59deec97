//! Collections and document paths.

use std::fmt;

/// The four collections the platform owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// The singleton configuration document.
    Config,
    /// Task catalog entries keyed by task identifier.
    Tasks,
    /// User accounts keyed by user identifier.
    Users,
    /// Withdrawal requests keyed by request identifier.
    WithdrawalRequests,
}

impl Collection {
    /// Path segment under which the collection is stored.
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Config => "config",
            Collection::Tasks => "tasks",
            Collection::Users => "users",
            Collection::WithdrawalRequests => "withdrawal_requests",
        }
    }

    /// Resolve a path segment back to a collection.
    pub fn from_segment(segment: &str) -> Option<Collection> {
        match segment {
            "config" => Some(Collection::Config),
            "tasks" => Some(Collection::Tasks),
            "users" => Some(Collection::Users),
            "withdrawal_requests" => Some(Collection::WithdrawalRequests),
            _ => None,
        }
    }

    /// All collections in subscription order.
    pub fn all() -> &'static [Collection] {
        &[
            Collection::Config,
            Collection::Tasks,
            Collection::Users,
            Collection::WithdrawalRequests,
        ]
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Path to a document: a whole collection, or one entity inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePath {
    collection: Collection,
    key: Option<String>,
}

impl StorePath {
    /// Path to a collection's root document.
    pub fn root(collection: Collection) -> Self {
        Self {
            collection,
            key: None,
        }
    }

    /// Path to one entity inside a collection.
    pub fn entity(collection: Collection, key: impl Into<String>) -> Self {
        Self {
            collection,
            key: Some(key.into()),
        }
    }

    /// The collection this path points into.
    pub fn collection(&self) -> Collection {
        self.collection
    }

    /// The entity key, if this is an entity path.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }
}

impl fmt::Display for StorePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.key {
            Some(key) => write!(f, "{}/{}", self.collection.as_str(), key),
            None => f.write_str(self.collection.as_str()),
        }
    }
}
