//! # Task Catalog Types

use serde::{Deserialize, Serialize};

/// Category of a catalog task.
///
/// Fixed enumeration; the wire values are the platform's existing lowercase
/// strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    /// Subscribe to a video channel.
    YouTube,
    /// Join a messaging channel.
    #[default]
    Telegram,
    /// Follow a social page.
    Facebook,
    /// Anything else.
    Other,
}

impl TaskCategory {
    /// All categories in form order.
    pub fn all() -> &'static [TaskCategory] {
        &[
            TaskCategory::Telegram,
            TaskCategory::YouTube,
            TaskCategory::Facebook,
            TaskCategory::Other,
        ]
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            TaskCategory::YouTube => "YouTube",
            TaskCategory::Telegram => "Telegram",
            TaskCategory::Facebook => "Facebook",
            TaskCategory::Other => "Other",
        }
    }

    /// Glyph shown next to a task in list views.
    pub fn icon(&self) -> &'static str {
        match self {
            TaskCategory::YouTube => "▶",
            TaskCategory::Telegram => "✈",
            TaskCategory::Facebook => "◉",
            TaskCategory::Other => "★",
        }
    }

    /// Next category in form order, wrapping.
    pub fn next(&self) -> TaskCategory {
        match self {
            TaskCategory::Telegram => TaskCategory::YouTube,
            TaskCategory::YouTube => TaskCategory::Facebook,
            TaskCategory::Facebook => TaskCategory::Other,
            TaskCategory::Other => TaskCategory::Telegram,
        }
    }
}

/// A task users complete for a reward.
///
/// The identifier is the store key, not a document field. Tasks are created
/// and fully replaced by operator action; there is no soft-delete or
/// versioning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Short title shown in the task list.
    #[serde(default)]
    pub title: String,
    /// Longer description of what the user must do.
    #[serde(default)]
    pub description: String,
    /// Target URL the user visits to complete the task.
    #[serde(default)]
    pub url: String,
    /// Reward credited on completion.
    #[serde(default)]
    pub reward: f64,
    /// Task category.
    #[serde(default)]
    pub category: TaskCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_wire_values_are_lowercase() {
        assert_eq!(
            serde_json::to_string(&TaskCategory::YouTube).unwrap(),
            "\"youtube\""
        );
        assert_eq!(
            serde_json::to_string(&TaskCategory::Telegram).unwrap(),
            "\"telegram\""
        );
        let parsed: TaskCategory = serde_json::from_str("\"facebook\"").unwrap();
        assert_eq!(parsed, TaskCategory::Facebook);
    }

    #[test]
    fn default_category_is_telegram() {
        assert_eq!(TaskCategory::default(), TaskCategory::Telegram);
        assert_eq!(Task::default().category, TaskCategory::Telegram);
    }

    #[test]
    fn category_cycle_covers_all() {
        let mut seen = vec![TaskCategory::default()];
        let mut current = TaskCategory::default();
        for _ in 0..3 {
            current = current.next();
            seen.push(current);
        }
        assert_eq!(seen.len(), TaskCategory::all().len());
        assert_eq!(current.next(), TaskCategory::default());
    }

    #[test]
    fn task_document_has_no_identifier_field() {
        let task = Task {
            title: "Sub".into(),
            reward: 5.0,
            category: TaskCategory::YouTube,
            ..Task::default()
        };
        let value = serde_json::to_value(&task).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("id"));
        assert_eq!(object["title"], "Sub");
        assert_eq!(object["reward"], 5.0);
        assert_eq!(object["category"], "youtube");
    }
}
