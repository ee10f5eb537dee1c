//! Frontend Models
//!
//! Data structures for todos and the persisted snapshot.

use serde::{Deserialize, Serialize};

/// A single todo entry with a stable identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

impl Todo {
    /// Create a new todo, not yet completed
    pub fn new(id: u64, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}

/// Which todos are displayed; transient UI state, never persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }

    /// Whether a todo is visible under this filter
    pub fn accepts(&self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.completed,
            Filter::Completed => todo.completed,
        }
    }
}

/// Persisted snapshot: the full list plus the theme flag
///
/// Field defaults tolerate partial snapshots: a missing list reads as
/// empty, a missing theme flag reads as dark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSnapshot {
    #[serde(default)]
    pub todos: Vec<Todo>,
    #[serde(rename = "isDark", default = "default_true")]
    pub is_dark: bool,
}

impl Default for AppSnapshot {
    fn default() -> Self {
        Self {
            todos: Vec::new(),
            is_dark: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_todo_starts_active() {
        let todo = Todo::new(7, "Buy milk".to_string());
        assert_eq!(todo.id, 7);
        assert!(!todo.completed);
    }

    #[test]
    fn test_filter_accepts() {
        let active = Todo::new(1, "a".to_string());
        let mut done = Todo::new(2, "b".to_string());
        done.completed = true;

        assert!(Filter::All.accepts(&active));
        assert!(Filter::All.accepts(&done));
        assert!(Filter::Active.accepts(&active));
        assert!(!Filter::Active.accepts(&done));
        assert!(!Filter::Completed.accepts(&active));
        assert!(Filter::Completed.accepts(&done));
    }

    #[test]
    fn test_snapshot_round_trip() {
        let snapshot = AppSnapshot {
            todos: vec![
                Todo::new(1, "one".to_string()),
                Todo {
                    id: 2,
                    text: "two".to_string(),
                    completed: true,
                },
            ],
            is_dark: false,
        };

        let json = serde_json::to_string(&snapshot).expect("serialize");
        assert!(json.contains("\"isDark\":false"));

        let back: AppSnapshot = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, snapshot);
    }

    #[test]
    fn test_snapshot_wire_names() {
        let json = r#"{"todos":[{"id":42,"text":"hi","completed":true}],"isDark":false}"#;
        let snapshot: AppSnapshot = serde_json::from_str(json).expect("deserialize");
        assert_eq!(snapshot.todos.len(), 1);
        assert_eq!(snapshot.todos[0].id, 42);
        assert!(snapshot.todos[0].completed);
        assert!(!snapshot.is_dark);
    }

    #[test]
    fn test_default_snapshot_is_empty_and_dark() {
        let snapshot = AppSnapshot::default();
        assert!(snapshot.todos.is_empty());
        assert!(snapshot.is_dark);
    }

    #[test]
    fn test_partial_snapshot_uses_defaults() {
        let snapshot: AppSnapshot = serde_json::from_str("{}").expect("deserialize");
        assert!(snapshot.todos.is_empty());
        assert!(snapshot.is_dark);

        let snapshot: AppSnapshot = serde_json::from_str(r#"{"todos":[]}"#).expect("deserialize");
        assert!(snapshot.is_dark);
    }

    #[test]
    fn test_malformed_snapshot_rejected() {
        assert!(serde_json::from_str::<AppSnapshot>("not json").is_err());
        assert!(serde_json::from_str::<AppSnapshot>(r#"{"todos":"nope"}"#).is_err());
    }
}
