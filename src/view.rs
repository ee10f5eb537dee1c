//! View Projections
//!
//! Pure helpers deriving what the UI shows from `(todos, filter)`.

use crate::models::{Filter, Todo};

/// Todos visible under the given filter, in canonical order
pub fn filter_todos(todos: &[Todo], filter: Filter) -> Vec<Todo> {
    todos
        .iter()
        .filter(|todo| filter.accepts(todo))
        .cloned()
        .collect()
}

/// Placeholder shown when no todos are visible
pub fn empty_state_message(filter: Filter) -> String {
    match filter {
        Filter::All => "No todos yet!".to_string(),
        other => format!("No {} todos", other.as_str()),
    }
}

/// Remaining-count label, pluralized
pub fn items_left_label(todos: &[Todo]) -> String {
    let left = todos.iter().filter(|todo| !todo.completed).count();
    format!("{} item{} left", left, if left != 1 { "s" } else { "" })
}

/// Root element class for the active theme
pub fn theme_class(is_dark: bool) -> &'static str {
    if is_dark {
        "app dark"
    } else {
        "app light"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: u64, text: &str, completed: bool) -> Todo {
        Todo {
            id,
            text: text.to_string(),
            completed,
        }
    }

    #[test]
    fn test_filter_todos_by_state() {
        let todos = vec![todo(1, "a", false), todo(2, "b", true), todo(3, "c", false)];

        let all = filter_todos(&todos, Filter::All);
        assert_eq!(all.len(), 3);

        let active: Vec<u64> = filter_todos(&todos, Filter::Active).iter().map(|t| t.id).collect();
        assert_eq!(active, vec![1, 3]);

        let completed: Vec<u64> = filter_todos(&todos, Filter::Completed).iter().map(|t| t.id).collect();
        assert_eq!(completed, vec![2]);
    }

    #[test]
    fn test_empty_state_messages() {
        assert_eq!(empty_state_message(Filter::All), "No todos yet!");
        assert_eq!(empty_state_message(Filter::Active), "No active todos");
        assert_eq!(empty_state_message(Filter::Completed), "No completed todos");
    }

    #[test]
    fn test_items_left_pluralization() {
        assert_eq!(items_left_label(&[]), "0 items left");
        assert_eq!(items_left_label(&[todo(1, "a", false)]), "1 item left");
        assert_eq!(
            items_left_label(&[todo(1, "a", false), todo(2, "b", false)]),
            "2 items left"
        );
        // Completed todos do not count
        assert_eq!(items_left_label(&[todo(1, "a", true)]), "0 items left");
    }

    #[test]
    fn test_toggled_todo_leaves_active_view() {
        // Start with [a, b, c] all active, complete b, switch to Active
        let mut todos = vec![todo(1, "a", false), todo(2, "b", false), todo(3, "c", false)];
        crate::list::toggle_todo(&mut todos, 2);

        let visible: Vec<u64> = filter_todos(&todos, Filter::Active).iter().map(|t| t.id).collect();
        assert_eq!(visible, vec![1, 3]);
        assert_eq!(items_left_label(&todos), "2 items left");
    }

    #[test]
    fn test_theme_class() {
        assert_eq!(theme_class(true), "app dark");
        assert_eq!(theme_class(false), "app light");
    }
}
