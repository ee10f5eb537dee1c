//! List Utilities
//!
//! Pure operations over the todo sequence. Every mutation command funnels
//! through these so the ordering logic stays testable without a DOM.
//! Invalid ids and out-of-range indices are silent no-ops.

use crate::models::{Filter, Todo};

/// Fresh id for a new todo: the current timestamp in ms, bumped past
/// any existing id so ids stay unique within a session.
pub fn next_id(todos: &[Todo], now_ms: u64) -> u64 {
    let max_id = todos.iter().map(|t| t.id).max().unwrap_or(0);
    now_ms.max(max_id + 1)
}

/// Append a new todo; whitespace-only text is ignored.
/// Returns whether a todo was added.
pub fn add_todo(todos: &mut Vec<Todo>, text: &str, id: u64) -> bool {
    let text = text.trim();
    if text.is_empty() {
        return false;
    }
    todos.push(Todo::new(id, text.to_string()));
    true
}

/// Flip the completion flag of the todo matching `id`
pub fn toggle_todo(todos: &mut [Todo], id: u64) {
    if let Some(todo) = todos.iter_mut().find(|t| t.id == id) {
        todo.completed = !todo.completed;
    }
}

/// Remove the todo matching `id`
pub fn delete_todo(todos: &mut Vec<Todo>, id: u64) {
    todos.retain(|t| t.id != id);
}

/// Remove every completed todo
pub fn clear_completed(todos: &mut Vec<Todo>) {
    todos.retain(|t| !t.completed);
}

/// Move the todo at `from` so it sits at `to` in the same sequence
pub fn move_todo(todos: &mut Vec<Todo>, from: usize, to: usize) {
    if from == to || from >= todos.len() || to >= todos.len() {
        return;
    }
    let todo = todos.remove(from);
    todos.insert(to, todo);
}

/// Map a display (filtered) index back to the canonical index.
/// Returns None when the display index is out of range for the filter.
pub fn resolve_visible_index(todos: &[Todo], filter: Filter, visible_idx: usize) -> Option<usize> {
    todos
        .iter()
        .enumerate()
        .filter(|(_, todo)| filter.accepts(todo))
        .nth(visible_idx)
        .map(|(idx, _)| idx)
}

/// Reorder by displayed position: both endpoints are display indices
/// under the active filter and are translated to canonical indices
/// before the move. Unresolvable endpoints make this a no-op.
pub fn move_visible(todos: &mut Vec<Todo>, filter: Filter, from_vis: usize, to_vis: usize) {
    let Some(from) = resolve_visible_index(todos, filter, from_vis) else {
        return;
    };
    let Some(to) = resolve_visible_index(todos, filter, to_vis) else {
        return;
    };
    move_todo(todos, from, to);
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

    fn ids(todos: &[Todo]) -> Vec<u64> {
        todos.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_add_appends_incomplete() {
        let mut todos = vec![todo(1, "first", true)];
        assert!(add_todo(&mut todos, "second", 2));
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[1].id, 2);
        assert_eq!(todos[1].text, "second");
        assert!(!todos[1].completed);
    }

    #[test]
    fn test_add_trims_text() {
        let mut todos = Vec::new();
        assert!(add_todo(&mut todos, "  padded  ", 1));
        assert_eq!(todos[0].text, "padded");
    }

    #[test]
    fn test_add_empty_is_noop() {
        let mut todos = vec![todo(1, "only", false)];
        assert!(!add_todo(&mut todos, "", 2));
        assert!(!add_todo(&mut todos, "   ", 2));
        assert_eq!(todos.len(), 1);
    }

    #[test]
    fn test_next_id_uses_timestamp() {
        assert_eq!(next_id(&[], 1_000), 1_000);
    }

    #[test]
    fn test_next_id_bumps_past_collision() {
        // Two adds in the same millisecond must not collide
        let todos = vec![todo(1_000, "same tick", false)];
        assert_eq!(next_id(&todos, 1_000), 1_001);
    }

    #[test]
    fn test_toggle_flips_and_restores() {
        let mut todos = vec![todo(1, "a", false)];
        toggle_todo(&mut todos, 1);
        assert!(todos[0].completed);
        toggle_todo(&mut todos, 1);
        assert!(!todos[0].completed);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut todos = vec![todo(1, "a", false)];
        toggle_todo(&mut todos, 99);
        assert!(!todos[0].completed);
    }

    #[test]
    fn test_delete_removes_once() {
        let mut todos = vec![todo(1, "a", false), todo(2, "b", false)];
        delete_todo(&mut todos, 1);
        assert_eq!(ids(&todos), vec![2]);
        // Deleting again is a no-op
        delete_todo(&mut todos, 1);
        assert_eq!(ids(&todos), vec![2]);
    }

    #[test]
    fn test_clear_completed_is_idempotent() {
        let mut todos = vec![todo(1, "a", true), todo(2, "b", false), todo(3, "c", true)];
        clear_completed(&mut todos);
        assert_eq!(ids(&todos), vec![2]);
        clear_completed(&mut todos);
        assert_eq!(ids(&todos), vec![2]);
    }

    #[test]
    fn test_move_then_inverse_restores_order() {
        let mut todos = vec![todo(1, "a", false), todo(2, "b", false), todo(3, "c", false)];
        move_todo(&mut todos, 0, 2);
        assert_eq!(ids(&todos), vec![2, 3, 1]);
        move_todo(&mut todos, 2, 0);
        assert_eq!(ids(&todos), vec![1, 2, 3]);
    }

    #[test]
    fn test_move_invalid_indices_are_noops() {
        let mut todos = vec![todo(1, "a", false), todo(2, "b", false)];
        move_todo(&mut todos, 0, 0);
        move_todo(&mut todos, 5, 0);
        move_todo(&mut todos, 0, 5);
        assert_eq!(ids(&todos), vec![1, 2]);
    }

    #[test]
    fn test_resolve_visible_index_translates_through_filter() {
        let todos = vec![todo(1, "a", false), todo(2, "b", true), todo(3, "c", false)];
        // Active view shows [1, 3]
        assert_eq!(resolve_visible_index(&todos, Filter::Active, 0), Some(0));
        assert_eq!(resolve_visible_index(&todos, Filter::Active, 1), Some(2));
        assert_eq!(resolve_visible_index(&todos, Filter::Active, 2), None);
        // Completed view shows [2]
        assert_eq!(resolve_visible_index(&todos, Filter::Completed, 0), Some(1));
        // All is the identity
        assert_eq!(resolve_visible_index(&todos, Filter::All, 2), Some(2));
    }

    #[test]
    fn test_move_visible_under_all_matches_move_todo() {
        let mut a = vec![todo(1, "a", false), todo(2, "b", false), todo(3, "c", false)];
        let mut b = a.clone();
        move_visible(&mut a, Filter::All, 0, 2);
        move_todo(&mut b, 0, 2);
        assert_eq!(a, b);
    }

    #[test]
    fn test_move_visible_translates_under_active_filter() {
        let mut todos = vec![todo(1, "a", false), todo(2, "b", true), todo(3, "c", false)];
        // Display order under Active is [1, 3]; dragging row 0 onto row 1
        // moves todo 1 to canonical index 2.
        move_visible(&mut todos, Filter::Active, 0, 1);
        assert_eq!(ids(&todos), vec![2, 3, 1]);
    }

    #[test]
    fn test_move_visible_out_of_range_is_noop() {
        let mut todos = vec![todo(1, "a", false), todo(2, "b", true)];
        move_visible(&mut todos, Filter::Active, 0, 1);
        assert_eq!(ids(&todos), vec![1, 2]);
    }
}
