//! UI Commands
//!
//! Typed commands emitted by the rendering layer and dispatched into the
//! store. Components never mutate state directly; the store is passive
//! outside of dispatch.

use crate::models::Filter;
use crate::store::{self, AppStore};

/// Every mutation the UI can request
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(String),
    Toggle(u64),
    Delete(u64),
    ClearCompleted,
    SetFilter(Filter),
    ToggleTheme,
    /// Reorder by display index while a drag is in flight
    MoveVisible { from: usize, to: usize },
    /// Flush the reordered list once the gesture ends
    CommitOrder,
}

/// Route a command to the matching store operation
pub fn dispatch(store: &AppStore, command: Command) {
    match command {
        Command::Add(text) => store::store_add_todo(store, &text),
        Command::Toggle(id) => store::store_toggle_todo(store, id),
        Command::Delete(id) => store::store_delete_todo(store, id),
        Command::ClearCompleted => store::store_clear_completed(store),
        Command::SetFilter(filter) => store::store_set_filter(store, filter),
        Command::ToggleTheme => store::store_toggle_theme(store),
        Command::MoveVisible { from, to } => store::store_move_visible(store, from, to),
        Command::CommitOrder => store::store_commit_order(store),
    }
}
