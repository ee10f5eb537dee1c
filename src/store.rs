//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is
//! constructed once at startup from the persisted snapshot and mutated
//! only through the helpers below; components re-render reactively and
//! every persisted mutation flushes the snapshot before returning.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::list;
use crate::models::{AppSnapshot, Filter, Todo};
use crate::storage;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All todos in canonical manual order
    pub todos: Vec<Todo>,
    /// Dark theme flag, persisted alongside the list
    pub dark_mode: bool,
    /// Transient display filter, resets to All on reload
    pub filter: Filter,
}

impl AppState {
    /// Startup state from the persisted snapshot
    pub fn from_snapshot(snapshot: AppSnapshot) -> Self {
        Self {
            todos: snapshot.todos,
            dark_mode: snapshot.is_dark,
            filter: Filter::All,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Current timestamp in ms, the id seed for new todos
fn now_ms() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

fn persist(store: &AppStore) {
    let snapshot = AppSnapshot {
        todos: store.todos().get_untracked(),
        is_dark: store.dark_mode().get_untracked(),
    };
    storage::save(&snapshot);
}

// ========================
// Store Mutation Helpers
// ========================

/// Append a new todo; whitespace-only text is ignored
pub fn store_add_todo(store: &AppStore, text: &str) {
    if text.trim().is_empty() {
        return;
    }
    {
        let todos_field = store.todos();
        let mut todos = todos_field.write();
        let id = list::next_id(&todos, now_ms());
        list::add_todo(&mut todos, text, id);
    }
    persist(store);
}

/// Flip completion on the todo matching `id`
pub fn store_toggle_todo(store: &AppStore, id: u64) {
    list::toggle_todo(&mut store.todos().write(), id);
    persist(store);
}

/// Remove the todo matching `id`
pub fn store_delete_todo(store: &AppStore, id: u64) {
    list::delete_todo(&mut store.todos().write(), id);
    persist(store);
}

/// Remove every completed todo
pub fn store_clear_completed(store: &AppStore) {
    list::clear_completed(&mut store.todos().write());
    persist(store);
}

/// Change the transient filter; never persisted
pub fn store_set_filter(store: &AppStore, filter: Filter) {
    store.filter().set(filter);
}

/// Flip dark mode and persist
pub fn store_toggle_theme(store: &AppStore) {
    let next = !store.dark_mode().get_untracked();
    store.dark_mode().set(next);
    persist(store);
}

/// Reorder by displayed position while a gesture is in flight.
/// In-memory only; the write is committed at gesture end.
pub fn store_move_visible(store: &AppStore, from_vis: usize, to_vis: usize) {
    let filter = store.filter().get_untracked();
    list::move_visible(&mut store.todos().write(), filter, from_vis, to_vis);
}

/// Persist the order once a reorder gesture completes
pub fn store_commit_order(store: &AppStore) {
    persist(store);
}
