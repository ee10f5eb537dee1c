//! Todo App
//!
//! Root component: loads the persisted snapshot once, owns the store,
//! and renders the themed layout.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{FilterBar, StatusBar, ThemeToggle, TodoInput, TodoList};
use crate::storage;
use crate::store::{AppState, AppStateStoreFields};
use crate::view::theme_class;

#[component]
pub fn App() -> impl IntoView {
    let snapshot = storage::load().unwrap_or_default();
    web_sys::console::log_1(&format!("[APP] Loaded {} todos", snapshot.todos.len()).into());

    let store = Store::new(AppState::from_snapshot(snapshot));

    // Provide the store to all children
    provide_context(store);

    view! {
        <div class=move || theme_class(store.dark_mode().get())>
            <div class="container">
                <header class="app-header">
                    <h1>"Todo"</h1>
                    <ThemeToggle />
                </header>

                <TodoInput />

                <TodoList />

                <footer class="list-footer">
                    <StatusBar />
                    <FilterBar />
                </footer>
            </div>
        </div>
    }
}
