//! Todo Row Component
//!
//! Inner content of a single row: checkbox, text, delete button.
//! The draggable wrapper lives in the list component.

use leptos::prelude::*;
use leptos_sortable::SortSignals;

use crate::commands::{dispatch, Command};
use crate::models::Todo;
use crate::store::use_app_store;

#[component]
pub fn TodoRow(todo: Todo, sort: SortSignals) -> impl IntoView {
    let store = use_app_store();

    let id = todo.id;
    let completed = todo.completed;
    let text = todo.text.clone();

    view! {
        // Checkbox
        <input
            type="checkbox"
            class="todo-check"
            checked=completed
            on:change=move |_| {
                // Swallow the synthetic click that can follow a drag
                if sort.drag_just_ended_read.get_untracked() {
                    return;
                }
                dispatch(&store, Command::Toggle(id));
            }
        />

        // Text
        <span class=move || {
            if completed { "todo-text completed" } else { "todo-text" }
        }>{text}</span>

        // Delete button
        <button
            class="delete-btn"
            on:click=move |_| dispatch(&store, Command::Delete(id))
        >"×"</button>
    }
}
