//! Todo Input Component
//!
//! Form for adding new todos; Enter or the Add button submits.

use leptos::prelude::*;

use crate::commands::{dispatch, Command};
use crate::store::use_app_store;

#[component]
pub fn TodoInput() -> impl IntoView {
    let store = use_app_store();

    let (text, set_text) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let value = text.get();
        if value.trim().is_empty() {
            return;
        }
        dispatch(&store, Command::Add(value));
        set_text.set(String::new());
    };

    view! {
        <form class="new-todo-form" on:submit=on_submit>
            <input
                type="text"
                class="new-todo-input"
                placeholder="What needs to be done?"
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
            />
            <button type="submit" class="add-btn">"Add"</button>
        </form>
    }
}
