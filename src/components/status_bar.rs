//! Status Bar Component
//!
//! Remaining-count label and the clear-completed action.

use leptos::prelude::*;

use crate::commands::{dispatch, Command};
use crate::store::{use_app_store, AppStateStoreFields};
use crate::view::items_left_label;

#[component]
pub fn StatusBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="status-bar">
            <span class="items-left">{move || items_left_label(&store.todos().get())}</span>
            <button
                class="clear-completed"
                on:click=move |_| dispatch(&store, Command::ClearCompleted)
            >
                "Clear completed"
            </button>
        </div>
    }
}
