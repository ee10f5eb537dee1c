//! Theme Toggle Component
//!
//! Sun/moon button flipping dark mode.

use leptos::prelude::*;

use crate::commands::{dispatch, Command};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = use_app_store();

    view! {
        <button
            class="theme-toggle"
            on:click=move |_| dispatch(&store, Command::ToggleTheme)
        >
            {move || if store.dark_mode().get() { "☀" } else { "☾" }}
        </button>
    }
}
