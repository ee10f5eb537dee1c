//! Filter Bar Component
//!
//! Buttons selecting which todos are displayed.

use leptos::prelude::*;

use crate::commands::{dispatch, Command};
use crate::models::Filter;
use crate::store::{use_app_store, AppStateStoreFields};

/// Filter options in display order
const FILTERS: &[(Filter, &str)] = &[
    (Filter::All, "All"),
    (Filter::Active, "Active"),
    (Filter::Completed, "Completed"),
];

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="filter-bar">
            {FILTERS.iter().map(|(filter, label)| {
                let filter = *filter;
                let is_active = move || store.filter().get() == filter;
                view! {
                    <button
                        class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| dispatch(&store, Command::SetFilter(filter))
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
