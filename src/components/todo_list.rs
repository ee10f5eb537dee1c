//! Todo List Component
//!
//! Displays the visible todos with drag-and-drop reordering.
//! Uses leptos-sortable; rows are addressed by display index, so
//! reorder commands are translated through the active filter by the
//! store. Mid-drag moves stay in memory; the order is persisted once
//! the gesture ends.

use leptos::prelude::*;
use leptos_sortable::{
    bind_global_mouseup, create_sort_signals, make_on_mousedown, make_on_row_mouseenter,
    make_on_touchend, make_on_touchmove, make_on_touchstart,
};

use crate::commands::{dispatch, Command};
use crate::components::TodoRow;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::view::{empty_state_message, filter_todos};

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    let sort = create_sort_signals();

    let on_move = Callback::new(move |(from, to): (usize, usize)| {
        dispatch(&store, Command::MoveVisible { from, to });
    });

    // Commit the persisted write once the mouse gesture is released
    bind_global_mouseup(sort, move || {
        web_sys::console::log_1(&"[DND] Drag ended, committing order".into());
        dispatch(&store, Command::CommitOrder);
    });

    let on_touchmove = make_on_touchmove(sort, on_move);
    let on_touchend = make_on_touchend(sort, move || {
        dispatch(&store, Command::CommitOrder);
    });

    let visible = move || filter_todos(&store.todos().get(), store.filter().get());

    view! {
        <div class="todo-list" on:touchmove=on_touchmove on:touchend=on_touchend>
            {move || {
                visible().is_empty().then(|| {
                    view! {
                        <p class="empty-state">{empty_state_message(store.filter().get())}</p>
                    }
                })
            }}
            <For
                each=move || visible().into_iter().enumerate()
                key=|(index, todo)| {
                    // Key on position and content so moves and edits re-render
                    (todo.id, *index, todo.completed, todo.text.clone())
                }
                children=move |(index, todo)| {
                    let on_mousedown = make_on_mousedown(sort, index);
                    let on_mouseenter = make_on_row_mouseenter(sort, index, on_move);
                    let on_touchstart = make_on_touchstart(sort, index);

                    let is_dragging = move || {
                        sort.dragging_read.get() == Some(index)
                            || sort.touching_read.get() == Some(index)
                    };
                    let row_class = move || {
                        if is_dragging() { "todo-item dragging" } else { "todo-item" }
                    };

                    view! {
                        <div
                            class=row_class
                            on:mousedown=on_mousedown
                            on:mouseenter=on_mouseenter
                            on:touchstart=on_touchstart
                        >
                            <TodoRow todo=todo.clone() sort=sort />
                        </div>
                    }
                }
            />
        </div>
    }
}
