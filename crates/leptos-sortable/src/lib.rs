//! Leptos Sortable Utilities
//!
//! Drag-to-reorder for vertical lists using mouse and touch events.
//! Uses movement threshold to distinguish click from drag.
//!
//! Rows are addressed by display index. While a gesture is in flight the
//! controller emits `(origin, target)` moves through a callback each time
//! the pointer crosses into another row, re-tracking the origin so later
//! moves are relative to the new position; a commit callback fires once
//! at gesture end.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Sortable state signals
#[derive(Clone, Copy)]
pub struct SortSignals {
    /// Display index being dragged (mouse path), None = idle
    pub dragging_read: ReadSignal<Option<usize>>,
    pub dragging_write: WriteSignal<Option<usize>>,
    /// Pending row index (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<usize>>,
    pub pending_write: WriteSignal<Option<usize>>,
    /// Display index under the finger (touch path), None = idle
    pub touching_read: ReadSignal<Option<usize>>,
    pub touching_write: WriteSignal<Option<usize>>,
    /// True briefly after a drag ends, to suppress the click that follows
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// How long clicks stay suppressed after a drag ends
const CLICK_SUPPRESS_MS: u32 = 100;

pub fn create_sort_signals() -> SortSignals {
    let (dragging_read, dragging_write) = signal(None::<usize>);
    let (pending_read, pending_write) = signal(None::<usize>);
    let (touching_read, touching_write) = signal(None::<usize>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    SortSignals {
        dragging_read,
        dragging_write,
        pending_read,
        pending_write,
        touching_read,
        touching_write,
        drag_just_ended_read,
        drag_just_ended_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// End any gesture and arm the click-suppression window
pub fn end_drag(sort: &SortSignals) {
    sort.dragging_write.set(None);
    sort.pending_write.set(None);
    sort.touching_write.set(None);
    sort.drag_just_ended_write.set(true);

    let clear = sort.drag_just_ended_write;
    gloo_timers::callback::Timeout::new(CLICK_SUPPRESS_MS, move || clear.set(false)).forget();
}

/// Create mousedown handler for draggable rows.
/// Records a pending drag with its start position.
pub fn make_on_mousedown(sort: SortSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() {
                    return;
                }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() {
                    return;
                }
            }
            sort.pending_write.set(Some(index));
            sort.start_x_write.set(ev.client_x());
            sort.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mousemove handler for document - starts drag if moved enough
fn bind_global_mousemove(sort: SortSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = sort.pending_read.get_untracked();

        // If we have a pending drag and haven't started dragging yet
        if pending.is_some() && sort.dragging_read.get_untracked().is_none() {
            let start_x = sort.start_x_read.get_untracked();
            let start_y = sort.start_y_read.get_untracked();
            let dx = (ev.client_x() - start_x).abs();
            let dy = (ev.client_y() - start_y).abs();

            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                sort.dragging_write.set(pending);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for rows. While dragging, entering another
/// row moves the dragged row there and re-tracks the origin.
pub fn make_on_row_mouseenter(
    sort: SortSignals,
    index: usize,
    on_move: Callback<(usize, usize)>,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if let Some(origin) = sort.dragging_read.get_untracked() {
            if origin != index {
                on_move.run((origin, index));
                sort.dragging_write.set(Some(index));
            }
        }
    }
}

/// Bind global mouseup handler ending the drag. `on_drop` fires only
/// when an actual drag (not a plain click) was in flight.
pub fn bind_global_mouseup<F>(sort: SortSignals, on_drop: F)
where
    F: Fn() + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let was_dragging = sort.dragging_read.get_untracked().is_some();

        if was_dragging {
            end_drag(&sort);
            on_drop();
        } else {
            // Just a click - clear pending and let it fire naturally
            sort.pending_write.set(None);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(sort);
}

/// Create touchstart handler for rows
pub fn make_on_touchstart(sort: SortSignals, index: usize) -> impl Fn(web_sys::TouchEvent) + Copy + 'static {
    move |ev: web_sys::TouchEvent| {
        // Ignore if target is input or button
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() {
                return;
            }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() {
                return;
            }
        }
        if let Some(touch) = ev.touches().item(0) {
            sort.start_y_write.set(touch.client_y());
            sort.touching_write.set(Some(index));
        }
    }
}

/// Vertical extents of the container's child rows, in display order
fn row_bounds(container: &web_sys::Element) -> Vec<(f64, f64)> {
    let children = container.children();
    let mut bounds = Vec::with_capacity(children.length() as usize);
    for i in 0..children.length() {
        if let Some(child) = children.item(i) {
            let rect = child.get_bounding_client_rect();
            bounds.push((rect.top(), rect.bottom()));
        }
    }
    bounds
}

/// Index of the row whose vertical extent contains `y`
pub fn row_under_y(bounds: &[(f64, f64)], y: f64) -> Option<usize> {
    bounds.iter().position(|(top, bottom)| y > *top && y < *bottom)
}

/// Create touchmove handler for the list container. Samples the first
/// touch against the child row bounding boxes; crossing into a
/// different row moves the tracked row there.
pub fn make_on_touchmove(
    sort: SortSignals,
    on_move: Callback<(usize, usize)>,
) -> impl Fn(web_sys::TouchEvent) + Copy + 'static {
    move |ev: web_sys::TouchEvent| {
        let Some(origin) = sort.touching_read.get_untracked() else {
            return;
        };
        let Some(touch) = ev.touches().item(0) else {
            return;
        };
        let Some(container) = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };

        let bounds = row_bounds(&container);
        if let Some(target) = row_under_y(&bounds, f64::from(touch.client_y())) {
            if target != origin {
                on_move.run((origin, target));
                sort.touching_write.set(Some(target));
            }
        }
    }
}

/// Create touchend handler committing the reorder
pub fn make_on_touchend<F>(sort: SortSignals, on_drop: F) -> impl Fn(web_sys::TouchEvent) + Clone + 'static
where
    F: Fn() + Clone + 'static,
{
    move |_ev: web_sys::TouchEvent| {
        if sort.touching_read.get_untracked().is_some() {
            end_drag(&sort);
            on_drop();
        }
    }
}
