//! Local Storage Persistence
//!
//! Best-effort snapshot persistence in `window.localStorage` under a
//! single fixed key. Reads happen once at startup; every persisted
//! mutation rewrites the whole snapshot. Last writer wins.

use web_sys::Storage;

use crate::models::AppSnapshot;

/// Fixed storage slot for the whole app state
const STORAGE_KEY: &str = "todos-data";

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Load the persisted snapshot. Absent, unreadable, or malformed data
/// yields None; the caller falls back to defaults.
pub fn load() -> Option<AppSnapshot> {
    let storage = local_storage()?;
    let json = storage.get_item(STORAGE_KEY).ok()??;
    match serde_json::from_str(&json) {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            web_sys::console::warn_1(
                &format!("[STORAGE] Discarding malformed snapshot: {}", e).into(),
            );
            None
        }
    }
}

/// Replace the persisted snapshot with the given state
pub fn save(snapshot: &AppSnapshot) {
    let Some(storage) = local_storage() else {
        return;
    };
    match serde_json::to_string(snapshot) {
        Ok(json) => {
            if storage.set_item(STORAGE_KEY, &json).is_err() {
                web_sys::console::warn_1(&"[STORAGE] Failed to write snapshot".into());
            }
        }
        Err(e) => {
            web_sys::console::warn_1(&format!("[STORAGE] Failed to serialize: {}", e).into());
        }
    }
}
