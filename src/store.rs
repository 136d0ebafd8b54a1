//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::list;
use crate::models::Item;

/// Global application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The to-do list, in insertion order
    pub items: Vec<Item>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a new pending item, stamping its creation id.
/// Returns whether an item was added (blank text is rejected).
pub fn store_add_item(store: &AppStore, text: &str) -> bool {
    if text.trim().is_empty() {
        return false;
    }
    let now_ms = js_sys::Date::now() as u64;
    list::add_item(&mut store.items().write(), text, now_ms)
}

/// Flip an item's completed flag by ID
pub fn store_toggle_item(store: &AppStore, id: u64) {
    list::toggle_item(&mut store.items().write(), id);
}

/// Remove an item from the store by ID
pub fn store_remove_item(store: &AppStore, id: u64) {
    list::remove_item(&mut store.items().write(), id);
}
