//! Ticklist App
//!
//! Root component: owns the store and the filter state, mirrors the
//! list to the storage slot, and arms the hourly reminder.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{FilterTabs, ItemList, NewItemForm};
use crate::models::Filter;
use crate::reminder;
use crate::storage;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // Rehydrate the list from the storage slot
    let store = Store::new(AppState {
        items: storage::load_items(),
    });
    provide_context(store);

    // Transient UI state, never persisted
    let (filter, set_filter) = signal(Filter::All);

    // Mirror every list change back to the slot
    Effect::new(move |_| {
        let items = store.items().get();
        storage::save_items(&items);
    });

    reminder::start(store);

    view! {
        <main class="app-card">
            <h1>"🛒 Ticklist"</h1>
            <NewItemForm />
            <FilterTabs filter=filter set_filter=set_filter />
            <ItemList filter=filter />
        </main>
    }
}
