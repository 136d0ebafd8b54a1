//! Item List Component
//!
//! Renders the filtered projection of the list.

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::list::filter_items;
use crate::models::Filter;
use crate::store::{use_app_store, AppStateStoreFields};

/// Filtered item list with an empty-state message
#[component]
pub fn ItemList(filter: ReadSignal<Filter>) -> impl IntoView {
    let store = use_app_store();

    let visible = move || filter_items(&store.items().get(), filter.get());

    view! {
        <ul class="item-list">
            <For
                each=visible
                key=|item| {
                    // completed is in the key so a toggle re-renders the row
                    (item.id, item.completed)
                }
                children=move |item| view! { <ItemRow item=item /> }
            />
        </ul>
        <Show when=move || visible().is_empty()>
            <p class="empty-state">"No items here..."</p>
        </Show>
    }
}
