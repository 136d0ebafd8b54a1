//! Item Row Component
//!
//! A single to-do entry with toggle and delete affordances.

use leptos::prelude::*;

use crate::models::Item;
use crate::store::{store_remove_item, store_toggle_item, use_app_store};

/// One row in the item list
#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    let store = use_app_store();

    let id = item.id;
    let completed = item.completed;
    let text = item.text.clone();

    view! {
        <li class="item-row">
            <span
                class=move || if completed { "item-text completed" } else { "item-text" }
                on:click=move |_| store_toggle_item(&store, id)
            >
                {text}
            </span>
            <button class="delete-btn" on:click=move |_| store_remove_item(&store, id)>
                "Delete"
            </button>
        </li>
    }
}
