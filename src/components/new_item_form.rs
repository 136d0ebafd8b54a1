//! New Item Form Component
//!
//! Input row for adding a new to-do item.

use leptos::prelude::*;

use crate::store::{store_add_item, use_app_store};

/// Form for adding items to the list
#[component]
pub fn NewItemForm() -> impl IntoView {
    let store = use_app_store();
    let (draft, set_draft) = signal(String::new());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if store_add_item(&store, &draft.get()) {
            set_draft.set(String::new());
        }
    };

    view! {
        <form class="new-item-form" on:submit=add_item>
            <input
                type="text"
                placeholder="Add item to purchase..."
                prop:value=move || draft.get()
                on:input=move |ev| set_draft.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
