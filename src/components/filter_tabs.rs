//! Filter Tabs Component
//!
//! Tab bar for switching the list projection.

use leptos::prelude::*;

use crate::models::Filter;

/// The three projections, in display order
const FILTERS: &[Filter] = &[Filter::All, Filter::Pending, Filter::Completed];

/// Filter tab bar
#[component]
pub fn FilterTabs(
    filter: ReadSignal<Filter>,
    set_filter: WriteSignal<Filter>,
) -> impl IntoView {
    view! {
        <div class="filter-tabs">
            {FILTERS.iter().map(|&mode| {
                let is_active = move || filter.get() == mode;
                view! {
                    <button
                        class=move || if is_active() { "filter-tab active" } else { "filter-tab" }
                        on:click=move |_| set_filter.set(mode)
                    >
                        {mode.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
