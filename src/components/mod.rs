//! UI Components
//!
//! Reusable Leptos components.

mod filter_tabs;
mod item_list;
mod item_row;
mod new_item_form;

pub use filter_tabs::FilterTabs;
pub use item_list::ItemList;
pub use item_row::ItemRow;
pub use new_item_form::NewItemForm;
