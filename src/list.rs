//! List Operations
//!
//! Pure functions over the item list. Every mutation in the app funnels
//! through these so they stay testable off-browser.

use crate::models::{Filter, Item};

/// Append a new pending item, stamped with a creation id.
/// Whitespace-only text is rejected. Returns whether an item was added.
pub fn add_item(items: &mut Vec<Item>, text: &str, now_ms: u64) -> bool {
    if text.trim().is_empty() {
        return false;
    }
    let id = next_id(items, now_ms);
    items.push(Item {
        id,
        text: text.to_string(),
        completed: false,
    });
    true
}

/// Flip the completed flag of the matching item, if any.
pub fn toggle_item(items: &mut Vec<Item>, id: u64) {
    if let Some(item) = items.iter_mut().find(|item| item.id == id) {
        item.completed = !item.completed;
    }
}

/// Remove the matching item, keeping the rest in insertion order.
pub fn remove_item(items: &mut Vec<Item>, id: u64) {
    items.retain(|item| item.id != id);
}

/// Project the list through a filter, preserving insertion order.
pub fn filter_items(items: &[Item], filter: Filter) -> Vec<Item> {
    items
        .iter()
        .filter(|item| filter.matches(item))
        .cloned()
        .collect()
}

/// Creation-timestamp id, bumped past the current maximum when the
/// clock has not advanced since the newest item.
pub fn next_id(items: &[Item], now_ms: u64) -> u64 {
    let max_id = items.iter().map(|item| item.id).max().unwrap_or(0);
    now_ms.max(max_id + 1)
}
