//! Hourly Reminder
//!
//! One long-lived interval that alerts on pending items. The interval
//! reads the store when it fires, so list changes never re-arm it.

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::models::Item;
use crate::store::{AppStateStoreFields, AppStore};

/// Fixed reminder period: one hour
pub const REMINDER_INTERVAL_MS: u32 = 3_600_000;

/// Arm the reminder. The interval is cancelled when the owning reactive
/// scope is disposed.
pub fn start(store: AppStore) {
    let interval = Interval::new(REMINDER_INTERVAL_MS, move || {
        let items = store.items().get_untracked();
        if let Some(message) = pending_summary(&items) {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(&message);
            }
        }
    });
    let interval = leptos::__reexports::send_wrapper::SendWrapper::new(interval);
    on_cleanup(move || {
        interval.take().cancel();
    });
}

/// Compose the alert text, or None when nothing is pending.
pub fn pending_summary(items: &[Item]) -> Option<String> {
    let pending: Vec<&Item> = items.iter().filter(|item| !item.completed).collect();
    if pending.is_empty() {
        return None;
    }
    let mut message = String::from("⏰ Reminder!\nItems pending:");
    for item in &pending {
        message.push_str("\n- ");
        message.push_str(&item.text);
    }
    Some(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u64, text: &str, completed: bool) -> Item {
        Item {
            id,
            text: text.to_string(),
            completed,
        }
    }

    #[test]
    fn test_no_pending_items_means_no_alert() {
        assert_eq!(pending_summary(&[]), None);
        assert_eq!(pending_summary(&[make_item(1, "Done", true)]), None);
    }

    #[test]
    fn test_summary_lists_each_pending_item() {
        let items = vec![
            make_item(1, "Milk", false),
            make_item(2, "Eggs", true),
            make_item(3, "Bread", false),
        ];

        assert_eq!(
            pending_summary(&items).unwrap(),
            "⏰ Reminder!\nItems pending:\n- Milk\n- Bread"
        );
    }
}
