//! Storage Slot
//!
//! Mirrors the item list to a single localStorage key and rehydrates it
//! at startup. Absent or unparsable data loads as an empty list.

use crate::models::Item;

/// localStorage key holding the serialized list
pub const STORAGE_KEY: &str = "todos";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

/// Read the slot once. Missing storage, a missing key, or bad JSON all
/// yield an empty list; a parse failure is only noted on the console.
pub fn load_items() -> Vec<Item> {
    let raw = local_storage().and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
    let items = match raw {
        Some(raw) => match parse_items(&raw) {
            Ok(items) => items,
            Err(err) => {
                web_sys::console::warn_1(
                    &format!("[STORAGE] Ignoring unparsable slot: {}", err).into(),
                );
                Vec::new()
            }
        },
        None => Vec::new(),
    };
    web_sys::console::log_1(&format!("[STORAGE] Loaded {} items", items.len()).into());
    items
}

/// Overwrite the slot with the full list. Write failures are ignored.
pub fn save_items(items: &[Item]) {
    if let Some(storage) = local_storage() {
        if let Ok(encoded) = encode_items(items) {
            let _ = storage.set_item(STORAGE_KEY, &encoded);
        }
    }
}

fn parse_items(raw: &str) -> Result<Vec<Item>, serde_json::Error> {
    serde_json::from_str(raw)
}

fn encode_items(items: &[Item]) -> Result<String, serde_json::Error> {
    serde_json::to_string(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_preserves_the_list() {
        let items = vec![
            Item {
                id: 100,
                text: "Milk".to_string(),
                completed: false,
            },
            Item {
                id: 200,
                text: "Eggs".to_string(),
                completed: true,
            },
        ];

        let encoded = encode_items(&items).unwrap();
        let decoded = parse_items(&encoded).unwrap();

        assert_eq!(decoded, items);
    }

    #[test]
    fn test_slot_format_matches_stored_shape() {
        let items = vec![Item {
            id: 1,
            text: "Milk".to_string(),
            completed: false,
        }];

        let encoded = encode_items(&items).unwrap();

        assert_eq!(encoded, r#"[{"id":1,"text":"Milk","completed":false}]"#);
    }

    #[test]
    fn test_garbage_slot_fails_to_parse() {
        assert!(parse_items("not json at all").is_err());
        assert!(parse_items(r#"{"id":1}"#).is_err());
        assert!(parse_items("").is_err());
    }

    #[test]
    fn test_empty_array_parses_to_empty_list() {
        assert_eq!(parse_items("[]").unwrap(), Vec::<Item>::new());
    }
}
