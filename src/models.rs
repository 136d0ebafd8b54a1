//! Frontend Models
//!
//! Plain data types for the to-do list.

use serde::{Deserialize, Serialize};

/// One to-do entry (matches the stored JSON shape)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

/// Display-only projection selector, never persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Pending,
    Completed,
}

impl Filter {
    /// Tab label as shown in the UI
    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "ALL",
            Filter::Pending => "PENDING",
            Filter::Completed => "COMPLETED",
        }
    }

    /// Whether an item belongs to this projection
    pub fn matches(self, item: &Item) -> bool {
        match self {
            Filter::All => true,
            Filter::Pending => !item.completed,
            Filter::Completed => item.completed,
        }
    }
}
