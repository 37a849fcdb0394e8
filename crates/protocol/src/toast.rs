use serde::{Deserialize, Serialize};

/// A transient confirmation message with its auto-clear delay.
///
/// The page shows `text` immediately and clears it after `clear_after_ms`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub text: String,
    pub clear_after_ms: u32,
}

impl Toast {
    pub fn new(text: impl Into<String>, clear_after_ms: u32) -> Self {
        Self {
            text: text.into(),
            clear_after_ms,
        }
    }
}
