//! Clipboard-copy feedback for the contact email.
//!
//! The clipboard itself lives at the page boundary; the core only decides
//! what the confirmation toast says and how long it stays up.

use folio_protocol::Toast;

pub const CONTACT_EMAIL: &str = "Ahmad.amro.dev@gmail.com";

const COPIED_CLEAR_MS: u32 = 1400;
const FAILED_CLEAR_MS: u32 = 2200;

/// Toast shown after a successful clipboard write.
pub fn copied_toast() -> Toast {
    Toast::new("Email copied.", COPIED_CLEAR_MS)
}

/// Toast shown when the clipboard is unavailable; surfaces the email
/// inline as a fallback instead of propagating the failure.
pub fn copy_failed_toast() -> Toast {
    Toast::new(format!("Copy failed — email: {CONTACT_EMAIL}"), FAILED_CLEAR_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_toast_clears_quickly() {
        let toast = copied_toast();
        assert_eq!(toast.text, "Email copied.");
        assert_eq!(toast.clear_after_ms, 1400);
    }

    #[test]
    fn failure_toast_carries_the_email() {
        let toast = copy_failed_toast();
        assert!(toast.text.contains(CONTACT_EMAIL));
        assert_eq!(toast.clear_after_ms, 2200);
    }
}
