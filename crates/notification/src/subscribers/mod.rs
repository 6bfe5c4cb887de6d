//! Event subscribers that turn package events into notifications.

mod package_assigned;
mod package_registered;

pub use package_assigned::OnPackageAssignedSendNotification;
pub use package_registered::OnPackageRegisteredSendNotification;

/// Shortens `text` to `max_chars` characters, appending `...` when cut.
pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly10!", 10), "exactly10!");
        assert_eq!(truncate("Wireless headphones X", 20), "Wireless headphones ...");
        assert_eq!(truncate("Café com leite", 4), "Café...");
    }
}
