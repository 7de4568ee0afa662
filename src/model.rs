//! Chat message record.

use chrono::{DateTime, Local};

/// One chat message. Immutable once created; its value identity (all three
/// fields) keys the transcript's display map.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChatItem {
    pub sender: String,
    pub body: String,
    pub sent_at: DateTime<Local>,
}

impl ChatItem {
    pub fn new(
        sender: impl Into<String>,
        body: impl Into<String>,
        sent_at: DateTime<Local>,
    ) -> Self {
        Self {
            sender: sender.into(),
            body: body.into(),
            sent_at,
        }
    }

    /// Message stamped with the current local time.
    pub fn now(sender: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(sender, body, Local::now())
    }

    /// Small header line rendered above the body inside the bubble.
    pub fn header_text(&self) -> String {
        self.sent_at.format("%m/%d/%y %H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn stamp(secs: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 26, 14, 30, secs).unwrap()
    }

    fn hash_of(item: &ChatItem) -> u64 {
        let mut h = DefaultHasher::new();
        item.hash(&mut h);
        h.finish()
    }

    #[test]
    fn equal_fields_are_the_same_key() {
        let a = ChatItem::new("me", "hello", stamp(0));
        let b = ChatItem::new("me", "hello", stamp(0));
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn timestamp_distinguishes_otherwise_identical_messages() {
        let a = ChatItem::new("me", "hello", stamp(0));
        let b = ChatItem::new("me", "hello", stamp(1));
        assert_ne!(a, b);
    }

    #[test]
    fn header_text_is_date_then_clock() {
        let item = ChatItem::new("me", "hello", stamp(0));
        assert_eq!(item.header_text(), "03/26/24 14:30");
    }
}
