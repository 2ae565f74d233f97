//! Message records for the conversation log
//!
//! This module provides the [`Message`] struct which represents a single
//! display-ready entry in a conversation log, and [`Sender`], the closed
//! set of parties a message can originate from.

use serde::{Deserialize, Serialize};

use crate::types::MessageId;

/// The party a message originates from.
///
/// The mockup knows exactly three: the local user typing into the composer,
/// the counterpart the conversation is with, and the system itself (used
/// for the seeded greeting).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    /// Typed by the local user
    Local,
    /// Sent by the conversation counterpart
    Counterpart,
    /// Produced by the application itself
    System,
}

impl Sender {
    /// Whether the message was sent by the local user
    pub fn is_local(&self) -> bool {
        matches!(self, Sender::Local)
    }

    /// Whether the message was produced by the application itself
    pub fn is_system(&self) -> bool {
        matches!(self, Sender::System)
    }
}

/// A display-ready chat message.
///
/// Identity lives in `id`, assigned once at construction: log position is
/// never used to refer to a message, so reordering or future deletion
/// cannot corrupt references.
///
/// # Example
///
/// ```ignore
/// let message = Message::local("Hello!");
/// assert!(message.sender.is_local());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier, never reused within a conversation
    pub id: MessageId,
    /// Message text
    pub text: String,
    /// Creation time as Unix milliseconds
    pub timestamp: i64,
    /// Who the message is from
    pub sender: Sender,
}

impl Message {
    /// Create a new message with a fresh id and the current timestamp.
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            text: text.into(),
            timestamp: chrono::Utc::now().timestamp_millis(),
            sender,
        }
    }

    /// Create a message typed by the local user.
    pub fn local(text: impl Into<String>) -> Self {
        Self::new(Sender::Local, text)
    }

    /// Create a message from the conversation counterpart.
    pub fn counterpart(text: impl Into<String>) -> Self {
        Self::new(Sender::Counterpart, text)
    }

    /// Create a system message, such as the seeded greeting.
    pub fn system(text: impl Into<String>) -> Self {
        Self::new(Sender::System, text)
    }

    /// Replace the id with a freshly generated one.
    ///
    /// The recovery path for a `DuplicateMessageId` rejection: a log never
    /// accepts a reused id, so the caller regenerates and retries.
    pub fn with_fresh_id(mut self) -> Self {
        self.id = MessageId::new();
        self
    }

    /// Render the timestamp as a relative age.
    ///
    /// Produces "Just now", "5m ago", "2h ago", "Yesterday" and so on.
    pub fn relative_time(&self) -> String {
        let now = chrono::Utc::now().timestamp_millis();
        let diff_ms = now - self.timestamp;
        let diff_secs = diff_ms / 1000;

        if diff_secs < 60 {
            "Just now".to_string()
        } else if diff_secs < 3600 {
            format!("{}m ago", diff_secs / 60)
        } else if diff_secs < 86400 {
            format!("{}h ago", diff_secs / 3600)
        } else if diff_secs < 172800 {
            "Yesterday".to_string()
        } else {
            format!("{}d ago", diff_secs / 86400)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_creation() {
        let msg = Message::new(Sender::Counterpart, "Hello, world!");

        assert_eq!(msg.text, "Hello, world!");
        assert_eq!(msg.sender, Sender::Counterpart);
        assert!(msg.timestamp > 0);
    }

    #[test]
    fn test_constructors_set_sender() {
        assert_eq!(Message::local("a").sender, Sender::Local);
        assert_eq!(Message::counterpart("b").sender, Sender::Counterpart);
        assert_eq!(Message::system("c").sender, Sender::System);
    }

    #[test]
    fn test_fresh_ids_are_distinct() {
        let a = Message::local("same text");
        let b = Message::local("same text");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_with_fresh_id_changes_only_id() {
        let original = Message::local("hi");
        let old_id = original.id.clone();
        let refreshed = original.clone().with_fresh_id();

        assert_ne!(refreshed.id, old_id);
        assert_eq!(refreshed.text, original.text);
        assert_eq!(refreshed.sender, original.sender);
        assert_eq!(refreshed.timestamp, original.timestamp);
    }

    #[test]
    fn test_sender_helpers() {
        assert!(Sender::Local.is_local());
        assert!(!Sender::Local.is_system());
        assert!(Sender::System.is_system());
        assert!(!Sender::Counterpart.is_local());
    }

    #[test]
    fn test_relative_time_just_now() {
        let msg = Message::local("hi");
        assert_eq!(msg.relative_time(), "Just now");
    }

    #[test]
    fn test_relative_time_minutes() {
        let mut msg = Message::local("hi");
        msg.timestamp -= 5 * 60 * 1000;
        assert_eq!(msg.relative_time(), "5m ago");
    }

    #[test]
    fn test_relative_time_yesterday() {
        let mut msg = Message::local("hi");
        msg.timestamp -= 30 * 3600 * 1000;
        assert_eq!(msg.relative_time(), "Yesterday");
    }
}
