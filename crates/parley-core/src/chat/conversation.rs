//! Conversation log for chat sessions
//!
//! A [`Conversation`] owns the ordered message log for one counterpart: an
//! append-only sequence that only grows at the end and is never reordered
//! or mutated in place.

use super::message::Message;
use crate::error::{ChatError, ChatResult};
use crate::types::ContactId;

/// The message log of a conversation with a specific participant.
///
/// Messages are held strictly in insertion order, oldest first. Appending
/// is the only mutation, and a batch is validated in full before any
/// message is admitted: a rejected batch leaves the log untouched, so
/// readers never observe a partial append.
///
/// Ordering is by append sequence, never by timestamp. Client-generated
/// timestamps are not authoritative, so two messages with identical or
/// out-of-order timestamps still display in the order they were appended.
///
/// # Example
///
/// ```ignore
/// let mut convo = Conversation::seeded(
///     ContactId::from("1"),
///     vec![Message::system("Welcome to your new chat app!")],
/// )?;
/// convo.append(vec![Message::local("hi")])?;
/// assert_eq!(convo.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Conversation {
    /// Identifier of the other party
    pub participant: ContactId,
    /// Messages in insertion order (oldest first)
    messages: Vec<Message>,
}

impl Conversation {
    /// Create a new empty conversation log.
    pub fn new(participant: ContactId) -> Self {
        Self {
            participant,
            messages: Vec::new(),
        }
    }

    /// Create a conversation whose log starts as `seed`, in the order given.
    ///
    /// Duplicate ids within the seed are rejected exactly as in
    /// [`Conversation::append`].
    pub fn seeded(participant: ContactId, seed: Vec<Message>) -> ChatResult<Self> {
        let mut conversation = Self::new(participant);
        conversation.append(seed)?;
        Ok(conversation)
    }

    /// Append a batch of messages to the end of the log.
    ///
    /// The result is the existing log followed by `batch` in the order
    /// given. An empty batch is a no-op.
    ///
    /// Fails with [`ChatError::DuplicateMessageId`] when any id in the
    /// batch already exists in the log or occurs twice within the batch;
    /// validation runs before any mutation, so a rejected batch changes
    /// nothing.
    pub fn append(&mut self, batch: Vec<Message>) -> ChatResult<&[Message]> {
        for (i, message) in batch.iter().enumerate() {
            let in_log = self.messages.iter().any(|m| m.id == message.id);
            let in_batch = batch[..i].iter().any(|m| m.id == message.id);
            if in_log || in_batch {
                return Err(ChatError::DuplicateMessageId(message.id.clone()));
            }
        }
        self.messages.extend(batch);
        Ok(&self.messages)
    }

    /// Get all messages in insertion order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Get an owned copy of the log in insertion order.
    ///
    /// Renderers keep this snapshot while the session goes on mutating the
    /// underlying log; later appends never alter a snapshot already handed
    /// out.
    pub fn snapshot(&self) -> Vec<Message> {
        self.messages.clone()
    }

    /// Get the number of messages in the conversation.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Check if the conversation is empty.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Get the most recent message, if any.
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}
