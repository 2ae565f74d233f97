//! Error types for Parley

use thiserror::Error;

use crate::composer::AttachmentKind;
use crate::types::{ContactId, MessageId};

/// Main error type for Parley engine operations
#[derive(Error, Debug)]
pub enum ChatError {
    /// A message with this id already exists in the conversation log
    #[error("Duplicate message id: {0}")]
    DuplicateMessageId(MessageId),

    /// The participant id is not present in the contact directory
    #[error("Unknown participant: {0}")]
    UnknownParticipant(ContactId),

    /// The composer action behind this attachment kind is a placeholder
    #[error("Attachment not supported yet: {0}")]
    AttachmentUnsupported(AttachmentKind),

    /// A message was composed while no chat screen was open
    #[error("No conversation is open")]
    NoActiveConversation,
}

/// Result type alias using ChatError
pub type ChatResult<T> = Result<T, ChatError>;
