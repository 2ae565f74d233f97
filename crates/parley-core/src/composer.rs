//! Composer capability actions
//!
//! The attachment buttons next to the text input are capabilities the
//! environment injects, not engine features: the conversation log only ever
//! changes through append. Frontends hold a [`ComposerActions`]
//! implementation and invoke it when the user picks an attachment action.

use serde::{Deserialize, Serialize};

use crate::error::{ChatError, ChatResult};

/// Kinds of attachment the composer can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttachmentKind {
    /// A picture from the image picker
    Image,
    /// A clip from the audio recorder
    Audio,
}

impl std::fmt::Display for AttachmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Image => write!(f, "image"),
            Self::Audio => write!(f, "audio"),
        }
    }
}

/// Capability interface behind the composer's attachment buttons.
pub trait ComposerActions {
    /// Open the image picker.
    fn send_image(&mut self) -> ChatResult<()>;

    /// Open the audio recorder.
    fn send_audio(&mut self) -> ChatResult<()>;

    /// Dismiss the action menu without doing anything.
    fn cancel(&mut self);
}

/// The stock placeholder implementation: every attachment action reports
/// "not supported yet" and leaves the conversation log untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderActions;

impl ComposerActions for PlaceholderActions {
    fn send_image(&mut self) -> ChatResult<()> {
        Err(ChatError::AttachmentUnsupported(AttachmentKind::Image))
    }

    fn send_audio(&mut self) -> ChatResult<()> {
        Err(ChatError::AttachmentUnsupported(AttachmentKind::Audio))
    }

    fn cancel(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_actions_report_unsupported() {
        let mut actions = PlaceholderActions;

        assert!(matches!(
            actions.send_image(),
            Err(ChatError::AttachmentUnsupported(AttachmentKind::Image))
        ));
        assert!(matches!(
            actions.send_audio(),
            Err(ChatError::AttachmentUnsupported(AttachmentKind::Audio))
        ));

        // Cancel must stay a no-op.
        actions.cancel();
    }

    #[test]
    fn test_attachment_kind_display() {
        assert_eq!(AttachmentKind::Image.to_string(), "image");
        assert_eq!(AttachmentKind::Audio.to_string(), "audio");
    }
}
