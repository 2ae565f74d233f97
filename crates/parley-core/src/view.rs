//! View model handed to renderers

use serde::{Deserialize, Serialize};

use crate::chat::Message;
use crate::contacts::Contact;
use crate::router::Screen;

/// Read-only snapshot of everything a renderer needs to draw one frame.
///
/// Recomputed by [`ChatSession::view`](crate::session::ChatSession::view)
/// after every state-changing event; renderers own their copy outright, so
/// later session mutations never alter a view model already handed out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewModel {
    /// Which screen to draw
    pub screen: Screen,
    /// Login buffer, doubling as the local user's display name
    pub username: String,
    /// Current contact filter text
    pub search_query: String,
    /// Directory contacts matching the search, in directory order
    pub contacts: Vec<Contact>,
    /// The participant of the open chat, resolved even when the search
    /// filter currently hides them
    pub active_contact: Option<Contact>,
    /// Snapshot of the open conversation's log, oldest first
    pub active_log: Vec<Message>,
}

impl ViewModel {
    /// Title line for the open chat, falling back when the participant is
    /// somehow unresolved.
    pub fn chat_title(&self) -> &str {
        self.active_contact
            .as_ref()
            .map(|c| c.display_name.as_str())
            .unwrap_or("Chat")
    }
}
