//! Session layer: input events in, view models out
//!
//! [`ChatSession`] is the stateful facade a frontend owns. It holds the
//! screen router, the contact directory, the per-participant conversation
//! logs, and the two input buffers, and maps discrete UI events onto state
//! changes. Everything is synchronous and runs on the frontend's event
//! loop; a session belongs to exactly one frontend, so there is no locking.
//!
//! # Usage
//!
//! ```ignore
//! let mut session = ChatSession::new(ContactDirectory::demo());
//!
//! session.set_username("@insta_user");
//! session.submit_login();
//! session.select_contact(&ContactId::from("1"))?;
//! session.compose_message("hi")?;
//!
//! let view = session.view();
//! assert_eq!(view.active_log.len(), 2); // greeting + "hi"
//! ```

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::chat::{Conversation, Message};
use crate::contacts::ContactDirectory;
use crate::error::{ChatError, ChatResult};
use crate::router::{Screen, ScreenRouter};
use crate::types::ContactId;
use crate::view::ViewModel;

/// Text of the system message every conversation is seeded with.
pub const WELCOME_MESSAGE: &str = "Welcome to your new chat app!";

/// Stateful facade mapping input events onto engine state.
///
/// Conversations are created lazily: the first time a contact is selected,
/// their log is created and seeded with the system greeting; re-opening the
/// same contact later in the session reuses the existing log. Nothing is
/// persisted, so dropping the session drops all logs.
#[derive(Debug)]
pub struct ChatSession {
    directory: ContactDirectory,
    router: ScreenRouter,
    conversations: HashMap<ContactId, Conversation>,
    username: String,
    search_query: String,
}

impl ChatSession {
    /// Create a session over the given directory, showing the login screen.
    pub fn new(directory: ContactDirectory) -> Self {
        Self {
            directory,
            router: ScreenRouter::new(),
            conversations: HashMap::new(),
            username: String::new(),
            search_query: String::new(),
        }
    }

    /// The screen currently shown.
    pub fn screen(&self) -> &Screen {
        self.router.screen()
    }

    /// The contact directory this session serves.
    pub fn directory(&self) -> &ContactDirectory {
        &self.directory
    }

    /// Update the username buffer.
    ///
    /// The value doubles as the local user's display name once logged in.
    pub fn set_username(&mut self, text: impl Into<String>) {
        self.username = text.into();
    }

    /// Submit the login form.
    ///
    /// Any username is accepted, including an empty one. Ignored when not
    /// on the login screen.
    pub fn submit_login(&mut self) {
        if self.router.complete_login() {
            debug!(username = %self.username, "Login submitted");
        }
    }

    /// Update the contact filter text.
    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.search_query = text.into();
    }

    /// Open the conversation with `participant`.
    ///
    /// Seeds a fresh log with the system greeting on first open; later
    /// opens reuse the existing log. Fails with
    /// [`ChatError::UnknownParticipant`] when the id is not in the
    /// directory, which frontends surface as ignored navigation. Ignored
    /// while still on the login screen.
    pub fn select_contact(&mut self, participant: &ContactId) -> ChatResult<()> {
        if !self.directory.contains(participant) {
            warn!(%participant, "Selected participant is not in the directory");
            return Err(ChatError::UnknownParticipant(participant.clone()));
        }
        if matches!(self.router.screen(), Screen::Login) {
            debug!(%participant, "Contact selection ignored on the login screen");
            return Ok(());
        }
        if !self.conversations.contains_key(participant) {
            let seeded = Conversation::seeded(
                participant.clone(),
                vec![Message::system(WELCOME_MESSAGE)],
            )?;
            self.conversations.insert(participant.clone(), seeded);
            debug!(%participant, "Conversation created and seeded");
        }
        self.router.open_chat(participant.clone());
        debug!(screen = %self.router.screen(), "Navigated");
        Ok(())
    }

    /// Compose a text message from the local user and append it to the
    /// open conversation.
    ///
    /// The message gets a fresh id and the current timestamp. Fails with
    /// [`ChatError::NoActiveConversation`] when no chat screen is open.
    pub fn compose_message(&mut self, text: impl Into<String>) -> ChatResult<Message> {
        let participant = match self.router.screen() {
            Screen::Chat(id) => id.clone(),
            _ => return Err(ChatError::NoActiveConversation),
        };
        let message = Message::local(text);
        let conversation = self
            .conversations
            .get_mut(&participant)
            .ok_or(ChatError::NoActiveConversation)?;
        conversation.append(vec![message.clone()])?;
        debug!(%participant, id = %message.id, "Message appended");
        Ok(message)
    }

    /// Leave the open chat and return to the home screen.
    ///
    /// Ignored when no chat is open.
    pub fn go_back(&mut self) {
        if self.router.close_chat() {
            debug!(screen = %self.router.screen(), "Navigated back");
        }
    }

    /// Recompute the view model for the current state.
    pub fn view(&self) -> ViewModel {
        let contacts = self
            .directory
            .search(&self.search_query)
            .into_iter()
            .cloned()
            .collect();
        let (active_contact, active_log) = match self.router.screen() {
            Screen::Chat(id) => (
                self.directory.get(id).cloned(),
                self.conversations
                    .get(id)
                    .map(Conversation::snapshot)
                    .unwrap_or_default(),
            ),
            _ => (None, Vec::new()),
        };
        ViewModel {
            screen: self.router.screen().clone(),
            username: self.username.clone(),
            search_query: self.search_query.clone(),
            contacts,
            active_contact,
            active_log,
        }
    }
}
