//! Screen routing
//!
//! An explicit finite-state machine over the three screens of the app.
//! Every legal transition is a named method; calling a transition from the
//! wrong screen is ignored, so a stray event can never land the app on an
//! unreachable screen.

use serde::{Deserialize, Serialize};

use crate::types::ContactId;

/// The three screens of the app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    /// Username entry, where the app starts
    Login,
    /// Contact list with search
    Home,
    /// Conversation with one participant
    Chat(ContactId),
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Login => write!(f, "Login"),
            Self::Home => write!(f, "Home"),
            Self::Chat(id) => write!(f, "Chat({})", id),
        }
    }
}

/// Finite-state machine over [`Screen`].
///
/// Each transition reports whether it actually happened. The conversation
/// store holds no navigation state at all; this router is the single owner
/// of "which screen are we on".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenRouter {
    current: Screen,
}

impl ScreenRouter {
    /// Create a router showing the login screen.
    pub fn new() -> Self {
        Self {
            current: Screen::Login,
        }
    }

    /// The screen currently shown.
    pub fn screen(&self) -> &Screen {
        &self.current
    }

    /// Login -> Home. Ignored on any other screen.
    pub fn complete_login(&mut self) -> bool {
        if self.current == Screen::Login {
            self.current = Screen::Home;
            true
        } else {
            false
        }
    }

    /// Home -> Chat, or Chat -> Chat with a different participant.
    /// Ignored on the login screen.
    pub fn open_chat(&mut self, participant: ContactId) -> bool {
        match self.current {
            Screen::Home | Screen::Chat(_) => {
                self.current = Screen::Chat(participant);
                true
            }
            Screen::Login => false,
        }
    }

    /// Chat -> Home. Ignored elsewhere.
    pub fn close_chat(&mut self) -> bool {
        if matches!(self.current, Screen::Chat(_)) {
            self.current = Screen::Home;
            true
        } else {
            false
        }
    }
}

impl Default for ScreenRouter {
    fn default() -> Self {
        Self::new()
    }
}
