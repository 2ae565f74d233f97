//! Conversation state management
//!
//! This module is the hard core of the engine: the ordered, append-only
//! message log and the entries it holds. Everything else in the crate is
//! plumbing that feeds it input events or reads views out of it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session layer (session module)                             │
//! │  - ChatSession: maps input events onto state changes        │
//! │  - ViewModel: read-only snapshot handed to renderers        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Chat layer (this module)                                   │
//! │  - Message: display-ready log entry with immutable id       │
//! │  - Conversation: append-only ordered log per counterpart    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Rendering (frontend packages)                              │
//! │  - terminal shell / one-shot CLI draw the view model        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let mut convo = Conversation::seeded(
//!     ContactId::from("1"),
//!     vec![Message::system("Welcome to your new chat app!")],
//! )?;
//!
//! convo.append(vec![Message::local("hi")])?;
//!
//! for msg in convo.messages() {
//!     println!("[{}] {}", msg.relative_time(), msg.text);
//! }
//! ```

mod conversation;
mod message;

pub use conversation::Conversation;
pub use message::{Message, Sender};
