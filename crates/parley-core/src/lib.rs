//! Parley Core Library
//!
//! The conversation-state engine behind a minimal chat mockup.
//!
//! ## Overview
//!
//! Parley is a three-screen chat app (login, contact list, conversation)
//! with hard-coded demo data and no persistence, networking, or backend.
//! This crate is the part with real invariants: an append-only ordered
//! message log per conversation, a searchable contact directory, an
//! explicit screen router, and a session layer that turns input events
//! into state changes and read-only view models. No UI toolkit appears
//! here; frontends own the rendering.
//!
//! ## Core Principles
//!
//! - **Append-only**: a conversation log only ever grows at the end
//! - **Identity, not position**: messages are referenced by immutable ids
//! - **One writer**: all state is owned by a single frontend event loop
//!
//! ## Quick Start
//!
//! ```ignore
//! use parley_core::{ChatSession, ContactDirectory, ContactId};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut session = ChatSession::new(ContactDirectory::demo());
//!
//!     session.set_username("@insta_user");
//!     session.submit_login();
//!     session.select_contact(&ContactId::from("1"))?;
//!     session.compose_message("hi")?;
//!
//!     for msg in &session.view().active_log {
//!         println!("[{}] {}", msg.relative_time(), msg.text);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod chat;
pub mod composer;
pub mod contacts;
pub mod error;
pub mod router;
pub mod session;
pub mod types;
pub mod view;

// Re-exports
pub use chat::{Conversation, Message, Sender};
pub use composer::{AttachmentKind, ComposerActions, PlaceholderActions};
pub use contacts::{Contact, ContactDirectory};
pub use error::{ChatError, ChatResult};
pub use router::{Screen, ScreenRouter};
pub use session::{ChatSession, WELCOME_MESSAGE};
pub use types::{ContactId, MessageId};
pub use view::ViewModel;
