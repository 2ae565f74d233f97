//! Interactive shell loop
//!
//! One stdin line per input event, a full re-render after every line. The
//! shell owns the session and the injected composer actions; all chat
//! state lives in the engine, so this file is only dispatch and I/O.

use anyhow::Result;
use tokio::io::AsyncBufReadExt;
use tracing::debug;

use parley_core::{ChatSession, ComposerActions, Screen};

use crate::render;

/// Outcome of handling one input line.
#[derive(Debug, PartialEq)]
enum Flow {
    Continue,
    Quit,
}

/// The interactive terminal frontend.
pub struct Shell {
    session: ChatSession,
    actions: Box<dyn ComposerActions>,
    /// One-line notice shown in the next frame, then cleared
    status: Option<String>,
}

impl Shell {
    /// Create a shell over a session with the given composer actions.
    pub fn new(session: ChatSession, actions: Box<dyn ComposerActions>) -> Self {
        Self {
            session,
            actions,
            status: None,
        }
    }

    /// Run the interactive loop until `/quit`, EOF, or Ctrl+C.
    pub async fn run(&mut self) -> Result<()> {
        self.render();

        let stdin = tokio::io::stdin();
        let reader = tokio::io::BufReader::new(stdin);
        let mut lines = reader.lines();

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    match line {
                        Ok(Some(text)) => {
                            if self.handle_line(text.trim()) == Flow::Quit {
                                println!("Bye!");
                                break;
                            }
                            self.render();
                        }
                        Ok(None) => {
                            // EOF - stdin closed
                            println!();
                            println!("Input closed, exiting...");
                            break;
                        }
                        Err(e) => {
                            eprintln!("Read error: {}", e);
                        }
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    println!();
                    println!("Exiting...");
                    break;
                }
            }
        }

        Ok(())
    }

    fn render(&mut self) {
        let view = self.session.view();
        let status = self.status.take();
        render::draw(&view, status.as_deref());
    }

    /// Dispatch one trimmed input line against the current screen.
    fn handle_line(&mut self, line: &str) -> Flow {
        match line {
            "/quit" => return Flow::Quit,
            "/help" => {
                self.status = Some(render::help_text(self.session.screen()).to_string());
                return Flow::Continue;
            }
            _ => {}
        }

        let screen = self.session.screen().clone();
        debug!(%screen, "Handling input line");
        match screen {
            Screen::Login => self.handle_login_line(line),
            Screen::Home => self.handle_home_line(line),
            Screen::Chat(_) => self.handle_chat_line(line),
        }
        Flow::Continue
    }

    fn handle_login_line(&mut self, line: &str) {
        // Any username is accepted, even an empty one.
        self.session.set_username(line);
        self.session.submit_login();
    }

    fn handle_home_line(&mut self, line: &str) {
        // "/open" is only a command when bare or followed by a space;
        // a glued line like "/openfoo" is a search query.
        let open_choice = match line.strip_prefix("/open") {
            Some(rest) if rest.is_empty() || rest.starts_with(' ') => Some(rest.trim()),
            _ => None,
        };

        if let Some(choice) = open_choice {
            // Index into the currently displayed (filtered) list, 1-based.
            let contacts = self.session.view().contacts;
            let selected = choice
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| contacts.get(i).cloned());
            match selected {
                Some(contact) => {
                    if let Err(e) = self.session.select_contact(&contact.id) {
                        self.status = Some(e.to_string());
                    }
                }
                None => self.status = Some(format!("No chat numbered '{}'", choice)),
            }
        } else if line == "/clear" {
            self.session.set_search_query("");
        } else {
            self.session.set_search_query(line);
        }
    }

    fn handle_chat_line(&mut self, line: &str) {
        match line {
            "/back" => self.session.go_back(),
            "/image" => {
                if let Err(e) = self.actions.send_image() {
                    self.status = Some(e.to_string());
                }
            }
            "/audio" => {
                if let Err(e) = self.actions.send_audio() {
                    self.status = Some(e.to_string());
                }
            }
            "/cancel" => self.actions.cancel(),
            "" => {}
            _ => {
                if let Err(e) = self.session.compose_message(line) {
                    self.status = Some(e.to_string());
                }
            }
        }
    }
}
