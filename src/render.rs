//! Text rendering for the shell
//!
//! Pure functions from view model to stdout lines. No state and no engine
//! calls here, so every frame is reproducible from a view model alone.

use parley_core::{Screen, Sender, ViewModel};

const RULE_WIDTH: usize = 50;

/// Draw one full frame for the current view, with an optional one-line
/// status notice between the screen body and the input hint.
pub fn draw(view: &ViewModel, status: Option<&str>) {
    match &view.screen {
        Screen::Login => draw_login(),
        Screen::Home => draw_home(view),
        Screen::Chat(_) => draw_chat(view),
    }
    if let Some(note) = status {
        println!("  ! {}", note);
    }
    println!("{}", hint(&view.screen));
    println!();
}

fn rule() -> String {
    "─".repeat(RULE_WIDTH)
}

fn draw_login() {
    println!("{}", rule());
    println!("Welcome 💬");
    println!("{}", rule());
    println!("Enter Username (e.g., @insta_user)");
}

fn draw_home(view: &ViewModel) {
    println!("{}", rule());
    if view.username.is_empty() {
        println!("Messages");
    } else {
        println!("Messages - {}", view.username);
    }
    println!("{}", rule());
    if !view.search_query.is_empty() {
        println!("Search: {}", view.search_query);
    }
    if view.contacts.is_empty() {
        println!("  (no chats match \"{}\")", view.search_query);
    } else {
        for (i, contact) in view.contacts.iter().enumerate() {
            println!(
                "  {}. [{}] {}",
                i + 1,
                contact.avatar_initial(),
                contact.display_name
            );
            println!("     \"{}\"", contact.preview);
        }
    }
}

fn draw_chat(view: &ViewModel) {
    println!("{}", rule());
    println!("{}", view.chat_title());
    println!("{}", rule());
    if view.active_log.is_empty() {
        println!("  (no messages yet)");
    } else {
        for msg in &view.active_log {
            println!("  [{} - {}]", sender_label(msg.sender, view), msg.relative_time());
            println!("    {}", msg.text);
            println!();
        }
    }
}

/// Resolve the label shown next to a message.
///
/// Local messages carry the username entered at login, falling back to a
/// neutral label when it was left empty; counterpart messages carry the
/// chat title.
fn sender_label(sender: Sender, view: &ViewModel) -> &str {
    match sender {
        Sender::Local if view.username.is_empty() => "You",
        Sender::Local => &view.username,
        Sender::Counterpart => view.chat_title(),
        Sender::System => "System",
    }
}

fn hint(screen: &Screen) -> &'static str {
    match screen {
        Screen::Login => "Type a username and press Enter. (/help, /quit)",
        Screen::Home => "Search chats... (/open <n>, /clear, /help, /quit)",
        Screen::Chat(_) => "Type a message... (/image, /audio, /back, /help, /quit)",
    }
}

/// Expanded command help for the current screen, shown by `/help`.
pub fn help_text(screen: &Screen) -> &'static str {
    match screen {
        Screen::Login => "Commands: /quit. Any other line signs in with that username.",
        Screen::Home => {
            "Commands: /open <n>, /clear, /quit. Any other line filters chats by name."
        }
        Screen::Chat(_) => {
            "Commands: /image, /audio, /cancel, /back, /quit. Any other line is sent as a message."
        }
    }
}
