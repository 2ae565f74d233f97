//! Parley CLI
//!
//! Thin wrapper around parley-core for one-shot command-line usage. Every
//! invocation starts from the demo contact directory and a freshly seeded
//! conversation, so nothing persists between commands.
//!
//! ## Usage
//!
//! ```bash
//! # List the demo contacts
//! parley contacts
//!
//! # Filter contacts by display name
//! parley search person
//!
//! # Print the seeded conversation with a contact
//! parley show 1
//!
//! # Append messages and print the resulting log
//! parley send 1 "hi" "are you around?"
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use parley_core::{
    ChatError, Contact, ContactDirectory, ContactId, Conversation, Message, Sender,
    WELCOME_MESSAGE,
};
use tracing::debug;

/// Parley - chat mockup CLI
#[derive(Parser)]
#[command(name = "parley")]
#[command(version = "0.1.0")]
#[command(about = "Parley - chat mockup CLI")]
#[command(
    long_about = "One-shot chat mockup commands against the Parley demo contact directory. Conversations are seeded fresh on every invocation, so the output is fully reproducible."
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all contacts
    Contacts,

    /// Filter contacts by display name
    Search {
        /// Case-insensitive substring to match
        query: String,
    },

    /// Print the seeded conversation with a contact
    Show {
        /// Contact id (e.g. 1)
        contact_id: String,
    },

    /// Append messages to a seeded conversation and print the log
    Send {
        /// Contact id (e.g. 1)
        contact_id: String,

        /// Message texts to append, in order
        #[arg(required = true)]
        messages: Vec<String>,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // Logs go to stderr so command output on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Look up a contact by id, failing with `UnknownParticipant` on a miss.
fn lookup_contact<'a>(directory: &'a ContactDirectory, contact_id: &str) -> Result<&'a Contact> {
    let id = ContactId::from(contact_id);
    directory
        .get(&id)
        .ok_or_else(|| ChatError::UnknownParticipant(id).into())
}

/// Build the conversation a contact starts with: just the greeting.
fn seeded_conversation(contact: &Contact) -> Result<Conversation> {
    debug!(participant = %contact.id, "seeding conversation with greeting");
    let conversation = Conversation::seeded(
        contact.id.clone(),
        vec![Message::system(WELCOME_MESSAGE)],
    )?;
    Ok(conversation)
}

fn print_contact(contact: &Contact) {
    println!("  [{}] {}", contact.avatar_initial(), contact.display_name);
    println!("      id: {}", contact.id);
    println!("      \"{}\"", contact.preview);
}

fn print_conversation(conversation: &Conversation, contact: &Contact) {
    println!("Conversation with {}:", contact.display_name);
    println!("Messages: {}", conversation.len());
    println!();
    for msg in conversation.messages() {
        let label = match msg.sender {
            Sender::Local => "You",
            Sender::Counterpart => contact.display_name.as_str(),
            Sender::System => "System",
        };
        println!("  [{} - {}]", label, msg.relative_time());
        println!("    {}", msg.text);
        println!();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match cli.command {
        Commands::Contacts => {
            let directory = ContactDirectory::demo();
            println!("Contacts ({}):", directory.len());
            println!();
            for contact in directory.all() {
                print_contact(contact);
            }
        }

        Commands::Search { query } => {
            let directory = ContactDirectory::demo();
            let matches = directory.search(&query);
            if matches.is_empty() {
                println!("No contacts match \"{}\".", query);
            } else {
                println!("Contacts ({}):", matches.len());
                println!();
                for contact in matches {
                    print_contact(contact);
                }
            }
        }

        Commands::Show { contact_id } => {
            let directory = ContactDirectory::demo();
            let contact = lookup_contact(&directory, &contact_id)?;
            let conversation = seeded_conversation(contact)?;
            print_conversation(&conversation, contact);
        }

        Commands::Send {
            contact_id,
            messages,
        } => {
            let directory = ContactDirectory::demo();
            let contact = lookup_contact(&directory, &contact_id)?;
            let mut conversation = seeded_conversation(contact)?;

            let batch: Vec<Message> = messages.into_iter().map(Message::local).collect();
            // append returns the whole log, so count the batch itself.
            let sent = batch.len();
            conversation.append(batch)?;

            println!("Sent {} message(s) to {}.", sent, contact.display_name);
            println!();
            print_conversation(&conversation, contact);
        }
    }

    Ok(())
}
