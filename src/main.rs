//! Parley terminal shell
//!
//! Interactive line-based frontend for the Parley engine: the login, chat
//! list, and conversation screens drawn as plain text, one input line per
//! UI event.
//!
//! ## Usage
//!
//! ```bash
//! # Start the shell
//! parley-shell
//!
//! # With engine debug logs on stderr
//! parley-shell -vv
//! ```

mod render;
mod shell;

use anyhow::Result;
use clap::Parser;

use parley_core::{ChatSession, ContactDirectory, PlaceholderActions};
use shell::Shell;

/// Parley - a tiny chat mockup in the terminal
#[derive(Parser)]
#[command(name = "parley-shell")]
#[command(version = "0.1.0")]
#[command(about = "Parley - a tiny chat mockup in the terminal")]
#[command(
    long_about = "A three-screen chat mockup (login, chat list, conversation) over an in-memory conversation engine. Demo data only; nothing is persisted."
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // Logs go to stderr so frames on stdout stay clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let session = ChatSession::new(ContactDirectory::demo());
    let mut shell = Shell::new(session, Box::new(PlaceholderActions));
    shell.run().await
}
