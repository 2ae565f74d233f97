//! Shell Session Tests
//!
//! These tests drive the `parley-shell` binary over stdin with scripted
//! sessions and check the frames it prints to stdout.

use assert_cmd::Command;
use predicates::prelude::*;

// ============================================================================
// Test Utilities
// ============================================================================

fn shell_cmd() -> Command {
    Command::cargo_bin("parley-shell").expect("Failed to find parley-shell binary")
}

/// Run a scripted session to completion and return the success assertion.
fn run_session(script: &str) -> assert_cmd::assert::Assert {
    shell_cmd().write_stdin(script).assert().success()
}

// ============================================================================
// Login Screen Tests
// ============================================================================

#[test]
fn test_login_screen_renders_first() {
    run_session("/quit\n")
        .stdout(predicate::str::contains("Welcome 💬"))
        .stdout(predicate::str::contains("Enter Username (e.g., @insta_user)"))
        .stdout(predicate::str::contains("Bye!"));
}

#[test]
fn test_login_reaches_home() {
    run_session("alice\n/quit\n")
        .stdout(predicate::str::contains("Messages - alice"))
        .stdout(predicate::str::contains("1. [P] Person A"))
        .stdout(predicate::str::contains("\"Hey, how are you?\""))
        .stdout(predicate::str::contains("2. [P] Person B"))
        .stdout(predicate::str::contains("\"Check out this photo!\""));
}

#[test]
fn test_empty_username_is_accepted() {
    // A bare Enter signs in with an empty name; the home header drops the
    // "- {username}" suffix.
    run_session("\n/quit\n").stdout(predicate::str::contains("\nMessages\n"));
}

#[test]
fn test_help_on_login_does_not_sign_in() {
    run_session("/help\n/quit\n")
        .stdout(predicate::str::contains(
            "Commands: /quit. Any other line signs in with that username.",
        ))
        .stdout(predicate::str::contains("Messages").not());
}

// ============================================================================
// Home Screen Tests
// ============================================================================

#[test]
fn test_search_filters_contacts() {
    run_session("alice\nB\n/quit\n")
        .stdout(predicate::str::contains("Search: B"))
        .stdout(predicate::str::contains("1. [P] Person B"));
}

#[test]
fn test_search_miss_shows_empty_state() {
    run_session("alice\nzzz\n/quit\n")
        .stdout(predicate::str::contains("(no chats match \"zzz\")"));
}

#[test]
fn test_clear_restores_full_list() {
    let output = shell_cmd()
        .write_stdin("alice\nzzz\n/clear\n/quit\n")
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("(no chats match \"zzz\")"));

    // The last home frame is the one rendered after /clear.
    let last_frame = stdout
        .rfind("Messages - alice")
        .map(|i| &stdout[i..])
        .expect("Should render a home frame after /clear");
    assert!(last_frame.contains("1. [P] Person A"));
    assert!(last_frame.contains("2. [P] Person B"));
    assert!(!last_frame.contains("Search:"));
}

#[test]
fn test_open_out_of_range_reports_status() {
    run_session("alice\n/open 99\n/quit\n")
        .stdout(predicate::str::contains("  ! No chat numbered '99'"));
}

#[test]
fn test_open_typo_filters_instead_of_opening() {
    // "/openfoo" has no delimiter after the command word, so it falls
    // through to the search path like any other line.
    run_session("alice\n/openfoo\n/quit\n")
        .stdout(predicate::str::contains("Search: /openfoo"))
        .stdout(predicate::str::contains("(no chats match \"/openfoo\")"))
        .stdout(predicate::str::contains("No chat numbered").not());
}

#[test]
fn test_open_uses_filtered_numbering() {
    // After filtering down to Person B, entry 1 must open Person B,
    // not the directory's first contact.
    run_session("alice\nB\n/open 1\nhello b\n/quit\n")
        .stdout(predicate::str::contains("\nPerson B\n"))
        .stdout(predicate::str::contains("hello b"));
}

// ============================================================================
// Chat Screen Tests
// ============================================================================

#[test]
fn test_open_chat_seeds_greeting() {
    run_session("alice\n/open 1\n/quit\n")
        .stdout(predicate::str::contains("\nPerson A\n"))
        .stdout(predicate::str::contains("[System - Just now]"))
        .stdout(predicate::str::contains("Welcome to your new chat app!"));
}

#[test]
fn test_compose_appends_message() {
    run_session("alice\n/open 1\nhi there\n/quit\n")
        .stdout(predicate::str::contains("[alice - Just now]"))
        .stdout(predicate::str::contains("hi there"));
}

#[test]
fn test_image_placeholder_reports_unsupported() {
    run_session("alice\n/open 1\n/image\n/quit\n")
        .stdout(predicate::str::contains(
            "  ! Attachment not supported yet: image",
        ));
}

#[test]
fn test_audio_placeholder_reports_unsupported() {
    run_session("alice\n/open 1\n/audio\n/quit\n")
        .stdout(predicate::str::contains(
            "  ! Attachment not supported yet: audio",
        ));
}

#[test]
fn test_back_returns_to_home() {
    let output = shell_cmd()
        .write_stdin("alice\n/open 1\n/back\n/quit\n")
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    let home_frames = stdout.matches("Messages - alice").count();
    assert!(
        home_frames >= 2,
        "Expected a second home frame after /back, got {}",
        home_frames
    );
}

#[test]
fn test_conversation_survives_reopen() {
    let output = shell_cmd()
        .write_stdin("alice\n/open 1\nfirst note\n/back\n/open 1\n/quit\n")
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    // The reopened chat frame still shows the earlier message.
    let last_frame = stdout
        .rfind("\nPerson A\n")
        .map(|i| &stdout[i..])
        .expect("Should render a chat frame after reopening");
    assert!(last_frame.contains("Welcome to your new chat app!"));
    assert!(last_frame.contains("first note"));
}

// ============================================================================
// Full Workflow Tests
// ============================================================================

#[test]
fn test_full_session_workflow() {
    run_session("alice\nB\n/open 1\nsee you at 8\n/back\n/clear\n/quit\n")
        .stdout(predicate::str::contains("Welcome 💬"))
        .stdout(predicate::str::contains("Messages - alice"))
        .stdout(predicate::str::contains("Search: B"))
        .stdout(predicate::str::contains("\nPerson B\n"))
        .stdout(predicate::str::contains("Welcome to your new chat app!"))
        .stdout(predicate::str::contains("see you at 8"))
        .stdout(predicate::str::contains("Bye!"));
}

// ============================================================================
// Exit Behavior Tests
// ============================================================================

#[test]
fn test_eof_exits_cleanly() {
    run_session("alice\n").stdout(predicate::str::contains("Input closed, exiting..."));
}

#[test]
fn test_quit_from_chat() {
    run_session("alice\n/open 2\n/quit\n")
        .stdout(predicate::str::contains("\nPerson B\n"))
        .stdout(predicate::str::contains("Bye!"));
}

// ============================================================================
// Flag Tests
// ============================================================================

#[test]
fn test_help_flag() {
    shell_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("chat mockup"));
}

#[test]
fn test_version_flag() {
    shell_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}
