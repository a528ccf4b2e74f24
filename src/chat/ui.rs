//! Chat mode UI components.

use super::controller::{SessionChange, SessionConfig, SessionObserver};
use super::conversation::Conversation;
use super::message::{Message, Role};
use crate::ui::{Spinner, Style};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(config: &SessionConfig) {
    println!(
        "{} {} - Traducteur Français-Wolof",
        Style::header("jokko"),
        Style::version(format!("v{VERSION}"))
    );
    println!("{}", Style::secondary(config.direction));
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Ba beneen!"));
}

pub fn print_config(config: &SessionConfig, conversation: &Conversation) {
    println!("{}", Style::header("Session"));
    println!(
        "  {}  {}",
        Style::label("direction"),
        Style::value(conversation.direction())
    );
    println!(
        "  {}    {}",
        Style::label("latency"),
        Style::value(format!("{} ms", config.latency.as_millis()))
    );
    println!(
        "  {}  {}",
        Style::label("clipboard"),
        Style::value(if config.clipboard { "on" } else { "off" })
    );
    println!(
        "  {}   {}",
        Style::label("messages"),
        Style::value(conversation.len())
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    let commands = [
        ("/swap", "Switch translation direction"),
        ("/copy [id]", "Copy a reply (default: the latest) to the clipboard"),
        ("/history", "Show the conversation"),
        ("/reset", "Clear the conversation"),
        ("/config", "Show session settings"),
        ("/help", "Show this help"),
        ("/quit", "Exit chat mode"),
    ];
    for (cmd, desc) in commands {
        println!("  {:<12}{}", Style::command(cmd), Style::secondary(desc));
    }
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}

pub fn print_message(message: &Message) {
    let author = match message.role {
        Role::User => Style::user("vous"),
        Role::Assistant => Style::assistant("jokko"),
    };
    let mut meta = vec![
        message.id.to_string(),
        message.timestamp.format("%H:%M").to_string(),
    ];
    if let Some(language) = message.language {
        meta.push(language.to_string());
    }
    println!("{author} {}", Style::secondary(meta.join(" · ")));
    println!("{}", message.content);
    println!();
}

pub fn print_history(conversation: &Conversation) {
    for message in conversation.messages() {
        print_message(message);
    }
}

/// Renders session changes to the terminal.
///
/// Shows a spinner between a submission and its reply.
#[derive(Default)]
pub struct TerminalRenderer {
    spinner: Option<Spinner>,
}

impl SessionObserver for TerminalRenderer {
    fn session_changed(&mut self, conversation: &Conversation, change: SessionChange) {
        match change {
            // The prompt already echoed what the user typed
            SessionChange::UserMessage(_) => {
                self.spinner = Some(Spinner::new("Traduction en cours..."));
            }
            SessionChange::Reply(id) => {
                self.spinner = None;
                if let Some(message) = conversation.get(id) {
                    print_message(message);
                }
            }
            SessionChange::DirectionToggled(direction) => {
                println!("{} {}", Style::success("✓"), Style::value(direction));
                println!();
            }
            SessionChange::Reset => {
                self.spinner = None;
                println!("{} Conversation cleared", Style::success("✓"));
                println!();
                print_history(conversation);
            }
        }
    }
}
