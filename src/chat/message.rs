use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;

use crate::translation::Language;

/// Greeting that opens every session and every reset.
pub const GREETING: &str = "Salaam aleekum ! Je suis votre assistant de traduction français-wolof. \
     Tapez votre texte et je le traduirai pour vous.";

/// Session-unique, creation-ordered message identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// An entry in the conversation log. Never mutated once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub id: MessageId,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Local>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    /// The user input this reply translates. Only set on assistant replies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
}

impl Message {
    pub(crate) fn greeting(id: MessageId, timestamp: DateTime<Local>) -> Self {
        Self {
            id,
            role: Role::Assistant,
            content: GREETING.to_string(),
            timestamp,
            language: None,
            original: None,
        }
    }

    pub(crate) fn user(
        id: MessageId,
        content: String,
        language: Language,
        timestamp: DateTime<Local>,
    ) -> Self {
        Self {
            id,
            role: Role::User,
            content,
            timestamp,
            language: Some(language),
            original: None,
        }
    }

    pub(crate) fn reply(
        id: MessageId,
        content: String,
        language: Language,
        original: String,
        timestamp: DateTime<Local>,
    ) -> Self {
        Self {
            id,
            role: Role::Assistant,
            content,
            timestamp,
            language: Some(language),
            original: Some(original),
        }
    }

    pub fn is_assistant(&self) -> bool {
        self.role == Role::Assistant
    }
}

/// Source of message timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
