//! Conversation log and the one-turn-at-a-time state machine.

use chrono::{DateTime, Local};

use super::message::{Message, MessageId};
use crate::translation::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    Idle,
    AwaitingTranslation,
}

/// Why a submission was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The input was empty or whitespace only.
    EmptyInput,
    /// A translation is already in flight.
    Busy,
}

/// A turn whose reply has not been appended yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub user_message: MessageId,
    pub text: String,
    /// Direction active when the turn was submitted.
    pub direction: Direction,
    epoch: u64,
}

/// Per-session message log, active direction and in-flight flag.
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<Message>,
    direction: Direction,
    state: TurnState,
    next_id: u64,
    /// Bumped by every reset so replies from an older log are never appended.
    epoch: u64,
}

impl Conversation {
    /// Starts a conversation seeded with the greeting.
    pub fn new(direction: Direction, now: DateTime<Local>) -> Self {
        let mut conversation = Self {
            messages: Vec::new(),
            direction,
            state: TurnState::Idle,
            next_id: 1,
            epoch: 0,
        };
        let id = conversation.allocate_id();
        conversation.messages.push(Message::greeting(id, now));
        conversation
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn get(&self, id: MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    pub fn last_reply(&self) -> Option<&Message> {
        self.messages.iter().rev().find(|m| m.original.is_some())
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    pub const fn state(&self) -> TurnState {
        self.state
    }

    pub fn is_awaiting(&self) -> bool {
        self.state == TurnState::AwaitingTranslation
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Appends the user message and moves to `AwaitingTranslation`.
    pub(crate) fn begin_turn(
        &mut self,
        text: &str,
        now: DateTime<Local>,
    ) -> Result<Turn, IgnoreReason> {
        if text.trim().is_empty() {
            return Err(IgnoreReason::EmptyInput);
        }
        if self.is_awaiting() {
            return Err(IgnoreReason::Busy);
        }

        let id = self.allocate_id();
        let direction = self.direction;
        self.messages.push(Message::user(
            id,
            text.to_string(),
            direction.source,
            now,
        ));
        self.state = TurnState::AwaitingTranslation;
        tracing::debug!(id = id.0, direction = %direction.key(), "turn started");

        Ok(Turn {
            user_message: id,
            text: text.to_string(),
            direction,
            epoch: self.epoch,
        })
    }

    /// Appends the reply for `turn` and returns to `Idle`.
    ///
    /// Returns `None` without touching the log if a reset happened since the
    /// turn began.
    pub(crate) fn complete_turn(
        &mut self,
        turn: Turn,
        translation: String,
        now: DateTime<Local>,
    ) -> Option<MessageId> {
        if turn.epoch != self.epoch {
            tracing::debug!(id = turn.user_message.0, "dropping reply from before reset");
            return None;
        }

        let id = self.allocate_id();
        self.messages.push(Message::reply(
            id,
            translation,
            turn.direction.target,
            turn.text,
            now,
        ));
        self.state = TurnState::Idle;
        tracing::debug!(id = id.0, "turn completed");
        Some(id)
    }

    /// Flips the active direction. The log is untouched.
    pub fn toggle_direction(&mut self) -> Direction {
        self.direction = self.direction.reversed();
        self.direction
    }

    /// Replaces the log with a fresh greeting and returns to `Idle`.
    ///
    /// Ids keep counting up from where they were.
    pub(crate) fn reset(&mut self, now: DateTime<Local>) {
        self.epoch += 1;
        self.messages.clear();
        let id = self.allocate_id();
        self.messages.push(Message::greeting(id, now));
        self.state = TurnState::Idle;
    }

    const fn allocate_id(&mut self) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        id
    }
}
