//! Orchestrates a chat session: submission, direction toggling, reset and copy.

use std::time::Duration;
use tokio::time::Instant;

use super::clipboard::{Clipboard, SystemClipboard};
use super::conversation::{Conversation, IgnoreReason, Turn};
use super::message::{Clock, MessageId, SystemClock};
use crate::translation::{Direction, LookupEngine};

/// Default artificial translation latency.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1000);

/// Settings for a chat session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Direction the session starts in.
    pub direction: Direction,
    /// Delay between a submission and its reply.
    pub latency: Duration,
    /// Whether `/copy` uses the system clipboard.
    pub clipboard: bool,
}

impl SessionConfig {
    pub const fn new(direction: Direction, latency: Duration, clipboard: bool) -> Self {
        Self {
            direction,
            latency,
            clipboard,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(Direction::default(), DEFAULT_LATENCY, true)
    }
}

/// What changed in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionChange {
    UserMessage(MessageId),
    Reply(MessageId),
    DirectionToggled(Direction),
    Reset,
}

/// A rendering surface, notified after every mutation.
pub trait SessionObserver {
    fn session_changed(&mut self, conversation: &Conversation, change: SessionChange);
}

/// Outcome of [`ChatController::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Accepted(MessageId),
    Ignored(IgnoreReason),
}

/// Outcome of [`ChatController::copy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    /// No assistant message with that id.
    Unavailable,
    /// The clipboard rejected the write; details went to the log.
    Failed,
}

struct PendingReply {
    turn: Turn,
    ready_at: Instant,
}

/// One chat session.
///
/// Owns its conversation; any number of controllers can share one dictionary.
pub struct ChatController {
    engine: LookupEngine,
    conversation: Conversation,
    latency: Duration,
    clock: Box<dyn Clock>,
    clipboard: Box<dyn Clipboard>,
    observer: Option<Box<dyn SessionObserver>>,
    pending: Option<PendingReply>,
}

impl ChatController {
    pub fn new(engine: LookupEngine, config: &SessionConfig) -> Self {
        let clock = SystemClock;
        Self {
            engine,
            conversation: Conversation::new(config.direction, clock.now()),
            latency: config.latency,
            clock: Box::new(clock),
            clipboard: Box::new(SystemClipboard),
            observer: None,
            pending: None,
        }
    }

    /// Replaces the timestamp source. The seeded greeting is re-stamped.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.conversation = Conversation::new(self.conversation.direction(), clock.now());
        self.clock = Box::new(clock);
        self
    }

    #[must_use]
    pub fn with_clipboard(mut self, clipboard: impl Clipboard + 'static) -> Self {
        self.clipboard = Box::new(clipboard);
        self
    }

    #[must_use]
    pub fn with_observer(mut self, observer: impl SessionObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub const fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub const fn latency(&self) -> Duration {
        self.latency
    }

    pub const fn is_translating(&self) -> bool {
        self.pending.is_some()
    }

    /// Submits `text` for translation.
    ///
    /// Blank input and submissions while a reply is pending are ignored.
    /// Otherwise the user message is appended right away and the reply
    /// becomes available after the session latency.
    pub fn submit(&mut self, text: &str) -> Submission {
        match self.conversation.begin_turn(text, self.clock.now()) {
            Ok(turn) => {
                let id = turn.user_message;
                self.pending = Some(PendingReply {
                    turn,
                    ready_at: Instant::now() + self.latency,
                });
                self.notify(SessionChange::UserMessage(id));
                Submission::Accepted(id)
            }
            Err(reason) => {
                tracing::debug!(?reason, "submission ignored");
                Submission::Ignored(reason)
            }
        }
    }

    /// Waits for the pending reply, appends it and returns its id.
    ///
    /// Returns `None` immediately when nothing is pending.
    pub async fn wait_for_reply(&mut self) -> Option<MessageId> {
        let ready_at = self.pending.as_ref()?.ready_at;
        tokio::time::sleep_until(ready_at).await;
        self.finish_pending()
    }

    /// Appends the pending reply if its latency has elapsed, without waiting.
    pub fn poll_reply(&mut self) -> Option<MessageId> {
        let ready = self
            .pending
            .as_ref()
            .is_some_and(|p| Instant::now() >= p.ready_at);
        if ready { self.finish_pending() } else { None }
    }

    fn finish_pending(&mut self) -> Option<MessageId> {
        let PendingReply { turn, .. } = self.pending.take()?;
        let translation =
            self.engine
                .translate(&turn.text, turn.direction.source, turn.direction.target);
        let id = self
            .conversation
            .complete_turn(turn, translation, self.clock.now())?;
        self.notify(SessionChange::Reply(id));
        Some(id)
    }

    /// Flips the active direction and returns the new one.
    pub fn toggle_direction(&mut self) -> Direction {
        let direction = self.conversation.toggle_direction();
        self.notify(SessionChange::DirectionToggled(direction));
        direction
    }

    /// Clears the log back to the greeting. A pending reply is discarded.
    pub fn reset(&mut self) {
        if self.pending.take().is_some() {
            tracing::debug!("reset discarded a pending reply");
        }
        self.conversation.reset(self.clock.now());
        self.notify(SessionChange::Reset);
    }

    /// Copies an assistant message to the clipboard.
    ///
    /// Never changes the conversation. Clipboard errors are logged, not returned.
    pub fn copy(&mut self, id: MessageId) -> CopyOutcome {
        let Some(message) = self.conversation.get(id).filter(|m| m.is_assistant()) else {
            return CopyOutcome::Unavailable;
        };

        match self.clipboard.write_text(&message.content) {
            Ok(()) => CopyOutcome::Copied,
            Err(e) => {
                tracing::warn!(id = id.0, error = %e, "failed to copy message to clipboard");
                CopyOutcome::Failed
            }
        }
    }

    fn notify(&mut self, change: SessionChange) {
        if let Some(observer) = self.observer.as_mut() {
            observer.session_changed(&self.conversation, change);
        }
    }
}
