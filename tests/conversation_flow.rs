#![allow(clippy::unwrap_used)]
//! End-to-end conversation scenarios through the public controller API.

use std::time::Duration;

use jokko_cli::chat::{
    ChatController, GREETING, IgnoreReason, Role, SessionConfig, Submission, TurnState,
};
use jokko_cli::dictionary::{Dictionary, normalize};
use jokko_cli::translation::{Direction, Language, LookupEngine};

fn session() -> ChatController {
    ChatController::new(LookupEngine::default(), &SessionConfig::default())
        .with_clipboard(jokko_cli::chat::clipboard::DisabledClipboard)
}

#[tokio::test(start_paused = true)]
async fn test_merci_round_trip() {
    let mut chat = session();
    assert_eq!(chat.conversation().len(), 1);
    assert_eq!(chat.conversation().messages()[0].content, GREETING);

    assert!(matches!(chat.submit("merci"), Submission::Accepted(_)));
    chat.wait_for_reply().await.unwrap();

    let log = chat.conversation().messages();
    assert_eq!(log.len(), 3);
    assert_eq!(log[0].role, Role::Assistant);
    assert_eq!((log[1].role, log[1].content.as_str()), (Role::User, "merci"));
    assert_eq!(
        (log[2].role, log[2].content.as_str()),
        (Role::Assistant, "jërejëf")
    );
    assert_eq!(log[2].original.as_deref(), Some("merci"));
}

#[tokio::test(start_paused = true)]
async fn test_busy_session_rejects_submissions() {
    let mut chat = session();
    chat.submit("bonjour");
    let before = chat.conversation().len();

    assert_eq!(chat.submit("merci"), Submission::Ignored(IgnoreReason::Busy));
    assert_eq!(chat.conversation().len(), before);
    assert_eq!(chat.conversation().state(), TurnState::AwaitingTranslation);

    tokio::time::advance(Duration::from_secs(1)).await;
    assert!(chat.poll_reply().is_some());
    assert_eq!(chat.conversation().state(), TurnState::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_conversation_in_both_directions() {
    let mut chat = session();
    chat.submit("Au revoir");
    chat.wait_for_reply().await;
    chat.toggle_direction();
    chat.submit("xarit");
    chat.wait_for_reply().await;
    chat.submit("");

    let replies: Vec<_> = chat
        .conversation()
        .messages()
        .iter()
        .filter(|m| m.original.is_some())
        .map(|m| (m.content.as_str(), m.language))
        .collect();
    assert_eq!(
        replies,
        vec![
            ("ba beneen", Some(Language::Wolof)),
            ("ami", Some(Language::French)),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_reset_always_leaves_one_greeting() {
    let mut chat = session();
    chat.reset();
    assert_eq!(chat.conversation().len(), 1);

    chat.submit("eau");
    chat.wait_for_reply().await;
    chat.submit("pain");
    chat.reset();

    let log = chat.conversation().messages();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].role, Role::Assistant);
    assert_eq!(log[0].content, GREETING);
    assert!(!chat.is_translating());
}

#[test]
fn test_double_toggle_restores_direction() {
    let mut chat = session();
    let start = chat.conversation().direction();
    chat.toggle_direction();
    chat.toggle_direction();
    assert_eq!(chat.conversation().direction(), start);
}

#[test]
fn test_every_entry_translates_to_itself_exactly() {
    let engine = LookupEngine::default();
    let dictionary = Dictionary::shared();
    for direction in [Direction::FRENCH_TO_WOLOF, Direction::WOLOF_TO_FRENCH] {
        for (key, value) in dictionary.entries(direction) {
            assert_eq!(engine.translate(key, direction.source, direction.target), value);
            assert_eq!(normalize(key), key);
        }
    }
}
