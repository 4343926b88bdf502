//! Chat turn lifecycle tests.
//!
//! The optimistic append, the success reply, and the failure fallback are
//! pure transitions over the transcript, exercised here against in-memory
//! storage.

use leptos::prelude::*;
use pdf_chat_frontend::services::chat::{
    assistant_reply, failure_reply, user_message, ChatService, MISSING_ANSWER_FALLBACK,
};
use pdf_chat_frontend::services::session::{ChatModel, MessageRole, SessionState};
use pdf_chat_frontend::services::storage::{MemoryStorage, StorageBackend, MESSAGES_KEY};

fn session() -> SessionState<MemoryStorage> {
    SessionState::new(MemoryStorage::new())
}

// ============================================================================
// Turn Construction Tests
// ============================================================================

#[test]
fn test_user_message_fields() {
    let msg = user_message("What is the deadline?".to_string());

    assert_eq!(msg.role, MessageRole::User);
    assert_eq!(msg.content, "What is the deadline?");
    assert!(msg.id.starts_with("msg_"));
    assert!(msg.id.ends_with("_user"));
}

#[test]
fn test_assistant_reply_uses_answer() {
    let msg = assistant_reply(Some("The deadline is Friday.".to_string()));

    assert_eq!(msg.role, MessageRole::Assistant);
    assert_eq!(msg.content, "The deadline is Friday.");
    assert!(msg.id.ends_with("_assistant"));
}

#[test]
fn test_assistant_reply_falls_back_when_answer_missing() {
    let msg = assistant_reply(None);
    assert_eq!(msg.content, MISSING_ANSWER_FALLBACK);
}

#[test]
fn test_failure_reply_echoes_question_and_names_failure() {
    let msg = failure_reply("What is the deadline?", ChatModel::Sonnet, false);

    assert_eq!(msg.role, MessageRole::Assistant);
    assert!(msg.content.contains("\"What is the deadline?\""));
    assert!(msg.content.contains("Sonnet"));
    assert!(msg.content.contains("(Backend connection failed)"));
    assert!(!msg.content.contains("custom prompt"));
}

#[test]
fn test_failure_reply_mentions_custom_prompt() {
    let msg = failure_reply("hello", ChatModel::Opus, true);

    assert!(msg.content.contains("Opus"));
    assert!(msg.content.contains("with your custom prompt"));
}

// ============================================================================
// Transcript Lifecycle Tests
// ============================================================================

#[test]
fn test_optimistic_append_is_visible_immediately() {
    let session = session();
    session.push_message(user_message("What is the deadline?".to_string()));

    let messages = session.messages.get_untracked();
    let last = messages.last().expect("transcript should not be empty");
    assert_eq!(last.role, MessageRole::User);
    assert_eq!(last.content, "What is the deadline?");
}

#[test]
fn test_failed_turn_adds_exactly_one_fallback_message() {
    let session = session();
    session.push_message(user_message("What is the deadline?".to_string()));
    let before = session.messages.get_untracked().len();

    session.push_message(failure_reply("What is the deadline?", ChatModel::Haiku, false));

    let messages = session.messages.get_untracked();
    assert_eq!(messages.len(), before + 1);
    let last = messages.last().expect("transcript should not be empty");
    assert_eq!(last.role, MessageRole::Assistant);
    assert!(last.content.contains("What is the deadline?"));
    assert!(last.content.contains("(Backend connection failed)"));
}

#[test]
fn test_transcript_preserves_insertion_order() {
    let session = session();
    for i in 0..5 {
        session.push_message(user_message(format!("question {}", i)));
        session.push_message(assistant_reply(Some(format!("answer {}", i))));
    }

    let messages = session.messages.get_untracked();
    assert_eq!(messages.len(), 10);
    for i in 0..5 {
        assert_eq!(messages[i * 2].content, format!("question {}", i));
        assert_eq!(messages[i * 2 + 1].content, format!("answer {}", i));
    }
}

#[test]
fn test_push_message_persists_transcript() {
    let storage = MemoryStorage::new();
    let session = SessionState::new(storage.clone());
    session.push_message(user_message("persist me".to_string()));

    let raw = storage.read(MESSAGES_KEY).expect("transcript should be stored");
    assert!(raw.contains("persist me"));
}

#[test]
fn test_clear_messages_persists_empty_transcript() {
    let storage = MemoryStorage::new();
    let session = SessionState::new(storage.clone());
    session.push_message(user_message("about to vanish".to_string()));

    session.clear_messages();

    assert!(session.messages.get_untracked().is_empty());
    assert_eq!(storage.read(MESSAGES_KEY), Some("[]".to_string()));

    // A reload sees the cleared conversation, not the old one.
    let reloaded = SessionState::new(storage);
    assert!(reloaded.messages.get_untracked().is_empty());
}

// ============================================================================
// Chat Service Tests
// ============================================================================

#[test]
fn test_service_starts_idle_with_empty_input() {
    let chat = ChatService::new(session());
    assert!(chat.input.get_untracked().is_empty());
    assert!(!chat.is_sending.get_untracked());
}

#[test]
fn test_service_shares_session_transcript() {
    let session = session();
    let chat = ChatService::new(session.clone());

    session.push_message(user_message("shared".to_string()));
    drop(chat);
    assert_eq!(session.messages.get_untracked().len(), 1);
}
