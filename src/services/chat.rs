//! Chat turn lifecycle.
//!
//! A send appends the user's message before the network call resolves, then
//! appends exactly one assistant message when the call settles: the
//! backend's answer on success, a labeled fallback on failure. The
//! conversation never drops a turn. Clearing history is the opposite: the
//! transcript is only emptied after the backend confirms.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::services::notification_service::show_error;
use crate::services::session::{ChatMessage, ChatModel, MessageRole, SessionState};
use crate::services::storage::{BrowserStorage, StorageBackend};

/// Shown when the backend answers without an answer field.
pub const MISSING_ANSWER_FALLBACK: &str = "Sorry, I could not process your request.";

// ============================================================================
// Turn construction
// ============================================================================

/// The optimistic user-side half of a turn.
pub fn user_message(text: String) -> ChatMessage {
    ChatMessage::now(MessageRole::User, text)
}

/// The assistant reply for a successful call.
pub fn assistant_reply(answer: Option<String>) -> ChatMessage {
    ChatMessage::now(
        MessageRole::Assistant,
        answer.unwrap_or_else(|| MISSING_ANSWER_FALLBACK.to_string()),
    )
}

/// The synthetic assistant reply used when the backend is unreachable. It
/// echoes the original question so the turn is never silently lost.
pub fn failure_reply(original: &str, model: ChatModel, has_custom_prompt: bool) -> ChatMessage {
    let prompt_note = if has_custom_prompt {
        " with your custom prompt"
    } else {
        ""
    };
    ChatMessage::now(
        MessageRole::Assistant,
        format!(
            "I received your message: \"{}\". This is a simulated response using the {} model{}. (Backend connection failed)",
            original,
            model.as_str(),
            prompt_note
        ),
    )
}

// ============================================================================
// Chat service
// ============================================================================

#[derive(Clone, Copy)]
pub struct ChatService<S: StorageBackend> {
    session: SessionState<S>,
    pub input: RwSignal<String>,
    pub is_sending: RwSignal<bool>,
}

impl<S: StorageBackend> ChatService<S> {
    pub fn new(session: SessionState<S>) -> Self {
        Self {
            session,
            input: RwSignal::new(String::new()),
            is_sending: RwSignal::new(false),
        }
    }

    /// Sends the current input. Blank input and sends-in-flight are ignored;
    /// only one request is outstanding at a time.
    pub fn send_message(&self) {
        let text = self.input.get_untracked().trim().to_string();
        if text.is_empty() || self.is_sending.get_untracked() {
            return;
        }

        self.input.set(String::new());
        self.session.push_message(user_message(text.clone()));
        self.is_sending.set(true);

        let service = self.clone();
        let user_id = self.session.session_id.get_untracked();
        let model = self.session.model.get_untracked();
        let prompt = self.session.custom_prompt.get_untracked();
        spawn_local(async move {
            let prompt_arg = if prompt.is_empty() {
                None
            } else {
                Some(prompt.as_str())
            };
            match api::ask(&user_id, &text, model, prompt_arg).await {
                Ok(response) => {
                    service.session.push_message(assistant_reply(response.answer));
                }
                Err(e) => {
                    log::error!("Chat request failed: {}", e);
                    service
                        .session
                        .push_message(failure_reply(&text, model, !prompt.is_empty()));
                }
            }
            service.is_sending.set(false);
        });
    }

    /// Clears the transcript, but only once the backend has confirmed. A
    /// failure leaves the conversation untouched.
    pub fn clear_history(&self) {
        let service = self.clone();
        let user_id = self.session.session_id.get_untracked();
        spawn_local(async move {
            match api::clear_chat_history(&user_id).await {
                Ok(()) => service.session.clear_messages(),
                Err(e) => {
                    log::error!("Failed to clear chat history: {}", e);
                    show_error("Could not clear chat", Some(&e));
                }
            }
        });
    }
}

// ============================================================================
// Context plumbing
// ============================================================================

pub type AppChatService = ChatService<BrowserStorage>;

pub fn provide_chat_service(session: SessionState<BrowserStorage>) {
    provide_context(ChatService::new(session));
}

pub fn use_chat_service() -> AppChatService {
    expect_context::<AppChatService>()
}
