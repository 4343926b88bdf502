//! Session identity and persisted application state.
//!
//! A browser profile is identified by an opaque session token that scopes
//! every backend call. The token, the confirmed document list, the chat
//! transcript, and the user's preferences all live in [`SessionState`] and
//! are written back to storage synchronously on every change, so a reload
//! reconstructs the session exactly.

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::services::notification_service::{show_error, show_success};
use crate::services::storage::{
    BrowserStorage, StorageBackend, CUSTOM_PROMPT_KEY, DOCUMENTS_KEY, MESSAGES_KEY, MODEL_KEY,
    SESSION_ID_KEY,
};

// ============================================================================
// Data model
// ============================================================================

/// A document confirmed by the backend. The id is issued by the ingestion
/// service, never minted locally.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadedDocument {
    pub id: String,
    pub name: String,
    pub size: u64,
    #[serde(rename = "uploadDate")]
    pub upload_date: DateTime<Utc>,
}

/// Who authored a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl MessageRole {
    fn id_suffix(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

/// One turn of the conversation. The transcript is append-only and keeps
/// insertion order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Builds a message stamped with the current time and a fresh id.
    pub fn now(role: MessageRole, content: String) -> Self {
        Self {
            id: format!("msg_{}_{}", Utc::now().timestamp_millis(), role.id_suffix()),
            role,
            content,
            timestamp: Utc::now(),
        }
    }
}

/// The model the backend should answer with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ChatModel {
    #[default]
    Sonnet,
    Haiku,
    Opus,
}

impl ChatModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatModel::Sonnet => "Sonnet",
            ChatModel::Haiku => "Haiku",
            ChatModel::Opus => "Opus",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Sonnet" => Some(ChatModel::Sonnet),
            "Haiku" => Some(ChatModel::Haiku),
            "Opus" => Some(ChatModel::Opus),
            _ => None,
        }
    }

    pub fn all() -> &'static [ChatModel] {
        &[ChatModel::Sonnet, ChatModel::Haiku, ChatModel::Opus]
    }
}

// ============================================================================
// Session tokens
// ============================================================================

const TOKEN_SUFFIX_LEN: usize = 9;

/// Assembles a session token from its parts.
pub fn compose_session_token(epoch_ms: i64, suffix: &str) -> String {
    format!("session_{}_{}", epoch_ms, suffix)
}

/// Mints a fresh token: `session_<epoch-ms>_<base36 suffix>`. Uniqueness is
/// best-effort (time plus randomness); the token scopes a backend document
/// set, it is not a security boundary.
pub fn mint_session_token() -> String {
    compose_session_token(Utc::now().timestamp_millis(), &random_base36(TOKEN_SUFFIX_LEN))
}

fn random_base36(len: usize) -> String {
    let mut n = u128::from_le_bytes(*uuid::Uuid::new_v4().as_bytes());
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        out.push(char::from_digit((n % 36) as u32, 36).unwrap_or('0'));
        n /= 36;
    }
    out
}

// ============================================================================
// Session state
// ============================================================================

/// Reactive session container shared through the Leptos context tree.
///
/// All mutation goes through the methods here so that each change is written
/// back to storage immediately.
#[derive(Clone, Copy)]
pub struct SessionState<S: StorageBackend> {
    storage: S,
    pub session_id: RwSignal<String>,
    pub documents: RwSignal<Vec<UploadedDocument>>,
    pub messages: RwSignal<Vec<ChatMessage>>,
    pub model: RwSignal<ChatModel>,
    pub custom_prompt: RwSignal<String>,
}

impl<S: StorageBackend> SessionState<S> {
    /// Loads persisted state, minting a session token on first run.
    pub fn new(storage: S) -> Self {
        let session_id = match storage.read(SESSION_ID_KEY) {
            Some(token) => token,
            None => {
                let token = mint_session_token();
                storage.write(SESSION_ID_KEY, &token);
                token
            }
        };

        let documents: Vec<UploadedDocument> = load_json(&storage, DOCUMENTS_KEY);
        let messages: Vec<ChatMessage> = load_json(&storage, MESSAGES_KEY);
        let model = storage
            .read(MODEL_KEY)
            .and_then(|s| ChatModel::from_str(&s))
            .unwrap_or_default();
        let custom_prompt = storage.read(CUSTOM_PROMPT_KEY).unwrap_or_default();

        Self {
            storage,
            session_id: RwSignal::new(session_id),
            documents: RwSignal::new(documents),
            messages: RwSignal::new(messages),
            model: RwSignal::new(model),
            custom_prompt: RwSignal::new(custom_prompt),
        }
    }

    /// Appends confirmed documents and persists the list.
    pub fn add_documents(&self, new_docs: Vec<UploadedDocument>) {
        if new_docs.is_empty() {
            return;
        }
        self.documents.update(|docs| docs.extend(new_docs));
        save_json(&self.storage, DOCUMENTS_KEY, &self.documents.get_untracked());
    }

    /// Appends one message to the transcript and persists it.
    pub fn push_message(&self, message: ChatMessage) {
        self.messages.update(|msgs| msgs.push(message));
        save_json(&self.storage, MESSAGES_KEY, &self.messages.get_untracked());
    }

    /// Empties the transcript, persisting the empty list so the cleared
    /// conversation does not resurface on reload.
    pub fn clear_messages(&self) {
        self.messages.set(Vec::new());
        save_json(&self.storage, MESSAGES_KEY, &Vec::<ChatMessage>::new());
    }

    pub fn set_model(&self, model: ChatModel) {
        self.model.set(model);
        self.storage.write(MODEL_KEY, model.as_str());
    }

    pub fn set_custom_prompt(&self, prompt: String) {
        self.storage.write(CUSTOM_PROMPT_KEY, &prompt);
        self.custom_prompt.set(prompt);
    }

    /// Drops every persisted key and all in-memory state, then mints a fresh
    /// token for the next session.
    pub fn apply_reset(&self) {
        for key in [
            SESSION_ID_KEY,
            DOCUMENTS_KEY,
            MESSAGES_KEY,
            MODEL_KEY,
            CUSTOM_PROMPT_KEY,
        ] {
            self.storage.remove(key);
        }

        let token = mint_session_token();
        self.storage.write(SESSION_ID_KEY, &token);
        self.session_id.set(token);
        self.documents.set(Vec::new());
        self.messages.set(Vec::new());
        self.model.set(ChatModel::default());
        self.custom_prompt.set(String::new());
    }

    /// Asks the backend to release the server-side state for this token,
    /// then resets locally. Not optimistic: a failed release changes nothing.
    pub fn reset_session(&self) {
        let state = self.clone();
        let user_id = self.session_id.get_untracked();
        spawn_local(async move {
            match api::delete_user_id(&user_id).await {
                Ok(()) => {
                    state.apply_reset();
                    show_success("Session reset", Some("Starting fresh."));
                }
                Err(e) => {
                    log::error!("Failed to reset session: {}", e);
                    show_error("Reset failed", Some(&e));
                }
            }
        });
    }
}

fn load_json<T: for<'de> Deserialize<'de> + Default>(
    storage: &impl StorageBackend,
    key: &str,
) -> T {
    match storage.read(key) {
        Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            log::warn!("Discarding unreadable value for key '{}': {}", key, e);
            T::default()
        }),
        None => T::default(),
    }
}

fn save_json<T: Serialize>(storage: &impl StorageBackend, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => storage.write(key, &raw),
        Err(e) => log::warn!("Failed to serialize value for key '{}': {}", key, e),
    }
}

// ============================================================================
// Context plumbing
// ============================================================================

pub type AppSessionState = SessionState<BrowserStorage>;

pub fn provide_session_state() {
    provide_context(SessionState::new(BrowserStorage));
}

pub fn use_session_state() -> AppSessionState {
    expect_context::<AppSessionState>()
}
