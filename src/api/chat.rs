//! `/ask` and `/clear-chat-history`.

use serde::Deserialize;

use super::client;
use crate::services::session::ChatModel;

#[derive(Debug, Clone, Deserialize)]
pub struct AskResponse {
    /// The model's answer. Absent when the backend had nothing to say.
    #[serde(default)]
    pub answer: Option<String>,
}

/// Asks a question against the session's document set.
pub async fn ask(
    user_id: &str,
    query: &str,
    model: ChatModel,
    prompt: Option<&str>,
) -> Result<AskResponse, String> {
    let form = client::new_form()?;
    client::append_str(&form, "user_id", user_id)?;
    client::append_str(&form, "query", query)?;
    client::append_str(&form, "model", model.as_str())?;
    if let Some(prompt) = prompt {
        client::append_str(&form, "prompt", prompt)?;
    }

    let response = client::post_form("/ask", form).await?;
    response
        .json::<AskResponse>()
        .await
        .map_err(|e| format!("invalid response: {}", e))
}

/// Drops the server-side conversation for this session. Only success or
/// failure matters; the response body is ignored.
pub async fn clear_chat_history(user_id: &str) -> Result<(), String> {
    let form = client::new_form()?;
    client::append_str(&form, "user_id", user_id)?;
    client::post_form("/clear-chat-history", form).await.map(|_| ())
}
