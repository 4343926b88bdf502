//! `/upload-pdf` and `/delete-user-id`.

use serde::{Deserialize, Serialize};

use super::client;
use crate::services::upload::{PendingFile, PDF_MIME};

/// Per-file outcome reported by the ingestion service. Statuses other than
/// "ok" and "duplicate" all mean the file was not ingested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictStatus {
    Ok,
    Duplicate,
    #[serde(other)]
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadVerdict {
    pub filename: String,
    pub status: VerdictStatus,
    #[serde(default)]
    pub pdf_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    pub results: Vec<UploadVerdict>,
}

/// Submits every pending file in one multipart request.
pub async fn upload_pdfs(
    user_id: &str,
    files: &[PendingFile],
) -> Result<UploadResponse, String> {
    let form = client::new_form()?;
    client::append_str(&form, "user_id", user_id)?;
    for file in files {
        let blob = pdf_blob(&file.bytes)?;
        form.append_with_blob_and_filename("files", &blob, &file.name)
            .map_err(|_| format!("failed to attach '{}'", file.name))?;
    }

    let response = client::post_form("/upload-pdf", form).await?;
    response
        .json::<UploadResponse>()
        .await
        .map_err(|e| format!("invalid upload response: {}", e))
}

/// Releases all server-side state tied to this session token.
pub async fn delete_user_id(user_id: &str) -> Result<(), String> {
    let form = client::new_form()?;
    client::append_str(&form, "user_id", user_id)?;
    client::post_form("/delete-user-id", form).await.map(|_| ())
}

fn pdf_blob(bytes: &[u8]) -> Result<web_sys::Blob, String> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(PDF_MIME);
    web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|_| "failed to build file blob".to_string())
}
