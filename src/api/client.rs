//! Request plumbing shared by all endpoints.

use futures::future::{select, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;

/// How long a backend call may stay outstanding before the UI gives up.
/// The underlying fetch is not cancelled, only abandoned.
pub const REQUEST_TIMEOUT_MS: u32 = 60_000;

/// Base URL of the backend, fixed at build time.
pub fn api_base_url() -> String {
    option_env!("PDF_CHAT_API_BASE_URL")
        .unwrap_or("http://localhost:3000")
        .to_string()
}

fn endpoint(path: &str) -> String {
    format!("{}{}", api_base_url(), path)
}

pub(crate) fn new_form() -> Result<web_sys::FormData, String> {
    web_sys::FormData::new().map_err(|_| "failed to create form data".to_string())
}

pub(crate) fn append_str(
    form: &web_sys::FormData,
    key: &str,
    value: &str,
) -> Result<(), String> {
    form.append_with_str(key, value)
        .map_err(|_| format!("failed to append '{}' to form data", key))
}

/// POSTs a multipart form and returns the response if it came back 2xx
/// within the timeout window.
pub(crate) async fn post_form(
    path: &str,
    form: web_sys::FormData,
) -> Result<Response, String> {
    let request = Request::post(&endpoint(path))
        .body(form)
        .map_err(|e| format!("failed to build request: {}", e))?;

    let send = Box::pin(request.send());
    let timeout = Box::pin(TimeoutFuture::new(REQUEST_TIMEOUT_MS));
    let response = match select(send, timeout).await {
        Either::Left((result, _)) => {
            result.map_err(|e| format!("network error: {}", e))?
        }
        Either::Right(_) => return Err("request timed out".to_string()),
    };

    if !response.ok() {
        return Err(format!("HTTP error {}", response.status()));
    }
    Ok(response)
}
