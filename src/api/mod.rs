//! Typed bindings for the question-answering backend.
//!
//! Every endpoint takes a multipart form carrying the session token and
//! returns JSON; failures are flattened to `Result<_, String>` at this
//! boundary so callers only deal with display-ready messages.

pub mod chat;
pub mod client;
pub mod documents;

pub use chat::*;
pub use client::api_base_url;
pub use documents::*;
