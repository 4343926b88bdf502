//! Application services: session identity and persistence, the upload
//! queue, the chat turn lifecycle, toasts, and the theme preference. Each
//! service is provided once at the top of the component tree and retrieved
//! through its `use_*` helper.

pub mod chat;
pub mod notification_service;
pub mod session;
pub mod storage;
pub mod theme_service;
pub mod upload;
