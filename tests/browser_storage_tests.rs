//! Browser-only storage tests, run with `wasm-pack test --headless`.

#![cfg(target_arch = "wasm32")]

use pdf_chat_frontend::services::storage::{BrowserStorage, StorageBackend};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_browser_storage_round_trip() {
    let storage = BrowserStorage;
    storage.remove("test-key");
    assert_eq!(storage.read("test-key"), None);

    storage.write("test-key", "value");
    assert_eq!(storage.read("test-key"), Some("value".to_string()));

    storage.remove("test-key");
    assert_eq!(storage.read("test-key"), None);
}

#[wasm_bindgen_test]
fn test_browser_storage_overwrites() {
    let storage = BrowserStorage;
    storage.write("test-overwrite", "a");
    storage.write("test-overwrite", "b");
    assert_eq!(storage.read("test-overwrite"), Some("b".to_string()));
    storage.remove("test-overwrite");
}
