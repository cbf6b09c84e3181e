//! Browser DOM layer for the limn HTML editor.
//!
//! This crate implements `EditSurface` and `Scheduler` over a live iframe
//! document and wires the whole editor shell together. It assumes a
//! `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `frame`: the iframe-backed `EditSurface` (execCommand + Selection API)
//! - `scheduler`: `setTimeout`-backed deferred tasks for the debounced sync
//! - `events`: input/selectionchange observer attachment on the frame
//! - `app`: element lookups and listener wiring for the editor shell
//! - `message`: the transient message box
//! - `modal`: link/image insertion dialogs
//! - `panels`: drag-to-resize splitter between source and preview
//! - `download`: source export via Blob and a synthetic anchor click
//!
//! # Re-exports
//!
//! This crate re-exports `limn-editor-core` for convenience, so consumers
//! only need to depend on `limn-editor-browser`.

// Re-export core crate
pub use limn_editor_core;
pub use limn_editor_core::*;

pub mod app;
pub mod download;
pub mod events;
pub mod frame;
pub mod message;
pub mod modal;
pub mod panels;
pub mod scheduler;

pub use app::{EditorApp, MountConfig};
pub use frame::FrameSurface;
pub use message::MessageBox;
pub use scheduler::BrowserScheduler;

use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;

/// Wrap a thrown JS value as an operation failure.
pub(crate) fn js_err(err: JsValue) -> EditorError {
    EditorError::OperationFailed(format!("{err:?}"))
}

/// Mount the editor onto the default element ids and leave it running for
/// the lifetime of the page.
#[wasm_bindgen]
pub fn mount_editor() -> Result<(), JsValue> {
    let app = app::EditorApp::mount(&app::MountConfig::default())
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    app.forget();
    Ok(())
}
