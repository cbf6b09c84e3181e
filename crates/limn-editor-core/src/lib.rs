//! limn-editor-core: platform-agnostic logic for a WYSIWYG HTML editor.
//!
//! This crate provides:
//! - `Session` - the owned state pairing a source markup buffer with the
//!   live editable surface rendered from it
//! - `EditSurface` trait - the opaque capability surface over the host's
//!   rich-text editing machinery
//! - `dispatch` - the formatting-command dispatcher
//! - `Debouncer`/`Scheduler` - debounced write-back from surface to source
//! - `ToolbarState` - formatting affordances read back from the surface
//!
//! The browser implementation of `EditSurface` and `Scheduler` lives in
//! `limn-editor-browser`.

pub mod color;
pub mod command;
pub mod dispatch;
pub mod error;
pub mod fonts;
pub mod notice;
pub mod scaffold;
pub mod session;
pub mod surface;
pub mod sync;
pub mod toolbar;

#[cfg(test)]
mod mock;

pub use color::rgb_to_hex;
pub use command::Command;
pub use dispatch::{
    BLOCK_TAGS, dispatch, failure_notice, find_block_ancestor, insert_image, insert_link,
};
pub use error::EditorError;
pub use fonts::{FONT_CATALOG, clean_font_family, font_imports};
pub use notice::Notice;
pub use scaffold::{DEFAULT_DOCUMENT, DEFAULT_FILENAME, ExportDocument, body_of, scaffold};
pub use session::Session;
pub use smol_str::SmolStr;
pub use surface::EditSurface;
pub use sync::{Debouncer, Scheduler, WRITE_BACK_DELAY};
pub use toolbar::ToolbarState;
