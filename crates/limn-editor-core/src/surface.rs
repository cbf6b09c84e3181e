//! The capability surface the editor drives.
//!
//! `EditSurface` is the seam between the editor logic and the host's
//! rich-text editing machinery (browser `execCommand`/Selection, native
//! implementations, test mocks). The surface's internal node structure is
//! deliberately opaque: the editor only needs "apply a command here", "query
//! the formatting at the cursor", "read the markup back", and just enough
//! node navigation to find a block-level ancestor.

use smol_str::SmolStr;

use crate::command::Command;
use crate::error::EditorError;

/// A live, directly user-editable rendering of the document.
///
/// Implementations own the actual editable tree. The editor mutates it only
/// through this trait, which keeps the synchronization contract testable.
pub trait EditSurface {
    /// Opaque handle to a cursor/selection position.
    ///
    /// Handles are captured when an auxiliary dialog opens and consumed when
    /// it confirms, so they must remain usable while the surface is not
    /// otherwise mutated.
    type Selection: Clone;

    /// Opaque handle to an element of the surface's document tree.
    type Node;

    /// Apply a formatting command at the current selection/cursor.
    fn apply(&mut self, command: Command, value: Option<&str>) -> Result<(), EditorError>;

    /// Whether the given toggle command is active at the cursor.
    fn query_state(&self, command: Command) -> bool;

    /// The current value of a value-carrying command at the cursor
    /// (a color, a size token, a font stack). Empty when unknown.
    fn query_value(&self, command: Command) -> SmolStr;

    /// The current selection, if any.
    fn selection(&self) -> Option<Self::Selection>;

    /// Whether a selection handle is a collapsed cursor (no selected content).
    fn is_collapsed(&self, selection: &Self::Selection) -> bool;

    /// The element directly containing the selection, if any.
    fn selection_container(&self, selection: &Self::Selection) -> Option<Self::Node>;

    /// Parent element of a node, if it has one.
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Upper-cased tag name of a node ("P", "DIV", "H1", ...).
    fn tag_name(&self, node: &Self::Node) -> SmolStr;

    /// Whether a node is the document root (the editable body).
    fn is_root(&self, node: &Self::Node) -> bool;

    /// Set the background color of a block element directly.
    fn set_block_background(&mut self, node: &Self::Node, color: &str)
    -> Result<(), EditorError>;

    /// Effective background color of a block element, for toolbar affordances.
    fn block_background(&self, node: &Self::Node) -> Option<SmolStr>;

    /// Delete the contents of a selection, insert `text` in its place, and
    /// return a handle selecting exactly the inserted text.
    fn replace_with_text(
        &mut self,
        selection: &Self::Selection,
        text: &str,
    ) -> Result<Self::Selection, EditorError>;

    /// Insert `text` when no selection exists to anchor on, returning a
    /// handle selecting exactly the inserted text. Implementations choose
    /// the insertion point (end of document for the browser surface).
    fn insert_text(&mut self, text: &str) -> Result<Self::Selection, EditorError>;

    /// Make the given handle the surface's current selection.
    fn restore_selection(&mut self, selection: &Self::Selection) -> Result<(), EditorError>;

    /// Set the document-wide default font family.
    fn set_default_font(&mut self, family: &str) -> Result<(), EditorError>;

    /// Read back the surface's current body markup, verbatim.
    fn markup(&self) -> Result<String, EditorError>;
}
