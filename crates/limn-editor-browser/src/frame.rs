//! The iframe-backed live surface.
//!
//! Implements `EditSurface` over an editable iframe document: formatting
//! commands go through `execCommand`, formatting state comes back through
//! `queryCommandState`/`queryCommandValue`, and selections are DOM `Range`s
//! from the frame window's Selection API.

use limn_editor_core::scaffold::head_markup;
use limn_editor_core::{Command, EditSurface, EditorError, SmolStr};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlDocument, HtmlElement, HtmlIFrameElement, Range, Window};

use crate::js_err;

/// A live, user-editable document inside a preview iframe.
pub struct FrameSurface {
    window: Window,
    document: HtmlDocument,
}

impl FrameSurface {
    /// Rebuild the frame's document from body markup and make it editable.
    ///
    /// Writes the fixed head chrome (font imports + base stylesheet), sets
    /// the body markup verbatim, and turns design mode on. Event observers
    /// are attached separately, see [`crate::events`].
    pub fn build(frame: &HtmlIFrameElement, body: &str) -> Result<Self, EditorError> {
        let window = frame
            .content_window()
            .ok_or_else(|| EditorError::RenderFailure("preview frame has no window".into()))?;
        let document: HtmlDocument = window
            .document()
            .ok_or_else(|| EditorError::RenderFailure("preview frame has no document".into()))?
            .unchecked_into();

        let head = document
            .head()
            .ok_or_else(|| EditorError::RenderFailure("preview document has no head".into()))?;
        head.set_inner_html(&head_markup());

        let body_el = document
            .body()
            .ok_or_else(|| EditorError::RenderFailure("preview document has no body".into()))?;
        body_el.set_inner_html(body);

        document.set_design_mode("on");
        tracing::debug!(body_len = body.len(), "frame surface built");

        Ok(Self { window, document })
    }

    /// The frame's document, for observer attachment.
    pub fn document(&self) -> &HtmlDocument {
        &self.document
    }

    /// The editable body element.
    pub fn body(&self) -> Option<HtmlElement> {
        self.document.body()
    }

    fn frame_selection(&self) -> Option<web_sys::Selection> {
        self.window.get_selection().ok().flatten()
    }
}

impl EditSurface for FrameSurface {
    type Selection = Range;
    type Node = Element;

    fn apply(&mut self, command: Command, value: Option<&str>) -> Result<(), EditorError> {
        // Focus the frame so the command lands on its document.
        let _ = self.window.focus();
        let result = match value {
            Some(value) => {
                self.document
                    .exec_command_with_show_ui_and_value(command.as_str(), false, value)
            }
            None => self.document.exec_command(command.as_str()),
        };
        // The boolean result is unreliable across engines; only a thrown
        // exception counts as failure.
        result.map_err(js_err).map(|_| ())
    }

    fn query_state(&self, command: Command) -> bool {
        self.document
            .query_command_state(command.as_str())
            .unwrap_or(false)
    }

    fn query_value(&self, command: Command) -> SmolStr {
        self.document
            .query_command_value(command.as_str())
            .map(SmolStr::new)
            .unwrap_or_default()
    }

    fn selection(&self) -> Option<Range> {
        let selection = self.frame_selection()?;
        if selection.range_count() == 0 {
            return None;
        }
        selection.get_range_at(0).ok()
    }

    fn is_collapsed(&self, selection: &Range) -> bool {
        selection.collapsed()
    }

    fn selection_container(&self, selection: &Range) -> Option<Element> {
        let node = selection.common_ancestor_container().ok()?;
        if node.node_type() == web_sys::Node::TEXT_NODE {
            node.parent_element()
        } else {
            node.dyn_into::<Element>().ok()
        }
    }

    fn parent(&self, node: &Element) -> Option<Element> {
        node.parent_element()
    }

    fn tag_name(&self, node: &Element) -> SmolStr {
        SmolStr::new(node.tag_name())
    }

    fn is_root(&self, node: &Element) -> bool {
        self.document
            .body()
            .map(|body| body.is_same_node(Some(node.as_ref())))
            .unwrap_or(false)
    }

    fn set_block_background(&mut self, node: &Element, color: &str) -> Result<(), EditorError> {
        let element: &HtmlElement = node
            .dyn_ref()
            .ok_or_else(|| EditorError::operation("block ancestor is not an HTML element"))?;
        element
            .style()
            .set_property("background-color", color)
            .map_err(js_err)
    }

    fn block_background(&self, node: &Element) -> Option<SmolStr> {
        let style = self.window.get_computed_style(node).ok().flatten()?;
        style
            .get_property_value("background-color")
            .ok()
            .map(SmolStr::new)
    }

    fn replace_with_text(&mut self, selection: &Range, text: &str) -> Result<Range, EditorError> {
        selection.delete_contents().map_err(js_err)?;
        let text_node = self.document.create_text_node(text);
        selection.insert_node(text_node.as_ref()).map_err(js_err)?;

        let range = self.document.create_range().map_err(js_err)?;
        range.select_node(text_node.as_ref()).map_err(js_err)?;
        Ok(range)
    }

    fn insert_text(&mut self, text: &str) -> Result<Range, EditorError> {
        // No selection to anchor on; append at the end of the body so the
        // insertion point is deterministic.
        let body = self
            .document
            .body()
            .ok_or_else(|| EditorError::operation("preview document has no body"))?;
        let text_node = self.document.create_text_node(text);
        body.append_child(text_node.as_ref()).map_err(js_err)?;

        let range = self.document.create_range().map_err(js_err)?;
        range.select_node(text_node.as_ref()).map_err(js_err)?;
        Ok(range)
    }

    fn restore_selection(&mut self, selection: &Range) -> Result<(), EditorError> {
        let frame_selection = self
            .frame_selection()
            .ok_or_else(|| EditorError::operation("frame selection unavailable"))?;
        frame_selection.remove_all_ranges().map_err(js_err)?;
        frame_selection.add_range(selection).map_err(js_err)
    }

    fn set_default_font(&mut self, family: &str) -> Result<(), EditorError> {
        let body = self
            .document
            .body()
            .ok_or_else(|| EditorError::operation("preview document has no body"))?;
        body.style()
            .set_property("font-family", &format!("'{family}', sans-serif"))
            .map_err(js_err)
    }

    fn markup(&self) -> Result<String, EditorError> {
        self.document
            .body()
            .map(|body| body.inner_html())
            .ok_or_else(|| EditorError::operation("preview document has no body"))
    }
}
