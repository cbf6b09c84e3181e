//! Modal dialogs for link and image insertion.

use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlElement, HtmlInputElement};

/// A show/hide modal with text inputs.
///
/// The pending-selection lifecycle lives in the session; callers capture a
/// selection when opening and clear it when closing, whatever the reason for
/// the close.
pub struct Modal {
    root: HtmlElement,
}

impl Modal {
    pub fn new(root: HtmlElement) -> Self {
        Self { root }
    }

    pub fn open(&self) {
        let _ = self.root.class_list().add_1("show");
    }

    /// Hide the modal and clear its inputs.
    pub fn close(&self) {
        let _ = self.root.class_list().remove_1("show");
        if let Ok(inputs) = self
            .root
            .query_selector_all("input[type=\"text\"], input[type=\"url\"]")
        {
            for i in 0..inputs.length() {
                let Some(node) = inputs.item(i) else {
                    continue;
                };
                if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
                    input.set_value("");
                }
            }
        }
    }

    /// Whether an event target is the modal backdrop itself (outside click).
    pub fn is_backdrop(&self, target: &EventTarget) -> bool {
        let root: &EventTarget = self.root.as_ref();
        root == target
    }

    /// Whether the given element lives inside this modal.
    pub fn contains(&self, element: &web_sys::Element) -> bool {
        self.root.contains(Some(element.as_ref()))
    }
}
