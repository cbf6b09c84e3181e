//! The transient message box.
//!
//! Notices are shown by toggling a `show` class on a fixed element and
//! scheduling the removal through the same debounced-task facility the sync
//! loop uses: a newer notice replaces the pending hide, so the box always
//! stays up for the full duration of the latest message.

use std::cell::RefCell;

use limn_editor_core::{Debouncer, Notice};
use web_sys::HtmlElement;

use crate::scheduler::BrowserScheduler;

pub struct MessageBox {
    element: HtmlElement,
    hide: RefCell<Debouncer<BrowserScheduler>>,
}

impl MessageBox {
    pub fn new(element: HtmlElement) -> Self {
        Self {
            element,
            hide: RefCell::new(Debouncer::new(BrowserScheduler)),
        }
    }

    /// Show a notice and schedule its expiry.
    pub fn show(&self, notice: Notice) {
        self.element.set_text_content(Some(&notice.text));
        let _ = self.element.class_list().add_1("show");

        let element = self.element.clone();
        let mut hide = self.hide.borrow_mut();
        let mut hide_after = Debouncer::with_delay(BrowserScheduler, notice.duration);
        hide_after.poke(move || {
            let _ = element.class_list().remove_1("show");
        });
        *hide = hide_after;
    }
}
