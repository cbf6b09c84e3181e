//! Draggable splitter between the source and preview panels.

use std::cell::Cell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

/// Minimum width of either panel, as a percentage of the container.
const MIN_PANEL_PCT: f64 = 20.0;
/// Splitter dragging only applies to the side-by-side desktop layout.
const DESKTOP_MIN_WIDTH: f64 = 1024.0;

#[derive(Clone, Copy)]
struct DragStart {
    start_x: f64,
    left_width: f64,
    total_width: f64,
}

/// Keeps the splitter listeners alive; dropping this disables resizing.
pub struct SplitterHandles {
    _mousedown: EventListener,
    _mousemove: EventListener,
    _mouseup: EventListener,
}

/// Wire up drag-to-resize on the panel splitter.
///
/// The move/up listeners are attached once and gated on an active drag,
/// rather than attached and detached per drag.
pub fn wire_splitter(
    splitter: &HtmlElement,
    left: &HtmlElement,
    right: &HtmlElement,
    container: &HtmlElement,
) -> SplitterHandles {
    let document = gloo_utils::document();
    let drag: Rc<Cell<Option<DragStart>>> = Rc::new(Cell::new(None));

    let mousedown = {
        let drag = Rc::clone(&drag);
        let left = left.clone();
        let container = container.clone();
        let document = document.clone();
        EventListener::new(splitter.as_ref(), "mousedown", move |event| {
            let viewport = gloo_utils::window()
                .inner_width()
                .ok()
                .and_then(|w| w.as_f64())
                .unwrap_or(0.0);
            if viewport < DESKTOP_MIN_WIDTH {
                return;
            }
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let total_width = f64::from(container.offset_width());
            if total_width <= 0.0 {
                return;
            }
            drag.set(Some(DragStart {
                start_x: f64::from(event.client_x()),
                left_width: f64::from(left.offset_width()),
                total_width,
            }));
            if let Some(body) = document.body() {
                let _ = body.style().set_property("cursor", "ew-resize");
                let _ = body.style().set_property("user-select", "none");
            }
        })
    };

    let mousemove = {
        let drag = Rc::clone(&drag);
        let left = left.clone();
        let right = right.clone();
        EventListener::new(document.as_ref(), "mousemove", move |event| {
            let Some(start) = drag.get() else {
                return;
            };
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let delta = f64::from(event.client_x()) - start.start_x;
            let pct = ((start.left_width + delta) / start.total_width * 100.0)
                .clamp(MIN_PANEL_PCT, 100.0 - MIN_PANEL_PCT);
            let _ = left.style().set_property("width", &format!("{pct:.2}%"));
            let _ = right
                .style()
                .set_property("width", &format!("{:.2}%", 100.0 - pct));
        })
    };

    let mouseup = {
        let drag = Rc::clone(&drag);
        let document = document.clone();
        EventListener::new(document.clone().as_ref(), "mouseup", move |_| {
            if drag.take().is_none() {
                return;
            }
            if let Some(body) = document.body() {
                let _ = body.style().remove_property("cursor");
                let _ = body.style().remove_property("user-select");
            }
        })
    };

    SplitterHandles {
        _mousedown: mousedown,
        _mousemove: mousemove,
        _mouseup: mouseup,
    }
}
