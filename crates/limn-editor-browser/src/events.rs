//! Observer attachment for the live surface.
//!
//! Every render rebuilds the frame's document, so the observers driving the
//! write-back loop have to be re-attached each time. Dropping the returned
//! listeners detaches them, which is how stale observers from a previous
//! render are cleaned up.

use gloo_events::EventListener;
use limn_editor_core::EditorError;

use crate::frame::FrameSurface;

/// Attach the content-change and selection-change observers to a freshly
/// built surface.
///
/// `on_input` fires for every edit of the editable body (it should schedule
/// the debounced write-back and refresh the toolbar); `on_selection` fires on
/// cursor movement (toolbar refresh only).
pub fn attach_frame_observers<FI, FS>(
    surface: &FrameSurface,
    on_input: FI,
    on_selection: FS,
) -> Result<Vec<EventListener>, EditorError>
where
    FI: FnMut() + 'static,
    FS: FnMut() + 'static,
{
    let body = surface
        .body()
        .ok_or_else(|| EditorError::operation("preview document has no body"))?;

    let mut on_input = on_input;
    let input = EventListener::new(body.as_ref(), "input", move |_| on_input());

    let mut on_selection = on_selection;
    let selection = EventListener::new(surface.document().as_ref(), "selectionchange", move |_| {
        on_selection()
    });

    Ok(vec![input, selection])
}
