//! The owned editor state: source buffer, live surface, pending selection.
//!
//! `Session` pairs the plain-markup source of truth with the optional live
//! surface rendered from it, and mediates every transfer between the two so
//! the synchronization contract stays explicit.

use web_time::Instant;

use crate::error::EditorError;
use crate::scaffold::{DEFAULT_FILENAME, ExportDocument};
use crate::surface::EditSurface;

/// Editor state for one document.
pub struct Session<S: EditSurface> {
    source: String,
    surface: Option<S>,
    pending_selection: Option<S::Selection>,
    last_write_back: Option<Instant>,
}

impl<S: EditSurface> Session<S> {
    /// A session starting from the given source markup. No surface exists
    /// until the first [`render_with`](Self::render_with).
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            surface: None,
            pending_selection: None,
            last_write_back: None,
        }
    }

    /// Current source markup.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Replace the source markup (direct user edit of the source view).
    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = source.into();
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    /// Rebuild the live surface from the current source.
    ///
    /// `build` constructs a surface from source markup; any unsynced edits on
    /// a previous surface are discarded, as is any pending selection (its
    /// handles pointed into the old tree). Failures surface as
    /// [`EditorError::RenderFailure`].
    pub fn render_with<F>(&mut self, build: F) -> Result<(), EditorError>
    where
        F: FnOnce(&str) -> Result<S, EditorError>,
    {
        let surface = build(&self.source).map_err(|err| match err {
            err @ EditorError::RenderFailure(_) => err,
            other => EditorError::RenderFailure(other.to_string()),
        })?;
        self.surface = Some(surface);
        self.pending_selection = None;
        tracing::debug!(source_len = self.source.len(), "live surface rendered");
        Ok(())
    }

    /// Copy the live surface's current markup into the source, verbatim.
    pub fn write_back(&mut self) -> Result<(), EditorError> {
        let surface = self.surface.as_ref().ok_or(EditorError::SurfaceNotReady)?;
        self.source = surface.markup()?;
        self.last_write_back = Some(Instant::now());
        tracing::debug!(source_len = self.source.len(), "write-back from live surface");
        Ok(())
    }

    /// When the last write-back ran, if ever. Diagnostics only.
    pub fn last_write_back(&self) -> Option<Instant> {
        self.last_write_back
    }

    /// Capture the current selection for a dialog about to open.
    ///
    /// At most one captured selection is live at a time; capturing again
    /// replaces it.
    pub fn capture_selection(&mut self) {
        self.pending_selection = self.surface.as_ref().and_then(|s| s.selection());
    }

    /// Consume the captured selection, if one is still live.
    pub fn take_pending_selection(&mut self) -> Option<S::Selection> {
        self.pending_selection.take()
    }

    /// Invalidate the captured selection (its dialog closed without using it).
    pub fn clear_pending_selection(&mut self) {
        self.pending_selection = None;
    }

    pub fn has_pending_selection(&self) -> bool {
        self.pending_selection.is_some()
    }

    /// The current source as a downloadable file.
    pub fn export(&self) -> ExportDocument {
        ExportDocument {
            filename: DEFAULT_FILENAME,
            content: self.source.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockSurface;
    use crate::scaffold::scaffold;

    fn render(session: &mut Session<MockSurface>) {
        session
            .render_with(|src| Ok(MockSurface::from_document(&scaffold(src))))
            .unwrap();
    }

    #[test]
    fn render_reconstructs_surface_from_source() {
        let mut session = Session::new("<p>alpha</p>");
        render(&mut session);
        assert_eq!(session.surface().unwrap().markup().unwrap(), "<p>alpha</p>");
    }

    #[test]
    fn render_discards_unsynced_live_edits() {
        let mut session = Session::new("<p>alpha</p>");
        render(&mut session);
        session.surface_mut().unwrap().set_body("<p>edited</p>");
        render(&mut session);
        assert_eq!(session.surface().unwrap().markup().unwrap(), "<p>alpha</p>");
    }

    #[test]
    fn write_back_copies_markup_verbatim() {
        let mut session = Session::new("<p>alpha</p>");
        render(&mut session);
        session
            .surface_mut()
            .unwrap()
            .set_body("<p>alpha</p><div style=\"background-color: red;\">beta</div>");
        session.write_back().unwrap();
        assert_eq!(
            session.source(),
            "<p>alpha</p><div style=\"background-color: red;\">beta</div>"
        );
        assert_eq!(
            session.source(),
            session.surface().unwrap().markup().unwrap()
        );
        assert!(session.last_write_back().is_some());
    }

    #[test]
    fn write_back_without_surface_fails() {
        let mut session = Session::<MockSurface>::new("<p>alpha</p>");
        assert!(matches!(
            session.write_back(),
            Err(EditorError::SurfaceNotReady)
        ));
        assert_eq!(session.source(), "<p>alpha</p>");
    }

    #[test]
    fn render_failure_is_reported_as_such() {
        let mut session = Session::<MockSurface>::new("<p>alpha</p>");
        let result = session.render_with(|_| Err(EditorError::operation("frame exploded")));
        assert!(matches!(result, Err(EditorError::RenderFailure(_))));
        assert!(!session.has_surface());
    }

    #[test]
    fn pending_selection_is_single_and_clearable() {
        let mut session = Session::new("<p>alpha</p>");
        render(&mut session);
        session.surface_mut().unwrap().select_text("alpha");

        session.capture_selection();
        assert!(session.has_pending_selection());

        // Dialog closed without confirming.
        session.clear_pending_selection();
        assert!(session.take_pending_selection().is_none());
    }

    #[test]
    fn render_invalidates_pending_selection() {
        let mut session = Session::new("<p>alpha</p>");
        render(&mut session);
        session.surface_mut().unwrap().select_text("alpha");
        session.capture_selection();
        render(&mut session);
        assert!(!session.has_pending_selection());
    }

    #[test]
    fn debounced_write_back_coalesces_a_burst_of_edits() {
        use crate::mock::MockScheduler;
        use crate::sync::Debouncer;
        use std::cell::RefCell;
        use std::rc::Rc;

        let scheduler = MockScheduler::new();
        let mut debouncer = Debouncer::new(scheduler.clone());

        let session = Rc::new(RefCell::new(Session::new("<p>alpha</p>")));
        render(&mut session.borrow_mut());

        // Three content-change events inside the quiescence window.
        for step in 1..=3 {
            session
                .borrow_mut()
                .surface_mut()
                .unwrap()
                .set_body(&format!("<p>edit {step}</p>"));
            let session = Rc::clone(&session);
            debouncer.poke(move || {
                session.borrow_mut().write_back().unwrap();
            });
        }

        // Nothing written until the window elapses.
        assert_eq!(session.borrow().source(), "<p>alpha</p>");
        assert_eq!(scheduler.pending_count(), 1);

        scheduler.fire_all();
        assert_eq!(session.borrow().source(), "<p>edit 3</p>");
    }

    #[test]
    fn export_uses_fixed_filename_and_current_source() {
        let session = Session::<MockSurface>::new("<p>alpha</p>");
        let export = session.export();
        assert_eq!(export.filename, "my_editable_page.html");
        assert_eq!(export.content, "<p>alpha</p>");
    }
}
