//! Command dispatch against the live surface.
//!
//! This is the central dispatch point for toolbar intents: it checks the
//! surface exists, applies the command (or implements it, for block
//! backgrounds and link insertion with explicit text), and reports the
//! outcome as a notice. Failures never propagate past the caller that shows
//! the notice.

use crate::command::Command;
use crate::error::EditorError;
use crate::notice::Notice;
use crate::session::Session;
use crate::surface::EditSurface;

/// Tags that count as block-level ancestors for block background targeting.
pub const BLOCK_TAGS: &[&str] = &["P", "DIV", "H1", "H2", "H3", "H4", "H5", "H6", "LI"];

/// Dispatch a formatting command with its optional value.
///
/// On success the caller is expected to schedule the debounced write-back and
/// refresh the toolbar affordances. The source buffer is never touched here,
/// so a failed dispatch leaves it unchanged by construction.
pub fn dispatch<S: EditSurface>(
    session: &mut Session<S>,
    command: Command,
    value: Option<&str>,
) -> Result<Notice, EditorError> {
    let surface = session.surface_mut().ok_or(EditorError::SurfaceNotReady)?;
    if command.requires_value() && value.is_none() {
        return Err(EditorError::operation(format!(
            "command '{command}' requires a value"
        )));
    }

    let notice = match command {
        Command::BlockBackColor => {
            let color = value.ok_or_else(|| EditorError::operation("missing color value"))?;
            apply_block_background(surface, color)?
        }
        Command::FontName => {
            surface.apply(command, value)?;
            // With no selected text the inline command has nothing to wrap;
            // switch the document default so the choice still takes effect.
            let collapsed = surface
                .selection()
                .map(|sel| surface.is_collapsed(&sel))
                .unwrap_or(true);
            if collapsed {
                if let Some(family) = value {
                    surface.set_default_font(family)?;
                }
            }
            Notice::quick(format!("{} applied!", command.label()))
        }
        _ => {
            surface.apply(command, value)?;
            Notice::quick(format!("{} applied!", command.label()))
        }
    };

    tracing::debug!(command = command.as_str(), "command dispatched");
    Ok(notice)
}

/// Set the background of the nearest block-level ancestor of the selection.
fn apply_block_background<S: EditSurface>(
    surface: &mut S,
    color: &str,
) -> Result<Notice, EditorError> {
    let selection = surface.selection().ok_or(EditorError::NoBlockTarget)?;
    let block = find_block_ancestor(surface, &selection).ok_or(EditorError::NoBlockTarget)?;
    surface.set_block_background(&block, color)?;
    Ok(Notice::quick("Block background color applied."))
}

/// Walk upward from the selection's container until a block tag is found.
///
/// Returns `None` when the walk reaches the document root first: the
/// selection has no suitable block ancestor and nothing should be mutated.
pub fn find_block_ancestor<S: EditSurface>(
    surface: &S,
    selection: &S::Selection,
) -> Option<S::Node> {
    let mut node = surface.selection_container(selection)?;
    loop {
        if surface.is_root(&node) {
            return None;
        }
        if BLOCK_TAGS.contains(&surface.tag_name(&node).as_str()) {
            return Some(node);
        }
        node = surface.parent(&node)?;
    }
}

/// Insert a link at the captured (or current) selection.
///
/// With explicit `text`, the currently selected content is deleted, the text
/// inserted, exactly that text re-selected, and the link applied to it, so
/// the anchor's visible text is the user's string, not the URL. With text
/// but no selection at all, the text is inserted fresh and linked. Without
/// text the built-in behavior applies (selected text becomes the anchor, or
/// the URL itself at a bare cursor).
pub fn insert_link<S: EditSurface>(
    session: &mut Session<S>,
    url: &str,
    text: Option<&str>,
) -> Result<Notice, EditorError> {
    if !session.has_surface() {
        return Err(EditorError::SurfaceNotReady);
    }
    let pending = session.take_pending_selection();
    let surface = session.surface_mut().ok_or(EditorError::SurfaceNotReady)?;
    if let Some(sel) = pending.as_ref() {
        surface.restore_selection(sel)?;
    }

    match text {
        Some(text) if !text.is_empty() => {
            let inserted = match pending.or_else(|| surface.selection()) {
                Some(target) => surface.replace_with_text(&target, text)?,
                None => surface.insert_text(text)?,
            };
            surface.restore_selection(&inserted)?;
            surface.apply(Command::CreateLink, Some(url))?;
        }
        _ => {
            surface.apply(Command::CreateLink, Some(url))?;
        }
    }

    tracing::debug!(url, "link inserted");
    Ok(Notice::quick("Link inserted."))
}

/// Insert an image at the captured (or current) selection.
pub fn insert_image<S: EditSurface>(
    session: &mut Session<S>,
    url: &str,
) -> Result<Notice, EditorError> {
    if !session.has_surface() {
        return Err(EditorError::SurfaceNotReady);
    }
    let pending = session.take_pending_selection();
    let surface = session.surface_mut().ok_or(EditorError::SurfaceNotReady)?;
    if let Some(sel) = pending.as_ref() {
        surface.restore_selection(sel)?;
    }
    surface.apply(Command::InsertImage, Some(url))?;
    Ok(Notice::quick("Image inserted."))
}

/// The user-facing notice for a failed operation.
pub fn failure_notice(command: Option<Command>, err: &EditorError) -> Notice {
    match err {
        EditorError::SurfaceNotReady => Notice::info("Preview not loaded. Render the source first."),
        EditorError::NoBlockTarget => Notice::info(
            "No suitable block element selected to apply background. \
             Select a paragraph, heading, or div.",
        ),
        EditorError::RenderFailure(_) => Notice::long("Error rendering HTML."),
        EditorError::OperationFailed(_) => match command {
            Some(command) => Notice::info(format!("Error applying {}.", command.label())),
            None => Notice::info("Editing operation failed."),
        },
    }
}
