//! Toolbar affordance state.
//!
//! After every dispatched command (and on selection changes) the toolbar is
//! re-rendered from a fresh read of the surface's formatting state at the
//! cursor. With no active selection everything resets to defaults instead of
//! showing stale state.

use smol_str::SmolStr;

use crate::color::rgb_to_hex;
use crate::command::Command;
use crate::dispatch::find_block_ancestor;
use crate::fonts::clean_font_family;
use crate::surface::EditSurface;

/// Snapshot of what the toolbar should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarState {
    active: Vec<Command>,
    pub fore_color: SmolStr,
    pub back_color: SmolStr,
    pub block_back_color: SmolStr,
    pub font_size: SmolStr,
    pub font_family: SmolStr,
}

impl Default for ToolbarState {
    fn default() -> Self {
        Self {
            active: Vec::new(),
            fore_color: SmolStr::new_static("#000000"),
            back_color: SmolStr::new_static("#ffffff"),
            block_back_color: SmolStr::new_static("#ffffff"),
            font_size: SmolStr::default(),
            font_family: SmolStr::default(),
        }
    }
}

impl ToolbarState {
    /// Whether a toggle command should render as active.
    pub fn is_active(&self, command: Command) -> bool {
        self.active.contains(&command)
    }

    /// Read the current formatting state at the cursor.
    pub fn read_from<S: EditSurface>(surface: &S) -> Self {
        let Some(selection) = surface.selection() else {
            return Self::default();
        };

        let mut state = Self::default();
        for &command in Command::TOGGLES {
            if surface.query_state(command) {
                state.active.push(command);
            }
        }

        if let Some(hex) = rgb_to_hex(&surface.query_value(Command::ForeColor)) {
            state.fore_color = hex;
        }
        // Some engines report the inline highlight under hiliteColor only.
        if let Some(hex) = rgb_to_hex(&surface.query_value(Command::BackColor))
            .or_else(|| rgb_to_hex(&surface.query_value(Command::HiliteColor)))
        {
            state.back_color = hex;
        }
        if let Some(block) = find_block_ancestor(surface, &selection) {
            if let Some(hex) = surface
                .block_background(&block)
                .as_deref()
                .and_then(rgb_to_hex)
            {
                state.block_back_color = hex;
            }
        }

        state.font_size = surface.query_value(Command::FontSize);
        if let Some(family) = clean_font_family(&surface.query_value(Command::FontName)) {
            state.font_family = SmolStr::new_static(family);
        }

        tracing::trace!(?state, "toolbar state refreshed");
        state
    }
}
