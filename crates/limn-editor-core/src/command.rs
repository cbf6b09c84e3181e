//! The formatting command vocabulary.
//!
//! `Command` is the closed set of formatting intents the toolbar can issue.
//! Each maps to a rich-text editing primitive on the live surface, except
//! `BlockBackColor` which the dispatcher implements itself by walking up to
//! the nearest block-level ancestor.

use std::fmt;

/// A formatting intent, drawn from a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Bold,
    Italic,
    Underline,
    StrikeThrough,
    Superscript,
    Subscript,
    InsertUnorderedList,
    InsertOrderedList,
    /// Foreground (text) color.
    ForeColor,
    /// Inline background (highlight) color.
    BackColor,
    /// Alternate name some engines report the inline highlight under. Never
    /// issued from the toolbar; queried as a read-back fallback.
    HiliteColor,
    /// Background of the nearest enclosing block element. Not a built-in
    /// editing primitive; handled by the dispatcher.
    BlockBackColor,
    FontSize,
    FontName,
    CreateLink,
    InsertImage,
    RemoveFormat,
}

impl Command {
    /// Every command, in rough toolbar order.
    pub const ALL: &'static [Command] = &[
        Self::Bold,
        Self::Italic,
        Self::Underline,
        Self::StrikeThrough,
        Self::Superscript,
        Self::Subscript,
        Self::InsertUnorderedList,
        Self::InsertOrderedList,
        Self::ForeColor,
        Self::BackColor,
        Self::HiliteColor,
        Self::BlockBackColor,
        Self::FontSize,
        Self::FontName,
        Self::CreateLink,
        Self::InsertImage,
        Self::RemoveFormat,
    ];

    /// Commands whose on/off state is queried to light up toolbar toggles.
    pub const TOGGLES: &'static [Command] = &[
        Self::Bold,
        Self::Italic,
        Self::Underline,
        Self::StrikeThrough,
        Self::Superscript,
        Self::Subscript,
        Self::InsertUnorderedList,
        Self::InsertOrderedList,
    ];

    /// The wire name of this command, as used by the host editing API and by
    /// `data-command` attributes in the toolbar markup.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::StrikeThrough => "strikeThrough",
            Self::Superscript => "superscript",
            Self::Subscript => "subscript",
            Self::InsertUnorderedList => "insertUnorderedList",
            Self::InsertOrderedList => "insertOrderedList",
            Self::ForeColor => "foreColor",
            Self::BackColor => "backColor",
            Self::HiliteColor => "hiliteColor",
            Self::BlockBackColor => "blockBackColor",
            Self::FontSize => "fontSize",
            Self::FontName => "fontName",
            Self::CreateLink => "createLink",
            Self::InsertImage => "insertImage",
            Self::RemoveFormat => "removeFormat",
        }
    }

    /// Parse a wire name back into a command. The set is closed, so anything
    /// unrecognized is `None`.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == name)
    }

    /// Whether the command carries a value (a color, a URL, a size token).
    pub fn requires_value(self) -> bool {
        matches!(
            self,
            Self::ForeColor
                | Self::BackColor
                | Self::HiliteColor
                | Self::BlockBackColor
                | Self::FontSize
                | Self::FontName
                | Self::CreateLink
                | Self::InsertImage
        )
    }

    /// Human-readable label for user-facing messages, derived from the wire
    /// name by splitting at case boundaries ("strikeThrough" → "Strike Through").
    pub fn label(self) -> String {
        let name = self.as_str();
        let mut label = String::with_capacity(name.len() + 4);
        for (i, ch) in name.chars().enumerate() {
            if i == 0 {
                label.extend(ch.to_uppercase());
            } else {
                if ch.is_ascii_uppercase() {
                    label.push(' ');
                }
                label.push(ch);
            }
        }
        label
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
