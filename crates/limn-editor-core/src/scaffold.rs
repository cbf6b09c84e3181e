//! The fixed document chrome wrapped around the source on every render.
//!
//! Rendering puts the source markup into a full document with a known head:
//! font imports plus a small base stylesheet. Reading the surface back
//! returns only the body markup, so render-then-read is identity modulo this
//! chrome.

use crate::fonts::font_imports;

/// Filename used by the export action.
pub const DEFAULT_FILENAME: &str = "my_editable_page.html";

/// Starter document placed in the source buffer at startup.
pub const DEFAULT_DOCUMENT: &str = "<h1>Welcome to limn</h1>\n\
<p>Type markup on the left, press <b>Render</b>, and edit the result right here.</p>\n\
<p>Formatting applied from the toolbar is synced back into the source after you pause.</p>";

/// Stylesheet for the editable surface: font imports plus base typography.
pub fn base_stylesheet() -> String {
    format!(
        "{imports}\
body {{\n\
    margin: 0;\n\
    padding: 1rem;\n\
    box-sizing: border-box;\n\
    font-family: 'Inter', sans-serif;\n\
    line-height: 1.6;\n\
    word-wrap: break-word;\n\
    min-height: calc(100% - 2rem);\n\
    outline: none;\n\
}}\n\
* {{ box-sizing: border-box; }}\n\
img {{ max-width: 100%; height: auto; display: block; margin: 0.5rem 0; cursor: pointer; }}\n\
a {{ color: #4a90e2; text-decoration: underline; }}\n\
ul, ol {{ padding-left: 1.5rem; margin-top: 0.5rem; margin-bottom: 0.5rem; }}\n\
p {{ margin-bottom: 0.8rem; }}\n\
p:last-child {{ margin-bottom: 0; }}\n",
        imports = font_imports()
    )
}

/// Markup for the head of the rendered document.
pub fn head_markup() -> String {
    format!("<style>\n{}</style>", base_stylesheet())
}

/// Wrap body markup in the full document chrome.
pub fn scaffold(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n{head}\n</head>\n<body>{body}</body>\n</html>\n",
        head = head_markup(),
    )
}

/// Extract the body markup back out of a scaffolded document.
///
/// The inverse of [`scaffold`] for documents it produced; `None` when the
/// markers are missing.
pub fn body_of(document: &str) -> Option<&str> {
    let start = document.find("<body>")? + "<body>".len();
    let end = document.rfind("</body>")?;
    document.get(start..end)
}

/// The source buffer's content as a downloadable file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    pub filename: &'static str,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaffold_round_trips_body() {
        let body = "<p>one</p><div><b>two</b></div>";
        let document = scaffold(body);
        assert_eq!(body_of(&document), Some(body));
    }

    #[test]
    fn scaffold_carries_chrome() {
        let document = scaffold("<p>x</p>");
        assert!(document.starts_with("<!DOCTYPE html>"));
        assert!(document.contains("<style>"));
        assert!(document.contains("fonts.googleapis.com"));
        assert!(document.contains("font-family: 'Inter', sans-serif;"));
    }

    #[test]
    fn body_of_requires_markers() {
        assert_eq!(body_of("<p>bare</p>"), None);
    }
}
