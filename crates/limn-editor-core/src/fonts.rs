//! The font catalog and font-stack handling.
//!
//! The live surface loads every catalog font through Google Fonts so the
//! font-family picker can preview and apply any of them. Formatting-state
//! queries report font stacks with quoting and fallbacks attached, so there
//! is a cleanup step before matching against the catalog.

/// Fonts offered by the font-family picker. Web-safe staples first, then a
/// spread of open-source faces across serif, sans, display, and script.
pub const FONT_CATALOG: &[&str] = &[
    "Arial",
    "Verdana",
    "Tahoma",
    "Trebuchet MS",
    "Georgia",
    "Times New Roman",
    "Open Sans",
    "Roboto",
    "Lato",
    "Montserrat",
    "Inter",
    "Poppins",
    "Ubuntu",
    "Nunito",
    "Raleway",
    "Merriweather",
    "Playfair Display",
    "Lora",
    "Crimson Text",
    "Libre Baskerville",
    "EB Garamond",
    "Bitter",
    "Oswald",
    "Bebas Neue",
    "Anton",
    "Fjalla One",
    "Staatliches",
    "Dancing Script",
    "Indie Flower",
    "Kalam",
    "Permanent Marker",
    "Shadows Into Light",
    "Pacifico",
    "Architects Daughter",
    "Lobster",
    "Courgette",
    "Tangerine",
    "Fira Sans",
    "PT Sans",
    "Source Sans 3",
    "Work Sans",
    "Dosis",
    "Exo 2",
    "Heebo",
    "IBM Plex Sans",
    "Josefin Sans",
    "Kanit",
    "Mada",
    "Manrope",
    "Martel",
    "Merriweather Sans",
    "Mukta",
    "Noto Sans",
    "Oxygen",
    "Questrial",
    "Quicksand",
    "Rubik",
    "Slabo 27px",
    "Space Grotesk",
    "Sora",
    "Spectral",
    "Spline Sans",
    "Syne",
    "Tenor Sans",
    "Titillium Web",
    "Varela Round",
    "Zilla Slab",
    "Chakra Petch",
    "DotGothic16",
    "Press Start 2P",
    "Comfortaa",
    "Orbitron",
    "Overpass",
    "Rajdhani",
    "Secular One",
    "Sofia Sans",
    "Solway",
    "Texturina",
    "Trirong",
    "Vollkorn",
    "Volkhov",
    "Xanh Mono",
    "Amatic SC",
    "Arimo",
    "Asap",
    "Barlow",
    "Blinker",
    "Catamaran",
    "Cousine",
    "Encode Sans",
    "Exo",
    "Faustina",
    "Gelasio",
    "IBM Plex Mono",
    "Inconsolata",
    "Karla",
    "Nanum Gothic",
    "Old Standard TT",
    "Patua One",
    "Philosopher",
    "Proza Libre",
    "Red Hat Display",
    "Sarabun",
    "Special Elite",
];

/// One `@import` line per catalog font, for the live surface's stylesheet.
pub fn font_imports() -> String {
    let mut imports = String::new();
    for font in FONT_CATALOG {
        let family = font.replace(' ', "+");
        imports.push_str(&format!(
            "@import url('https://fonts.googleapis.com/css2?family={family}&display=swap');\n"
        ));
    }
    imports
}

/// Reduce a reported font stack to a catalog font.
///
/// Takes the first family of the stack, strips quoting, and matches it
/// against the catalog (case-insensitively). Unrecognized families yield
/// `None` so the picker resets instead of showing a lie.
pub fn clean_font_family(raw: &str) -> Option<&'static str> {
    let first = raw
        .split(',')
        .next()?
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .trim();
    if first.is_empty() {
        return None;
    }
    FONT_CATALOG
        .iter()
        .copied()
        .find(|f| f.eq_ignore_ascii_case(first))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleans_quoted_stacks() {
        assert_eq!(clean_font_family("\"Open Sans\", sans-serif"), Some("Open Sans"));
        assert_eq!(clean_font_family("'Playfair Display'"), Some("Playfair Display"));
        assert_eq!(clean_font_family("Georgia, serif"), Some("Georgia"));
    }

    #[test]
    fn rejects_unknown_families() {
        assert_eq!(clean_font_family("Comic Sans MS, cursive"), None);
        assert_eq!(clean_font_family(""), None);
        assert_eq!(clean_font_family("   "), None);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(clean_font_family("open sans"), Some("Open Sans"));
    }

    #[test]
    fn imports_cover_the_catalog() {
        let imports = font_imports();
        assert_eq!(imports.lines().count(), FONT_CATALOG.len());
        assert!(imports.contains("family=Trebuchet+MS&display=swap"));
        assert!(imports.contains("family=Press+Start+2P&display=swap"));
    }
}
