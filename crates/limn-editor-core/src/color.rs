//! Color value normalization for toolbar affordances.
//!
//! Formatting-state queries report colors however the host feels like it that
//! day: `rgb(r, g, b)`, `rgba(...)`, hex, or `transparent`. The toolbar's
//! color pickers want `#rrggbb`.

use smol_str::SmolStr;

/// Normalize a reported color to lowercase `#rrggbb` hex.
///
/// Returns `None` for `transparent` and for anything that cannot be parsed;
/// callers substitute their own per-affordance default.
pub fn rgb_to_hex(value: &str) -> Option<SmolStr> {
    let value = value.trim();
    if value.is_empty() || value.contains("transparent") {
        return None;
    }
    if let Some(hex) = value.strip_prefix('#') {
        if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Some(SmolStr::new(value.to_ascii_lowercase()));
        }
        return None;
    }

    // Pull out the first three runs of digits: handles rgb() and rgba()
    // without caring about the exact syntax around them.
    let mut channels = [0u8; 3];
    let mut found = 0;
    let mut current: Option<u32> = None;
    for ch in value.chars() {
        if let Some(digit) = ch.to_digit(10) {
            current = Some(current.unwrap_or(0).saturating_mul(10).saturating_add(digit));
        } else if let Some(n) = current.take() {
            channels[found] = n.min(255) as u8;
            found += 1;
            if found == 3 {
                break;
            }
        }
    }
    if found < 3 {
        if let Some(n) = current {
            channels[found] = n.min(255) as u8;
            found += 1;
        }
    }
    if found < 3 {
        return None;
    }

    Some(SmolStr::new(format!(
        "#{:02x}{:02x}{:02x}",
        channels[0], channels[1], channels[2]
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_rgb_triplets() {
        assert_eq!(rgb_to_hex("rgb(255, 0, 0)").unwrap(), "#ff0000");
        assert_eq!(rgb_to_hex("rgb(0, 128, 255)").unwrap(), "#0080ff");
    }

    #[test]
    fn converts_rgba_ignoring_alpha() {
        assert_eq!(rgb_to_hex("rgba(18, 52, 86, 0.5)").unwrap(), "#123456");
    }

    #[test]
    fn passes_hex_through_lowercased() {
        assert_eq!(rgb_to_hex("#FFAA00").unwrap(), "#ffaa00");
    }

    #[test]
    fn rejects_transparent_and_garbage() {
        assert_eq!(rgb_to_hex("transparent"), None);
        assert_eq!(rgb_to_hex("rgba(0, 0, 0, 0) transparent"), None);
        assert_eq!(rgb_to_hex(""), None);
        assert_eq!(rgb_to_hex("currentcolor"), None);
        assert_eq!(rgb_to_hex("rgb(1)"), None);
        assert_eq!(rgb_to_hex("#12"), None);
    }

    #[test]
    fn clamps_out_of_range_channels() {
        assert_eq!(rgb_to_hex("rgb(300, 0, 0)").unwrap(), "#ff0000");
    }

    #[test]
    fn clamps_absurdly_long_digit_runs() {
        // Digit runs wider than u32 must saturate, not overflow.
        assert_eq!(
            rgb_to_hex("rgb(99999999999999999999, 0, 0)").unwrap(),
            "#ff0000"
        );
        assert_eq!(
            rgb_to_hex("rgba(4294967296, 4294967297, 12, 1)").unwrap(),
            "#ffff0c"
        );
    }
}
