//! Hex display color check

/// True for `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA` (either case)
pub fn is_hex_color(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(digits) => matches!(digits.len(), 3 | 4 | 6 | 8) && digits.bytes().all(|b| b.is_ascii_hexdigit()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_engine_colors() {
        assert!(is_hex_color("#FFFFFFFF"));
        assert!(is_hex_color("#1a2b3c"));
        assert!(is_hex_color("#fff"));
        assert!(is_hex_color("#ABCD"));
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(!is_hex_color("FFFFFF"));
        assert!(!is_hex_color("#12345"));
        assert!(!is_hex_color("#GGGGGG"));
        assert!(!is_hex_color("#"));
        assert!(!is_hex_color("red"));
        assert!(!is_hex_color("#ffffff "));
    }
}
