use std::sync::LazyLock;

use regex::Regex;

static BARCODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("valid barcode pattern"));

/// Text made only of ASCII digits is treated as a barcode
pub fn looks_like_barcode(text: &str) -> bool {
    BARCODE_PATTERN.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_barcode_shape() {
        assert!(looks_like_barcode("5449000000996"));
        assert!(looks_like_barcode("0"));
        assert!(!looks_like_barcode(""));
        assert!(!looks_like_barcode("5449 000000996"));
        assert!(!looks_like_barcode("Coke 330ml"));
        assert!(!looks_like_barcode("٣٤٥"));
    }
}
