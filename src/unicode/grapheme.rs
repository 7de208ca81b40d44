//! Grapheme cluster counting.

use unicode_segmentation::UnicodeSegmentation;

/// Number of user-perceived characters (extended grapheme clusters).
#[must_use]
pub fn grapheme_count(s: &str) -> usize {
    if s.is_ascii() && !s.contains('\r') {
        return s.len();
    }
    s.graphemes(true).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_fast_path() {
        assert_eq!(grapheme_count("hello"), 5);
        assert_eq!(grapheme_count(""), 0);
    }

    #[test]
    fn test_graphemes_emoji() {
        // Family emoji (ZWJ sequence)
        assert_eq!(grapheme_count("👨‍👩‍👧"), 1);
        assert_eq!(grapheme_count("🇺🇸🇫🇷"), 2);
    }

    #[test]
    fn test_graphemes_combining() {
        // e + combining acute accent
        assert_eq!(grapheme_count("e\u{0301}"), 1);
        assert_eq!("e\u{0301}".chars().count(), 2);
    }

    #[test]
    fn test_crlf_is_one_grapheme() {
        assert_eq!(grapheme_count("a\r\nb"), 3);
        assert_eq!(grapheme_count("a\nb"), 3);
    }
}
