//! String convenience methods.
//!
//! [`StrExt`] gathers the encoding, matching, validation, and slicing
//! helpers as methods on `str`. Each one delegates to the [`encoding`],
//! [`pattern`], or [`unicode`] modules.
//!
//! [`encoding`]: crate::encoding
//! [`pattern`]: crate::pattern
//! [`unicode`]: crate::unicode
//!
//! # Examples
//!
//! ```
//! use richstr::StrExt;
//!
//! assert_eq!("a b&c".url_encoded(), "a%20b&c");
//! assert_eq!("a b&c".url_encoded_legacy(), "a%20b%26c");
//! assert_eq!("hi".base64_encoded().as_deref(), Some("aGk="));
//! assert_eq!("aGk=".base64_decoded().as_deref(), Some("hi"));
//! assert_eq!("startHELLOend".slice_between("start", "end"), Some("HELLO"));
//! assert_eq!("  padded\n".trimmed(), "padded");
//! assert!("user@example.com".is_email());
//! ```

use crate::encoding::{self, EncodeMode};
use crate::pattern::{self, PatternMatcher, RegexMatcher};
use crate::unicode;
use url::Url;

/// Convenience methods on string slices.
pub trait StrExt {
    /// Percent-encode everything not valid in a URL query component.
    fn url_encoded(&self) -> String;

    /// Percent-encode in the legacy reserved-character mode
    /// ([`EncodeMode::Legacy`]). Only `!*'();:@&=+$,/?%#[]` and space are
    /// escaped; everything else is copied through.
    fn url_encoded_legacy(&self) -> String;

    /// Percent-decode. `None` if the result is not UTF-8.
    fn url_decoded(&self) -> Option<String>;

    /// Base64 of the UTF-8 bytes.
    fn base64_encoded(&self) -> Option<String>;

    /// Decode base64 (whitespace ignored) into UTF-8 text.
    fn base64_decoded(&self) -> Option<String>;

    /// Parse as an absolute URL.
    fn to_url(&self) -> Option<Url>;

    /// UTF-8 bytes.
    fn to_bytes(&self) -> Option<Vec<u8>>;

    /// True iff `pattern` matches anywhere. Malformed patterns are logged
    /// through `tracing` and yield `false`.
    fn matches_pattern(&self, pattern: &str) -> bool {
        self.matches_pattern_with(pattern, &RegexMatcher::new())
    }

    /// [`matches_pattern`](Self::matches_pattern) with an explicit matcher.
    fn matches_pattern_with<M: PatternMatcher>(&self, pattern: &str, matcher: &M) -> bool;

    /// Per match, the full match followed by each capture group.
    /// Malformed patterns are logged and yield no matches.
    fn match_groups(&self, pattern: &str) -> Vec<Vec<String>> {
        self.match_groups_with(pattern, &RegexMatcher::new())
    }

    /// [`match_groups`](Self::match_groups) with an explicit matcher.
    fn match_groups_with<M: PatternMatcher>(
        &self,
        pattern: &str,
        matcher: &M,
    ) -> Vec<Vec<String>>;

    /// True iff a phone number occurs somewhere in the string.
    fn is_phone_number(&self) -> bool;

    /// True iff the whole string is an email address.
    fn is_email(&self) -> bool;

    /// Strip leading and trailing whitespace, line breaks included.
    fn trimmed(&self) -> &str;

    /// Text strictly between the first `from` and the first `to` after it.
    /// `None` if either marker is empty.
    fn slice_between(&self, from: &str, to: &str) -> Option<&str>;

    /// Number of user-perceived characters (grapheme clusters).
    fn char_count(&self) -> usize;
}

impl StrExt for str {
    fn url_encoded(&self) -> String {
        encoding::percent_encode(self, EncodeMode::Query)
    }

    fn url_encoded_legacy(&self) -> String {
        encoding::percent_encode(self, EncodeMode::Legacy)
    }

    fn url_decoded(&self) -> Option<String> {
        encoding::percent_decode(self)
    }

    fn base64_encoded(&self) -> Option<String> {
        encoding::base64_encode(self)
    }

    fn base64_decoded(&self) -> Option<String> {
        encoding::base64_decode(self)
    }

    fn to_url(&self) -> Option<Url> {
        encoding::parse_url(self)
    }

    fn to_bytes(&self) -> Option<Vec<u8>> {
        Some(self.as_bytes().to_vec())
    }

    fn matches_pattern_with<M: PatternMatcher>(&self, pattern: &str, matcher: &M) -> bool {
        matcher.is_match(self, pattern)
    }

    fn match_groups_with<M: PatternMatcher>(
        &self,
        pattern: &str,
        matcher: &M,
    ) -> Vec<Vec<String>> {
        matcher.captures(self, pattern)
    }

    fn is_phone_number(&self) -> bool {
        pattern::contains_phone_number(self)
    }

    fn is_email(&self) -> bool {
        pattern::is_email(self)
    }

    fn trimmed(&self) -> &str {
        self.trim()
    }

    fn slice_between(&self, from: &str, to: &str) -> Option<&str> {
        if from.is_empty() || to.is_empty() {
            return None;
        }
        let start = self.find(from)? + from.len();
        let end = start + self[start..].find(to)?;
        Some(&self[start..end])
    }

    fn char_count(&self) -> usize {
        unicode::grapheme_count(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::CollectingDiagnostics;
    use crate::pattern::MatcherOptions;

    #[test]
    fn test_slice_between() {
        assert_eq!("startHELLOend".slice_between("start", "end"), Some("HELLO"));
        assert_eq!("[a][b]".slice_between("[", "]"), Some("a"));
        assert_eq!("startend".slice_between("start", "end"), Some(""));
        assert_eq!("endHELLOstart".slice_between("start", "end"), None);
        assert_eq!("no markers".slice_between("start", "end"), None);
        assert_eq!("«ü»".slice_between("«", "»"), Some("ü"));
        // empty markers never occur
        assert_eq!("abc".slice_between("", ""), None);
        assert_eq!("abc".slice_between("a", ""), None);
        assert_eq!("abc".slice_between("", "c"), None);
    }

    #[test]
    fn test_to_end_must_follow_from() {
        // `to` occurs only inside `from`, not after it
        assert_eq!("abc".slice_between("ab", "b"), None);
    }

    #[test]
    fn test_trimmed() {
        assert_eq!("\t\r\n  hi there \n".trimmed(), "hi there");
        assert_eq!("\u{2003}wide\u{2028}".trimmed(), "wide");
        assert_eq!("   ".trimmed(), "");
    }

    #[test]
    fn test_bytes_and_count() {
        assert_eq!("hé".to_bytes(), Some(vec![b'h', 0xc3, 0xa9]));
        assert_eq!("hé".char_count(), 2);
        assert_eq!("".char_count(), 0);
    }

    #[test]
    fn test_url_helpers() {
        assert_eq!("a b".url_encoded().url_decoded().as_deref(), Some("a b"));
        assert!("https://example.com".to_url().is_some());
        assert!("example".to_url().is_none());
    }

    #[test]
    fn test_pattern_helpers() {
        assert!("abc123".matches_pattern(r"\d"));
        assert!(!"abc".matches_pattern("("));
        assert_eq!(
            "12-34".match_groups(r"(\d+)-(\d+)"),
            vec![vec!["12-34", "12", "34"]]
        );
        assert!("abc".match_groups("(").is_empty());
    }

    #[test]
    fn test_pattern_helpers_with_injected_sink() {
        let sink = CollectingDiagnostics::new();
        let matcher = RegexMatcher::with_diagnostics(MatcherOptions::default(), sink);
        assert!(!"abc".matches_pattern_with("(", &matcher));
        assert!("ABC".match_groups_with("b", &matcher).is_empty());
        assert_eq!(matcher.diagnostics().len(), 1);
    }

    #[test]
    fn test_validators() {
        assert!("user@example.com".is_email());
        assert!(!"not-an-email".is_email());
        assert!("call 555-867-5309".is_phone_number());
        assert!(!"call later".is_phone_number());
    }
}
