//! String extension behaviour, including property-based round trips.

use proptest::prelude::*;
use richstr::encoding::{
    Base64Codec, Base64Options, DecodeMode, EncodeMode, StandardBase64, percent_decode,
    percent_encode,
};
use richstr::pattern::{MatcherOptions, RegexMatcher};
use richstr::{CollectingDiagnostics, LogLevel, StrExt};

// ============================================================================
// Base64
// ============================================================================

proptest! {
    /// Decoding an encoding reproduces the original text.
    #[test]
    fn base64_round_trip(s in "\\PC{0,64}") {
        let encoded = s.base64_encoded().unwrap_or_default();
        prop_assert_eq!(encoded.base64_decoded(), Some(s));
    }

    /// Line breaks inserted into an encoding are ignored.
    #[test]
    fn base64_ignores_wrapping(s in "[a-z]{1,64}", width in 1usize..8) {
        let encoded = s.base64_encoded().unwrap_or_default();
        let wrapped: String = encoded
            .as_bytes()
            .chunks(width)
            .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
            .collect::<Vec<_>>()
            .join("\n");
        prop_assert_eq!(wrapped.base64_decoded(), Some(s));
    }

    /// Percent-decoding undoes both encoding modes.
    #[test]
    fn percent_round_trip(s in "\\PC{0,64}") {
        prop_assert_eq!(percent_decode(&percent_encode(&s, EncodeMode::Query)), Some(s.clone()));
        prop_assert_eq!(percent_decode(&percent_encode(&s, EncodeMode::Legacy)), Some(s));
    }
}

#[test]
fn legacy_encoding_escapes_only_reserved_characters() {
    assert_eq!("é\t".url_encoded_legacy(), "é\t");
    assert_eq!("k=v w".url_encoded_legacy(), "k%3Dv%20w");
    assert_eq!("é\t".url_encoded(), "%C3%A9%09");
}

#[test]
fn base64_rejects_foreign_characters() {
    assert_eq!("Zm9v!YmFy".base64_decoded(), None);
    assert_eq!("Zm9vYmFy?".base64_decoded(), None);
    assert_eq!("////".base64_decoded(), None); // 0xFF bytes are not UTF-8
}

#[test]
fn lenient_codec_skips_foreign_characters() {
    let codec = StandardBase64::new(Base64Options {
        decode_mode: DecodeMode::IgnoreUnknown,
        ..Base64Options::default()
    });
    assert_eq!(codec.decode_str("Zm9v!YmFy").ok().as_deref(), Some("foobar"));
}

// ============================================================================
// Slicing, trimming, counting
// ============================================================================

#[test]
fn slice_between_markers() {
    assert_eq!("startHELLOend".slice_between("start", "end"), Some("HELLO"));
    assert_eq!("startHELLO".slice_between("start", "end"), None);
    assert_eq!("end start".slice_between("start", "end"), None);
    assert_eq!("abc".slice_between("", ""), None);
}

#[test]
fn trimming_and_counting() {
    assert_eq!("\n\t value \r\n".trimmed(), "value");
    assert_eq!("👍🏽 ok".char_count(), 4);
}

// ============================================================================
// Patterns and validation
// ============================================================================

#[test]
fn regex_groups_full_match_first() {
    assert_eq!(
        "12-34".match_groups(r"(\d+)-(\d+)"),
        vec![vec!["12-34", "12", "34"]]
    );
}

#[test]
fn malformed_pattern_is_reported_not_raised() {
    let matcher =
        RegexMatcher::with_diagnostics(MatcherOptions::default(), CollectingDiagnostics::new());
    assert!(!"text".matches_pattern_with("a{2,1}", &matcher));
    let entries = matcher.diagnostics().entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].0, LogLevel::Warn);
}

#[test]
fn email_and_phone() {
    assert!("user@example.com".is_email());
    assert!(!"not-an-email".is_email());
    assert!("reach us on +1 415 555 2671".is_phone_number());
    assert!(!"room 101".is_phone_number());
}

#[test]
fn url_conversion() {
    let url = "https://example.com/a%20b?q=1".to_url();
    assert_eq!(url.as_ref().map(url::Url::path), Some("/a%20b"));
    assert!("::not a url::".to_url().is_none());
    assert_eq!("snowman ☃".to_bytes().map(|b| b.len()), Some(11));
}
