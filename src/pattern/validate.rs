//! Email validation and phone-number detection.

use regex::Regex;
use std::sync::LazyLock;

/// RFC 5322 derived address pattern, matched against the whole input
/// case-insensitively. Accepts quoted local parts and bracketed IP literals.
const EMAIL_PATTERN: &str = concat!(
    r#"(?i)^(?:[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*"#,
    r#"|"(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21\x23-\x5b\x5d-\x7f]"#,
    r#"|\\[\x01-\x09\x0b\x0c\x0e-\x7f])*")"#,
    r#"@(?:(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?"#,
    r#"|\[(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}"#,
    r#"(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?|[a-z0-9-]*[a-z0-9]"#,
    r#":(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21-\x5a\x53-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])+)\])$"#,
);

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("Invalid email regex"));

/// Phone number candidates: optional `+CC`, optional `(area)`, then digits
/// with single space, dot, or dash separators.
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+\d{1,3}[ .-]?)?(?:\(\d{1,4}\)[ .-]?)?\d(?:[ .-]?\d)*")
        .expect("Invalid phone regex")
});

/// Minimum digits in a detected phone number.
pub const PHONE_MIN_DIGITS: usize = 7;
/// Maximum digits in a detected phone number (E.164).
pub const PHONE_MAX_DIGITS: usize = 15;

/// True iff the whole string is an email address.
#[must_use]
pub fn is_email(text: &str) -> bool {
    EMAIL_REGEX.is_match(text)
}

/// Phone numbers found in `text`, in order.
///
/// A candidate counts when it has 7 to 15 digits and is not glued to
/// surrounding letters or digits.
#[must_use]
pub fn find_phone_numbers(text: &str) -> Vec<&str> {
    PHONE_REGEX
        .find_iter(text)
        .filter(|m| {
            let digits = m.as_str().chars().filter(char::is_ascii_digit).count();
            let before = text[..m.start()].chars().next_back();
            let after = text[m.end()..].chars().next();
            (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits)
                && !before.is_some_and(char::is_alphanumeric)
                && !after.is_some_and(char::is_alphanumeric)
        })
        .map(|m| m.as_str())
        .collect()
}

/// True iff at least one phone number occurs in `text`.
#[must_use]
pub fn contains_phone_number(text: &str) -> bool {
    !find_phone_numbers(text).is_empty()
}
