//! Percent-encoding and URL parsing.

use crate::error::Result;
use percent_encoding::{
    AsciiSet, NON_ALPHANUMERIC, percent_decode_str, percent_encode as encode_bytes,
    utf8_percent_encode,
};
use url::Url;

/// Bytes escaped by [`EncodeMode::Query`]: everything except alphanumerics
/// and the characters allowed in a URL query component.
pub const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b'-')
    .remove(b'.')
    .remove(b'/')
    .remove(b':')
    .remove(b';')
    .remove(b'=')
    .remove(b'?')
    .remove(b'@')
    .remove(b'_')
    .remove(b'~');

/// Bytes escaped by [`EncodeMode::Legacy`]: exactly the reserved characters
/// `!*'();:@&=+$,/?%#[]` and space.
///
/// The reserved list is the complement of the legacy allow-list. Everything
/// else, including controls and non-ASCII, passes through unchanged.
pub const LEGACY_ENCODE_SET: &AsciiSet = &AsciiSet::EMPTY
    .add(b'!')
    .add(b'*')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b';')
    .add(b':')
    .add(b'@')
    .add(b'&')
    .add(b'=')
    .add(b'+')
    .add(b'$')
    .add(b',')
    .add(b'/')
    .add(b'?')
    .add(b'%')
    .add(b'#')
    .add(b'[')
    .add(b']')
    .add(b' ');

/// Which characters percent-encoding leaves alone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EncodeMode {
    /// Keep everything that is valid inside a URL query component.
    #[default]
    Query,
    /// Legacy-compatible mode: escape the reserved delimiters too, so the
    /// result can be embedded as a single query value.
    Legacy,
}

impl EncodeMode {
    /// The set of ASCII bytes this mode escapes. Query mode also escapes all
    /// non-ASCII; legacy mode leaves it alone.
    #[must_use]
    pub const fn encode_set(self) -> &'static AsciiSet {
        match self {
            Self::Query => QUERY_ENCODE_SET,
            Self::Legacy => LEGACY_ENCODE_SET,
        }
    }
}

/// Percent-encode the UTF-8 bytes of `input` for the given mode.
#[must_use]
pub fn percent_encode(input: &str, mode: EncodeMode) -> String {
    match mode {
        EncodeMode::Query => utf8_percent_encode(input, QUERY_ENCODE_SET).to_string(),
        EncodeMode::Legacy => encode_legacy(input),
    }
}

/// Escape only the ASCII bytes in [`LEGACY_ENCODE_SET`].
fn encode_legacy(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut buf = [0u8; 4];
    for ch in input.chars() {
        let utf8 = ch.encode_utf8(&mut buf);
        if ch.is_ascii() {
            out.extend(encode_bytes(utf8.as_bytes(), LEGACY_ENCODE_SET));
        } else {
            out.push_str(utf8);
        }
    }
    out
}

/// Decode `%XX` escapes. `None` if the decoded bytes are not UTF-8.
///
/// Malformed escapes (`%G1`, a trailing `%`) are kept literally.
#[must_use]
pub fn percent_decode(input: &str) -> Option<String> {
    percent_decode_str(input)
        .decode_utf8()
        .ok()
        .map(std::borrow::Cow::into_owned)
}

/// Parse an absolute URL.
pub fn try_parse_url(input: &str) -> Result<Url> {
    Ok(Url::parse(input)?)
}

/// Parse an absolute URL, `None` if it is not one.
#[must_use]
pub fn parse_url(input: &str) -> Option<Url> {
    try_parse_url(input).ok()
}
