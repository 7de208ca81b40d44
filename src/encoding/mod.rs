//! Percent-encoding, URL parsing, and base64.

mod base64;
mod percent;

pub use self::base64::{
    Alphabet, Base64Codec, Base64Options, DecodeMode, StandardBase64, base64_decode,
    base64_encode, try_base64_decode,
};
pub use self::percent::{
    EncodeMode, LEGACY_ENCODE_SET, QUERY_ENCODE_SET, parse_url, percent_decode, percent_encode,
    try_parse_url,
};
