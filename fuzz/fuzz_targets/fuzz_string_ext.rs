//! Fuzz target for the string helpers.
//!
//! Decoders and validators must never panic, and encodings must round trip.

#![no_main]

use libfuzzer_sys::fuzz_target;
use richstr::StrExt;

fuzz_target!(|data: &str| {
    let _ = data.base64_decoded();
    let _ = data.url_decoded();
    let _ = data.to_url();
    let _ = data.is_email();
    let _ = data.is_phone_number();
    let _ = data.matches_pattern(data);
    let _ = data.char_count();

    let encoded = data.base64_encoded().unwrap_or_default();
    assert_eq!(encoded.base64_decoded().as_deref(), Some(data));
    assert_eq!(data.url_encoded_legacy().url_decoded().as_deref(), Some(data));

    if let Some((from, to)) = data.split_once('|') {
        if let Some(inner) = data.slice_between(from, to) {
            assert!(inner.len() <= data.len());
        }
    }
});
