//! Fuzz target for color hex parsing.
//!
//! Tests that Rgba::from_hex handles arbitrary strings without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use richstr::color::Rgba;

fuzz_target!(|data: &str| {
    if let Some(color) = Rgba::from_hex(data) {
        // Anything parsed must print back as a parseable hex string
        assert!(Rgba::from_hex(&color.to_string()).is_some());
    }

    if !data.starts_with('#') {
        let with_hash = format!("#{data}");
        let _ = Rgba::from_hex(&with_hash);
    }
});
