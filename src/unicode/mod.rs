//! Unicode utilities for grapheme handling.

mod grapheme;

pub use grapheme::grapheme_count;
