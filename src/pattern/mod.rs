//! Regular-expression matching and validators.
//!
//! [`RegexMatcher`] compiles patterns per call and reports malformed ones
//! through its injected [`Diagnostics`](crate::diagnostics::Diagnostics)
//! sink. The validators use patterns compiled once into statics.
//!
//! # Examples
//!
//! ```
//! use richstr::pattern::{PatternMatcher, RegexMatcher, is_email};
//!
//! let matcher = RegexMatcher::new();
//! assert_eq!(
//!     matcher.captures("12-34", r"(\d+)-(\d+)"),
//!     vec![vec!["12-34", "12", "34"]]
//! );
//! assert!(!matcher.is_match("abc", "(")); // logged, not raised
//! assert!(is_email("user@example.com"));
//! ```

mod matcher;
mod validate;

pub use matcher::{MatcherOptions, PatternMatcher, RegexMatcher};
pub use validate::{
    PHONE_MAX_DIGITS, PHONE_MIN_DIGITS, contains_phone_number, find_phone_numbers, is_email,
};
