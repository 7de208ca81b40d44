//! `richstr` - string conveniences and attributed text runs
//!
//! Thin, typed wrappers over the ecosystem's percent-encoding, base64, regex,
//! and Unicode segmentation crates, plus an attributed string whose run
//! builder appends styled spans without touching earlier runs.
//!
//! # Examples
//!
//! ```
//! use richstr::{AttributedString, Font, Rgba, StrExt};
//!
//! let mut text = AttributedString::new();
//! text.append_run("AB", &Font::new("X", 12.0), Some(Rgba::RED));
//! text.append_run("CD", &Font::new("Y", 12.0), None);
//! assert_eq!(text.to_string(), "ABCD");
//!
//! assert_eq!("startHELLOend".slice_between("start", "end"), Some("HELLO"));
//! assert_eq!("12-34".match_groups(r"(\d+)-(\d+)"), vec![vec!["12-34", "12", "34"]]);
//! ```

// Crate-level lint configuration
#![allow(clippy::cast_possible_truncation)] // Intentional color channel casts
#![allow(clippy::cast_sign_loss)] // Clamped before casting
#![allow(clippy::module_name_repetitions)] // Allow text::TextAttributeStore etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Only static pattern initialisers panic
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::inherent_to_string)] // to_string methods are convenient
#![allow(clippy::should_implement_trait)] // from_str naming is intentional
#![allow(clippy::len_without_is_empty)] // Trait provides is_empty
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine

pub mod color;
pub mod diagnostics;
pub mod encoding;
pub mod error;
pub mod ext;
pub mod font;
pub mod pattern;
pub mod style;
pub mod text;
pub mod unicode;

// Re-export core types at crate root
pub use color::Rgba;
pub use diagnostics::{
    CollectingDiagnostics, Diagnostics, LogLevel, NullDiagnostics, TracingDiagnostics,
};
pub use error::{Error, Result};
pub use ext::StrExt;
pub use font::{Font, FontTraits, FontWeight};
pub use style::{AttributeKey, AttributeSet, AttributeValue, TextStyle, UnderlineStyle};
pub use text::{AttributeRun, AttributedString, TextAttributeStore, append_run};

// Re-export capability traits and their default implementations
pub use encoding::{Base64Codec, Base64Options, StandardBase64};
pub use pattern::{MatcherOptions, PatternMatcher, RegexMatcher};
