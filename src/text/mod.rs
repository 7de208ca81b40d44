//! Attributed text storage and the run builder.
//!
//! Key types:
//!
//! - [`AttributedString`]: rope-backed text with a contiguous run table
//! - [`TextAttributeStore`]: the capability the run builder needs from a buffer
//! - [`append_run`]: append a span with font and optional color
//!
//! # Examples
//!
//! ```
//! use richstr::{AttributedString, Font, Rgba, TextStyle};
//! use richstr::text::StyledChunk;
//!
//! let bold = TextStyle::new(Font::bold_system(13.0));
//! let link = TextStyle::new(Font::system(13.0)).with_foreground(Rgba::BLUE);
//!
//! let text = AttributedString::from_chunks(&[
//!     StyledChunk::new("Note: ", bold),
//!     StyledChunk::plain("see "),
//!     StyledChunk::new("the docs", link),
//! ]);
//!
//! assert_eq!(text.to_string(), "Note: see the docs");
//! assert_eq!(text.runs().len(), 3);
//! ```

mod attributed;
mod builder;
mod rope;
mod run;

pub use attributed::{AttributedString, TextAttributeStore};
pub use builder::append_run;
pub use run::{AttributeRun, StyledChunk};
