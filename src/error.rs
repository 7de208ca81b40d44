//! Error types for richstr.

use std::fmt;
use std::string::FromUtf8Error;

/// Result type alias for richstr operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the fallible (`try_*`) entry points.
///
/// The convenience surface on [`StrExt`](crate::StrExt) never returns this
/// directly; it collapses failures into `None`, `false`, or an empty result.
#[derive(Debug)]
pub enum Error {
    /// A regular expression failed to compile.
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
    /// Input is not valid base64 for the configured alphabet and padding.
    InvalidBase64(base64::DecodeError),
    /// Decoded bytes are not valid UTF-8.
    InvalidUtf8(FromUtf8Error),
    /// String is not a valid absolute URL.
    InvalidUrl(url::ParseError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPattern { pattern, source } => {
                write!(f, "invalid pattern {pattern:?}: {source}")
            }
            Self::InvalidBase64(e) => write!(f, "invalid base64: {e}"),
            Self::InvalidUtf8(e) => write!(f, "decoded bytes are not UTF-8: {e}"),
            Self::InvalidUrl(e) => write!(f, "invalid URL: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPattern { source, .. } => Some(source),
            Self::InvalidBase64(e) => Some(e),
            Self::InvalidUtf8(e) => Some(e),
            Self::InvalidUrl(e) => Some(e),
        }
    }
}

impl From<base64::DecodeError> for Error {
    fn from(e: base64::DecodeError) -> Self {
        Self::InvalidBase64(e)
    }
}

impl From<FromUtf8Error> for Error {
    fn from(e: FromUtf8Error) -> Self {
        Self::InvalidUtf8(e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Self::InvalidUrl(e)
    }
}
