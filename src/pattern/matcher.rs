//! Regular-expression matching with injected diagnostics.

use crate::diagnostics::{Diagnostics, LogLevel, TracingDiagnostics};
use crate::error::{Error, Result};
use regex::{Regex, RegexBuilder};

/// Pattern matching over strings.
///
/// Malformed patterns never surface as errors here: `is_match` returns
/// `false` and `captures` returns no matches.
pub trait PatternMatcher {
    /// True iff `pattern` matches at least once anywhere in `text`.
    fn is_match(&self, text: &str, pattern: &str) -> bool;

    /// One entry per match: the full match, then every capture group in
    /// order. Groups that did not participate yield an empty string.
    fn captures(&self, text: &str, pattern: &str) -> Vec<Vec<String>>;
}

/// Compilation options for [`RegexMatcher`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatcherOptions {
    pub case_insensitive: bool,
    /// `^`/`$` match at line boundaries.
    pub multi_line: bool,
    /// `.` also matches `\n`.
    pub dot_matches_new_line: bool,
    /// Compiled program size limit in bytes; the regex crate default if `None`.
    pub size_limit: Option<usize>,
}

/// [`PatternMatcher`] backed by the `regex` crate.
///
/// Compile failures are reported to the `D` sink at warn level.
#[derive(Clone, Debug, Default)]
pub struct RegexMatcher<D = TracingDiagnostics> {
    options: MatcherOptions,
    diagnostics: D,
}

impl RegexMatcher {
    /// Matcher with default options reporting through `tracing`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: Diagnostics> RegexMatcher<D> {
    /// Matcher with explicit options and diagnostics sink.
    #[must_use]
    pub fn with_diagnostics(options: MatcherOptions, diagnostics: D) -> Self {
        Self {
            options,
            diagnostics,
        }
    }

    #[must_use]
    pub fn options(&self) -> MatcherOptions {
        self.options
    }

    #[must_use]
    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    /// Compile `pattern` with this matcher's options.
    pub fn compile(&self, pattern: &str) -> Result<Regex> {
        let mut builder = RegexBuilder::new(pattern);
        builder
            .case_insensitive(self.options.case_insensitive)
            .multi_line(self.options.multi_line)
            .dot_matches_new_line(self.options.dot_matches_new_line);
        if let Some(limit) = self.options.size_limit {
            builder.size_limit(limit);
        }
        builder.build().map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
    }

    fn compile_or_report(&self, pattern: &str) -> Option<Regex> {
        match self.compile(pattern) {
            Ok(regex) => Some(regex),
            Err(err) => {
                self.diagnostics.emit(LogLevel::Warn, &err.to_string());
                None
            }
        }
    }
}

impl<D: Diagnostics> PatternMatcher for RegexMatcher<D> {
    fn is_match(&self, text: &str, pattern: &str) -> bool {
        self.compile_or_report(pattern)
            .is_some_and(|regex| regex.is_match(text))
    }

    fn captures(&self, text: &str, pattern: &str) -> Vec<Vec<String>> {
        let Some(regex) = self.compile_or_report(pattern) else {
            return Vec::new();
        };
        regex
            .captures_iter(text)
            .map(|caps| {
                caps.iter()
                    .map(|group| group.map_or_else(String::new, |m| m.as_str().to_string()))
                    .collect()
            })
            .collect()
    }
}
