//! Issue types for catalog verification results.
//!
//! This module defines all issue types that can be detected while checking a
//! message catalog. Each issue is self-contained with all information needed by
//! the reporters (CLI, MCP) to display it.

use std::borrow::Cow;

use enum_dispatch::enum_dispatch;

use crate::core::{MessageId, MessageLocation, Mismatch};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    FormatMismatch,
    Undeclared,
    OutOfRange,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::FormatMismatch => write!(f, "format"),
            Rule::Undeclared => write!(f, "undeclared"),
            Rule::OutOfRange => write!(f, "out-of-range"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// A locale string whose specifiers do not match the declared signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatMismatchIssue {
    /// Entry in the locale file, or the locale file itself for absent strings.
    pub location: MessageLocation,
    pub id: MessageId,
    pub locale: String,
    /// The offending format string, `None` when no string was provided.
    pub value: Option<String>,
    /// Rendered expected kinds, e.g. `int string`.
    pub expected: String,
    /// Rendered specifiers found, e.g. `%d %s %s`.
    pub found: String,
    pub mismatch: Mismatch,
}

impl FormatMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::FormatMismatch
    }
}

/// A catalog message with no declared signature (never verified).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndeclaredIssue {
    pub location: MessageLocation,
    pub id: MessageId,
    /// Locale of the first file the message was found in.
    pub locale: String,
}

impl UndeclaredIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Undeclared
    }
}

/// Where an out-of-range id was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdSource {
    Catalog,
    Signatures,
}

impl std::fmt::Display for IdSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdSource::Catalog => write!(f, "message"),
            IdSource::Signatures => write!(f, "signature"),
        }
    }
}

/// An id above the configured maximum, which verification never visits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutOfRangeIssue {
    pub location: MessageLocation,
    pub id: MessageId,
    pub max_id: MessageId,
    pub source: IdSource,
}

impl OutOfRangeIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::OutOfRange
    }
}

/// File or entry could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// An issue found while checking the catalog.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    FormatMismatch(FormatMismatchIssue),
    Undeclared(UndeclaredIssue),
    OutOfRange(OutOfRangeIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::FormatMismatch(_) => FormatMismatchIssue::severity(),
            Issue::Undeclared(_) => UndeclaredIssue::severity(),
            Issue::OutOfRange(_) => OutOfRangeIssue::severity(),
            Issue::ParseError(_) => ParseErrorIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::FormatMismatch(_) => FormatMismatchIssue::rule(),
            Issue::Undeclared(_) => UndeclaredIssue::rule(),
            Issue::OutOfRange(_) => OutOfRangeIssue::rule(),
            Issue::ParseError(_) => ParseErrorIssue::rule(),
        }
    }

    pub fn file_path(&self) -> &str {
        match self.location() {
            ReportLocation::Message(loc) => &loc.file_path,
            ReportLocation::File { path } => path,
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Entry in a message or signature file.
    Message(&'a MessageLocation),
    /// File-level only (for ParseError - no line context).
    File { path: &'a str },
}

/// Text shown under the location, with a caret at `col` (1-based, in chars).
///
/// Control characters in `text` are already escaped, so it fits on one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet<'a> {
    pub text: Cow<'a, str>,
    pub col: usize,
}

/// Escape control characters (`\n`, `\t`, ...) the way Rust string literals do.
fn escape_control(text: &str) -> Cow<'_, str> {
    if !text.chars().any(char::is_control) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 4);
    for c in text.chars() {
        if c.is_control() {
            escaped.extend(c.escape_default());
        } else {
            escaped.push(c);
        }
    }
    Cow::Owned(escaped)
}

/// Trait for types that can be reported to CLI.
///
/// Implemented by all issue types; `enum_dispatch` forwards calls on `Issue`.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<String> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }

    /// Optional text with a caret marker.
    fn snippet(&self) -> Option<Snippet<'_>> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for FormatMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.location)
    }

    fn message(&self) -> String {
        format!("message {} ({}): {}", self.id, self.locale, self.mismatch)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "expected parameters are '{}' but used types are '{}'",
            self.expected, self.found
        ))
    }

    fn hint(&self) -> Option<String> {
        match self.mismatch {
            Mismatch::MissingLocale { .. } => Some(format!(
                "add message {} to the {} locale file",
                self.id, self.locale
            )),
            Mismatch::Unrecognized { .. } => {
                Some("write a literal percent sign as %%".to_string())
            }
            _ => None,
        }
    }

    fn snippet(&self) -> Option<Snippet<'_>> {
        let text = self.value.as_deref()?;
        let offset = self.mismatch.offset(text)?;
        let col = text
            .get(..offset)
            .map_or(1, |prefix| escape_control(prefix).chars().count() + 1);
        Some(Snippet {
            text: escape_control(text),
            col,
        })
    }
}

impl Report for UndeclaredIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.location)
    }

    fn message(&self) -> String {
        format!("message {} has no declared signature", self.id)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("first defined in {}", self.locale))
    }

    fn hint(&self) -> Option<String> {
        Some(format!(
            "declare it in the signature file, e.g. \"{}\": [] or \"{}\": \"unverified\"",
            self.id, self.id
        ))
    }
}

impl Report for OutOfRangeIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.location)
    }

    fn message(&self) -> String {
        format!("{} id {} is above maxId {}", self.source, self.id, self.max_id)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some("ids above maxId are never verified".to_string())
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering
// ============================================================

impl Issue {
    /// Get line number for sorting.
    fn sort_line(&self) -> usize {
        match self.location() {
            ReportLocation::Message(loc) => loc.line,
            ReportLocation::File { .. } => 0,
        }
    }

    /// Get column number for sorting.
    fn sort_col(&self) -> usize {
        match self.location() {
            ReportLocation::Message(loc) => loc.col,
            ReportLocation::File { .. } => 0,
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Sort by: file_path, line, col, rule, message
        self.file_path()
            .cmp(other.file_path())
            .then_with(|| self.sort_line().cmp(&other.sort_line()))
            .then_with(|| self.sort_col().cmp(&other.sort_col()))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
