//! Lock-step matching of format specifiers against a declared signature.
//!
//! The string's specifiers and the signature's expected kinds are consumed
//! together; a match requires both to run out at the same time and every
//! pair along the way to agree on kind.

use std::fmt;

use super::signature::{ParamKind, ParameterSignature};
use super::specifier::{Specifier, next_specifier, specifiers};

/// Why a format string does not satisfy its signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    /// The string has fewer or more specifiers than expected parameters.
    Arity { expected: usize, found: usize },
    /// The specifier at `position` (0-based) consumes a different kind.
    Kind {
        position: usize,
        expected: ParamKind,
        found: Specifier,
    },
    /// A conversion character outside the known kinds.
    Unrecognized { position: usize, found: Specifier },
    /// No string for this locale while parameters are expected.
    MissingLocale { expected: usize },
}

impl Mismatch {
    /// Byte offset in `text` the mismatch points at. Too few specifiers point
    /// past the end of the string; a missing string points nowhere.
    pub fn offset(&self, text: &str) -> Option<usize> {
        match self {
            Mismatch::Kind { found, .. } | Mismatch::Unrecognized { found, .. } => {
                Some(found.offset)
            }
            Mismatch::Arity { expected, found } if found > expected => {
                specifiers(text).nth(*expected).map(|s| s.offset)
            }
            Mismatch::Arity { .. } => Some(text.len()),
            Mismatch::MissingLocale { .. } => None,
        }
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::Arity { expected, found } => write!(
                f,
                "expected {} parameter(s) but found {} specifier(s)",
                expected, found
            ),
            Mismatch::Kind {
                position,
                expected,
                found,
            } => write!(
                f,
                "parameter {} is {} but {} expects {}",
                position + 1,
                expected,
                found,
                found.kind
            ),
            Mismatch::Unrecognized { found, .. } => {
                write!(f, "unknown conversion '{}'", found)
            }
            Mismatch::MissingLocale { expected } => write!(
                f,
                "no string provided but {} parameter(s) expected",
                expected
            ),
        }
    }
}

/// Check `text` against `signature`, reporting the first rule it breaks.
///
/// An absent string satisfies only a zero-parameter signature. An unverified
/// signature accepts anything, including an absent string.
pub fn check(text: Option<&str>, signature: &ParameterSignature) -> Result<(), Mismatch> {
    let Some(expected) = signature.params() else {
        return Ok(());
    };

    let Some(text) = text else {
        return if expected.is_empty() {
            Ok(())
        } else {
            Err(Mismatch::MissingLocale {
                expected: expected.len(),
            })
        };
    };

    let mut cursor = 0;
    for (position, expected_kind) in expected.iter().enumerate() {
        let (specifier, next) = next_specifier(text, cursor);
        let Some(found) = specifier else {
            return Err(Mismatch::Arity {
                expected: expected.len(),
                found: position,
            });
        };
        cursor = next;

        match found.kind.param_kind() {
            None => return Err(Mismatch::Unrecognized { position, found }),
            Some(kind) if kind != *expected_kind => {
                return Err(Mismatch::Kind {
                    position,
                    expected: *expected_kind,
                    found,
                });
            }
            Some(_) => {}
        }
    }

    let surplus = specifiers(&text[cursor..]).count();
    if surplus > 0 {
        return Err(Mismatch::Arity {
            expected: expected.len(),
            found: expected.len() + surplus,
        });
    }

    Ok(())
}

/// Whether `text` satisfies `signature` in both count and kind.
pub fn matches(text: Option<&str>, signature: &ParameterSignature) -> bool {
    check(text, signature).is_ok()
}
