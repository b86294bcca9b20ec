//! Conversion specifier scanning for printf-style format strings.
//!
//! The grammar is deliberately narrow: `%`, then any flags from `- + space #`,
//! an optional decimal width, an optional `.` precision, and a single
//! conversion character. `%%` is a literal percent and never yields a specifier.

use std::fmt;

use super::signature::ParamKind;

/// Flag characters accepted between `%` and the width.
pub const FLAG_CHARS: [u8; 4] = [b'-', b'+', b' ', b'#'];

/// Kind category of a conversion character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpecifierKind {
    /// `%s`
    String,
    /// `%d`, `%i`, `%o`, `%u`, `%x`, `%X`
    Integer,
    /// `%f`, `%F`, `%e`, `%E`, `%g`, `%G`
    Float,
    /// `%c`
    Character,
    /// Any other conversion character.
    Unrecognized,
}

impl SpecifierKind {
    pub fn from_code(code: char) -> Self {
        match code {
            's' => SpecifierKind::String,
            'd' | 'i' | 'o' | 'u' | 'x' | 'X' => SpecifierKind::Integer,
            'f' | 'F' | 'e' | 'E' | 'g' | 'G' => SpecifierKind::Float,
            'c' => SpecifierKind::Character,
            _ => SpecifierKind::Unrecognized,
        }
    }

    /// The parameter kind this specifier consumes, `None` if unrecognized.
    pub fn param_kind(self) -> Option<ParamKind> {
        match self {
            SpecifierKind::String => Some(ParamKind::String),
            SpecifierKind::Integer => Some(ParamKind::Integer),
            SpecifierKind::Float => Some(ParamKind::Float),
            SpecifierKind::Character => Some(ParamKind::Character),
            SpecifierKind::Unrecognized => None,
        }
    }
}

impl fmt::Display for SpecifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.param_kind() {
            Some(kind) => write!(f, "{}", kind),
            None => write!(f, "unrecognized"),
        }
    }
}

/// One conversion directive found in a format string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Specifier {
    /// The literal conversion character (`d` in `%-5d`).
    pub code: char,
    pub kind: SpecifierKind,
    /// Byte offset of the introducing `%`.
    pub offset: usize,
}

impl fmt::Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{}", self.code)
    }
}

fn is_flag(byte: u8) -> bool {
    FLAG_CHARS.contains(&byte)
}

/// Find the next conversion specifier at or after byte `cursor`.
///
/// Returns the specifier (or `None` when no further directive exists) and the
/// byte position just past it. A trailing `%` with no conversion character is
/// treated as the end of the string.
pub fn next_specifier(text: &str, mut cursor: usize) -> (Option<Specifier>, usize) {
    let bytes = text.as_bytes();

    loop {
        let Some(rel) = text.get(cursor..).and_then(|rest| rest.find('%')) else {
            return (None, text.len());
        };
        let start = cursor + rel;
        let mut pos = start + 1;

        while pos < bytes.len() && is_flag(bytes[pos]) {
            pos += 1;
        }
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        if pos < bytes.len() && bytes[pos] == b'.' {
            pos += 1;
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
        }

        let Some(code) = text[pos..].chars().next() else {
            return (None, text.len());
        };
        let next = pos + code.len_utf8();

        // `%%` (possibly with flags or width in between) is an escape
        if code == '%' {
            cursor = next;
            continue;
        }

        let specifier = Specifier {
            code,
            kind: SpecifierKind::from_code(code),
            offset: start,
        };
        return (Some(specifier), next);
    }
}

/// Iterator over every specifier in a format string, unrecognized ones included.
#[derive(Debug, Clone)]
pub struct Specifiers<'a> {
    text: &'a str,
    cursor: usize,
}

impl Iterator for Specifiers<'_> {
    type Item = Specifier;

    fn next(&mut self) -> Option<Specifier> {
        let (specifier, cursor) = next_specifier(self.text, self.cursor);
        self.cursor = cursor;
        specifier
    }
}

pub fn specifiers(text: &str) -> Specifiers<'_> {
    Specifiers { text, cursor: 0 }
}

/// Render the specifiers used in `text` as `%d %s ...`.
pub fn render_found(text: &str) -> String {
    specifiers(text)
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
